//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs, validated into insert/upsert values
//! - For items, a patch DTO where every field is optional

pub mod item;
pub mod subscription;
