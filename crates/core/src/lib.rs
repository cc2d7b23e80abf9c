//! Domain rules shared by the lost-and-found store.
//!
//! Holds the closed vocabularies (item kinds, categories), the validation
//! helpers used before anything touches the database, and [`error::CoreError`].

pub mod error;
pub mod item;
pub mod subscription;
pub mod types;
