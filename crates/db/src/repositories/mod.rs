//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod item_repo;
pub mod subscription_repo;

pub use item_repo::ItemRepo;
pub use subscription_repo::SubscriptionRepo;
