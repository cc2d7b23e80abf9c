pub mod items;
pub mod subscriptions;
