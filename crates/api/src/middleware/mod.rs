//! Request middleware.
//!
//! - [`error_detail::attach_error_detail`] -- Adds a `stack` field to storage
//!   error bodies outside production.

pub mod error_detail;
