//! Lost-and-found item vocabulary and validation.
//!
//! Items carry a closed `type` (`lost` / `found`), an optional closed
//! `category`, and a point location. The helpers here are used by the DTO
//! conversion in `lostfound-db` and by the API handlers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

pub const KIND_LOST: &str = "lost";
pub const KIND_FOUND: &str = "found";

/// All valid item kinds (the JSON `type` field).
pub const VALID_KINDS: &[&str] = &[KIND_LOST, KIND_FOUND];

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const VALID_CATEGORIES: &[&str] = &[
    "electronics",
    "clothing",
    "accessories",
    "documents",
    "keys",
    "books",
    "bags",
    "sports",
    "other",
];

/// Fields that must be present (and non-null) to create an item, in the
/// order they are reported back to the caller.
pub const REQUIRED_CREATE_FIELDS: &[&str] = &["title", "type", "location.lat", "location.lng"];

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A WGS84 point. Both coordinates travel together; a half-specified location
/// is never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Validate that both coordinates are finite and inside their ranges.
pub fn validate_location(location: &Location) -> Result<(), CoreError> {
    if !location.lat.is_finite() || !location.lng.is_finite() {
        return Err(CoreError::Validation(
            "location.lat and location.lng must be finite numbers".into(),
        ));
    }
    if !(-90.0..=90.0).contains(&location.lat) {
        return Err(CoreError::Validation(format!(
            "location.lat must be between -90 and 90, got {}",
            location.lat
        )));
    }
    if !(-180.0..=180.0).contains(&location.lng) {
        return Err(CoreError::Validation(format!(
            "location.lng must be between -180 and 180, got {}",
            location.lng
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid item type '{kind}'. Must be one of: {VALID_KINDS:?}"
        )))
    }
}

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid item category '{category}'. Must be one of: {VALID_CATEGORIES:?}"
        )))
    }
}

/// Titles must contain something other than whitespace.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Server-assigned values
// ---------------------------------------------------------------------------

/// Generate an item id from the creation instant: the Unix timestamp in
/// milliseconds, rendered as a decimal string.
pub fn generate_item_id(now: Timestamp) -> String {
    now.timestamp_millis().to_string()
}
