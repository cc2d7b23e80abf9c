//! Item entity model and DTOs.

use lostfound_core::error::CoreError;
use lostfound_core::item::{
    generate_item_id, validate_category, validate_kind, validate_location, validate_title,
    Location, REQUIRED_CREATE_FIELDS,
};
use lostfound_core::types::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `items` table.
///
/// Serialized with the client-facing key names (`type`, `contact`,
/// `imageUrl`); the repository aliases the storage columns to match.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Json<Location>,
    pub date: Timestamp,
    pub contact: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// Coordinates as they arrive over the wire, before the both-or-neither check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationInput {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Request body for `POST /items`.
///
/// Everything is optional at the serde level so that missing required
/// fields surface as a single validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<LocationInput>,
    pub date: Option<String>,
    pub contact: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// A validated item ready for insertion.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Location,
    pub date: Timestamp,
    pub contact: Option<String>,
    pub image_url: Option<String>,
}

impl CreateItem {
    /// Check required fields and vocabularies, then fill in the
    /// server-assigned `id` and `date` from `now` where the caller left
    /// them out.
    pub fn validate(self, now: Timestamp) -> Result<NewItem, CoreError> {
        let title = non_empty(self.title);
        let kind = non_empty(self.kind);
        let (lat, lng) = self
            .location
            .map(|l| (l.lat, l.lng))
            .unwrap_or((None, None));

        let (Some(title), Some(kind), Some(lat), Some(lng)) = (title, kind, lat, lng) else {
            return Err(CoreError::MissingFields {
                required: REQUIRED_CREATE_FIELDS,
            });
        };

        validate_title(&title)?;
        validate_kind(&kind)?;

        let category = non_empty(self.category);
        if let Some(ref c) = category {
            validate_category(c)?;
        }

        let location = Location { lat, lng };
        validate_location(&location)?;

        let date = match non_empty(self.date) {
            Some(raw) => parse_timestamp(&raw)?,
            None => now,
        };

        Ok(NewItem {
            id: non_empty(self.id).unwrap_or_else(|| generate_item_id(now)),
            kind,
            title,
            description: self.description,
            category,
            location,
            date,
            contact: non_empty(self.contact),
            image_url: non_empty(self.image_url),
        })
    }
}

/// Request body for `PUT /items/{id}`: a patch naming only the fields to change.
///
/// `description`, `contact`, and `imageUrl` use `Option<Option<_>>`: an
/// absent key leaves the column alone, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "present")]
    pub contact: Option<Option<String>>,
    #[serde(default, rename = "imageUrl", deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

impl UpdateItem {
    /// True when the patch would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.contact.is_none()
            && self.image_url.is_none()
    }

    /// Apply the create-time rules to whichever fields are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        if let Some(ref location) = self.location {
            validate_location(location)?;
        }
        Ok(())
    }
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&chrono::Utc));
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| CoreError::Validation(format!("date must be an ISO-8601 date or timestamp, got '{raw}'")))
}
