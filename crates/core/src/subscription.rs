//! Push-notification subscription preferences and validation.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;

/// Per-device notification preferences, stored as JSONB.
///
/// Every flag is optional so a stored `{}` round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_lost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_found: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_in_area: Option<bool>,
    /// Radius used with `notify_in_area`. Unit is decided by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_radius: Option<f64>,
}

impl NotificationPreferences {
    /// Preferences applied when a subscriber sends none:
    /// notify on both lost and found items.
    pub fn subscriber_default() -> Self {
        Self {
            notify_on_lost: Some(true),
            notify_on_found: Some(true),
            ..Self::default()
        }
    }
}

/// Return the token exactly as sent if it is present and not blank.
pub fn require_fcm_token(token: Option<&str>) -> Result<&str, CoreError> {
    match token {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(CoreError::Validation("fcm_token is required".into())),
    }
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email address '{email}'")))
    }
}

pub fn validate_preferences(prefs: &NotificationPreferences) -> Result<(), CoreError> {
    if let Some(radius) = prefs.area_radius {
        if !radius.is_finite() || radius < 0.0 {
            return Err(CoreError::Validation(format!(
                "preferences.areaRadius must be a non-negative number, got {radius}"
            )));
        }
    }
    Ok(())
}
