//! Subscription entity model and DTOs.

use lostfound_core::error::CoreError;
use lostfound_core::subscription::{
    require_fcm_token, validate_email, validate_preferences, NotificationPreferences,
};
use lostfound_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Subscription {
    pub id: DbId,
    pub fcm_token: String,
    pub email: Option<String>,
    pub preferences: Json<NotificationPreferences>,
    pub created_at: Timestamp,
}

/// Request body for `POST /subscriptions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubscription {
    pub fcm_token: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<NotificationPreferences>,
}

/// Request body for `PUT /subscriptions/{token}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubscription {
    pub email: Option<String>,
    pub preferences: Option<NotificationPreferences>,
}

/// A validated subscription ready for the upsert.
#[derive(Debug, Clone)]
pub struct UpsertSubscription {
    pub fcm_token: String,
    pub email: Option<String>,
    pub preferences: NotificationPreferences,
}

impl UpsertSubscription {
    /// Shared by subscribe and update: empty email means none, missing
    /// preferences fall back to the subscriber default.
    pub fn new(
        fcm_token: Option<&str>,
        email: Option<String>,
        preferences: Option<NotificationPreferences>,
    ) -> Result<Self, CoreError> {
        let fcm_token = require_fcm_token(fcm_token)?.to_string();

        let email = email.filter(|e| !e.trim().is_empty());
        if let Some(ref e) = email {
            validate_email(e)?;
        }

        let preferences = preferences.unwrap_or_else(NotificationPreferences::subscriber_default);
        validate_preferences(&preferences)?;

        Ok(Self {
            fcm_token,
            email,
            preferences,
        })
    }
}

impl CreateSubscription {
    pub fn validate(self) -> Result<UpsertSubscription, CoreError> {
        UpsertSubscription::new(self.fcm_token.as_deref(), self.email, self.preferences)
    }
}

impl UpdateSubscription {
    /// Bind the body to the token taken from the request path.
    pub fn validate(self, fcm_token: &str) -> Result<UpsertSubscription, CoreError> {
        UpsertSubscription::new(Some(fcm_token), self.email, self.preferences)
    }
}
