//! Tutor listing model and the validated creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A tutor listing as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Tutor {
    /// Backend-assigned ID (absent on records not yet created)
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub subjects: Vec<String>,
    /// Hourly rate in USD
    pub pay: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    pub bio: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub location: String,
    /// Weekly availability: JSON slot-id array or legacy free text
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certification: String,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a tutor profile (the record minus server-assigned
/// fields), validated before it goes on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewTutor {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "at least one subject is required"))]
    pub subjects: Vec<String>,
    #[validate(range(min = 0.01, message = "pay must be positive"))]
    pub pay: f64,
    #[validate(length(min = 1, message = "bio is required"))]
    pub bio: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certification: String,
}
