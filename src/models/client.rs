//! Client (student) listing model and the validated creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A student listing as returned by the backend.
///
/// The backend calls these records "clients"; the UI presents them as
/// students looking for a tutor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Client {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub subjects: Vec<String>,
    /// Hourly budget in USD
    pub budget: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub location: String,
    /// Weekly availability: JSON slot-id array or legacy free text
    #[serde(default)]
    pub availability: String,
    /// Current education level (e.g., "High School", "Some College")
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a student profile, validated before submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewClient {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "at least one subject is required"))]
    pub subjects: Vec<String>,
    #[validate(range(min = 0.01, message = "budget must be positive"))]
    pub budget: f64,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub education: String,
}
