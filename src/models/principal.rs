//! Principal model: the identity the external provider reports on sign-in.

use serde::{Deserialize, Serialize};

/// Authenticated identity produced by the external identity provider.
///
/// Read-only to this crate; its lifecycle is tied to sign-in/out events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Provider-assigned stable user ID
    pub id: String,
    /// Email address (may be withheld by the provider)
    pub email: Option<String>,
    /// Display name (may be unset on new accounts)
    pub display_name: Option<String>,
    /// Profile photo URL
    pub photo_url: Option<String>,
}

impl Principal {
    /// Best-effort human-readable name: display name, then the local part of
    /// the email address, then a generic fallback.
    pub fn friendly_name(&self) -> &str {
        if let Some(name) = self.display_name.as_deref() {
            if !name.is_empty() {
                return name;
            }
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("User")
    }
}
