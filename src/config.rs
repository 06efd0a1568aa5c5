//! Application configuration loaded from environment variables.
//!
//! Everything here is non-sensitive: the backend base URL, the admin email
//! whitelist, and the relay address that contact drafts are sent through.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the tutoring backend (no trailing slash, no `/api` suffix)
    pub backend_url: String,
    /// Emails granted access to the admin dashboard (compared case-insensitively)
    pub admin_emails: Vec<String>,
    /// Relay address that pre-filled contact drafts are addressed to
    pub contact_relay_email: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            admin_emails: vec!["admin@example.com".to_string()],
            contact_relay_email: "relay@example.com".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `ADMIN_EMAILS` is a comma-separated list; surrounding whitespace on
    /// each entry is trimmed and empty entries are dropped.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            admin_emails: env::var("ADMIN_EMAILS")
                .map(|v| parse_email_list(&v))
                .unwrap_or_default(),
            contact_relay_email: env::var("CONTACT_RELAY_EMAIL")
                .map_err(|_| ConfigError::Missing("CONTACT_RELAY_EMAIL"))?
                .trim()
                .to_string(),
        })
    }

    /// Whether the given email belongs to the configured admin set.
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(email))
    }
}

/// Split a comma-separated email list, trimming entries and dropping blanks.
fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
