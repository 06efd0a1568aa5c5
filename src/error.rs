// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the API client and view-model layers.

/// Application error type.
///
/// The taxonomy the rest of the crate cares about is small: `NotFound` is an
/// expected outcome of profile lookups, everything else is a failure the UI
/// surfaces with a manual retry action.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Backend error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error represents a failed request (as opposed to a
    /// legitimate "no such record" answer). The session resolver falls back
    /// to its local cache on a network failure, while a `NotFound` answer
    /// lets resolution continue as "no record exists".
    pub fn is_network_failure(&self) -> bool {
        !matches!(self, AppError::NotFound(_) | AppError::Validation(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AppError>;
