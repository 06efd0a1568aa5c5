// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed client for the tutoring backend REST API.
//!
//! Handles:
//! - Tutor and student listing CRUD
//! - Profile-existence lookups by email
//! - Admin operations (update/delete/stats) with the `X-User-Email` header
//! - Health check
//!
//! There is deliberately no retry or timeout policy here: a failed request
//! surfaces as an error and the UI offers a manual "Try Again" action.

use crate::error::AppError;
use crate::models::{AdminStats, Client, HealthStatus, NewClient, NewTutor, Tutor};
use crate::session::ProfileDirectory;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

/// Header carrying the caller's email for admin authorization.
const X_USER_EMAIL: &str = "X-User-Email";

/// JSON envelope the backend wraps every `/api` response in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub status: String,
}

/// Tutoring backend API client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api{}", self.base_url, endpoint)
    }

    // ─── Tutor endpoints ─────────────────────────────────────────────────────

    /// List all tutors.
    pub async fn get_tutors(&self) -> Result<Vec<Tutor>, AppError> {
        self.get_json(&self.api_url("/tutors")).await
    }

    /// Look up a tutor profile by email. `Ok(None)` means no record exists.
    pub async fn get_tutor_by_email(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        let url = self.api_url(&format!("/tutors/by-email/{}", urlencoding::encode(email)));
        self.get_json(&url).await
    }

    /// Create a tutor profile. The payload is validated before submission.
    pub async fn create_tutor(&self, tutor: &NewTutor) -> Result<Tutor, AppError> {
        tutor.validate()?;
        self.post_json(&self.api_url("/tutors"), tutor).await
    }

    // ─── Client (student) endpoints ──────────────────────────────────────────

    /// List all student listings.
    pub async fn get_clients(&self) -> Result<Vec<Client>, AppError> {
        self.get_json(&self.api_url("/clients")).await
    }

    /// Look up a student profile by email. `Ok(None)` means no record exists.
    pub async fn get_client_by_email(&self, email: &str) -> Result<Option<Client>, AppError> {
        let url = self.api_url(&format!("/clients/by-email/{}", urlencoding::encode(email)));
        self.get_json(&url).await
    }

    /// Create a student profile. The payload is validated before submission.
    pub async fn create_client(&self, client: &NewClient) -> Result<Client, AppError> {
        client.validate()?;
        self.post_json(&self.api_url("/clients"), client).await
    }

    // ─── Admin endpoints ─────────────────────────────────────────────────────

    /// Update a tutor record (admin only).
    pub async fn update_tutor(
        &self,
        id: i64,
        tutor: &Tutor,
        admin_email: &str,
    ) -> Result<Tutor, AppError> {
        let url = self.api_url(&format!("/admin/tutors/{}", id));
        let response = self
            .http
            .put(&url)
            .header(X_USER_EMAIL, admin_email)
            .json(tutor)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response_json(response).await
    }

    /// Delete a tutor record (admin only).
    pub async fn delete_tutor(&self, id: i64, admin_email: &str) -> Result<(), AppError> {
        let url = self.api_url(&format!("/admin/tutors/{}", id));
        self.delete(&url, admin_email).await
    }

    /// Update a student record (admin only).
    pub async fn update_client(
        &self,
        id: i64,
        client: &Client,
        admin_email: &str,
    ) -> Result<Client, AppError> {
        let url = self.api_url(&format!("/admin/clients/{}", id));
        let response = self
            .http
            .put(&url)
            .header(X_USER_EMAIL, admin_email)
            .json(client)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response_json(response).await
    }

    /// Delete a student record (admin only).
    pub async fn delete_client(&self, id: i64, admin_email: &str) -> Result<(), AppError> {
        let url = self.api_url(&format!("/admin/clients/{}", id));
        self.delete(&url, admin_email).await
    }

    /// Fetch aggregate counts for the admin dashboard.
    pub async fn get_admin_stats(&self, admin_email: &str) -> Result<AdminStats, AppError> {
        let url = self.api_url("/admin/stats");
        let response = self
            .http
            .get(&url)
            .header(X_USER_EMAIL, admin_email)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response_json(response).await
    }

    // ─── Health check ────────────────────────────────────────────────────────

    /// Backend health endpoint (lives outside the `/api` prefix).
    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api { status, body });
        }
        response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(e.to_string()))
    }

    // ─── Helpers ─────────────────────────────────────────────────────────────

    /// Generic GET request unwrapping the `ApiResponse` envelope.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response_json(response).await
    }

    /// Generic POST request unwrapping the `ApiResponse` envelope.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response_json(response).await
    }

    /// DELETE with admin header; the backend returns a null-data envelope.
    async fn delete(&self, url: &str, admin_email: &str) -> Result<(), AppError> {
        let response = self
            .http
            .delete(url)
            .header(X_USER_EMAIL, admin_email)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let _: Option<serde_json::Value> = self.check_response_json(response).await?;
        Ok(())
    }

    /// Check response status and parse the envelope, mapping 404 to NotFound.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();

            if status == 404 {
                // The backend puts the reason in the envelope message
                let message = serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                    .unwrap_or(body);
                return Err(AppError::NotFound(message));
            }

            tracing::warn!(status, body = %body, "Backend request failed");
            return Err(AppError::Api { status, body });
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("JSON parse error: {}", e)))?;
        Ok(envelope.data)
    }
}

/// The session resolver looks profiles up through this client.
#[async_trait]
impl ProfileDirectory for BackendClient {
    async fn find_student(&self, email: &str) -> Result<Option<Client>, AppError> {
        self.get_client_by_email(email).await
    }

    async fn find_tutor(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        self.get_tutor_by_email(email).await
    }
}
