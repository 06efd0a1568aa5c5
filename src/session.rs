// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session and role resolution.
//!
//! Produces an authoritative view of "who is signed in, what role they
//! picked, and whether their profile is complete", reconciling the backend's
//! profile records with a locally persisted cache so the UI always reaches a
//! definite state even when the backend is unreachable.
//!
//! Per-session state machine:
//! `Unauthenticated → RoleUnset → ProfileIncomplete → Ready`, with sign-out
//! returning any state to `Unauthenticated`. The resolver fast-forwards
//! straight to `Ready` when the backend already has a profile record.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Client, Principal, Tutor};
use crate::store::KeyValueStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Persisted cache key for the chosen role.
const KEY_USER_TYPE: &str = "userType";
/// Persisted cache key for the profile-completion flag.
const KEY_PROFILE_COMPLETE: &str = "hasCompletedProfile";

/// Role a user picks once per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tutor,
    Student,
}

impl Role {
    /// Wire/cache representation (`"tutor"` / `"student"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tutor => "tutor",
            Role::Student => "student",
        }
    }

    fn from_cache(value: &str) -> Option<Role> {
        match value {
            "tutor" => Some(Role::Tutor),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

/// Phase of the onboarding state machine, derived from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    RoleUnset,
    ProfileIncomplete,
    Ready,
}

/// Reconciled session state. One instance per running client.
///
/// Invariants: `profile_complete` implies `role` is set, and an absent
/// principal implies no role and an incomplete profile.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub role: Option<Role>,
    pub profile_complete: bool,
    pub is_admin: bool,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match (&self.principal, self.role, self.profile_complete) {
            (None, _, _) => SessionPhase::Unauthenticated,
            (Some(_), None, _) => SessionPhase::RoleUnset,
            (Some(_), Some(_), false) => SessionPhase::ProfileIncomplete,
            (Some(_), Some(_), true) => SessionPhase::Ready,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.principal.is_some()
    }
}

/// Backend profile lookups the resolver depends on.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Find the student record for an email, if one exists.
    async fn find_student(&self, email: &str) -> Result<Option<Client>, AppError>;

    /// Find the tutor record for an email, if one exists.
    async fn find_tutor(&self, email: &str) -> Result<Option<Tutor>, AppError>;
}

/// External identity provider capability (sign-in popup, sign-out).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self) -> Result<Principal, AppError>;
    async fn sign_out(&self) -> Result<(), AppError>;
}

/// Owns the session state and drives the resolution state machine.
pub struct SessionManager {
    config: Config,
    store: Arc<dyn KeyValueStore>,
    directory: Arc<dyn ProfileDirectory>,
    state: SessionState,
}

impl SessionManager {
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        directory: Arc<dyn ProfileDirectory>,
    ) -> Self {
        Self {
            config,
            store,
            directory,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Sign in through the identity provider and resolve the session.
    ///
    /// Provider failures (e.g. a dismissed popup) propagate to the caller;
    /// everything after a successful sign-in is infallible.
    pub async fn login(&mut self, provider: &dyn IdentityProvider) -> Result<(), AppError> {
        let principal = provider.sign_in().await?;
        self.resolve_session(principal).await;
        Ok(())
    }

    /// Sign out through the identity provider and clear all session state.
    pub async fn logout(&mut self, provider: &dyn IdentityProvider) -> Result<(), AppError> {
        provider.sign_out().await?;
        self.clear_session();
        Ok(())
    }

    /// Resolve the session for a principal the identity provider just
    /// reported as signed in.
    ///
    /// Checks for an existing student profile first, then a tutor profile
    /// (student wins the hypothetical tie; fixed precedence, not a race).
    /// A found record fast-forwards the session to `Ready` and refreshes the
    /// local cache. A `NotFound` answer is a normal "no record" result and
    /// lets resolution continue; a failed student lookup skips the tutor
    /// lookup entirely. No record anywhere, or a lookup failure, falls back
    /// to cached role/completion values. Always terminates with a definite
    /// state and never returns an error.
    pub async fn resolve_session(&mut self, principal: Principal) -> &SessionState {
        let email = principal.email.clone();

        self.state.is_admin = email
            .as_deref()
            .map(|e| self.config.is_admin_email(e))
            .unwrap_or(false);
        self.state.principal = Some(principal);

        let email = match email {
            Some(email) => email,
            None => {
                // Provider withheld the email: nothing to look up
                self.restore_from_cache();
                return &self.state;
            }
        };

        let directory = Arc::clone(&self.directory);

        let student_lookup = directory.find_student(&email).await;
        match student_lookup {
            Ok(Some(_)) => {
                tracing::info!(email = %email, "Found existing student profile");
                self.adopt_resolved_role(Role::Student);
                return &self.state;
            }
            // A NotFound answer is the lookup working: there is no record
            Ok(None) => {}
            Err(e) if !e.is_network_failure() => {}
            Err(e) => {
                tracing::warn!(error = %e, "Profile lookup failed, using cached session state");
                self.restore_from_cache();
                return &self.state;
            }
        }

        let tutor_lookup = directory.find_tutor(&email).await;
        match tutor_lookup {
            Ok(Some(_)) => {
                tracing::info!(email = %email, "Found existing tutor profile");
                self.adopt_resolved_role(Role::Tutor);
                &self.state
            }
            Ok(None) => {
                // No profile on the backend: a previous session may have
                // picked a role without finishing the profile form
                self.restore_from_cache();
                &self.state
            }
            Err(e) if !e.is_network_failure() => {
                self.restore_from_cache();
                &self.state
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile lookup failed, using cached session state");
                self.restore_from_cache();
                &self.state
            }
        }
    }

    /// Reset the session to empty and purge the cached role and
    /// profile-completion keys. Called on sign-out.
    pub fn clear_session(&mut self) {
        self.state = SessionState::default();
        self.store.remove(KEY_USER_TYPE);
        self.store.remove(KEY_PROFILE_COMPLETE);
    }

    /// Record the role the user picked. Does not touch the completion flag;
    /// finishing the profile form is a separate explicit step.
    pub fn select_role(&mut self, role: Role) {
        if self.state.principal.is_none() {
            tracing::warn!("select_role ignored: no signed-in principal");
            return;
        }
        self.state.role = Some(role);
        self.store.set(KEY_USER_TYPE, role.as_str());
    }

    /// Mark the role-specific profile form as successfully submitted.
    /// Idempotent.
    pub fn mark_profile_complete(&mut self) {
        if self.state.role.is_none() {
            tracing::warn!("mark_profile_complete ignored: no role selected");
            return;
        }
        self.state.profile_complete = true;
        self.store.set(KEY_PROFILE_COMPLETE, "true");
    }

    /// A backend record was found: fast-forward to `Ready` and refresh the
    /// cache for faster subsequent loads.
    fn adopt_resolved_role(&mut self, role: Role) {
        self.state.role = Some(role);
        self.state.profile_complete = true;
        self.store.set(KEY_USER_TYPE, role.as_str());
        self.store.set(KEY_PROFILE_COMPLETE, "true");
    }

    /// Fall back to cached role/completion values. A cached completion flag
    /// without a cached role is ignored to preserve the state invariant.
    fn restore_from_cache(&mut self) {
        let role = self
            .store
            .get(KEY_USER_TYPE)
            .and_then(|v| Role::from_cache(&v));
        let complete = self
            .store
            .get(KEY_PROFILE_COMPLETE)
            .map(|v| v == "true")
            .unwrap_or(false);

        self.state.role = role;
        self.state.profile_complete = role.is_some() && complete;
    }
}
