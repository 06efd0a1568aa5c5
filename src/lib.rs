// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tutor-Match: client core for the tutor/student matchmaking marketplace.
//!
//! This crate provides the non-presentational logic of the web client:
//! session and role resolution against the backend with a local-cache
//! fallback, category classification for the listing directories, the typed
//! REST client, and the contact-draft and availability helpers. Rendering,
//! routing, and the identity provider itself live in the host UI and are
//! consumed here through capability traits.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod directory;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod store;

pub use catalog::{filter_listings, matches, Category, Listing};
pub use config::Config;
pub use error::{AppError, Result};
pub use session::{Role, SessionManager, SessionPhase, SessionState};
