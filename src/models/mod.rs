// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod availability;
pub mod client;
pub mod principal;
pub mod stats;
pub mod tutor;

pub use availability::AvailabilitySet;
pub use client::{Client, NewClient};
pub use principal::Principal;
pub use stats::{AdminStats, HealthStatus};
pub use tutor::{NewTutor, Tutor};
