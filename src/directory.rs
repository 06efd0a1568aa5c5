// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory view-model: the listing grid with category tabs.
//!
//! Both dashboards work the same way: fetch the full listing set once, then
//! filter it client-side per selected category tab. Failures surface as an
//! inline message with a manual "Try Again" action; there is no automatic
//! retry.

use crate::catalog::{filter_listings, Category, Listing};
use crate::error::AppError;
use crate::models::{Client, Tutor};
use crate::services::BackendClient;

/// Which counterpart a directory shows, for user-facing copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    Tutors,
    Students,
}

impl DirectoryKind {
    /// Inline message shown when loading fails. Student listings keep the
    /// backend's "clients" terminology in user-facing copy.
    pub fn failure_message(&self) -> &'static str {
        match self {
            DirectoryKind::Tutors => "Failed to load tutors. Please try again.",
            DirectoryKind::Students => "Failed to load clients. Please try again.",
        }
    }
}

/// Loading phase of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// View state for one listing directory.
#[derive(Debug, Clone)]
pub struct DirectoryView<L> {
    kind: DirectoryKind,
    phase: LoadPhase,
    listings: Vec<L>,
    category: Category,
}

impl<L: Listing> DirectoryView<L> {
    pub fn new(kind: DirectoryKind) -> Self {
        Self {
            kind,
            phase: LoadPhase::Loading,
            listings: Vec::new(),
            category: Category::All,
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Enter the loading state (initial fetch or manual retry).
    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Apply the outcome of a fetch. A failure keeps any previously loaded
    /// listings out of view and records the retry message.
    pub fn apply(&mut self, result: Result<Vec<L>, AppError>) {
        match result {
            Ok(listings) => {
                self.listings = listings;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = ?self.kind, "Directory load failed");
                self.listings.clear();
                self.phase = LoadPhase::Failed(self.kind.failure_message().to_string());
            }
        }
    }

    /// Switch the active category tab. Filtering is recomputed from scratch
    /// by the next `visible()` call.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Listings matching the active tab, in backend order.
    pub fn visible(&self) -> impl Iterator<Item = &L> {
        filter_listings(self.category, &self.listings)
    }

    /// Whether the view is showing the failure message with a retry action.
    pub fn needs_retry(&self) -> bool {
        matches!(self.phase, LoadPhase::Failed(_))
    }
}

impl DirectoryView<Tutor> {
    /// Fetch the tutor directory (students browsing tutors).
    pub async fn refresh(&mut self, backend: &BackendClient) {
        self.begin_loading();
        self.apply(backend.get_tutors().await);
    }
}

impl DirectoryView<Client> {
    /// Fetch the student directory (tutors browsing students).
    pub async fn refresh(&mut self, backend: &BackendClient) {
        self.begin_loading();
        self.apply(backend.get_clients().await);
    }
}
