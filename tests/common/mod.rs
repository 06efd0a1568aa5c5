// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tutor_match::error::AppError;
use tutor_match::models::{Client, Principal, Tutor};
use tutor_match::session::{IdentityProvider, ProfileDirectory, SessionManager};
use tutor_match::store::MemoryStore;
use tutor_match::Config;

/// In-memory stand-in for the backend's profile lookups.
///
/// Flip `failing` to simulate an unreachable backend: every lookup then
/// returns a network error.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeDirectory {
    pub students: HashMap<String, Client>,
    pub tutors: HashMap<String, Tutor>,
    pub failing: AtomicBool,
    /// Answer student lookups with a NotFound error instead of `Ok(None)`
    pub students_not_found: AtomicBool,
}

impl FakeDirectory {
    #[allow(dead_code)]
    pub fn with_student(mut self, client: Client) -> Self {
        self.students.insert(client.email.clone(), client);
        self
    }

    #[allow(dead_code)]
    pub fn with_tutor(mut self, tutor: Tutor) -> Self {
        let email = tutor.email.clone().expect("test tutor needs an email");
        self.tutors.insert(email, tutor);
        self
    }

    #[allow(dead_code)]
    pub fn offline(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    #[allow(dead_code)]
    pub fn students_not_found(self) -> Self {
        self.students_not_found.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl ProfileDirectory for FakeDirectory {
    async fn find_student(&self, email: &str) -> Result<Option<Client>, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        if self.students_not_found.load(Ordering::SeqCst) {
            return Err(AppError::NotFound(format!("client {}", email)));
        }
        Ok(self.students.get(email).cloned())
    }

    async fn find_tutor(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }
        Ok(self.tutors.get(email).cloned())
    }
}

/// Identity provider fake that signs in as a fixed principal.
#[allow(dead_code)]
pub struct FakeIdentity {
    pub principal: Principal,
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self) -> Result<Principal, AppError> {
        Ok(self.principal.clone())
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub fn principal(email: &str) -> Principal {
    Principal {
        id: format!("uid-{}", email),
        email: Some(email.to_string()),
        display_name: Some("Test User".to_string()),
        photo_url: None,
    }
}

#[allow(dead_code)]
pub fn student(name: &str, email: &str, subjects: &[&str]) -> Client {
    Client {
        id: Some(1),
        name: name.to_string(),
        email: email.to_string(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        budget: 40.0,
        description: String::new(),
        language: String::new(),
        location: String::new(),
        availability: String::new(),
        education: String::new(),
        created_at: None,
        updated_at: None,
    }
}

#[allow(dead_code)]
pub fn tutor(name: &str, email: &str, subjects: &[&str]) -> Tutor {
    Tutor {
        id: Some(1),
        name: name.to_string(),
        email: Some(email.to_string()),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        pay: 50.0,
        rating: None,
        bio: String::new(),
        language: String::new(),
        location: String::new(),
        availability: String::new(),
        experience: String::new(),
        education: String::new(),
        certification: String::new(),
        created_at: None,
        updated_at: None,
    }
}

/// Session manager wired to the given fake directory, with a fresh
/// in-memory store. Returns the store handle so tests can seed or inspect
/// the cache.
#[allow(dead_code)]
pub fn session_manager(directory: FakeDirectory) -> (SessionManager, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let manager = SessionManager::new(Config::default(), store.clone(), Arc::new(directory));
    (manager, store)
}
