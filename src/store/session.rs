// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory session store.
//!
//! Holds at most one authenticated identity. Login always succeeds in
//! this system's mocked form; nothing is verified and nothing persists
//! across restarts.

use parking_lot::RwLock;

use crate::models::Identity;

/// Volatile single-identity session state.
#[derive(Default)]
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credential login. The password is accepted and never verified.
    ///
    /// Replaces any previously held identity (no multi-account).
    pub fn login_with_credentials(
        &self,
        email: &str,
        _password: &str,
        name: Option<String>,
    ) -> Identity {
        let identity = Identity::from_credentials(email, name);
        *self.current.write() = Some(identity.clone());
        identity
    }

    /// Simulated provider (OAuth) login with the fixed demo identity.
    pub fn login_with_provider(&self) -> Identity {
        let identity = Identity::provider_default();
        *self.current.write() = Some(identity.clone());
        identity
    }

    /// Discard the current identity, if any.
    pub fn logout(&self) {
        *self.current.write() = None;
    }

    /// The currently authenticated identity.
    pub fn current(&self) -> Option<Identity> {
        self.current.read().clone()
    }
}
