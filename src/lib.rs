// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Consent-Ledger: demo backend for time-bounded data-sharing consents
//!
//! This crate provides the API for creating, listing, and revoking
//! consent records that substitute generated proxy contact data for real
//! personal data. Authentication is simulated and all state is held in
//! memory for the lifetime of the process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::ProxyService;
use store::{ConsentStore, SessionStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub consents: ConsentStore,
    pub sessions: SessionStore,
    pub proxy_service: ProxyService,
}
