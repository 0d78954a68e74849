// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod consent;
pub mod identity;

pub use consent::{classify, ConsentRecord, ConsentStatus, NewConsent, EXPIRING_WINDOW_MINUTES};
pub use identity::Identity;
