// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Proxy contact-data synthesis.
//!
//! Generates substitute email addresses and phone numbers so the real
//! values never reach the recipient organization. The substitutes are
//! random with no uniqueness guarantee beyond low collision probability
//! within a session.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Domain the generated proxy addresses live under.
const PROXY_EMAIL_DOMAIN: &str = "dataconsent.app";

/// Length of the random tag in a proxy email local part.
const PROXY_TAG_LEN: usize = 6;

/// Purpose labels offered by the sharing wizard.
pub const PURPOSE_LABELS: &[&str] = &[
    "Event Registration",
    "Wi-Fi Access",
    "App Signup",
    "Survey",
    "Other",
];

/// Expiry presets offered by the sharing wizard, in minutes
/// (10 minutes, 1 hour, 1 day, 7 days).
pub const EXPIRY_PRESET_MINUTES: &[i64] = &[10, 60, 1440, 10080];

/// A category of personal data the user can share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Email,
    Phone,
    Name,
}

impl DataKind {
    pub const ALL: &'static [DataKind] = &[DataKind::Email, DataKind::Phone, DataKind::Name];

    /// Human-readable label used in consent records and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            DataKind::Email => "Email",
            DataKind::Phone => "Phone Number",
            DataKind::Name => "Name",
        }
    }

    /// Wire form, matching the serde representation.
    pub fn value(&self) -> &'static str {
        match self {
            DataKind::Email => "email",
            DataKind::Phone => "phone",
            DataKind::Name => "name",
        }
    }
}

/// Join the selected kinds into the record's `data_type` label,
/// preserving selection order ("Email, Phone Number").
pub fn data_type_label(kinds: &[DataKind]) -> String {
    kinds
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generated substitute contact values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyData {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Service generating proxy substitutes for shared data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProxyService;

impl ProxyService {
    /// Generate proxy values for the requested kinds. Only email and
    /// phone get substitutes; a shared name has no proxy form.
    pub fn generate(&self, kinds: &[DataKind]) -> ProxyData {
        let mut data = ProxyData::default();
        if kinds.contains(&DataKind::Email) {
            data.email = Some(self.proxy_email());
        }
        if kinds.contains(&DataKind::Phone) {
            data.phone = Some(self.proxy_phone());
        }
        data
    }

    /// `proxy_<tag>@dataconsent.app` with a lowercase alphanumeric tag.
    pub fn proxy_email(&self) -> String {
        const TAG_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();
        let tag: String = (0..PROXY_TAG_LEN)
            .map(|_| TAG_CHARS[rng.gen_range(0..TAG_CHARS.len())] as char)
            .collect();
        format!("proxy_{}@{}", tag, PROXY_EMAIL_DOMAIN)
    }

    /// `+1-555-NNNN` with a random four-digit suffix.
    pub fn proxy_phone(&self) -> String {
        let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
        format!("+1-555-{}", suffix)
    }
}
