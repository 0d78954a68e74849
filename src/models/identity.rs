//! Authenticated identity model for the session store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// The identity held by the session store while logged in.
///
/// Discarded entirely on logout; at most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque ID, assigned at login
    pub id: String,
    /// Email address as entered at login
    pub email: String,
    /// Display name
    pub name: String,
    /// Deterministic avatar URL derived from the email
    pub avatar_url: String,
}

impl Identity {
    /// Build an identity from credential login input.
    ///
    /// The display name defaults to the local part of the email when not
    /// supplied, and the avatar is seeded from the full email.
    pub fn from_credentials(email: &str, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.unwrap_or_else(|| local_part(email).to_string()),
            avatar_url: avatar_url(email),
        }
    }

    /// The fixed identity handed out by the simulated provider login.
    pub fn provider_default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: "user@dataconsent.app".to_string(),
            name: "Alex Johnson".to_string(),
            avatar_url: avatar_url("Alex"),
        }
    }
}

/// Everything before the first `@`, or the whole string if there is none.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Deterministic avatar URL for a seed string.
fn avatar_url(seed: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE_URL, seed)
}
