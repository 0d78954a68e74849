//! Consent record model and status classification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lookahead before expiry during which a consent reports as `Expiring`
/// rather than `Active`. Fixed; not configurable per record.
pub const EXPIRING_WINDOW_MINUTES: i64 = 60;

/// Lifecycle state of a consent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Active,
    Expiring,
    Expired,
    Revoked,
}

impl ConsentStatus {
    /// Wire/display form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Active => "active",
            ConsentStatus::Expiring => "expiring",
            ConsentStatus::Expired => "expired",
            ConsentStatus::Revoked => "revoked",
        }
    }
}

/// Classify a consent by its expiry relative to `now`.
///
/// Never returns `Revoked`: revocation is an explicit action recorded on
/// the record itself and overrides classification everywhere.
///
/// Both comparisons are strict, so an expiry exactly equal to `now` falls
/// inside the one-hour window and classifies as `Expiring`.
pub fn classify(expiry_time: DateTime<Utc>, now: DateTime<Utc>) -> ConsentStatus {
    if expiry_time < now {
        ConsentStatus::Expired
    } else if expiry_time < now + Duration::minutes(EXPIRING_WINDOW_MINUTES) {
        ConsentStatus::Expiring
    } else {
        ConsentStatus::Active
    }
}

/// A time-bounded authorization for an organization to use proxy data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentRecord {
    /// Opaque unique ID, assigned at creation
    pub id: String,
    /// Human-readable label, may concatenate several types ("Email, Name")
    pub data_type: String,
    /// Recipient organization (free text)
    pub organization: String,
    /// Purpose label
    pub purpose: String,
    /// When the consent was granted
    pub start_time: DateTime<Utc>,
    /// When access ends
    pub expiry_time: DateTime<Utc>,
    /// Last computed status; `Revoked` is sticky, everything else is
    /// re-derived from `expiry_time` on read
    pub status: ConsentStatus,
    /// Generated substitute email, present if email was shared
    pub proxy_email: Option<String>,
    /// Generated substitute phone, present if phone was shared
    pub proxy_phone: Option<String>,
    /// Opaque hex token shown as "proof"; not a real commitment
    pub commitment_hash: String,
}

impl ConsentRecord {
    /// Current status as of `now`. Revocation wins over classification.
    pub fn status_at(&self, now: DateTime<Utc>) -> ConsentStatus {
        if self.status == ConsentStatus::Revoked {
            ConsentStatus::Revoked
        } else {
            classify(self.expiry_time, now)
        }
    }
}

/// Input for creating a consent record. IDs, commitment hashes, and the
/// initial status are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewConsent {
    pub data_type: String,
    pub organization: String,
    pub purpose: String,
    pub start_time: DateTime<Utc>,
    pub expiry_time: DateTime<Utc>,
    pub proxy_email: Option<String>,
    pub proxy_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_classify_past_expiry_is_expired() {
        let now = base_time();
        assert_eq!(classify(now - Duration::days(1), now), ConsentStatus::Expired);
        assert_eq!(
            classify(now - Duration::seconds(1), now),
            ConsentStatus::Expired
        );
    }

    #[test]
    fn test_classify_expiry_equal_to_now_is_expiring() {
        // Strict comparisons: equality falls through the expired branch
        // into the one-hour window.
        let now = base_time();
        assert_eq!(classify(now, now), ConsentStatus::Expiring);
    }

    #[test]
    fn test_classify_within_window_is_expiring() {
        let now = base_time();
        assert_eq!(
            classify(now + Duration::minutes(30), now),
            ConsentStatus::Expiring
        );
        assert_eq!(
            classify(now + Duration::minutes(59), now),
            ConsentStatus::Expiring
        );
    }

    #[test]
    fn test_classify_at_window_boundary_is_active() {
        let now = base_time();
        assert_eq!(
            classify(now + Duration::minutes(EXPIRING_WINDOW_MINUTES), now),
            ConsentStatus::Active
        );
        assert_eq!(classify(now + Duration::days(10), now), ConsentStatus::Active);
    }

    #[test]
    fn test_revoked_overrides_classification() {
        let now = base_time();
        let record = ConsentRecord {
            id: "c1".to_string(),
            data_type: "Email".to_string(),
            organization: "Test Org".to_string(),
            purpose: "Survey".to_string(),
            start_time: now - Duration::hours(1),
            expiry_time: now + Duration::days(10),
            status: ConsentStatus::Revoked,
            proxy_email: None,
            proxy_phone: None,
            commitment_hash: "0x00".to_string(),
        };

        // Far-future expiry would classify as Active, but revoked sticks.
        assert_eq!(record.status_at(now), ConsentStatus::Revoked);
        assert_eq!(
            record.status_at(now + Duration::days(30)),
            ConsentStatus::Revoked
        );
    }
}
