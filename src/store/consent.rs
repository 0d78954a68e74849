// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory consent ledger.
//!
//! Holds the ordered collection of consent records, newest first.
//! Status is derived lazily on every read: nothing transitions records
//! in the background, the current clock reading decides. Revocation is
//! the one sticky state and survives any re-classification.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{classify, ConsentRecord, ConsentStatus, NewConsent};
use crate::services::commitment;
use crate::time_utils::same_calendar_month;

/// Errors from consent store operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsentStoreError {
    #[error("No consent record with id {0}")]
    NotFound(String),
}

/// Dashboard aggregates over the ledger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsentSummary {
    /// Records currently active or expiring
    pub active: u32,
    /// Records past expiry (not revoked)
    pub expired: u32,
    /// Explicitly revoked records
    pub revoked: u32,
    /// Records whose sharing started in the current calendar month
    pub shared_this_month: u32,
    /// Every record in the ledger
    pub total: u32,
}

/// Volatile, process-lifetime consent collection.
#[derive(Default)]
pub struct ConsentStore {
    records: RwLock<Vec<ConsentRecord>>,
}

impl ConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a consent record and prepend it to the ledger.
    ///
    /// Assigns a fresh unique id and a decorative commitment hash, and
    /// classifies the initial status against `now`.
    pub fn create(&self, input: NewConsent, now: DateTime<Utc>) -> ConsentRecord {
        let record = ConsentRecord {
            id: Uuid::new_v4().to_string(),
            data_type: input.data_type,
            organization: input.organization,
            purpose: input.purpose,
            start_time: input.start_time,
            expiry_time: input.expiry_time,
            status: classify(input.expiry_time, now),
            proxy_email: input.proxy_email,
            proxy_phone: input.proxy_phone,
            commitment_hash: commitment::generate_hash(),
        };

        self.records.write().insert(0, record.clone());
        record
    }

    /// Revoke the record with the given id.
    ///
    /// Unconditional: an already-expired record still becomes revoked.
    /// Unknown ids are a caller bug and surface as `NotFound`.
    pub fn revoke(&self, id: &str) -> Result<(), ConsentStoreError> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ConsentStoreError::NotFound(id.to_string()))?;

        record.status = ConsentStatus::Revoked;
        Ok(())
    }

    /// Every record, newest first, statuses refreshed as of `now`.
    pub fn list_all(&self, now: DateTime<Utc>) -> Vec<ConsentRecord> {
        self.records
            .read()
            .iter()
            .map(|r| refreshed(r, now))
            .collect()
    }

    /// Records whose current status is `Active` or `Expiring`.
    pub fn list_active(&self, now: DateTime<Utc>) -> Vec<ConsentRecord> {
        self.list_where(now, |status| {
            matches!(status, ConsentStatus::Active | ConsentStatus::Expiring)
        })
    }

    /// Records whose current status is `Expired` or `Revoked`.
    pub fn list_inactive(&self, now: DateTime<Utc>) -> Vec<ConsentRecord> {
        self.list_where(now, |status| {
            matches!(status, ConsentStatus::Expired | ConsentStatus::Revoked)
        })
    }

    fn list_where(
        &self,
        now: DateTime<Utc>,
        keep: impl Fn(ConsentStatus) -> bool,
    ) -> Vec<ConsentRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| keep(r.status_at(now)))
            .map(|r| refreshed(r, now))
            .collect()
    }

    /// Dashboard aggregates as of `now`.
    pub fn summary(&self, now: DateTime<Utc>) -> ConsentSummary {
        let records = self.records.read();
        let mut summary = ConsentSummary {
            total: records.len() as u32,
            ..Default::default()
        };

        for record in records.iter() {
            match record.status_at(now) {
                ConsentStatus::Active | ConsentStatus::Expiring => summary.active += 1,
                ConsentStatus::Expired => summary.expired += 1,
                ConsentStatus::Revoked => summary.revoked += 1,
            }
            if same_calendar_month(record.start_time, now) {
                summary.shared_this_month += 1;
            }
        }

        summary
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Seed the demo ledger: one record in each lifecycle state, with
    /// start/expiry offsets relative to `now`.
    pub fn seed_demo_records(&self, now: DateTime<Utc>) {
        let demo = [
            ConsentRecord {
                id: Uuid::new_v4().to_string(),
                data_type: "Email".to_string(),
                organization: "TechFest 2025".to_string(),
                purpose: "Event Registration".to_string(),
                start_time: now - Duration::days(2),
                expiry_time: now + Duration::days(5),
                status: ConsentStatus::Active,
                proxy_email: Some("tf2025_a7x9@proxy.dataconsent.app".to_string()),
                proxy_phone: None,
                commitment_hash:
                    "0x8f4e2d1a9b3c5f7e6d8a2b4c1e3f5a7b9d2e4f6a8c1d3e5f7a9b2c4d6e8f1a3b"
                        .to_string(),
            },
            ConsentRecord {
                id: Uuid::new_v4().to_string(),
                data_type: "Phone Number".to_string(),
                organization: "Cafe Wi-Fi".to_string(),
                purpose: "Wi-Fi Access".to_string(),
                start_time: now - Duration::minutes(30),
                expiry_time: now + Duration::minutes(30),
                status: ConsentStatus::Expiring,
                proxy_email: None,
                proxy_phone: Some("+1-555-7642".to_string()),
                commitment_hash:
                    "0x2a4b6c8d1e3f5a7b9c2d4e6f8a1b3c5d7e9f2a4b6c8d1e3f5a7b9c2d4e6f8a1b"
                        .to_string(),
            },
            ConsentRecord {
                id: Uuid::new_v4().to_string(),
                data_type: "Email, Name".to_string(),
                organization: "Newsletter Pro".to_string(),
                purpose: "App Signup".to_string(),
                start_time: now - Duration::days(10),
                expiry_time: now - Duration::days(3),
                status: ConsentStatus::Expired,
                proxy_email: Some("nlpro_k9m2@proxy.dataconsent.app".to_string()),
                proxy_phone: None,
                commitment_hash:
                    "0x5f7a9b2c4d6e8f1a3b5d7e9f2a4b6c8d1e3f5a7b9c2d4e6f8a1b3c5d7e9f2a4b"
                        .to_string(),
            },
            ConsentRecord {
                id: Uuid::new_v4().to_string(),
                data_type: "Email".to_string(),
                organization: "Survey Corp".to_string(),
                purpose: "Survey".to_string(),
                start_time: now - Duration::days(5),
                expiry_time: now - Duration::days(1),
                status: ConsentStatus::Revoked,
                proxy_email: Some("survey_x3p7@proxy.dataconsent.app".to_string()),
                proxy_phone: None,
                commitment_hash:
                    "0x1b3c5d7e9f2a4b6c8d1e3f5a7b9c2d4e6f8a1b3c5d7e9f2a4b6c8d1e3f5a7b9c"
                        .to_string(),
            },
        ];

        self.records.write().extend(demo);
        tracing::info!(count = self.len(), "Demo consent records seeded");
    }
}

/// Clone with the status field brought up to date.
fn refreshed(record: &ConsentRecord, now: DateTime<Utc>) -> ConsentRecord {
    let mut record = record.clone();
    record.status = record.status_at(now);
    record
}
