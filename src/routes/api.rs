// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ConsentRecord, NewConsent};
use crate::routes::auth::IdentityResponse;
use crate::services::commitment;
use crate::services::proxy::{self, DataKind};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via the session JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/consents", get(get_consents).post(create_consent))
        .route("/api/consents/options", get(get_consent_options))
        .route("/api/consents/{id}/revoke", post(revoke_consent))
        .route("/api/proxy", post(generate_proxy))
        .route("/api/stats", get(get_stats))
}

// ─── Current Identity ────────────────────────────────────────

/// Get the identity currently held by the session store.
async fn get_me(State(state): State<Arc<AppState>>) -> Result<Json<IdentityResponse>> {
    let identity = state
        .sessions
        .current()
        .ok_or_else(|| AppError::NotFound("No active session".to_string()))?;

    Ok(Json(identity.into()))
}

// ─── Consents ────────────────────────────────────────────────

/// A consent record as returned to the frontend.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsentResponse {
    pub id: String,
    pub data_type: String,
    pub organization: String,
    pub purpose: String,
    pub start_time: String,
    pub expiry_time: String,
    pub status: String,
    pub proxy_email: Option<String>,
    pub proxy_phone: Option<String>,
    pub commitment_hash: String,
}

impl From<ConsentRecord> for ConsentResponse {
    fn from(record: ConsentRecord) -> Self {
        Self {
            id: record.id,
            data_type: record.data_type,
            organization: record.organization,
            purpose: record.purpose,
            start_time: format_utc_rfc3339(record.start_time),
            expiry_time: format_utc_rfc3339(record.expiry_time),
            status: record.status.as_str().to_string(),
            proxy_email: record.proxy_email,
            proxy_phone: record.proxy_phone,
            commitment_hash: record.commitment_hash,
        }
    }
}

#[derive(Deserialize)]
struct ConsentsQuery {
    /// Ledger filter: "all" (default), "active", or "inactive"
    filter: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsentsResponse {
    pub consents: Vec<ConsentResponse>,
    pub total: u32,
}

/// List consent records, newest first.
async fn get_consents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConsentsQuery>,
) -> Result<Json<ConsentsResponse>> {
    let now = Utc::now();
    let records = match params.filter.as_deref() {
        None | Some("all") => state.consents.list_all(now),
        Some("active") => state.consents.list_active(now),
        Some("inactive") => state.consents.list_inactive(now),
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Invalid 'filter' parameter: {} (expected all, active, or inactive)",
                other
            )))
        }
    };

    let consents: Vec<ConsentResponse> = records.into_iter().map(Into::into).collect();
    let total = consents.len() as u32;

    Ok(Json(ConsentsResponse { consents, total }))
}

/// Request to create a consent record.
#[derive(Deserialize, Validate)]
pub struct CreateConsentRequest {
    /// Which personal data is being shared
    #[validate(length(min = 1))]
    pub data_types: Vec<DataKind>,
    #[validate(length(min = 1, max = 200))]
    pub organization: String,
    #[validate(length(min = 1, max = 200))]
    pub purpose: String,
    /// How long access lasts, from now
    #[validate(range(min = 1))]
    pub expires_in_minutes: i64,
    /// Proxy values from an earlier preview step; generated here if absent
    #[serde(default)]
    pub proxy_email: Option<String>,
    #[serde(default)]
    pub proxy_phone: Option<String>,
}

/// Create a consent record.
///
/// Proxy substitutes are taken from the request when the preview step
/// already generated them, and synthesized otherwise. Values for data
/// types that are not being shared are dropped.
async fn create_consent(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateConsentRequest>,
) -> Result<Json<ConsentResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let now = Utc::now();
    let kinds = &payload.data_types;

    let proxy_email = if kinds.contains(&DataKind::Email) {
        payload
            .proxy_email
            .or_else(|| Some(state.proxy_service.proxy_email()))
    } else {
        None
    };
    let proxy_phone = if kinds.contains(&DataKind::Phone) {
        payload
            .proxy_phone
            .or_else(|| Some(state.proxy_service.proxy_phone()))
    } else {
        None
    };

    let record = state.consents.create(
        NewConsent {
            data_type: proxy::data_type_label(kinds),
            organization: payload.organization,
            purpose: payload.purpose,
            start_time: now,
            expiry_time: now + Duration::minutes(payload.expires_in_minutes),
            proxy_email,
            proxy_phone,
        },
        now,
    );

    tracing::info!(
        identity_id = %user.identity_id,
        consent_id = %record.id,
        organization = %record.organization,
        hash = %commitment::truncate_hash(&record.commitment_hash),
        "Consent created"
    );

    Ok(Json(record.into()))
}

/// Response for consent revocation.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RevokeResponse {
    pub success: bool,
    pub message: String,
}

/// Revoke a consent record. Revocation is unconditional and sticky:
/// an expired record still becomes revoked, and nothing un-revokes it.
async fn revoke_consent(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<RevokeResponse>> {
    state.consents.revoke(&id)?;

    tracing::info!(
        identity_id = %user.identity_id,
        consent_id = %id,
        "Consent revoked"
    );

    Ok(Json(RevokeResponse {
        success: true,
        message: "The consent has been revoked successfully.".to_string(),
    }))
}

// ─── Sharing Wizard Support ──────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DataTypeOption {
    pub value: String,
    pub label: String,
}

/// Presets the sharing wizard offers.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsentOptionsResponse {
    pub data_types: Vec<DataTypeOption>,
    pub purposes: Vec<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number[]"))]
    pub expiry_minutes: Vec<i64>,
}

/// Data-type, purpose, and expiry presets for the sharing wizard.
async fn get_consent_options() -> Json<ConsentOptionsResponse> {
    Json(ConsentOptionsResponse {
        data_types: DataKind::ALL
            .iter()
            .map(|k| DataTypeOption {
                value: k.value().to_string(),
                label: k.label().to_string(),
            })
            .collect(),
        purposes: proxy::PURPOSE_LABELS.iter().map(|p| p.to_string()).collect(),
        expiry_minutes: proxy::EXPIRY_PRESET_MINUTES.to_vec(),
    })
}

/// Request for a proxy-data preview.
#[derive(Deserialize, Validate)]
pub struct ProxyPreviewRequest {
    #[validate(length(min = 1))]
    pub data_types: Vec<DataKind>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProxyPreviewResponse {
    pub proxy_email: Option<String>,
    pub proxy_phone: Option<String>,
}

/// Generate proxy substitutes for the selected data types (the wizard's
/// "generate" step, ahead of final submission).
async fn generate_proxy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProxyPreviewRequest>,
) -> Result<Json<ProxyPreviewResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let proxy = state.proxy_service.generate(&payload.data_types);

    Ok(Json(ProxyPreviewResponse {
        proxy_email: proxy.email,
        proxy_phone: proxy.phone,
    }))
}

// ─── Dashboard Stats ─────────────────────────────────────────

/// Dashboard stats response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    /// Currently active or expiring consents
    pub active: u32,
    /// Consents past expiry
    pub expired: u32,
    /// Explicitly revoked consents
    pub revoked: u32,
    /// Consents started in the current calendar month
    pub shared_this_month: u32,
    pub total: u32,
}

/// Get dashboard aggregates over the ledger.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let summary = state.consents.summary(Utc::now());

    Json(StatsResponse {
        active: summary.active,
        expired: summary.expired,
        revoked: summary.revoked,
        shared_this_month: summary.shared_this_month,
        total: summary.total,
    })
}
