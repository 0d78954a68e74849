// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Simulated authentication routes.
//!
//! Login always succeeds: credentials are accepted without verification
//! and the provider flow returns a fixed demo identity. What login does
//! provide is a session JWT so the protected API behaves like the real
//! thing.

use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, SESSION_COOKIE};
use crate::models::Identity;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/provider", post(login_with_provider))
        .route("/auth/logout", post(logout))
}

/// Credential login request.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    /// Accepted but never verified
    #[validate(length(min = 1))]
    pub password: String,
    /// Optional display name (signup form); defaults to the email's
    /// local part
    #[serde(default)]
    pub name: Option<String>,
}

/// Identity as returned to the frontend.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            avatar_url: identity.avatar_url,
        }
    }
}

/// Successful login response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub token: String,
    pub identity: IdentityResponse,
}

/// Logout response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Email/password login. Always succeeds in this mocked form.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let identity =
        state
            .sessions
            .login_with_credentials(&payload.email, &payload.password, payload.name);

    tracing::info!(identity_id = %identity.id, "Credential login");

    issue_session(&state, jar, identity)
}

/// Simulated provider (OAuth) login with the fixed demo identity.
async fn login_with_provider(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let identity = state.sessions.login_with_provider();

    tracing::info!(identity_id = %identity.id, "Provider login");

    issue_session(&state, jar, identity)
}

/// Clear the session and drop the cookie.
async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    state.sessions.logout();
    tracing::info!("Session cleared");

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Json(LogoutResponse { success: true }))
}

/// Mint the session JWT and attach it both as a cookie and in the body.
fn issue_session(
    state: &Arc<AppState>,
    jar: CookieJar,
    identity: Identity,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let token = create_jwt(&identity.id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(SessionResponse {
            token,
            identity: identity.into(),
        }),
    ))
}
