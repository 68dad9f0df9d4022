//! # API Key Authentication Middleware
//!
//! Protects the upload route with an `X-API-KEY` header check against the
//! single configured secret. Plain exact-string comparison: no hashing,
//! no rate limiting, no timing-attack mitigation (documented limitation
//! of this service, matching its origin).
//!
//! Rejections are returned as the standard `{message, data}` envelope so
//! auth failures conform to the wire contract, and they short-circuit
//! before the request body is read.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::error::SnaptextError;

use super::response::Envelope;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Axum middleware enforcing the API key.
///
/// - No key configured → 401. The server still starts, but the upload
///   route is locked down until `SNAPTEXT_API_KEY` is set.
/// - Missing `X-API-KEY` header → 401.
/// - Header present but not an exact match → 401.
/// - Exact match → pass through.
pub async fn api_key_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.config.server.api_key.as_deref() else {
        return Envelope::from(SnaptextError::Unauthorized(
            "API key not configured. Set SNAPTEXT_API_KEY to enable access.".into(),
        ))
        .into_response();
    };

    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match supplied {
        Some(key) if key == expected => next.run(request).await,
        Some(_) => Envelope::from(SnaptextError::Unauthorized("Invalid API key".into()))
            .into_response(),
        None => Envelope::from(SnaptextError::Unauthorized(format!(
            "Missing {API_KEY_HEADER} header"
        )))
        .into_response(),
    }
}
