use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use pagecraft_auth::TokenVerifier;

use crate::app::errors::json_error;
use crate::context::SessionContext;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Require a valid session: missing or bad tokens get a 401 envelope.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).ok_or_else(|| {
        json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or malformed bearer token",
        )
    })?;

    let claims = state.verifier.verify(token, Utc::now()).map_err(|e| {
        tracing::debug!("rejected session token: {e}");
        json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid session token",
        )
    })?;

    req.extensions_mut()
        .insert(SessionContext::new(claims.sub, claims.email));

    Ok(next.run(req).await)
}

/// Attach a session when a valid token is present; never reject.
///
/// Checkout and brief submission use this so anonymous visitors can buy and
/// submit, while signed-in sessions get attributed.
pub async fn optional_auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer(req.headers()) {
        match state.verifier.verify(token, Utc::now()) {
            Ok(claims) => {
                req.extensions_mut()
                    .insert(SessionContext::new(claims.sub, claims.email));
            }
            Err(e) => tracing::debug!("ignoring invalid session token: {e}"),
        }
    }

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
