//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: provider clients, webhook verifier, in-memory stores
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: ApiConfig) -> Router {
    let verifier = Arc::new(pagecraft_auth::Hs256Verifier::new(
        config.session_jwt_secret.as_bytes(),
    ));
    let auth_state = middleware::AuthState { verifier };

    let services = Arc::new(services::AppServices::from_config(&config));

    // Portal routes: require a valid session.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state.clone(),
        middleware::auth_middleware,
    ));

    // Checkout and brief intake: a session is attached when present, but
    // anonymous requests go through.
    let soft_gated = Router::new()
        .route("/billing/checkout", post(routes::billing::create_checkout))
        .route("/onboarding/briefs", post(routes::onboarding::submit_brief))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::optional_auth_middleware,
        ));

    Router::new()
        .merge(routes::public_router())
        .merge(soft_gated)
        .merge(protected)
        .route("/webhooks/billing", post(routes::billing::webhook))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        )
}
