use axum::{
    Router,
    routing::{get, post},
};

pub mod billing;
pub mod contact;
pub mod content;
pub mod onboarding;
pub mod portal;
pub mod system;

/// Router for everything readable without a session.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/pages", get(content::list_pages))
        .route("/pages/:slug", get(content::get_page))
        .route("/services", get(content::list_services))
        .route("/portfolio", get(content::list_portfolio))
        .route("/pricing", get(content::pricing))
        .route("/templates", get(content::list_templates))
        .route("/contact", post(contact::submit_inquiry))
}

/// Router for the session-gated client portal.
pub fn protected_router() -> Router {
    Router::new()
        .route("/portal/overview", get(portal::overview))
        .route("/portal/briefs/:id", get(portal::get_brief))
        .route("/billing/portal", post(billing::create_portal))
}
