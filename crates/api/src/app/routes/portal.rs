use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use pagecraft_core::BriefId;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::SessionContext;

/// Everything the portal landing page needs in one round trip.
pub async fn overview(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let profile = match services.identity.get_user(session.user_id()).await {
        Ok(profile) => profile,
        Err(e) => return errors::identity_error_to_response(e),
    };

    let briefs = services.briefs_for(session.user_id(), session.email());

    (
        StatusCode::OK,
        Json(json!({
            "user": { "id": profile.id, "email": profile.email },
            "plan": profile.public_metadata.plan,
            "briefs": briefs,
        })),
    )
        .into_response()
}

pub async fn get_brief(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BriefId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    // A brief someone else owns looks exactly like one that does not exist.
    match services.brief(&id) {
        Some(stored) if stored.owned_by(session.user_id(), session.email()) => {
            (StatusCode::OK, Json(json!({ "brief": stored.brief }))).into_response()
        }
        _ => errors::json_error(StatusCode::NOT_FOUND, "not_found", "brief not found"),
    }
}
