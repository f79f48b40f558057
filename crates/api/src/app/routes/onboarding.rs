use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use pagecraft_onboarding::{OnboardingState, ProjectBrief};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::SessionContext;

/// Accept a finished wizard bag and file it as a brief.
///
/// Works with or without a session: signed-in submitters own the brief
/// outright; anonymous ones can claim it later through the contact email.
pub async fn submit_brief(
    Extension(services): Extension<Arc<AppServices>>,
    session: Option<Extension<SessionContext>>,
    Json(state): Json<OnboardingState>,
) -> axum::response::Response {
    let brief = match ProjectBrief::from_state(state) {
        Ok(brief) => brief,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
        }
    };

    let owner = session.map(|Extension(ctx)| ctx.user_id().clone());
    let id = services.insert_brief(brief, owner);
    tracing::info!(%id, "project brief submitted");

    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}
