use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use pagecraft_onboarding::validation::plausible_email;

use crate::app::services::{AppServices, ContactInquiry};
use crate::app::{dto, errors};

pub async fn submit_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ContactRequest>,
) -> axum::response::Response {
    if body.name.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "name must not be empty",
        );
    }
    if !plausible_email(body.email.trim()) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "email does not look deliverable",
        );
    }
    if body.message.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "message must not be empty",
        );
    }

    let id = services.record_inquiry(ContactInquiry {
        name: body.name,
        email: body.email,
        message: body.message,
        received_at: Utc::now(),
    });
    tracing::info!(%id, "contact inquiry received");

    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}
