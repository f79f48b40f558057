use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pagecraft_billing::BillingError;
use pagecraft_core::DomainError;
use pagecraft_identity::IdentityError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// Provider failures surface to the caller for manual retry; the provider's
/// own message is passed through where it has one.
pub fn billing_error_to_response(err: BillingError) -> axum::response::Response {
    match err {
        BillingError::Api {
            status,
            code,
            message,
        } => {
            tracing::warn!(status, code = code.as_deref(), "billing provider rejected request: {message}");
            json_error(StatusCode::BAD_GATEWAY, "billing_provider_error", message)
        }
        other => {
            tracing::warn!("billing provider call failed: {other}");
            json_error(
                StatusCode::BAD_GATEWAY,
                "billing_provider_error",
                other.to_string(),
            )
        }
    }
}

pub fn identity_error_to_response(err: IdentityError) -> axum::response::Response {
    tracing::warn!("identity provider call failed: {err}");
    json_error(
        StatusCode::BAD_GATEWAY,
        "identity_provider_error",
        err.to_string(),
    )
}
