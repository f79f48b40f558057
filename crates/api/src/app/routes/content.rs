use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use pagecraft_catalog::{care_plans, packages, page_by_slug, pages, portfolio, services, templates};

use crate::app::errors;

pub async fn list_pages() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "items": pages() }))).into_response()
}

/// One page with its sections, plus whatever catalog data that page renders.
pub async fn get_page(Path(slug): Path<String>) -> axum::response::Response {
    let Some(page) = page_by_slug(&slug) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "no such page");
    };

    let body = match page.slug {
        "services" => json!({ "page": page, "services": services() }),
        "portfolio" => json!({ "page": page, "case_studies": portfolio() }),
        "pricing" => json!({
            "page": page,
            "packages": packages(),
            "care_plans": care_plans(),
        }),
        "templates" => json!({ "page": page, "templates": templates() }),
        _ => json!({ "page": page }),
    };

    (StatusCode::OK, Json(body)).into_response()
}

pub async fn list_services() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "items": services() }))).into_response()
}

pub async fn list_portfolio() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "items": portfolio() }))).into_response()
}

pub async fn pricing() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "packages": packages(),
            "care_plans": care_plans(),
        })),
    )
        .into_response()
}

pub async fn list_templates() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "items": templates() }))).into_response()
}
