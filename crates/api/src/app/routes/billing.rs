use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use pagecraft_billing::{CheckoutMode, CheckoutRequest, EventKind, WebhookEvent};
use pagecraft_catalog::{CarePlanTier, PackageTier, UnknownTierError};
use pagecraft_core::{CustomerId, UserId};
use pagecraft_identity::{PlanMetadata, PlanStatus};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

/// Signature header on webhook deliveries from the payments provider.
const SIGNATURE_HEADER: &str = "billing-signature";

/// Open a provider-hosted checkout page for a package, care plan, or raw
/// price id. Anonymous buyers go through too; when the caller is signed in,
/// their user id rides along so the completion webhook can route back to
/// the account.
pub async fn create_checkout(
    Extension(services): Extension<Arc<AppServices>>,
    session: Option<Extension<SessionContext>>,
    Json(body): Json<dto::CheckoutRequestBody>,
) -> axum::response::Response {
    let (price_id, mode, tier) = match resolve_checkout(&services, &body) {
        Ok(resolved) => resolved,
        Err(resp) => return resp,
    };

    let session = session.map(|Extension(ctx)| ctx);
    let request = CheckoutRequest {
        price_id,
        mode,
        success_url: services.checkout_success_url.clone(),
        cancel_url: services.checkout_cancel_url.clone(),
        client_reference_id: session.as_ref().map(|s| s.user_id().to_string()),
        customer_email: session.as_ref().map(|s| s.email().to_string()),
        metadata_user_id: session.as_ref().map(|s| s.user_id().to_string()),
        metadata_tier: tier,
    };

    match services.billing.create_checkout_session(&request).await {
        Ok(checkout) => (
            StatusCode::OK,
            Json(json!({ "session_id": checkout.id, "url": checkout.url })),
        )
            .into_response(),
        Err(e) => errors::billing_error_to_response(e),
    }
}

/// Pick the price, mode and tier label from the request body.
///
/// Exactly one of `package`, `care_plan`, `price_id` must be set. Named
/// tiers resolve through the configured price map and fix the mode; a raw
/// price id may state its mode and defaults to a one-time payment.
fn resolve_checkout(
    services: &AppServices,
    body: &dto::CheckoutRequestBody,
) -> Result<(String, CheckoutMode, Option<String>), axum::response::Response> {
    match (&body.price_id, &body.package, &body.care_plan) {
        (None, Some(name), None) => {
            let tier: PackageTier = name.parse().map_err(unknown_tier)?;
            Ok((
                services.prices.package(tier).to_string(),
                CheckoutMode::Payment,
                Some(tier.as_str().to_string()),
            ))
        }
        (None, None, Some(name)) => {
            let tier: CarePlanTier = name.parse().map_err(unknown_tier)?;
            Ok((
                services.prices.care_plan(tier).to_string(),
                CheckoutMode::Subscription,
                Some(tier.as_str().to_string()),
            ))
        }
        (Some(price_id), None, None) => {
            let mode = match body.mode.as_deref() {
                None | Some("payment") => CheckoutMode::Payment,
                Some("subscription") => CheckoutMode::Subscription,
                Some(other) => {
                    return Err(errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "validation_error",
                        format!("unknown checkout mode: {other}"),
                    ));
                }
            };
            Ok((price_id.clone(), mode, None))
        }
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "exactly one of price_id, package, care_plan must be set",
        )),
    }
}

fn unknown_tier(err: UnknownTierError) -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "unknown_tier", err.to_string())
}

/// Open the provider's self-service portal for past payers.
pub async fn create_portal(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let profile = match services.identity.get_user(session.user_id()).await {
        Ok(profile) => profile,
        Err(e) => return errors::identity_error_to_response(e),
    };

    let Some(customer) = profile.billing_customer() else {
        return errors::json_error(
            StatusCode::CONFLICT,
            "no_billing_account",
            "no billing history on this account yet",
        );
    };

    match services
        .billing
        .create_portal_session(customer, &services.portal_return_url)
        .await
    {
        Ok(portal) => (StatusCode::OK, Json(json!({ "url": portal.url }))).into_response(),
        Err(e) => errors::billing_error_to_response(e),
    }
}

/// Receive a signed event from the payments provider.
///
/// The signature covers the raw body, so the body is taken as bytes and
/// parsed only after verification. A failed plan write surfaces as an error
/// status so the provider retries the delivery.
pub async fn webhook(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_signature",
            "missing signature header",
        );
    };

    if let Err(e) = services.webhook_verifier.verify(signature, &body, Utc::now()) {
        tracing::warn!("webhook signature rejected: {e}");
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_signature", e.to_string());
    }

    let event = match WebhookEvent::parse(&body) {
        Ok(event) => event,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_payload", e.to_string());
        }
    };

    match event.kind() {
        EventKind::CheckoutCompleted => checkout_completed(&services, &event).await,
        EventKind::SubscriptionUpdated | EventKind::SubscriptionDeleted => {
            subscription_changed(&services, &event).await
        }
        EventKind::Unhandled => {
            tracing::debug!(event_type = %event.event_type, "ignoring webhook event");
            StatusCode::OK.into_response()
        }
    }
}

async fn checkout_completed(
    services: &AppServices,
    event: &WebhookEvent,
) -> axum::response::Response {
    // The buyer's user id comes back as the client reference or in session
    // metadata. Anonymous checkouts carry neither: acknowledged, not recorded.
    let user_id = event
        .client_reference_id()
        .or_else(|| event.metadata_user_id())
        .and_then(|id| UserId::new(id).ok());

    let Some(user_id) = user_id else {
        tracing::info!(event_id = %event.id, "checkout completed without a user id");
        return StatusCode::OK.into_response();
    };

    let plan = PlanMetadata {
        tier: event.metadata_tier().map(str::to_string),
        status: PlanStatus::Active,
        customer_id: event.customer().and_then(|c| CustomerId::new(c).ok()),
    };

    record_plan(services, &user_id, plan, &event.id).await
}

async fn subscription_changed(
    services: &AppServices,
    event: &WebhookEvent,
) -> axum::response::Response {
    let Some(user_id) = event.metadata_user_id().and_then(|id| UserId::new(id).ok()) else {
        tracing::info!(event_id = %event.id, "subscription event without a user id");
        return StatusCode::OK.into_response();
    };

    let status = match event.kind() {
        EventKind::SubscriptionDeleted => PlanStatus::Canceled,
        _ => match event.subscription_status() {
            Some("canceled") => PlanStatus::Canceled,
            _ => PlanStatus::Active,
        },
    };

    let plan = PlanMetadata {
        tier: event.metadata_tier().map(str::to_string),
        status,
        customer_id: event.customer().and_then(|c| CustomerId::new(c).ok()),
    };

    record_plan(services, &user_id, plan, &event.id).await
}

async fn record_plan(
    services: &AppServices,
    user_id: &UserId,
    plan: PlanMetadata,
    event_id: &str,
) -> axum::response::Response {
    if let Err(e) = services.identity.update_plan(user_id, &plan).await {
        return errors::identity_error_to_response(e);
    }
    tracing::info!(event_id, user = %user_id, "plan metadata updated");
    StatusCode::OK.into_response()
}
