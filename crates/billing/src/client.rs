use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use pagecraft_core::CustomerId;

/// Client for the payments provider's REST API.
///
/// The base URL is configurable so tests can point it at a stub server.
#[derive(Debug, Clone)]
pub struct BillingClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-time payment (project packages, templates).
    Payment,
    /// Recurring subscription (care plans).
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// Everything needed to open a provider-hosted checkout page.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,
    /// Our user id, when the buyer was signed in.
    pub client_reference_id: Option<String>,
    pub customer_email: Option<String>,
    /// Copied onto the session so webhooks can route without a lookup.
    pub metadata_user_id: Option<String>,
    pub metadata_tier: Option<String>,
}

/// The slice of the provider's checkout session object we use.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Provider-hosted page to redirect the buyer to.
    pub url: String,
}

/// The slice of the provider's portal session object we use.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("billing provider request failed: {0}")]
    Http(String),

    #[error("billing provider rejected the request: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("billing provider response could not be decoded: {0}")]
    Decode(String),
}

/// Provider error envelope: `{ "error": { "message", "type", "code" } }`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: Option<String>,
    code: Option<String>,
}

impl BillingClient {
    pub fn new(api_base: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            secret_key: secret_key.into(),
        }
    }

    /// POST `/v1/checkout/sessions` with a single line item.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, BillingError> {
        let form = checkout_form(request);

        let resp = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| BillingError::Http(e.to_string()))?;

        decode(resp).await
    }

    /// POST `/v1/billing_portal/sessions` for an existing customer.
    pub async fn create_portal_session(
        &self,
        customer_id: &CustomerId,
        return_url: &str,
    ) -> Result<PortalSession, BillingError> {
        let form = [("customer", customer_id.as_str()), ("return_url", return_url)];

        let resp = self
            .http
            .post(format!("{}/v1/billing_portal/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| BillingError::Http(e.to_string()))?;

        decode(resp).await
    }
}

/// The provider expects form encoding, with bracketed keys for nesting.
fn checkout_form(request: &CheckoutRequest) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("mode", request.mode.as_str().to_string()),
        ("line_items[0][price]", request.price_id.clone()),
        ("line_items[0][quantity]", "1".to_string()),
        ("success_url", request.success_url.clone()),
        ("cancel_url", request.cancel_url.clone()),
    ];

    if let Some(id) = &request.client_reference_id {
        form.push(("client_reference_id", id.clone()));
    }
    if let Some(email) = &request.customer_email {
        form.push(("customer_email", email.clone()));
    }
    if let Some(user_id) = &request.metadata_user_id {
        form.push(("metadata[user_id]", user_id.clone()));
    }
    if let Some(tier) = &request.metadata_tier {
        form.push(("metadata[tier]", tier.clone()));
    }

    form
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BillingError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(error_from_response(status.as_u16(), resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| BillingError::Decode(e.to_string()))
}

async fn error_from_response(status: u16, resp: reqwest::Response) -> BillingError {
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => BillingError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message.unwrap_or(body),
        },
        Err(_) => BillingError::Api {
            status,
            code: None,
            message: body,
        },
    }
}
