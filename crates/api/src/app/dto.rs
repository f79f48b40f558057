use serde::Deserialize;

/// POST `/contact` body.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST `/billing/checkout` body.
///
/// Exactly one of `price_id`, `package`, `care_plan` picks what to buy.
/// `mode` applies to raw `price_id` requests only; named tiers imply it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutRequestBody {
    pub price_id: Option<String>,
    pub package: Option<String>,
    pub care_plan: Option<String>,
    pub mode: Option<String>,
}
