use serde::Deserialize;
use serde_json::Value;

/// A webhook delivery envelope: `{ id, type, data.object }`.
///
/// `data.object` stays a raw JSON value; the accessors below pull out the
/// handful of fields the webhook route acts on, so unrelated provider fields
/// never break deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub object: Value,
}

/// The event types the webhook route branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CheckoutCompleted,
    SubscriptionUpdated,
    SubscriptionDeleted,
    Unhandled,
}

impl WebhookEvent {
    pub fn parse(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    pub fn kind(&self) -> EventKind {
        match self.event_type.as_str() {
            "checkout.session.completed" => EventKind::CheckoutCompleted,
            "customer.subscription.updated" => EventKind::SubscriptionUpdated,
            "customer.subscription.deleted" => EventKind::SubscriptionDeleted,
            _ => EventKind::Unhandled,
        }
    }

    /// Our user id, echoed back from checkout session creation.
    pub fn client_reference_id(&self) -> Option<&str> {
        self.data
            .object
            .get("client_reference_id")
            .and_then(Value::as_str)
    }

    /// The provider's customer id attached to the object.
    pub fn customer(&self) -> Option<&str> {
        self.data.object.get("customer").and_then(Value::as_str)
    }

    pub fn metadata_user_id(&self) -> Option<&str> {
        self.metadata_field("user_id")
    }

    pub fn metadata_tier(&self) -> Option<&str> {
        self.metadata_field("tier")
    }

    /// Subscription status (`active`, `canceled`, ...), present on
    /// subscription objects.
    pub fn subscription_status(&self) -> Option<&str> {
        self.data.object.get("status").and_then(Value::as_str)
    }

    fn metadata_field(&self, key: &str) -> Option<&str> {
        self.data
            .object
            .get("metadata")
            .and_then(|m| m.get(key))
            .and_then(Value::as_str)
    }
}
