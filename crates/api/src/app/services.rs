use std::{
    collections::HashMap,
    sync::Mutex,
};

use chrono::{DateTime, Utc};

use pagecraft_billing::{BillingClient, WebhookVerifier};
use pagecraft_core::{BriefId, InquiryId, UserId};
use pagecraft_identity::IdentityClient;
use pagecraft_onboarding::ProjectBrief;

use crate::config::{ApiConfig, PriceMap};

/// A contact-form message awaiting a human reply.
#[derive(Debug, Clone)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// A submitted brief plus whoever submitted it.
///
/// `owner` is set when a session accompanied the submission; anonymous
/// briefs are claimable through their contact email.
#[derive(Debug, Clone)]
pub struct StoredBrief {
    pub brief: ProjectBrief,
    pub owner: Option<UserId>,
}

impl StoredBrief {
    /// Whether the given session may read this brief.
    pub fn owned_by(&self, user_id: &UserId, email: &str) -> bool {
        match &self.owner {
            Some(owner) => owner == user_id,
            None => self.brief.contact.email.eq_ignore_ascii_case(email),
        }
    }
}

/// Shared service wiring: provider clients plus the in-memory stores.
///
/// Briefs and inquiries have no lifecycle beyond "hold until a human picks
/// them up", so plain mutex-guarded maps stand in for a database.
pub struct AppServices {
    pub billing: BillingClient,
    pub identity: IdentityClient,
    pub webhook_verifier: WebhookVerifier,
    pub prices: PriceMap,
    pub checkout_success_url: String,
    pub checkout_cancel_url: String,
    pub portal_return_url: String,

    briefs: Mutex<HashMap<BriefId, StoredBrief>>,
    inquiries: Mutex<Vec<(InquiryId, ContactInquiry)>>,
}

impl AppServices {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            billing: BillingClient::new(&config.billing_api_base, &config.billing_secret_key),
            identity: IdentityClient::new(&config.identity_api_base, &config.identity_secret_key),
            webhook_verifier: WebhookVerifier::new(&config.billing_webhook_secret),
            prices: config.prices.clone(),
            checkout_success_url: config.checkout_success_url.clone(),
            checkout_cancel_url: config.checkout_cancel_url.clone(),
            portal_return_url: config.portal_return_url.clone(),
            briefs: Mutex::new(HashMap::new()),
            inquiries: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_brief(&self, brief: ProjectBrief, owner: Option<UserId>) -> BriefId {
        let id = brief.id;
        self.briefs
            .lock()
            .unwrap()
            .insert(id, StoredBrief { brief, owner });
        id
    }

    pub fn brief(&self, id: &BriefId) -> Option<StoredBrief> {
        self.briefs.lock().unwrap().get(id).cloned()
    }

    /// All briefs the session may read, newest first.
    pub fn briefs_for(&self, user_id: &UserId, email: &str) -> Vec<ProjectBrief> {
        let mut briefs: Vec<ProjectBrief> = self
            .briefs
            .lock()
            .unwrap()
            .values()
            .filter(|stored| stored.owned_by(user_id, email))
            .map(|stored| stored.brief.clone())
            .collect();
        briefs.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        briefs
    }

    pub fn record_inquiry(&self, inquiry: ContactInquiry) -> InquiryId {
        let id = InquiryId::new();
        self.inquiries.lock().unwrap().push((id, inquiry));
        id
    }
}
