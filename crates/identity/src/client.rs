use serde_json::json;
use thiserror::Error;

use pagecraft_core::UserId;

use crate::profile::{PlanMetadata, UserProfile};

/// Client for the identity provider's backend REST API.
///
/// The base URL is configurable so tests can point it at a stub server.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Http(String),

    #[error("identity provider rejected the request: {message}")]
    Api { status: u16, message: String },

    #[error("identity provider response could not be decoded: {0}")]
    Decode(String),
}

impl IdentityClient {
    pub fn new(api_base: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            secret_key: secret_key.into(),
        }
    }

    /// GET `/v1/users/{id}`.
    pub async fn get_user(&self, id: &UserId) -> Result<UserProfile, IdentityError> {
        let resp = self
            .http
            .get(format!("{}/v1/users/{}", self.api_base, id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| IdentityError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IdentityError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        resp.json::<UserProfile>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }

    /// PATCH `/v1/users/{id}/metadata` with the new plan entry.
    ///
    /// The provider merges `public_metadata` keys, so only `plan` is sent.
    pub async fn update_plan(
        &self,
        id: &UserId,
        plan: &PlanMetadata,
    ) -> Result<(), IdentityError> {
        let body = json!({ "public_metadata": { "plan": plan } });

        let resp = self
            .http
            .patch(format!("{}/v1/users/{}/metadata", self.api_base, id))
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IdentityError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}
