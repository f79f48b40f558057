//! Process configuration, read from the environment with dev defaults.

use pagecraft_catalog::{CarePlanTier, PackageTier};

/// Everything the server needs to run.
///
/// Tests construct this directly with stub-server base URLs; `from_env` is
/// the production path.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,

    /// Shared secret the identity provider signs session JWTs with.
    pub session_jwt_secret: String,

    pub billing_api_base: String,
    pub billing_secret_key: String,
    pub billing_webhook_secret: String,

    pub identity_api_base: String,
    pub identity_secret_key: String,

    pub checkout_success_url: String,
    pub checkout_cancel_url: String,
    pub portal_return_url: String,

    pub prices: PriceMap,
}

/// Provider price ids for the named tiers.
#[derive(Debug, Clone)]
pub struct PriceMap {
    starter: String,
    business: String,
    commerce: String,
    essential: String,
    priority: String,
}

impl PriceMap {
    pub fn new(
        starter: impl Into<String>,
        business: impl Into<String>,
        commerce: impl Into<String>,
        essential: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            starter: starter.into(),
            business: business.into(),
            commerce: commerce.into(),
            essential: essential.into(),
            priority: priority.into(),
        }
    }

    pub fn package(&self, tier: PackageTier) -> &str {
        match tier {
            PackageTier::Starter => &self.starter,
            PackageTier::Business => &self.business,
            PackageTier::Commerce => &self.commerce,
        }
    }

    pub fn care_plan(&self, tier: CarePlanTier) -> &str {
        match tier {
            CarePlanTier::Essential => &self.essential,
            CarePlanTier::Priority => &self.priority,
        }
    }

    fn from_env() -> Self {
        Self::new(
            env_or("PRICE_ID_STARTER", "price_dev_starter"),
            env_or("PRICE_ID_BUSINESS", "price_dev_business"),
            env_or("PRICE_ID_COMMERCE", "price_dev_commerce"),
            env_or("PRICE_ID_ESSENTIAL", "price_dev_essential"),
            env_or("PRICE_ID_PRIORITY", "price_dev_priority"),
        )
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            session_jwt_secret: secret_or_dev("SESSION_JWT_SECRET", "dev-secret"),
            billing_api_base: env_or("BILLING_API_BASE", "https://api.stripe.com"),
            billing_secret_key: secret_or_dev("BILLING_SECRET_KEY", "sk_test_dev"),
            billing_webhook_secret: secret_or_dev("BILLING_WEBHOOK_SECRET", "whsec_dev"),
            identity_api_base: env_or("IDENTITY_API_BASE", "https://api.clerk.com"),
            identity_secret_key: secret_or_dev("IDENTITY_SECRET_KEY", "sk_id_dev"),
            checkout_success_url: env_or(
                "CHECKOUT_SUCCESS_URL",
                "http://localhost:3000/onboarding/thanks",
            ),
            checkout_cancel_url: env_or("CHECKOUT_CANCEL_URL", "http://localhost:3000/pricing"),
            portal_return_url: env_or("PORTAL_RETURN_URL", "http://localhost:3000/portal"),
            prices: PriceMap::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn secret_or_dev(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!("{name} not set; using insecure dev default");
        default.to_string()
    })
}
