use serde::{Deserialize, Serialize};

use pagecraft_core::{CustomerId, UserId};

/// The slice of the provider's user object we read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub public_metadata: ProfileMetadata,
}

/// Public metadata we maintain on the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMetadata {
    pub plan: Option<PlanMetadata>,
}

/// The plan entry billing webhooks keep current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Package or care-plan tier name; absent for raw price-id checkouts.
    pub tier: Option<String>,
    pub status: PlanStatus,
    /// The billing provider's customer id, once a payment created one.
    pub customer_id: Option<CustomerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Canceled,
}

impl UserProfile {
    /// A user is previously paying exactly when their plan metadata carries
    /// a billing customer id.
    pub fn billing_customer(&self) -> Option<&CustomerId> {
        self.public_metadata
            .plan
            .as_ref()
            .and_then(|plan| plan.customer_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn profile_without_metadata_deserializes() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"user_2x9aFn","email":"kim@fernwood.example"}"#)
                .unwrap();
        assert_eq!(profile.public_metadata.plan, None);
        assert_eq!(profile.billing_customer(), None);
    }

    #[test]
    fn billing_customer_requires_a_customer_id() {
        let mut profile = UserProfile {
            id: UserId::from_str("user_2x9aFn").unwrap(),
            email: "kim@fernwood.example".to_string(),
            public_metadata: ProfileMetadata {
                plan: Some(PlanMetadata {
                    tier: Some("essential".to_string()),
                    status: PlanStatus::Active,
                    customer_id: None,
                }),
            },
        };
        assert_eq!(profile.billing_customer(), None);

        let cus = CustomerId::from_str("cus_OkT3").unwrap();
        if let Some(plan) = profile.public_metadata.plan.as_mut() {
            plan.customer_id = Some(cus.clone());
        }
        assert_eq!(profile.billing_customer(), Some(&cus));
    }

    #[test]
    fn plan_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PlanStatus::Canceled).unwrap(),
            serde_json::json!("canceled")
        );
    }
}
