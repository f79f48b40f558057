use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pagecraft_catalog::{CarePlanTier, PackageTier};
use pagecraft_core::BriefId;

use crate::steps::WizardStep;
use crate::validation::{self, ValidationError};

/// What the client wants to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanSelection {
    /// A one-time project package.
    Package { tier: PackageTier },
    /// A monthly care-plan subscription.
    CarePlan { tier: CarePlanTier },
    /// Quote-first project; pricing settled after a call.
    Custom,
}

/// Who the client is and what the site is for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub company_name: String,
    pub industry: String,
    /// One-paragraph elevator pitch.
    pub pitch: String,
    /// Existing site, if any.
    pub current_site_url: String,
    /// What the new site must achieve (leads, bookings, sales, ...).
    pub primary_goal: String,
}

/// Domain situation: bring one, or have the agency register one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainChoice {
    pub has_domain: bool,
    /// The existing or desired name, e.g. `example.com`.
    pub domain_name: String,
    /// Whether the agency should register `domain_name`.
    pub register_new: bool,
}

/// Metadata for one uploaded asset. File bodies are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    #[default]
    Email,
    Phone,
}

/// How and when to reach the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPreferences {
    pub email: String,
    pub phone: String,
    pub preferred_channel: ContactChannel,
    /// Free-text note on acceptable contact hours.
    pub hours_note: String,
}

/// The whole wizard bag. Persisted wholesale after every change.
///
/// Every field is serde-defaulted so blobs written by older clients keep
/// deserializing after fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingState {
    pub step: WizardStep,
    pub plan: Option<PlanSelection>,
    pub business: BusinessProfile,
    pub domain: DomainChoice,
    pub assets: Vec<AssetUpload>,
    pub contact: ContactPreferences,
    pub updated_at: DateTime<Utc>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: WizardStep::default(),
            plan: None,
            business: BusinessProfile::default(),
            domain: DomainChoice::default(),
            assets: Vec::new(),
            contact: ContactPreferences::default(),
            updated_at: Utc::now(),
        }
    }
}

impl OnboardingState {
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// The immutable intake record produced by submitting a complete wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBrief {
    pub id: BriefId,
    pub plan: PlanSelection,
    pub business: BusinessProfile,
    pub domain: DomainChoice,
    pub assets: Vec<AssetUpload>,
    pub contact: ContactPreferences,
    pub submitted_at: DateTime<Utc>,
}

impl ProjectBrief {
    /// Build the handoff record from a bag, validating it in full first.
    pub fn from_state(state: OnboardingState) -> Result<Self, ValidationError> {
        validation::validate_complete(&state)?;

        let plan = state.plan.ok_or(ValidationError {
            field: "plan",
            message: "a plan must be selected",
        })?;

        Ok(Self {
            id: BriefId::new(),
            plan,
            business: state.business,
            domain: state.domain,
            assets: state.assets,
            contact: state.contact,
            submitted_at: Utc::now(),
        })
    }
}
