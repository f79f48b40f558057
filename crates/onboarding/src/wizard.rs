use thiserror::Error;
use tracing::warn;

use crate::state::{
    AssetUpload, BusinessProfile, ContactPreferences, DomainChoice, OnboardingState,
    PlanSelection, ProjectBrief,
};
use crate::steps::WizardStep;
use crate::store::{STORAGE_KEY, StateStore, StoreError};
use crate::validation::{self, ValidationError};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("step incomplete: {0}")]
    Incomplete(#[from] ValidationError),
}

/// An [`OnboardingState`] bag plus the store it persists to.
///
/// Every mutating call serializes the whole bag before returning, so the
/// saved blob is never ahead of or behind the in-memory state by more than
/// the one change in flight.
pub struct Wizard<S: StateStore> {
    state: OnboardingState,
    store: S,
}

impl<S: StateStore> Wizard<S> {
    /// Restore saved state, or start fresh when none is readable.
    ///
    /// An unreadable blob is logged and replaced; resuming never fails on
    /// whatever a previous session left behind.
    pub async fn resume(store: S) -> Result<Self, StoreError> {
        let state = match store.load(STORAGE_KEY).await? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(state) => state,
                Err(err) => {
                    warn!("discarding unreadable onboarding state: {err}");
                    OnboardingState::default()
                }
            },
            None => OnboardingState::default(),
        };

        Ok(Self { state, store })
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub async fn select_plan(&mut self, plan: PlanSelection) -> Result<(), StoreError> {
        self.mutate(|s| s.plan = Some(plan)).await
    }

    pub async fn set_business_profile(
        &mut self,
        business: BusinessProfile,
    ) -> Result<(), StoreError> {
        self.mutate(|s| s.business = business).await
    }

    pub async fn set_domain_choice(&mut self, domain: DomainChoice) -> Result<(), StoreError> {
        self.mutate(|s| s.domain = domain).await
    }

    pub async fn add_asset(&mut self, asset: AssetUpload) -> Result<(), StoreError> {
        self.mutate(|s| s.assets.push(asset)).await
    }

    /// Remove the asset at `index`. Out-of-range indexes are ignored.
    pub async fn remove_asset(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.state.assets.len() {
            return Ok(());
        }
        self.mutate(|s| {
            s.assets.remove(index);
        })
        .await
    }

    pub async fn set_contact_preferences(
        &mut self,
        contact: ContactPreferences,
    ) -> Result<(), StoreError> {
        self.mutate(|s| s.contact = contact).await
    }

    /// Move to the next step if the current one is complete.
    ///
    /// On the last step this is a persisted no-op returning the same step.
    pub async fn advance(&mut self) -> Result<WizardStep, WizardError> {
        validation::validate_step(&self.state, self.state.step)?;
        self.mutate(|s| s.step = s.step.next()).await?;
        Ok(self.state.step)
    }

    /// Move to the previous step. Always allowed; saturates at the first.
    pub async fn back(&mut self) -> Result<WizardStep, StoreError> {
        self.mutate(|s| s.step = s.step.back()).await?;
        Ok(self.state.step)
    }

    /// Validate the complete bag, hand back the brief, and wipe the blob.
    pub async fn submit(&mut self) -> Result<ProjectBrief, WizardError> {
        let brief = ProjectBrief::from_state(self.state.clone())?;

        self.store
            .clear(STORAGE_KEY)
            .await
            .map_err(WizardError::Store)?;
        self.state = OnboardingState::default();

        Ok(brief)
    }

    /// Wipe the blob and reset to defaults without producing a brief.
    pub async fn discard(&mut self) -> Result<(), StoreError> {
        self.store.clear(STORAGE_KEY).await?;
        self.state = OnboardingState::default();
        Ok(())
    }

    async fn mutate(&mut self, f: impl FnOnce(&mut OnboardingState)) -> Result<(), StoreError> {
        f(&mut self.state);
        self.state.touch();
        self.persist().await
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(&self.state).map_err(|e| StoreError::Codec(e.to_string()))?;
        self.store.save(STORAGE_KEY, &blob).await
    }
}
