//! The multi-step project intake wizard.
//!
//! The wizard walks a prospective client through plan selection, business
//! details, domain choices, asset uploads and contact preferences, persisting
//! the whole bag locally after every change so an interrupted session resumes
//! where it left off. Submitting produces an immutable [`ProjectBrief`] for
//! handoff and clears the saved state.

pub mod state;
pub mod steps;
pub mod store;
pub mod validation;
pub mod wizard;

pub use state::{
    AssetUpload, BusinessProfile, ContactChannel, ContactPreferences, DomainChoice,
    OnboardingState, PlanSelection, ProjectBrief,
};
pub use steps::WizardStep;
pub use store::{MemoryStore, STORAGE_KEY, SqliteStore, StateStore, StoreError};
pub use validation::ValidationError;
pub use wizard::{Wizard, WizardError};
