use serde::{Deserialize, Serialize};

/// The fixed, linear wizard step order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Plan,
    Business,
    Domain,
    Assets,
    Contact,
    Review,
}

impl WizardStep {
    pub const ORDER: [WizardStep; 6] = [
        WizardStep::Plan,
        WizardStep::Business,
        WizardStep::Domain,
        WizardStep::Assets,
        WizardStep::Contact,
        WizardStep::Review,
    ];

    /// The following step. Saturates at the last step.
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Plan => WizardStep::Business,
            WizardStep::Business => WizardStep::Domain,
            WizardStep::Domain => WizardStep::Assets,
            WizardStep::Assets => WizardStep::Contact,
            WizardStep::Contact => WizardStep::Review,
            WizardStep::Review => WizardStep::Review,
        }
    }

    /// The preceding step. Saturates at the first step.
    pub fn back(self) -> WizardStep {
        match self {
            WizardStep::Plan => WizardStep::Plan,
            WizardStep::Business => WizardStep::Plan,
            WizardStep::Domain => WizardStep::Business,
            WizardStep::Assets => WizardStep::Domain,
            WizardStep::Contact => WizardStep::Assets,
            WizardStep::Review => WizardStep::Contact,
        }
    }

    /// Zero-based position in [`Self::ORDER`].
    pub fn index(self) -> usize {
        match self {
            WizardStep::Plan => 0,
            WizardStep::Business => 1,
            WizardStep::Domain => 2,
            WizardStep::Assets => 3,
            WizardStep::Contact => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::Plan
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Review
    }
}
