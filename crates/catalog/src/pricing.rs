use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One-time project package tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Starter,
    Business,
    Commerce,
}

/// Monthly care-plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarePlanTier {
    Essential,
    Priority,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tier: {0}")]
pub struct UnknownTierError(pub String);

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [
        PackageTier::Starter,
        PackageTier::Business,
        PackageTier::Commerce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Starter => "starter",
            PackageTier::Business => "business",
            PackageTier::Commerce => "commerce",
        }
    }
}

impl CarePlanTier {
    pub const ALL: [CarePlanTier; 2] = [CarePlanTier::Essential, CarePlanTier::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarePlanTier::Essential => "essential",
            CarePlanTier::Priority => "priority",
        }
    }
}

impl core::fmt::Display for PackageTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for CarePlanTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTier {
    type Err = UnknownTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageTier::ALL
            .into_iter()
            .find(|t| s.eq_ignore_ascii_case(t.as_str()))
            .ok_or_else(|| UnknownTierError(s.to_string()))
    }
}

impl FromStr for CarePlanTier {
    type Err = UnknownTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarePlanTier::ALL
            .into_iter()
            .find(|t| s.eq_ignore_ascii_case(t.as_str()))
            .ok_or_else(|| UnknownTierError(s.to_string()))
    }
}

/// A fixed-price project package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub tier: PackageTier,
    pub name: &'static str,
    /// One-time price in smallest currency unit (e.g., cents).
    pub amount: u64,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

/// A monthly care-plan subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarePlan {
    pub tier: CarePlanTier,
    pub name: &'static str,
    /// Monthly price in smallest currency unit (e.g., cents).
    pub monthly_amount: u64,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

const PACKAGES: &[Package] = &[
    Package {
        tier: PackageTier::Starter,
        name: "Starter",
        amount: 150_000,
        summary: "A focused five-page site for businesses getting online properly.",
        features: &[
            "Up to five custom-designed pages",
            "Contact form and map",
            "Launch on managed hosting",
        ],
    },
    Package {
        tier: PackageTier::Business,
        name: "Business",
        amount: 350_000,
        summary: "A larger site with search foundations and content tooling.",
        features: &[
            "Up to twelve pages",
            "Technical SEO setup",
            "Editable content sections",
            "Two rounds of design revisions",
        ],
    },
    Package {
        tier: PackageTier::Commerce,
        name: "Commerce",
        amount: 750_000,
        summary: "A full online store with checkout, taxes and order flows.",
        features: &[
            "Product catalog and collections",
            "Checkout, taxes and shipping rules",
            "Order notifications",
            "Store-manager training",
        ],
    },
];

const CARE_PLANS: &[CarePlan] = &[
    CarePlan {
        tier: CarePlanTier::Essential,
        name: "Essential care",
        monthly_amount: 4_900,
        summary: "Keep the lights on: updates, backups and monitoring.",
        features: &[
            "Platform and dependency updates",
            "Daily backups",
            "Uptime monitoring",
        ],
    },
    CarePlan {
        tier: CarePlanTier::Priority,
        name: "Priority care",
        monthly_amount: 14_900,
        summary: "Everything in Essential plus a monthly budget of change requests.",
        features: &[
            "Everything in Essential care",
            "Two hours of content changes per month",
            "Same-business-day response",
        ],
    },
];

/// All project packages, cheapest first.
pub fn packages() -> &'static [Package] {
    PACKAGES
}

pub fn package_by_tier(tier: PackageTier) -> &'static Package {
    match tier {
        PackageTier::Starter => &PACKAGES[0],
        PackageTier::Business => &PACKAGES[1],
        PackageTier::Commerce => &PACKAGES[2],
    }
}

/// All care plans, cheapest first.
pub fn care_plans() -> &'static [CarePlan] {
    CARE_PLANS
}

pub fn care_plan_by_tier(tier: CarePlanTier) -> &'static CarePlan {
    match tier {
        CarePlanTier::Essential => &CARE_PLANS[0],
        CarePlanTier::Priority => &CARE_PLANS[1],
    }
}
