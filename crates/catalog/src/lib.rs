//! The agency's offerings as typed, compiled-in data.
//!
//! Pages, services, case studies, pricing and templates live here as static
//! records with lookup functions. Presentation is someone else's problem;
//! this crate is data plus lookups.

pub mod pages;
pub mod portfolio;
pub mod pricing;
pub mod services;
pub mod templates;

pub use pages::{PageMeta, PageSection, page_by_slug, pages};
pub use portfolio::{CaseStudy, case_study_by_slug, portfolio};
pub use pricing::{
    CarePlan, CarePlanTier, Package, PackageTier, UnknownTierError, care_plan_by_tier, care_plans,
    package_by_tier, packages,
};
pub use services::{Service, service_by_slug, services};
pub use templates::{Template, template_by_slug, templates};
