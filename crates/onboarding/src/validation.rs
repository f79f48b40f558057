//! Per-step completeness rules.
//!
//! `advance()` runs the current step's rule before moving on; `submit()` runs
//! them all. Messages are written for end users, not logs.

use thiserror::Error;

use crate::state::OnboardingState;
use crate::steps::WizardStep;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check the completeness rule for one step.
///
/// The Review step is complete exactly when every prior step is.
pub fn validate_step(state: &OnboardingState, step: WizardStep) -> Result<(), ValidationError> {
    match step {
        WizardStep::Plan => {
            if state.plan.is_none() {
                return Err(ValidationError {
                    field: "plan",
                    message: "select a package, a care plan or a custom project",
                });
            }
            Ok(())
        }
        WizardStep::Business => {
            if state.business.company_name.trim().is_empty() {
                return Err(ValidationError {
                    field: "business.company_name",
                    message: "company name is required",
                });
            }
            if state.business.primary_goal.trim().is_empty() {
                return Err(ValidationError {
                    field: "business.primary_goal",
                    message: "tell us what the site should achieve",
                });
            }
            Ok(())
        }
        WizardStep::Domain => {
            if state.domain.register_new && state.domain.domain_name.trim().is_empty() {
                return Err(ValidationError {
                    field: "domain.domain_name",
                    message: "a desired domain name is required to register one",
                });
            }
            Ok(())
        }
        WizardStep::Assets => {
            for asset in &state.assets {
                if asset.file_name.trim().is_empty() {
                    return Err(ValidationError {
                        field: "assets.file_name",
                        message: "every asset needs a file name",
                    });
                }
                if asset.size_bytes == 0 {
                    return Err(ValidationError {
                        field: "assets.size_bytes",
                        message: "empty uploads are not accepted",
                    });
                }
            }
            Ok(())
        }
        WizardStep::Contact => {
            if !plausible_email(state.contact.email.trim()) {
                return Err(ValidationError {
                    field: "contact.email",
                    message: "a valid email address is required",
                });
            }
            Ok(())
        }
        WizardStep::Review => validate_complete(state),
    }
}

/// Check every step's rule; used by `submit()` and by server-side intake.
pub fn validate_complete(state: &OnboardingState) -> Result<(), ValidationError> {
    for step in &WizardStep::ORDER[..WizardStep::ORDER.len() - 1] {
        validate_step(state, *step)?;
    }
    Ok(())
}

/// `x@y.z` shape check. Deliberately not a full RFC 5322 parse.
pub fn plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || domain.contains("..") {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
