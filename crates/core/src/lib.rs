//! `pagecraft-core` — shared identifiers and the domain error model.
//!
//! This crate contains **pure domain** primitives (no HTTP, no providers).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{BriefId, CustomerId, InquiryId, UserId};
