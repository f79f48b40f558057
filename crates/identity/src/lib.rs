//! Client for the hosted identity provider.
//!
//! Sign-up, sign-in and session minting all happen on the provider's side.
//! This crate reads user profiles and performs the one write we need: the
//! `plan` entry in a user's public metadata, kept current by billing
//! webhooks.

pub mod client;
pub mod profile;

pub use client::{IdentityClient, IdentityError};
pub use profile::{PlanMetadata, PlanStatus, ProfileMetadata, UserProfile};
