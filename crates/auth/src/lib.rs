//! `pagecraft-auth` — session-token verification for the client portal.
//!
//! This crate is intentionally decoupled from HTTP and storage. The portal
//! trusts the hosted identity provider to run sign-up/sign-in; what arrives
//! here is the session token it minted.

pub mod claims;
pub mod verifier;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use verifier::{Hs256Verifier, TokenVerifier};
