//! Thin client for the hosted payments provider.
//!
//! Three concerns live here: creating checkout sessions, creating
//! self-service portal sessions, and verifying webhook signatures. Payment
//! state itself stays with the provider; nothing is mirrored locally.

pub mod client;
pub mod events;
pub mod webhook;

pub use client::{
    BillingClient, BillingError, CheckoutMode, CheckoutRequest, CheckoutSession, PortalSession,
};
pub use events::{EventKind, WebhookEvent};
pub use webhook::{SignatureError, WebhookVerifier};
