use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pagecraft_core::UserId;

/// Session claims model (transport-agnostic).
///
/// This is the minimal set of claims the portal expects once a session token
/// has been decoded/verified by whatever transport/security layer is in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the identity-provider user id.
    pub sub: UserId,

    /// Primary email address attached to the session.
    pub email: String,

    /// Issued-at timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("malformed token: {0}")]
    Malformed(String),
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::verifier`].
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    fn claims_at(iat: DateTime<Utc>, exp: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: UserId::from_str("user_2x9aFn").unwrap(),
            email: "client@example.com".to_string(),
            iat,
            exp,
        }
    }

    #[test]
    fn accepts_token_inside_window() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(1), now + Duration::minutes(10));
        assert_eq!(validate_claims(&claims, now), Ok(()));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(20), now - Duration::minutes(10));
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_token_issued_in_the_future() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::minutes(5), now + Duration::minutes(15));
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn rejects_inverted_time_window() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::minutes(10), now - Duration::minutes(10));
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(10), now);
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn claims_round_trip_as_numeric_timestamps() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(1), now + Duration::minutes(10));
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json["iat"].is_i64());
        assert!(json["exp"].is_i64());
        let back: SessionClaims = serde_json::from_value(json).unwrap();
        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.email, claims.email);
    }
}
