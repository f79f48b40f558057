use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{SessionClaims, TokenValidationError, validate_claims};

/// Verifies a bearer token and returns the session claims it carries.
///
/// Implementations must be deterministic given `now` so the time-window rules
/// stay testable without a clock.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>)
    -> Result<SessionClaims, TokenValidationError>;
}

/// HS256 verifier for session tokens signed with a shared secret.
pub struct Hs256Verifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256Verifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks run through `validate_claims` instead, so they
        // take an explicit `now`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenVerifier for Hs256Verifier {
    fn verify(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenValidationError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| TokenValidationError::Malformed(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};
    use pagecraft_core::UserId;
    use std::str::FromStr;

    fn mint(secret: &str, iat: DateTime<Utc>, exp: DateTime<Utc>) -> String {
        let claims = SessionClaims {
            sub: UserId::from_str("user_2x9aFn").unwrap(),
            email: "client@example.com".to_string(),
            iat,
            exp,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_a_valid_token() {
        let now = Utc::now();
        let token = mint("s3cret", now - Duration::minutes(1), now + Duration::minutes(10));

        let verifier = Hs256Verifier::new(b"s3cret");
        let claims = verifier.verify(&token, now).unwrap();
        assert_eq!(claims.email, "client@example.com");
        assert_eq!(claims.sub.as_str(), "user_2x9aFn");
    }

    #[test]
    fn rejects_wrong_secret() {
        let now = Utc::now();
        let token = mint("s3cret", now - Duration::minutes(1), now + Duration::minutes(10));

        let verifier = Hs256Verifier::new(b"other-secret");
        match verifier.verify(&token, now) {
            Err(TokenValidationError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_tampered_token() {
        let now = Utc::now();
        let mut token = mint("s3cret", now - Duration::minutes(1), now + Duration::minutes(10));
        // Flip a payload character.
        let mid = token.len() / 2;
        let replacement = if token.as_bytes()[mid] == b'A' { "B" } else { "A" };
        token.replace_range(mid..mid + 1, replacement);

        let verifier = Hs256Verifier::new(b"s3cret");
        assert!(verifier.verify(&token, now).is_err());
    }

    #[test]
    fn rejects_expired_token_via_claims_window() {
        let now = Utc::now();
        let token = mint("s3cret", now - Duration::hours(2), now - Duration::hours(1));

        let verifier = Hs256Verifier::new(b"s3cret");
        assert_eq!(
            verifier.verify(&token, now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_garbage_input() {
        let verifier = Hs256Verifier::new(b"s3cret");
        assert!(verifier.verify("not-a-jwt", Utc::now()).is_err());
    }
}
