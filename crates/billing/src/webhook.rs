use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Default tolerated clock skew between the provider and us, in seconds.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("malformed signature header")]
    MalformedHeader,

    #[error("signature timestamp outside tolerance")]
    StaleTimestamp,

    #[error("no signature matched the payload")]
    NoMatch,

    #[error("verifier key is unusable")]
    BadKey,
}

/// Verifies the provider's webhook signature header.
///
/// Header format: `t=<unix>,v1=<hex>[,v1=<hex>...]`. The signed payload is
/// `"{t}.{raw_body}"`. Any matching `v1` entry passes; entries under other
/// schemes are ignored. Verification is constant-time per candidate.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
    tolerance_secs: i64,
}

impl WebhookVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_tolerance(secret, DEFAULT_TOLERANCE_SECS)
    }

    pub fn with_tolerance(secret: impl AsRef<[u8]>, tolerance_secs: i64) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            tolerance_secs,
        }
    }

    /// Verify `header` against the raw request body at time `now`.
    ///
    /// `now` is passed in so tolerance behavior stays testable.
    pub fn verify(
        &self,
        header: &str,
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> Result<(), SignatureError> {
        let parsed = parse_header(header)?;

        // A stale timestamp fails even with a valid MAC: replayed deliveries
        // are rejected before any comparison happens.
        if (now.timestamp() - parsed.timestamp).abs() > self.tolerance_secs {
            return Err(SignatureError::StaleTimestamp);
        }

        let timestamp = parsed.timestamp.to_string();
        for candidate in &parsed.signatures {
            let mut mac = HmacSha256::new_from_slice(&self.secret)
                .map_err(|_| SignatureError::BadKey)?;
            mac.update(timestamp.as_bytes());
            mac.update(b".");
            mac.update(payload);

            if mac.verify_slice(candidate).is_ok() {
                return Ok(());
            }
        }

        Err(SignatureError::NoMatch)
    }
}

struct ParsedHeader {
    timestamp: i64,
    signatures: Vec<Vec<u8>>,
}

fn parse_header(header: &str) -> Result<ParsedHeader, SignatureError> {
    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<Vec<u8>> = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            return Err(SignatureError::MalformedHeader);
        };
        match key {
            "t" => {
                timestamp = Some(
                    value
                        .parse()
                        .map_err(|_| SignatureError::MalformedHeader)?,
                );
            }
            "v1" => {
                signatures
                    .push(hex::decode(value).map_err(|_| SignatureError::MalformedHeader)?);
            }
            // Unknown schemes (e.g. v0) are ignored, same as the provider's
            // own SDKs do.
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::MalformedHeader)?;
    if signatures.is_empty() {
        return Err(SignatureError::MalformedHeader);
    }

    Ok(ParsedHeader {
        timestamp,
        signatures,
    })
}
