use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed clock skew between the request timestamp header and our
/// clock. Requests outside this window are rejected regardless of signature
/// validity to close the replay window.
pub const REPLAY_WINDOW_SECS: i64 = 300;

const SIGNATURE_VERSION: &str = "v0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing {0} header")]
    MissingHeader(&'static str),
    #[error("stale_timestamp: request timestamp outside replay window")]
    StaleTimestamp,
    #[error("invalid_signature: signature mismatch")]
    Mismatch,
}

/// Computes the `v0=<hex>` signature for a timestamp/body pair. The base
/// string is `v0:{timestamp}:{body}` keyed with the workspace signing secret.
pub fn compute_signature(secret: &str, timestamp: i64, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(SIGNATURE_VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b":");
    mac.update(body);
    format!("{SIGNATURE_VERSION}={}", hex::encode(mac.finalize().into_bytes()))
}

/// Verifies an inbound webhook signature.
///
/// Rejects when either header is absent, when the timestamp is more than
/// [`REPLAY_WINDOW_SECS`] away from `now`, or when the recomputed signature
/// does not match. The comparison is constant-time.
pub fn verify_signature(
    secret: &str,
    timestamp_header: Option<&str>,
    signature_header: Option<&str>,
    body: &[u8],
    now: i64,
) -> Result<(), SignatureError> {
    let timestamp_header =
        timestamp_header.ok_or(SignatureError::MissingHeader("x-slack-request-timestamp"))?;
    let signature_header =
        signature_header.ok_or(SignatureError::MissingHeader("x-slack-signature"))?;

    let timestamp: i64 = timestamp_header
        .trim()
        .parse()
        .map_err(|_| SignatureError::StaleTimestamp)?;

    if (now - timestamp).abs() > REPLAY_WINDOW_SECS {
        return Err(SignatureError::StaleTimestamp);
    }

    let expected = compute_signature(secret, timestamp, body);
    let matches: bool = expected
        .as_bytes()
        .ct_eq(signature_header.trim().as_bytes())
        .into();
    if matches {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}
