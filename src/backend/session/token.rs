//! Minimal JWT payload inspection.
//!
//! Just enough decoding to read the `exp` claim locally; verifying
//! signatures is the service's job, not ours.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Unix timestamp the token expires at, if one can be read.
pub fn expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Whether the token has expired at `at`. Malformed tokens count as
/// expired, which forces the safe refresh path.
pub fn is_expired(token: &str, at: i64) -> bool {
    expiry(token).is_none_or(|exp| exp <= at)
}
