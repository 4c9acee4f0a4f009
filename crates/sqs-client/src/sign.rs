//! Request canonicalization and signature generation.
//!
//! Implements signature version 1 of the query protocol: parameters are
//! sorted case-insensitively, concatenated as bare name/value pairs, and
//! authenticated with an RFC 2104 keyed hash over the shared secret.

use crate::credentials::Credentials;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

#[cfg(test)]
#[path = "sign_tests.rs"]
mod tests;

type HmacSha1 = Hmac<Sha1>;

/// Wire protocol version spoken by this client
pub const API_VERSION: &str = "2008-01-01";

/// Signature scheme version sent with every request
pub const SIGNATURE_VERSION: &str = "1";

// ============================================================================
// Canonicalization
// ============================================================================

/// Build the canonical signing string for a parameter set.
///
/// Entries are sorted by name ignoring ASCII case, then serialized as the
/// name immediately followed by its value - no delimiter between name and
/// value and none between entries, and no escaping of either. Any
/// pre-existing `Signature` entry is excluded, since that is the value
/// being computed.
///
/// Two parameter sets that are permutations of each other canonicalize to
/// the same string.
pub fn canonical_string(params: &[(String, String)]) -> String {
    let mut entries: Vec<&(String, String)> =
        params.iter().filter(|(name, _)| name != "Signature").collect();
    entries.sort_by(|a, b| a.0.to_ascii_lowercase().cmp(&b.0.to_ascii_lowercase()));

    let mut data = String::new();
    for (name, value) in entries {
        data.push_str(name);
        data.push_str(value);
    }
    data
}

/// ISO-8601 UTC timestamp with the millisecond field fixed at zero
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

// ============================================================================
// Request Signer
// ============================================================================

/// Signs action parameter sets with the account's shared secret.
///
/// Injects the four authentication fields the protocol requires - access
/// key, signature version, timestamp, and API version - then appends the
/// computed `Signature` entry last.
#[derive(Clone)]
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
}

impl RequestSigner {
    /// Create a signer over the account credentials
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            access_key: credentials.access_key().to_string(),
            secret_key: credentials.secret_key().to_string(),
        }
    }

    /// Sign an action parameter set, timestamped with the current time
    pub fn sign(&self, params: Vec<(String, String)>) -> SignedRequest {
        self.sign_at(params, Utc::now())
    }

    /// Sign an action parameter set with an explicit timestamp.
    ///
    /// Signing is deterministic for a fixed timestamp, which is what makes
    /// the signature testable and stable under parameter reordering.
    pub fn sign_at(
        &self,
        mut params: Vec<(String, String)>,
        timestamp: DateTime<Utc>,
    ) -> SignedRequest {
        params.push(("AWSAccessKeyId".to_string(), self.access_key.clone()));
        params.push((
            "SignatureVersion".to_string(),
            SIGNATURE_VERSION.to_string(),
        ));
        params.push(("Timestamp".to_string(), format_timestamp(timestamp)));
        params.push(("Version".to_string(), API_VERSION.to_string()));

        let signature = self.signature(&params);
        params.push(("Signature".to_string(), signature));

        SignedRequest { params }
    }

    /// Compute the base64 keyed-hash signature over the canonical string
    fn signature(&self, params: &[(String, String)]) -> String {
        let data = canonical_string(params);

        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(data.as_bytes());

        STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<REDACTED>")
            .finish()
    }
}

// ============================================================================
// Signed Request
// ============================================================================

/// A parameter set with authentication fields injected and the signature
/// appended last. Immutable once produced.
///
/// Transmission preserves the caller's insertion order and original name
/// case; only the signing step sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    params: Vec<(String, String)>,
}

impl SignedRequest {
    /// All parameters in transmission order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value by exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize as a URL query string with percent-encoded values.
    ///
    /// Names are transmitted as-is; only values are encoded.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
