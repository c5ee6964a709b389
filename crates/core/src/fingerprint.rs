//! Content fingerprints for conditional list fetches.
//!
//! The announcement list is hashed on every request; when the client echoes
//! back the same token in `If-None-Match` the body can be skipped. The guard
//! never changes what is computed, only whether it is transmitted.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};
use crate::summary::AnnouncementSummary;

/// An opaque, quoted entity tag (`"<hex>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ETag(String);

impl ETag {
    /// Wrap a hex digest in quotes.
    pub fn from_digest(hex: &str) -> Self {
        Self(format!("\"{hex}\""))
    }

    /// The full quoted token, as sent in the `ETag` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digest without surrounding quotes.
    pub fn digest(&self) -> &str {
        self.0.trim_matches('"')
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Fingerprint a summary list over its canonical JSON serialization.
pub fn compute_fingerprint(summaries: &[AnnouncementSummary]) -> CoreResult<ETag> {
    let canonical = serde_json::to_vec(summaries)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize summaries: {e}")))?;
    Ok(ETag::from_digest(&sha256_hex(&canonical)))
}

/// Whether a single presented token matches the computed one.
pub fn should_serve_not_modified(presented: &str, computed: &ETag) -> bool {
    presented == computed.as_str()
}

/// Evaluate a raw `If-None-Match` header value against the computed tag.
///
/// Accepts a comma-separated list of tags, weak tags (`W/"..."`, compared
/// weakly as RFC 9110 requires for `If-None-Match`) and the `*` wildcard.
pub fn if_none_match(header_value: &str, computed: &ETag) -> bool {
    header_value.split(',').map(str::trim).any(|candidate| {
        candidate == "*"
            || should_serve_not_modified(candidate.strip_prefix("W/").unwrap_or(candidate), computed)
    })
}
