//! Hashing - SHA-256 for Emission Manifests
//!
//! Asset hashes let a caller confirm that two runs wrote identical files.

use sha2::{Sha256, Digest};
use serde::Serialize;
use serde_json::to_string;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Canonical JSON: keys sorted, no whitespace.
///
/// `serde_json::Map` is a `BTreeMap` (the `preserve_order` feature is off), so
/// going through `Value` is enough to sort every object level.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    to_string(&serde_json::to_value(value)?)
}

/// Hash of the canonical JSON form. Field order in `T` does not matter.
pub fn compute_manifest_hash<T: Serialize>(manifest: &T) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(manifest)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
