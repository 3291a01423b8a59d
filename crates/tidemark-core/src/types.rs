//! Strong type definitions for Tidemark.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the rendered document ID.
const DOC_ID_PREFIX: &str = "cp-";

/// A 32-byte checkpoint identifier.
///
/// Derived from Blake3 over the local database UUID, the remote URL and the
/// collection name, so one replication relationship always maps to the same
/// checkpoint document on both sides.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckpointId(pub [u8; 32]);

impl CheckpointId {
    /// Derive a checkpoint ID for a (local database, remote, collection) triple.
    pub fn derive(local_uuid: &str, remote_url: &str, collection: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"tidemark-checkpoint-v0:");
        for part in [local_uuid, remote_url, collection] {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The document ID under which the checkpoint is stored: `cp-<hex>`.
    pub fn doc_id(&self) -> String {
        format!("{}{}", DOC_ID_PREFIX, self.to_hex())
    }

    /// Parse a document ID produced by [`CheckpointId::doc_id`].
    pub fn from_doc_id(doc_id: &str) -> Option<Self> {
        doc_id
            .strip_prefix(DOC_ID_PREFIX)
            .and_then(|hex| Self::from_hex(hex).ok())
    }
}

impl fmt::Debug for CheckpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CheckpointId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.doc_id())
    }
}

impl From<[u8; 32]> for CheckpointId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let a = CheckpointId::derive("db-1", "wss://sync.example.com/db", "_default");
        let b = CheckpointId::derive("db-1", "wss://sync.example.com/db", "_default");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_separates_fields() {
        let a = CheckpointId::derive("ab", "c", "x");
        let b = CheckpointId::derive("a", "bc", "x");
        assert_ne!(a, b);

        let other_collection = CheckpointId::derive("ab", "c", "y");
        assert_ne!(a, other_collection);
    }

    #[test]
    fn test_doc_id_roundtrip() {
        let id = CheckpointId::from_bytes([0x5a; 32]);
        let doc_id = id.doc_id();
        assert!(doc_id.starts_with("cp-"));
        assert_eq!(doc_id.len(), 3 + 64);
        assert_eq!(CheckpointId::from_doc_id(&doc_id), Some(id));
        assert_eq!(id.to_string(), doc_id);
    }

    #[test]
    fn test_from_doc_id_rejects_garbage() {
        assert_eq!(CheckpointId::from_doc_id("5a5a"), None);
        assert_eq!(CheckpointId::from_doc_id("cp-zz"), None);
        assert_eq!(CheckpointId::from_doc_id("cp-abcd"), None);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let id = CheckpointId::derive("db-2", "wss://peer", "_default");
        let json = serde_json::to_string(&id).unwrap();
        let back: CheckpointId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_debug_is_truncated() {
        let id = CheckpointId::from_bytes([0xcd; 32]);
        assert_eq!(format!("{:?}", id), "CheckpointId(cdcdcdcdcdcdcdcd)");
    }
}
