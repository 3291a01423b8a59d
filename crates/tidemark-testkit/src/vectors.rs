//! Golden checkpoint documents for byte-exact verification.
//!
//! Each vector pins the exact JSON text written for a checkpoint state with
//! timestamps disabled. Keys are emitted in sorted order.

use tidemark_sync::{Checkpoint, CheckpointConfig, RemoteSequence};

use crate::fixtures::checkpoint_with;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Completed `[first, last)` ranges.
    pub ranges: &'static [(u64, u64)],
    /// Remote marker as JSON text, if any.
    pub remote: Option<&'static str>,
    /// Expected document text.
    pub expected_json: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "fresh checkpoint",
            ranges: &[],
            remote: None,
            expected_json: "{}",
        },
        GoldenVector {
            name: "contiguous prefix",
            ranges: &[(0, 6)],
            remote: None,
            expected_json: r#"{"local":5}"#,
        },
        GoldenVector {
            name: "origin plus detached range",
            ranges: &[(5, 8)],
            remote: None,
            expected_json: r#"{"localCompleted":[5,3]}"#,
        },
        GoldenVector {
            name: "prefix with gaps and integral remote",
            ranges: &[(0, 10), (12, 13), (20, 25)],
            remote: Some("1234"),
            expected_json: r#"{"local":9,"localCompleted":[0,10,12,1,20,5],"remote":1234}"#,
        },
        GoldenVector {
            name: "backfill remote",
            ranges: &[(0, 2)],
            remote: Some(r#"{"backfill":"chan","seq":[7,9]}"#),
            expected_json: r#"{"local":1,"remote":{"backfill":"chan","seq":[7,9]}}"#,
        },
        GoldenVector {
            name: "string remote",
            ranges: &[],
            remote: Some(r#""0:412""#),
            expected_json: r#"{"remote":"0:412"}"#,
        },
    ]
}

/// Build the checkpoint described by a vector.
pub fn checkpoint_from_vector(vector: &GoldenVector) -> Checkpoint {
    let remote = vector
        .remote
        .and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| RemoteSequence::from_value(&value));
    checkpoint_with(vector.ranges, remote)
}

/// Verify all vectors, returning (name, matches, actual JSON) for each.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let config = CheckpointConfig::deterministic();
    all_vectors()
        .iter()
        .map(|v| {
            let actual = checkpoint_from_vector(v).to_json(&config);
            let matches = actual == v.expected_json;
            (v.name.to_string(), matches, actual)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, actual) in verify_all_vectors() {
            assert!(matches, "vector '{}' wrote {}", name, actual);
        }
    }

    #[test]
    fn test_vectors_read_back() {
        for vector in all_vectors() {
            let expected = checkpoint_from_vector(&vector);
            let read = Checkpoint::from_json(vector.expected_json.as_bytes());
            assert_eq!(read, expected, "vector '{}' read back differently", vector.name);
        }
    }
}
