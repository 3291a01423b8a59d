//! Golden checkpoint documents.
//!
//! Every writer of this checkpoint format must produce (and every reader
//! must accept) these exact documents.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tidemark::{Checkpoint, CheckpointConfig, CheckpointFormat, RemoteSequence};

/// A single golden document.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenDocument {
    pub name: String,
    pub description: String,

    // Inputs
    pub ranges: Vec<(u64, u64)>,
    pub remote: Value,

    // Expected output (timestamps disabled)
    pub document: Value,
}

fn golden(
    name: &str,
    description: &str,
    ranges: &[(u64, u64)],
    remote: Value,
    document: Value,
) -> GoldenDocument {
    GoldenDocument {
        name: name.to_string(),
        description: description.to_string(),
        ranges: ranges.to_vec(),
        remote,
        document,
    }
}

fn all_documents() -> Vec<GoldenDocument> {
    vec![
        golden(
            "fresh",
            "No progress, no remote marker",
            &[(0, 1)],
            Value::Null,
            json!({}),
        ),
        golden(
            "compact",
            "Single contiguous range",
            &[(0, 1001)],
            Value::Null,
            json!({"local": 1000}),
        ),
        golden(
            "sparse_from_origin",
            "Origin only, then a detached range",
            &[(0, 1), (5, 8)],
            Value::Null,
            json!({"localCompleted": [5, 3]}),
        ),
        golden(
            "sparse_with_prefix",
            "Contiguous prefix plus two detached ranges",
            &[(0, 20), (25, 26), (30, 40)],
            json!(77),
            json!({"local": 19, "localCompleted": [0, 20, 25, 1, 30, 10], "remote": 77}),
        ),
        golden(
            "opaque_remote",
            "Backfill marker passed through verbatim",
            &[(0, 3)],
            json!({"backfill": "vb-12", "seqs": [4, 9]}),
            json!({"local": 2, "remote": {"backfill": "vb-12", "seqs": [4, 9]}}),
        ),
        golden(
            "string_remote",
            "Non-numeric sequence string from the peer",
            &[(0, 1)],
            json!("12:34"),
            json!({"remote": "12:34"}),
        ),
    ]
}

fn build(doc: &GoldenDocument) -> Checkpoint {
    let mut checkpoint = Checkpoint::new();
    for &(first, last) in &doc.ranges {
        for seq in first..last {
            checkpoint.completed_sequence(seq);
        }
    }
    checkpoint.set_remote_min_sequence(RemoteSequence::from_value(&doc.remote));
    checkpoint
}

#[test]
fn test_golden_documents_written() {
    let config = CheckpointConfig::deterministic();
    for doc in all_documents() {
        let checkpoint = build(&doc);
        assert_eq!(
            checkpoint.to_dict(&config),
            doc.document,
            "document '{}' ({}) mismatched",
            doc.name,
            doc.description
        );
    }
}

#[test]
fn test_golden_documents_read() {
    for doc in all_documents() {
        let expected = build(&doc);
        let read = Checkpoint::from_json(doc.document.to_string().as_bytes());
        assert_eq!(read, expected, "document '{}' read back differently", doc.name);
    }
}

#[test]
fn test_golden_documents_survive_serde() {
    let all = all_documents();
    let encoded = serde_json::to_string(&all).unwrap();
    let decoded: Vec<GoldenDocument> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.len(), all.len());
    for (a, b) in all.iter().zip(&decoded) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.document, b.document);
    }
}

#[test]
fn test_compact_format_is_readable_by_sparse_reader() {
    let config = CheckpointConfig::deterministic().with_format(CheckpointFormat::Compact);
    let doc = &all_documents()[3];
    let written = build(doc).to_json(&config);
    assert_eq!(written, r#"{"local":19,"remote":77}"#);

    let read = Checkpoint::from_json(written.as_bytes());
    assert_eq!(read.completed().to_string(), "[0-19]");
}

#[test]
fn test_legacy_document_with_time() {
    let read = Checkpoint::from_json(br#"{"time":1578000000,"local":55,"remote":1200}"#);
    assert_eq!(read.local_min_sequence(), 55);
    assert_eq!(read.completed().ranges_count(), 1);
    assert_eq!(read.remote_min_sequence(), Some(&RemoteSequence::from(1200)));
}
