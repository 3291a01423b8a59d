//! Checkpoint document encoding.
//!
//! ```text
//! {
//!   "time": 1760000000,          // Unix seconds, if enabled
//!   "local": 41,                 // highest contiguous completed sequence, if > 0
//!   "localCompleted": [0, 42, 50, 8],
//!                                // (start, length) pairs, only when sparse
//!   "remote": <any>              // peer marker, verbatim
//! }
//! ```
//!
//! When reading, `localCompleted` wins over `local`. The baseline pair
//! `(0, 1)` is left out of `localCompleted` since every reader starts from it.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};

use crate::checkpoint::Checkpoint;
use crate::config::{CheckpointConfig, CheckpointFormat};
use crate::error::{CheckpointError, Result};
use crate::remote::RemoteSequence;

/// Document keys.
pub mod keys {
    pub const TIME: &str = "time";
    pub const LOCAL: &str = "local";
    pub const LOCAL_COMPLETED: &str = "localCompleted";
    pub const REMOTE: &str = "remote";
}

impl Checkpoint {
    /// Build the checkpoint document.
    pub fn to_dict(&self, config: &CheckpointConfig) -> Value {
        let mut doc = Map::new();

        if config.write_timestamps {
            doc.insert(keys::TIME.into(), Value::from(unix_seconds()));
        }

        let min_seq = self.local_min_sequence();
        if min_seq > 0 {
            doc.insert(keys::LOCAL.into(), Value::from(min_seq));
        }

        if config.format == CheckpointFormat::Sparse && self.completed.ranges_count() > 1 {
            let mut pairs = Vec::with_capacity(self.completed.ranges_count() * 2);
            for range in &self.completed {
                if range == (0..1) {
                    continue;
                }
                pairs.push(range.start);
                pairs.push(range.end - range.start);
            }
            doc.insert(keys::LOCAL_COMPLETED.into(), Value::from(pairs));
        }

        if let Some(remote) = &self.remote {
            doc.insert(keys::REMOTE.into(), remote.to_value());
        }

        Value::Object(doc)
    }

    /// Render the checkpoint document as compact JSON.
    pub fn to_json(&self, config: &CheckpointConfig) -> String {
        self.to_dict(config).to_string()
    }

    /// Parse a checkpoint from a JSON payload, degrading to a fresh
    /// checkpoint if the payload is unusable.
    pub fn from_json(json: &[u8]) -> Self {
        let mut checkpoint = Self::new();
        checkpoint.read_json(json);
        checkpoint
    }

    /// Replace this checkpoint's state from a JSON payload.
    ///
    /// Unparseable payloads are logged and treated as an empty document, so
    /// the result is a fresh checkpoint with no remote marker.
    pub fn read_json(&mut self, json: &[u8]) {
        if let Err(err) = self.try_read_json(json) {
            tracing::error!(
                error = %err,
                payload = %String::from_utf8_lossy(json),
                "unparseable checkpoint, starting over"
            );
            self.read_dict(&Value::Null);
        }
    }

    /// Replace this checkpoint's state from a JSON payload, reporting parse
    /// failures. An empty payload means "no checkpoint". On error the state
    /// is left untouched.
    pub fn try_read_json(&mut self, json: &[u8]) -> Result<()> {
        if json.is_empty() {
            self.read_dict(&Value::Null);
            return Ok(());
        }

        let doc: Value = serde_json::from_slice(json)?;
        if !doc.is_object() {
            return Err(CheckpointError::NotAnObject(kind_of(&doc)));
        }
        self.read_dict(&doc);
        Ok(())
    }

    /// Replace this checkpoint's state from a parsed document.
    ///
    /// Anything other than an object, and any missing field, reads as
    /// "no progress".
    pub fn read_dict(&mut self, doc: &Value) {
        self.reset_local();
        self.remote = None;

        let Some(root) = doc.as_object() else {
            return;
        };

        self.remote = root.get(keys::REMOTE).and_then(RemoteSequence::from_value);

        if let Some(pairs) = root.get(keys::LOCAL_COMPLETED).and_then(Value::as_array) {
            let mut entries = pairs.iter().map(|v| v.as_u64().unwrap_or(0));
            while let Some(first) = entries.next() {
                let Some(length) = entries.next() else {
                    tracing::warn!(first, "ignoring unpaired localCompleted entry");
                    break;
                };
                self.completed.add(first, first.saturating_add(length));
            }
        } else {
            let min_seq = root.get(keys::LOCAL).and_then(Value::as_u64).unwrap_or(0);
            self.completed.add(0, min_seq.saturating_add(1));
        }
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
