//! The remote peer's checkpoint marker.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The peer's progress marker.
///
/// Most peers report a plain unsigned sequence number. Peers that replicate
/// non-linearly (backfills, multi-channel feeds) report an arbitrary JSON
/// value that can only be compared for equality. "No marker yet" is
/// represented as `Option::<RemoteSequence>::None` by callers.
///
/// Serialized untagged: unsigned integers decode as [`RemoteSequence::Integral`],
/// every other non-null value as [`RemoteSequence::Opaque`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteSequence {
    /// A monotonic sequence number.
    Integral(u64),
    /// An opaque structured marker.
    Opaque(Value),
}

impl RemoteSequence {
    /// Read a marker from a document field. `null` means no marker.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(match n.as_u64() {
                Some(seq) => RemoteSequence::Integral(seq),
                None => RemoteSequence::Opaque(value.clone()),
            }),
            other => Some(RemoteSequence::Opaque(other.clone())),
        }
    }

    /// The marker as a document fragment.
    pub fn to_value(&self) -> Value {
        match self {
            RemoteSequence::Integral(seq) => Value::from(*seq),
            RemoteSequence::Opaque(value) => value.clone(),
        }
    }

    /// True for a plain sequence number.
    pub fn is_integral(&self) -> bool {
        matches!(self, RemoteSequence::Integral(_))
    }

    /// The sequence number, if integral.
    pub fn as_integral(&self) -> Option<u64> {
        match self {
            RemoteSequence::Integral(seq) => Some(*seq),
            RemoteSequence::Opaque(_) => None,
        }
    }
}

impl From<u64> for RemoteSequence {
    fn from(seq: u64) -> Self {
        RemoteSequence::Integral(seq)
    }
}

impl From<&str> for RemoteSequence {
    fn from(marker: &str) -> Self {
        RemoteSequence::Opaque(Value::from(marker))
    }
}

/// Renders the marker as compact JSON.
impl fmt::Display for RemoteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteSequence::Integral(seq) => write!(f, "{}", seq),
            RemoteSequence::Opaque(value) => write!(f, "{}", value),
        }
    }
}
