//! Checkpoint serialization settings.

use serde::{Deserialize, Serialize};

/// How the completed set is written to a checkpoint document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointFormat {
    /// Write `local` plus the full `localCompleted` range list when sparse.
    #[default]
    Sparse,
    /// Write only `local`. Ranges past the first gap are dropped and will be
    /// re-proposed after a restart.
    Compact,
}

/// Configuration for writing checkpoint documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Embed a `time` field (Unix seconds) in written documents.
    pub write_timestamps: bool,
    /// Layout of the completed set.
    pub format: CheckpointFormat,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            write_timestamps: true,
            format: CheckpointFormat::Sparse,
        }
    }
}

impl CheckpointConfig {
    /// Configuration with timestamps disabled, for reproducible output.
    pub fn deterministic() -> Self {
        Self {
            write_timestamps: false,
            ..Self::default()
        }
    }

    /// Set the completed-set layout.
    pub fn with_format(mut self, format: CheckpointFormat) -> Self {
        self.format = format;
        self
    }
}
