//! Replication checkpoint state.
//!
//! A [`Checkpoint`] records which local sequences have been pushed to the
//! peer, how far the local feed has been examined, and the peer's own
//! progress marker. Serialization lives in [`crate::codec`], reconciliation
//! with the peer's copy in [`crate::reconcile`].

use tidemark_core::SequenceSet;

use crate::remote::RemoteSequence;

/// Replication progress between the local dataset and one remote peer.
///
/// `completed` always contains sequence 0: it is the origin and counts as
/// complete before anything has been replicated. A fresh checkpoint therefore
/// holds exactly `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Sequences confirmed as replicated.
    pub(crate) completed: SequenceSet,
    /// Highest sequence examined so far, completed or not.
    pub(crate) last_checked: u64,
    /// The peer's progress marker. `None` until one is established.
    pub(crate) remote: Option<RemoteSequence>,
}

impl Checkpoint {
    /// Create a checkpoint with no progress and no remote marker.
    pub fn new() -> Self {
        let mut checkpoint = Self {
            completed: SequenceSet::new(),
            last_checked: 0,
            remote: None,
        };
        checkpoint.reset_local();
        checkpoint
    }

    /// Forget local progress. The remote marker is left alone.
    pub fn reset_local(&mut self) {
        self.completed.clear();
        self.completed.add(0, 1);
        self.last_checked = 0;
    }

    /// The completed set.
    pub fn completed(&self) -> &SequenceSet {
        &self.completed
    }

    /// Highest sequence examined so far.
    pub fn last_checked(&self) -> u64 {
        self.last_checked
    }

    /// The peer's progress marker, if any.
    pub fn remote_min_sequence(&self) -> Option<&RemoteSequence> {
        self.remote.as_ref()
    }

    /// Highest sequence such that it and everything below it are completed.
    pub fn local_min_sequence(&self) -> u64 {
        debug_assert!(
            self.completed.contains(0),
            "completed set lost its origin: {}",
            self.completed
        );
        self.completed
            .first()
            .map_or(0, |range| range.end.saturating_sub(1))
    }

    /// Mark `seq` as in flight: no longer completed, and examined.
    ///
    /// Sequence 0 is the origin and is never pending.
    pub fn add_pending_sequence(&mut self, seq: u64) {
        self.last_checked = self.last_checked.max(seq);
        if seq > 0 {
            self.completed.remove(seq);
        }
    }

    /// Mark `seq` as replicated.
    pub fn completed_sequence(&mut self, seq: u64) {
        self.completed.add_one(seq);
    }

    /// Whether `seq` is known to be replicated.
    pub fn is_sequence_completed(&self, seq: u64) -> bool {
        self.completed.contains(seq)
    }

    /// Number of sequences still outstanding.
    ///
    /// Counts the gaps between completed ranges plus every examined sequence
    /// past the end of the last range.
    pub fn pending_sequence_count(&self) -> u64 {
        let mut count = 0;
        let mut end = 0;
        for range in &self.completed {
            count += range.start - end;
            end = range.end;
        }
        let last_completed = end.saturating_sub(1);
        if self.last_checked > last_completed {
            count += self.last_checked - last_completed;
        }
        count
    }

    /// Replace the remote marker. Returns true if it changed.
    pub fn set_remote_min_sequence(&mut self, remote: Option<RemoteSequence>) -> bool {
        if remote == self.remote {
            return false;
        }
        self.remote = remote;
        true
    }
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self::new()
    }
}
