//! Reconciling a local checkpoint with the peer's copy.
//!
//! Both sides store the same checkpoint document. After a crash mid-save, or
//! a peer restored from backup, the two copies can disagree. Reconciliation
//! only ever moves the local checkpoint backward: completed ranges shrink to
//! what both sides recorded, and the remote marker rolls back to the peer's
//! older value or is dropped entirely when the markers cannot be compared.
//! Re-sending data the peer already has is preferred over skipping data it
//! never received.

use tidemark_core::SequenceSet;

use crate::checkpoint::Checkpoint;
use crate::remote::RemoteSequence;

/// What happened to the local remote marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// The markers agreed, or there was no local marker to check.
    Unchanged,
    /// The local integral marker was ahead of the peer's and was rolled back.
    RolledBack { from: u64, to: u64 },
    /// The local integral marker was behind the peer's and was kept.
    KeptOlder { local: u64, peer: u64 },
    /// The markers could not be compared; the local marker was dropped.
    Reset { previous: RemoteSequence },
}

/// Outcome of [`Checkpoint::reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The completed sets differed and the local one was cut down to the
    /// intersection.
    pub completed_rolled_back: bool,
    /// What happened to the remote marker.
    pub remote: RemoteOutcome,
}

impl Reconciliation {
    /// True if the local checkpoint was left untouched.
    pub fn is_match(&self) -> bool {
        !self.completed_rolled_back
            && matches!(
                self.remote,
                RemoteOutcome::Unchanged | RemoteOutcome::KeptOlder { .. }
            )
    }
}

impl Checkpoint {
    /// Reconcile with the peer's copy of this checkpoint.
    ///
    /// Returns true if the two already matched. `false` is not an error: it
    /// means local state was rolled back and replication should resume from
    /// the adjusted checkpoint.
    pub fn validate_with(&mut self, peer: &Checkpoint) -> bool {
        self.reconcile(peer).is_match()
    }

    /// Reconcile with the peer's copy of this checkpoint, reporting what changed.
    pub fn reconcile(&mut self, peer: &Checkpoint) -> Reconciliation {
        let mut completed_rolled_back = false;

        if self.completed != peer.completed {
            tracing::info!(
                local = %self.completed,
                peer = %peer.completed,
                "local sequence mismatch, rolling back to a failsafe; some redundant changes may be proposed"
            );
            self.completed = SequenceSet::intersection(&self.completed, &peer.completed);
            completed_rolled_back = true;
        }

        let remote = self.reconcile_remote(peer.remote.as_ref());

        Reconciliation {
            completed_rolled_back,
            remote,
        }
    }

    fn reconcile_remote(&mut self, peer: Option<&RemoteSequence>) -> RemoteOutcome {
        let Some(local) = self.remote.clone() else {
            return RemoteOutcome::Unchanged;
        };
        if peer == Some(&local) {
            return RemoteOutcome::Unchanged;
        }

        tracing::info!(
            local = %local,
            peer = %peer.map(ToString::to_string).unwrap_or_default(),
            "remote sequence mismatch"
        );

        match (local.as_integral(), peer.and_then(RemoteSequence::as_integral)) {
            (Some(mine), Some(theirs)) if mine > theirs => {
                tracing::info!(
                    from = mine,
                    to = theirs,
                    "rolling back to earlier remote sequence from peer; some redundant changes may be proposed"
                );
                self.remote = Some(RemoteSequence::Integral(theirs));
                RemoteOutcome::RolledBack {
                    from: mine,
                    to: theirs,
                }
            }
            (Some(mine), Some(theirs)) => {
                tracing::info!(
                    local = mine,
                    peer = theirs,
                    "ignoring peer's remote sequence since the local one is older; some redundant changes may be proposed"
                );
                RemoteOutcome::KeptOlder {
                    local: mine,
                    peer: theirs,
                }
            }
            _ => {
                tracing::warn!(
                    "non-numeric remote sequence detected, resetting replication back to start; redundant changes will be proposed"
                );
                self.remote = None;
                RemoteOutcome::Reset { previous: local }
            }
        }
    }
}
