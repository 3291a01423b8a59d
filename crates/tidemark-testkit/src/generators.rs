//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{json, Value};

use tidemark_core::SequenceSet;
use tidemark_sync::{Checkpoint, RemoteSequence};

/// A single mutation of a [`SequenceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqOp {
    /// `add(first, first + len)`.
    Add { first: u64, len: u64 },
    /// `remove(seq)`.
    Remove(u64),
}

/// Generate a sequence set mutation over a small domain so ops collide often.
pub fn seq_op() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        (0u64..300, 1u64..25).prop_map(|(first, len)| SeqOp::Add { first, len }),
        (0u64..330).prop_map(SeqOp::Remove),
    ]
}

/// Apply ops to an empty set.
pub fn apply_ops(ops: &[SeqOp]) -> SequenceSet {
    let mut set = SequenceSet::new();
    for op in ops {
        match *op {
            SeqOp::Add { first, len } => set.add(first, first + len),
            SeqOp::Remove(seq) => set.remove(seq),
        }
    }
    set
}

/// Generate a sequence set built from random ops.
pub fn sequence_set() -> impl Strategy<Value = SequenceSet> {
    prop::collection::vec(seq_op(), 0..40).prop_map(|ops| apply_ops(&ops))
}

/// Generate an opaque marker shaped like the ones peers send.
pub fn opaque_marker() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[0-9]{1,4}:[0-9]{1,4}".prop_map(Value::from),
        ("[a-z]{1,6}", 0u64..10_000).prop_map(|(chan, seq)| json!({"backfill": chan, "seq": seq})),
        prop::collection::vec(0u64..100, 1..4).prop_map(|seqs| json!(seqs)),
    ]
}

/// Generate a remote marker, possibly absent.
pub fn remote_sequence() -> impl Strategy<Value = Option<RemoteSequence>> {
    prop_oneof![
        Just(None),
        any::<u64>().prop_map(|seq| Some(RemoteSequence::Integral(seq))),
        opaque_marker().prop_map(|value| Some(RemoteSequence::Opaque(value))),
    ]
}

/// Parameters for generating a checkpoint.
#[derive(Debug, Clone)]
pub struct CheckpointParams {
    /// Completed `(first, len)` ranges.
    pub completed: Vec<(u64, u64)>,
    /// Sequences marked pending after completion.
    pub pending: Vec<u64>,
    /// Remote marker.
    pub remote: Option<RemoteSequence>,
}

impl Arbitrary for CheckpointParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec((0u64..400, 1u64..20), 0..10),
            prop::collection::vec(0u64..450, 0..10),
            remote_sequence(),
        )
            .prop_map(|(completed, pending, remote)| CheckpointParams {
                completed,
                pending,
                remote,
            })
            .boxed()
    }
}

/// Build a checkpoint from parameters.
pub fn checkpoint_from_params(params: &CheckpointParams) -> Checkpoint {
    let mut checkpoint = Checkpoint::new();
    for &(first, len) in &params.completed {
        for seq in first..first + len {
            checkpoint.completed_sequence(seq);
        }
    }
    for &seq in &params.pending {
        checkpoint.add_pending_sequence(seq);
    }
    checkpoint.set_remote_min_sequence(params.remote.clone());
    checkpoint
}
