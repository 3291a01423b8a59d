//! Sparse sets of completed sequence numbers.
//!
//! A [`SequenceSet`] stores disjoint half-open ranges `[first, second)` keyed
//! by their start. Ranges are kept sorted, never overlap, and never touch:
//! inserting a range adjacent to an existing one coalesces them.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// An ordered set of unsigned sequence numbers stored as maximal ranges.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SequenceSet {
    /// Range start -> range end (exclusive).
    ranges: BTreeMap<u64, u64>,
}

impl SequenceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// Insert the half-open range `[first, last)`.
    ///
    /// Overlapping and adjacent ranges are merged. An empty range is a no-op.
    pub fn add(&mut self, first: u64, last: u64) {
        if first >= last {
            return;
        }

        let mut start = first;
        let mut end = last;

        // A predecessor that reaches `first` absorbs the new range.
        if let Some((&s, &e)) = self.ranges.range(..=first).next_back() {
            if e >= first {
                start = s;
                end = end.max(e);
            }
        }

        let absorbed: Vec<u64> = self.ranges.range(start..=end).map(|(&s, _)| s).collect();
        for s in absorbed {
            if let Some(e) = self.ranges.remove(&s) {
                end = end.max(e);
            }
        }

        self.ranges.insert(start, end);
    }

    /// Insert a single sequence number.
    pub fn add_one(&mut self, seq: u64) {
        if let Some(next) = seq.checked_add(1) {
            self.add(seq, next);
        }
    }

    /// Remove a single sequence number.
    ///
    /// A value strictly inside a range splits it in two; a value on an edge
    /// shrinks the range, deleting it if nothing is left.
    pub fn remove(&mut self, seq: u64) {
        if let Some(next) = seq.checked_add(1) {
            self.remove_range(seq, next);
        }
    }

    /// Remove every sequence number in `[first, last)`.
    pub fn remove_range(&mut self, first: u64, last: u64) {
        if first >= last {
            return;
        }

        let mut touched: Vec<u64> = Vec::new();
        if let Some((&s, &e)) = self.ranges.range(..first).next_back() {
            if e > first {
                touched.push(s);
            }
        }
        touched.extend(self.ranges.range(first..last).map(|(&s, _)| s));

        for s in touched {
            let Some(e) = self.ranges.remove(&s) else {
                continue;
            };
            if s < first {
                self.ranges.insert(s, first);
            }
            if e > last {
                self.ranges.insert(last, e);
            }
        }
    }

    /// Check whether `seq` lies in any range.
    pub fn contains(&self, seq: u64) -> bool {
        self.ranges
            .range(..=seq)
            .next_back()
            .is_some_and(|(_, &e)| seq < e)
    }

    /// Remove all ranges.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// True if no ranges are stored.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of disjoint ranges.
    pub fn ranges_count(&self) -> usize {
        self.ranges.len()
    }

    /// The lowest range, if any.
    pub fn first(&self) -> Option<Range<u64>> {
        self.ranges.iter().next().map(|(&s, &e)| s..e)
    }

    /// The highest range, if any.
    pub fn last(&self) -> Option<Range<u64>> {
        self.ranges.iter().next_back().map(|(&s, &e)| s..e)
    }

    /// Iterate the ranges in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.ranges.iter(),
        }
    }

    /// The set of sequences present in both `a` and `b`.
    pub fn intersection(a: &SequenceSet, b: &SequenceSet) -> SequenceSet {
        let mut out = SequenceSet::new();
        let left: Vec<Range<u64>> = a.iter().collect();
        let right: Vec<Range<u64>> = b.iter().collect();

        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let (l, r) = (&left[i], &right[j]);
            let start = l.start.max(r.start);
            let end = l.end.min(r.end);
            if start < end {
                out.add(start, end);
            }
            if l.end < r.end {
                i += 1;
            } else {
                j += 1;
            }
        }

        out
    }
}

/// Ascending iterator over the ranges of a [`SequenceSet`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, u64, u64>,
}

impl Iterator for Iter<'_> {
    type Item = Range<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&s, &e)| s..e)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&s, &e)| s..e)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = Range<u64>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Range<u64>> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = Range<u64>>>(iter: I) -> Self {
        let mut set = SequenceSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Range<u64>> for SequenceSet {
    fn extend<I: IntoIterator<Item = Range<u64>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range.start, range.end);
        }
    }
}

/// Renders `[0-4, 6, 9-11]`: singletons as `n`, spans as `first-last` inclusive.
impl fmt::Display for SequenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, range) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", range.start)?;
            if range.end != range.start + 1 {
                write!(f, "-{}", range.end - 1)?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for SequenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SequenceSet{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn ranges(set: &SequenceSet) -> Vec<(u64, u64)> {
        set.iter().map(|r| (r.start, r.end)).collect()
    }

    #[test]
    fn test_add_disjoint_stays_sorted() {
        let mut set = SequenceSet::new();
        set.add(10, 12);
        set.add(0, 1);
        set.add(5, 7);
        assert_eq!(ranges(&set), vec![(0, 1), (5, 7), (10, 12)]);
        assert_eq!(set.ranges_count(), 3);
    }

    #[test]
    fn test_add_adjacent_coalesces() {
        let mut set = SequenceSet::new();
        set.add(0, 1);
        set.add(1, 3);
        assert_eq!(ranges(&set), vec![(0, 3)]);

        set.add(5, 6);
        set.add(3, 5);
        assert_eq!(ranges(&set), vec![(0, 6)]);
    }

    #[test]
    fn test_add_spanning_many() {
        let mut set: SequenceSet = vec![0..2, 4..6, 8..10, 20..21].into_iter().collect();
        set.add(1, 9);
        assert_eq!(ranges(&set), vec![(0, 10), (20, 21)]);
    }

    #[test]
    fn test_add_contained_is_noop() {
        let mut set: SequenceSet = std::iter::once(0..10).collect();
        set.add(3, 5);
        assert_eq!(ranges(&set), vec![(0, 10)]);
    }

    #[test]
    fn test_add_empty_range_ignored() {
        let mut set = SequenceSet::new();
        set.add(4, 4);
        set.add(7, 3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_splits_interior() {
        let mut set: SequenceSet = std::iter::once(0..10).collect();
        set.remove(4);
        assert_eq!(ranges(&set), vec![(0, 4), (5, 10)]);
    }

    #[test]
    fn test_remove_edges() {
        let mut set: SequenceSet = std::iter::once(2..6).collect();
        set.remove(2);
        assert_eq!(ranges(&set), vec![(3, 6)]);
        set.remove(5);
        assert_eq!(ranges(&set), vec![(3, 5)]);
    }

    #[test]
    fn test_remove_deletes_singleton() {
        let mut set: SequenceSet = vec![0..1, 7..8].into_iter().collect();
        set.remove(7);
        assert_eq!(ranges(&set), vec![(0, 1)]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set: SequenceSet = vec![0..3, 7..9].into_iter().collect();
        let before = set.clone();
        set.remove(5);
        set.remove(9);
        set.remove(u64::MAX);
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_range_across_ranges() {
        let mut set: SequenceSet = vec![0..5, 7..9, 12..20].into_iter().collect();
        set.remove_range(3, 14);
        assert_eq!(ranges(&set), vec![(0, 3), (14, 20)]);
    }

    #[test]
    fn test_contains() {
        let set: SequenceSet = vec![0..1, 5..8].into_iter().collect();
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(7));
        assert!(!set.contains(8));
    }

    #[test]
    fn test_intersection() {
        let a: SequenceSet = vec![0..10, 20..30].into_iter().collect();
        let b: SequenceSet = vec![0..5, 8..25, 29..40].into_iter().collect();
        let both = SequenceSet::intersection(&a, &b);
        assert_eq!(ranges(&both), vec![(0, 5), (8, 10), (20, 25), (29, 30)]);
        assert_eq!(both, SequenceSet::intersection(&b, &a));
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a: SequenceSet = std::iter::once(0..3).collect();
        let b: SequenceSet = std::iter::once(3..6).collect();
        assert!(SequenceSet::intersection(&a, &b).is_empty());
    }

    #[test]
    fn test_display() {
        let set: SequenceSet = vec![0..5, 6..7, 9..12].into_iter().collect();
        assert_eq!(set.to_string(), "[0-4, 6, 9-11]");
        assert_eq!(SequenceSet::new().to_string(), "[]");
        assert_eq!(format!("{:?}", set), "SequenceSet[0-4, 6, 9-11]");
    }

    #[test]
    fn test_equality_is_elementwise() {
        let a: SequenceSet = vec![0..2, 2..4].into_iter().collect();
        let b: SequenceSet = std::iter::once(0..4).collect();
        assert_eq!(a, b);
        let c: SequenceSet = vec![0..2, 3..4].into_iter().collect();
        assert_ne!(a, c);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64, u64),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..200, 1u64..20).prop_map(|(first, len)| Op::Add(first, first + len)),
            (0u64..220).prop_map(Op::Remove),
        ]
    }

    fn assert_canonical(set: &SequenceSet) -> Result<(), TestCaseError> {
        let all = ranges(set);
        for (s, e) in &all {
            prop_assert!(s < e, "empty range {}..{}", s, e);
        }
        for pair in all.windows(2) {
            prop_assert!(pair[0].1 < pair[1].0, "ranges touch or overlap: {:?}", pair);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn test_ops_keep_ranges_canonical(ops in prop::collection::vec(op(), 0..60)) {
            let mut set = SequenceSet::new();
            let mut model = BTreeSet::new();
            for op in ops {
                match op {
                    Op::Add(first, last) => {
                        set.add(first, last);
                        model.extend(first..last);
                    }
                    Op::Remove(seq) => {
                        set.remove(seq);
                        model.remove(&seq);
                    }
                }
                assert_canonical(&set)?;
            }
            for seq in 0..230 {
                prop_assert_eq!(set.contains(seq), model.contains(&seq));
            }
        }

        #[test]
        fn test_intersection_matches_model(
            a in prop::collection::vec(op(), 0..30),
            b in prop::collection::vec(op(), 0..30),
        ) {
            let build = |ops: &[Op]| {
                let mut set = SequenceSet::new();
                for op in ops {
                    match *op {
                        Op::Add(first, last) => set.add(first, last),
                        Op::Remove(seq) => set.remove(seq),
                    }
                }
                set
            };
            let (sa, sb) = (build(a.as_slice()), build(b.as_slice()));
            let both = SequenceSet::intersection(&sa, &sb);
            assert_canonical(&both)?;
            for seq in 0..230 {
                prop_assert_eq!(both.contains(seq), sa.contains(seq) && sb.contains(seq));
            }
        }
    }
}
