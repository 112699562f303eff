//! src/graph/ring.rs
//!
//! Fixed-capacity circular store of the most recent samples, one per column.
//!
//! The ring is always full: it is zero-filled on creation and every insert
//! overwrites the logically oldest slot. The write cursor therefore always
//! points at the oldest sample, and chronological order starts there.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRing {
    slots: Vec<u64>,
    /// Next slot to overwrite; also the oldest sample.
    cursor: usize,
}

impl SampleRing {
    /// Create a ring of `capacity` zeroed slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Overwrite the oldest slot with `value` and advance the cursor.
    ///
    /// A zero-capacity ring ignores inserts.
    pub fn insert(&mut self, value: u64) {
        if self.slots.is_empty() {
            return;
        }
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Call `f` on every slot from oldest to newest, exactly `capacity` times.
    pub fn for_each_chronological<F: FnMut(u64)>(&self, mut f: F) {
        for v in self.iter() {
            f(v);
        }
    }

    /// Iterate over the samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer.iter()).copied()
    }

    /// Number of slots (the graph width in columns).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Most recently inserted sample, or `None` for a zero-capacity ring.
    pub fn latest(&self) -> Option<u64> {
        self.iter().next_back()
    }

    /// Greatest sample currently held, found by a full scan.
    ///
    /// Recomputed from scratch so that a maximum scrolling out of the window
    /// is noticed. Returns 0 for an empty ring.
    pub fn max(&self) -> u64 {
        self.slots.iter().copied().max().unwrap_or(0)
    }

    /// Build a ring of `capacity` slots holding the newest
    /// `min(self.capacity(), capacity)` samples, right-aligned.
    ///
    /// Shrinking drops the oldest excess samples, growing zero-fills the
    /// leading slots.
    pub fn reflow(&self, capacity: usize) -> SampleRing {
        let mut next = SampleRing::new(capacity);
        let keep = self.capacity().min(capacity);
        let skip = self.capacity() - keep;
        let offset = capacity - keep;
        for (slot, value) in next.slots[offset..].iter_mut().zip(self.iter().skip(skip)) {
            *slot = value;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(capacity: usize, values: &[u64]) -> SampleRing {
        let mut ring = SampleRing::new(capacity);
        for &v in values {
            ring.insert(v);
        }
        ring
    }

    fn contents(ring: &SampleRing) -> Vec<u64> {
        let mut out = Vec::new();
        ring.for_each_chronological(|v| out.push(v));
        out
    }

    #[test]
    fn test_new_ring_is_zero_filled() {
        let ring = SampleRing::new(4);
        assert_eq!(contents(&ring), vec![0, 0, 0, 0]);
        assert_eq!(ring.max(), 0);
    }

    #[test]
    fn test_partial_fill_is_zero_padded_at_the_front() {
        let ring = ring_of(5, &[7, 8]);
        assert_eq!(contents(&ring), vec![0, 0, 0, 7, 8]);
        assert_eq!(ring.latest(), Some(8));
    }

    #[test]
    fn test_wraparound_keeps_last_capacity_values_in_order() {
        let values: Vec<u64> = (1..=11).collect();
        let ring = ring_of(4, &values);
        assert_eq!(contents(&ring), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_every_insert_count_yields_suffix() {
        for n in 0..20u64 {
            let values: Vec<u64> = (1..=n).collect();
            let ring = ring_of(6, &values);
            let got = contents(&ring);
            assert_eq!(got.len(), 6);
            let tail: Vec<u64> = got.into_iter().filter(|&v| v != 0).collect();
            let start = n.saturating_sub(6) + 1;
            let expected: Vec<u64> = (start..=n).collect();
            assert_eq!(tail, expected, "after {} inserts", n);
        }
    }

    #[test]
    fn test_zero_capacity_is_a_no_op() {
        let mut ring = SampleRing::new(0);
        ring.insert(5);
        assert_eq!(ring.capacity(), 0);
        assert_eq!(contents(&ring), Vec::<u64>::new());
        assert_eq!(ring.latest(), None);
        assert_eq!(ring.max(), 0);
    }

    #[test]
    fn test_max_drops_when_former_maximum_scrolls_out() {
        let mut ring = ring_of(3, &[1, 9, 2]);
        assert_eq!(ring.max(), 9);
        ring.insert(3);
        assert_eq!(ring.max(), 9);
        ring.insert(4);
        assert_eq!(ring.max(), 4);
    }

    #[test]
    fn test_reflow_shrink_keeps_newest() {
        let ring = ring_of(5, &[1, 2, 3, 4, 5]);
        assert_eq!(contents(&ring.reflow(3)), vec![3, 4, 5]);
    }

    #[test]
    fn test_reflow_grow_zero_fills_leading_slots() {
        let ring = ring_of(3, &[3, 4, 5]);
        let grown = ring.reflow(5);
        assert_eq!(contents(&grown), vec![0, 0, 3, 4, 5]);
    }

    #[test]
    fn test_reflow_preserves_order_after_wraparound() {
        let ring = ring_of(4, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(contents(&ring.reflow(3)), vec![4, 5, 6]);
        let mut grown = ring.reflow(6);
        assert_eq!(contents(&grown), vec![0, 0, 3, 4, 5, 6]);
        grown.insert(7);
        assert_eq!(contents(&grown), vec![0, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_reflow_to_same_capacity_is_identity() {
        let ring = ring_of(4, &[1, 2, 3, 4, 5]);
        assert_eq!(contents(&ring.reflow(4)), contents(&ring));
    }

    #[test]
    fn test_reflow_to_zero() {
        let ring = ring_of(3, &[1, 2, 3]);
        assert_eq!(ring.reflow(0).capacity(), 0);
    }
}
