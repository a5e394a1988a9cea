//! An array-backed binary min-heap keyed by caller-supplied scores.

use std::cmp::Ordering;

use crate::error::PathError;

#[derive(Clone, Debug)]
struct Entry<T, S> {
    item: T,
    score: S,
    seq: u64,
}

/// Binary min-heap over `(item, score)` pairs.
///
/// The score is fixed at push time; the heap never recomputes it. The root
/// (index 0) always holds the minimum score, so [`peek`](Self::peek) is
/// O(1) and [`push`](Self::push)/[`pop`](Self::pop) are O(log n).
///
/// Equal scores pop in insertion order (FIFO). Every push is stamped with a
/// sequence number that breaks ties, so the pop order is fully determined
/// by the push sequence. Scores that do not compare (NaN) are treated as
/// equal and fall back to the same rule.
#[derive(Clone, Debug)]
pub struct MinHeap<T, S> {
    entries: Vec<Entry<T, S>>,
    next_seq: u64,
}

impl<T, S: PartialOrd + Copy> Default for MinHeap<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: PartialOrd + Copy> MinHeap<T, S> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The minimum element and its score, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(&T, S)> {
        self.entries.first().map(|e| (&e.item, e.score))
    }

    /// Insert `item` with `score` and restore the heap order.
    pub fn push(&mut self, item: T, score: S) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { item, score, seq });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum element.
    pub fn pop(&mut self) -> Result<T, PathError> {
        self.pop_with_score().map(|(item, _)| item)
    }

    /// Remove and return the minimum element together with its score.
    pub fn pop_with_score(&mut self) -> Result<(T, S), PathError> {
        if self.entries.is_empty() {
            return Err(PathError::EmptyQueue);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let Some(root) = self.entries.pop() else {
            return Err(PathError::EmptyQueue);
        };
        self.sift_down(0);
        Ok((root.item, root.score))
    }

    /// Iterate over the stored items in heap (not sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether entry `a` must sit above entry `b`.
    #[inline]
    fn before(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.entries[a], &self.entries[b]);
        match ea.score.partial_cmp(&eb.score) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => ea.seq < eb.seq,
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.before(i, parent) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.before(left, best) {
                best = left;
            }
            if right < len && self.before(right, best) {
                best = right;
            }
            if best == i {
                return;
            }
            self.entries.swap(i, best);
            i = best;
        }
    }
}
