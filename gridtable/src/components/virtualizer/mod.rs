//! Windowing for large item sets.
//!
//! The virtualizer only knows item counts, heights and the scroll position.
//! It reports which index range is visible; the table body decides what to
//! materialize for that range.

mod state;

pub use state::Virtualizer;

/// Inclusive range of visible item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize,
}

impl VisibleRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Check if an index lies inside the range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.last + 1 - self.first
    }

    /// Always false; a range holds at least one index.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the indices in order.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }
}
