//! Strategy carousel cursor.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// A cursor over a fixed, non-empty list of strategies.
///
/// The cursor is always within `0..len`; every transition wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    cursor: usize,
}

impl Carousel {
    /// Create a carousel positioned on the first strategy.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, cursor: 0 }
    }

    /// Create a carousel for `len` strategies, rejecting an empty list.
    pub fn with_len(len: usize) -> Result<Self> {
        NonZeroUsize::new(len)
            .map(Self::new)
            .ok_or_else(|| Error::invalid_report("carousel needs at least one strategy"))
    }

    /// Index of the displayed strategy.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of strategies.
    pub fn count(&self) -> usize {
        self.len.get()
    }

    /// Advance one strategy, wrapping to the first.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.count();
    }

    /// Go back one strategy, wrapping to the last.
    pub fn previous(&mut self) {
        self.cursor = (self.cursor + self.count() - 1) % self.count();
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices are rejected and leave the cursor unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.count() {
            return Err(Error::invalid_input(format!(
                "strategy {} does not exist (have {})",
                index + 1,
                self.count()
            )));
        }
        self.cursor = index;
        Ok(())
    }

    /// Return to the first strategy.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Whether `index` is the displayed strategy.
    pub fn is_active(&self, index: usize) -> bool {
        self.cursor == index
    }
}
