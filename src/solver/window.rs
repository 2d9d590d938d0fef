use std::ops::Range;

/// A contiguous view into one of the two diffed sequences, expressed as an
/// offset into the full sequence and a length. Splitting a window never
/// copies elements; coordinates inside a window are relative to its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    offset: usize,
    len: usize,
}

impl Window {
    /// The window covering a whole sequence of `len` elements.
    pub fn whole(len: usize) -> Self { Self { offset: 0, len } }

    pub fn offset(self) -> usize { self.offset }

    pub fn len(self) -> usize { self.len }

    pub fn is_empty(self) -> bool { self.len == 0 }

    /// Absolute positions covered by the window.
    pub fn positions(self) -> Range<usize> { self.offset..self.offset + self.len }

    /// Returns the absolute position of the window-relative `index`.
    pub fn absolute(self, index: usize) -> usize {
        debug_assert!(index < self.len, "index {index} outside of window {self:?}");
        self.offset + index
    }

    /// Sub-window covering the window-relative `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the end of the window, which can only
    /// happen when the middle snake search produced a corrupt split.
    pub fn slice(self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "sub-range {range:?} escapes window {self:?}"
        );

        Self {
            offset: self.offset + range.start,
            len: range.len(),
        }
    }
}
