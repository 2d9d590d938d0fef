use std::ops::{Index, IndexMut};

/// `ProgressTable` contains the endpoints of the furthest reaching paths of a
/// single search direction. For each recorded endpoint `(x, y)` in diagonal
/// `k` only `x` is kept because `y` can be computed from `x - k`.
///
/// `k` takes negative values, so the table is a circular buffer: `k` is
/// wrapped into `[0, size)` with a euclidean remainder, with
/// `size = 2 * min(old_len, new_len) + 1`. Once the diagonal range shrinks at
/// the corners of the edit graph, a diagonal written in the current step can
/// share its slot with a previous-step diagonal that's read later in the same
/// step: e.g. for lengths 1 and 3 at step 2, `k = -2` overwrites `k = 1`,
/// which `k = 0` then reads.
///
/// The buffer is reused between partitions and reset to zeros whenever a new
/// partition starts.
#[derive(Debug, Default)]
pub struct ProgressTable {
    buffer: Vec<usize>,
    size: isize,
}

impl ProgressTable {
    /// Clears the table and resizes it to hold `size` diagonals.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or does not fit in `isize`.
    pub fn reset(&mut self, size: usize) {
        assert!(size > 0, "a progress table needs at least one diagonal");

        self.buffer.clear();
        self.buffer.resize(size, 0);
        self.size = isize::try_from(size).expect("table size must fit in isize");
    }

    /// Table size for a partition of the given window lengths.
    pub fn size_for(old_len: usize, new_len: usize) -> usize { 2 * old_len.min(new_len) + 1 }

    fn wrap(&self, k: isize) -> usize {
        usize::try_from(k.rem_euclid(self.size)).expect("euclidean remainder is never negative")
    }
}

impl Index<isize> for ProgressTable {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.buffer[self.wrap(k)] }
}

impl IndexMut<isize> for ProgressTable {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let index = self.wrap(k);
        &mut self.buffer[index]
    }
}
