use std::collections::HashMap;

/// Memoizes the caller's equality predicate so that every
/// `(old_index, new_index)` pair of the original sequences is compared at
/// most once during a whole diff computation.
///
/// Indices are absolute, so the cache is shared by every partition of the
/// edit graph.
pub struct EqualityCache<'a, O, N, F>
where
    F: FnMut(&O, &N) -> bool,
{
    old: &'a [O],
    new: &'a [N],
    equals: F,
    results: HashMap<(usize, usize), bool>,
}

impl<'a, O, N, F> EqualityCache<'a, O, N, F>
where
    F: FnMut(&O, &N) -> bool,
{
    pub fn new(old: &'a [O], new: &'a [N], equals: F) -> Self {
        Self {
            old,
            new,
            equals,
            results: HashMap::new(),
        }
    }

    pub fn old_len(&self) -> usize { self.old.len() }

    pub fn new_len(&self) -> usize { self.new.len() }

    /// Number of distinct pairs the predicate has been evaluated on.
    pub fn evaluations(&self) -> usize { self.results.len() }

    /// Compares `old[old_index]` with `new[new_index]`, invoking the predicate
    /// only the first time the pair is seen.
    pub fn lookup(&mut self, old_index: usize, new_index: usize) -> bool {
        let Self {
            old,
            new,
            equals,
            results,
        } = self;

        *results
            .entry((old_index, new_index))
            .or_insert_with(|| equals(&old[old_index], &new[new_index]))
    }
}
