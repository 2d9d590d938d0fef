use log::debug;

use crate::{Difference, solver::Solver};

/// Computes the shortest edit script turning `old` into `new`, comparing
/// elements with `==`.
///
/// ```
/// use edit_script::{Item, difference};
///
/// let old: Vec<char> = "abc".chars().collect();
/// let new: Vec<char> = "abd".chars().collect();
///
/// assert_eq!(
///     difference(&old, &new).items(),
///     [
///         Item::Remove { old_index: 2 },
///         Item::Insert {
///             old_index: 3,
///             new_index: 2
///         }
///     ]
/// );
/// ```
#[must_use]
pub fn difference<T>(old: &[T], new: &[T]) -> Difference
where
    T: PartialEq,
{
    difference_by(old, new, |old, new| old == new)
}

/// Computes the shortest edit script turning `old` into `new`, deciding
/// whether two elements are the same with `equals`.
///
/// The two sequences can have different element types. `equals` must be a
/// pure function of its arguments; it's called at most once for every pair
/// of positions, so it may be expensive.
///
/// ```
/// use edit_script::difference_by;
///
/// let old = ["Apple", "banana", "Cherry"];
/// let new = ["apple", "cherry"];
///
/// let difference = difference_by(&old, &new, |old, new| old.eq_ignore_ascii_case(new));
/// assert_eq!(difference.remove_count(), 1);
/// assert_eq!(difference.insert_count(), 0);
/// ```
#[must_use]
pub fn difference_by<O, N, F>(old: &[O], new: &[N], equals: F) -> Difference
where
    F: FnMut(&O, &N) -> bool,
{
    let mut solver = Solver::new(old, new, equals);
    let items = solver.solve();

    debug!(
        "Diffed {} old and {} new elements into {} edits with {} comparisons",
        old.len(),
        new.len(),
        items.len(),
        solver.evaluations()
    );

    Difference::new(items)
}
