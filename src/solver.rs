//! Myers' diff algorithm in linear space.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)` for the equality cache, `O(min(N,M))` for the search
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The edit graph of two windows is searched from both corners at once until
//! the furthest reaching forward and backward paths overlap. The snake where
//! they meet is the middle snake of a shortest edit script, so the problem
//! splits into the partition before the snake and the partition after it.
//! Partitions are kept on an explicit stack and solved left to right, which
//! emits items in old-index order without sorting.

mod equality_cache;
mod progress_table;
mod window;

use std::ops::RangeInclusive;

use equality_cache::EqualityCache;
use log::trace;
use progress_table::ProgressTable;
use window::Window;

use crate::Item;

/// Outcome of searching a partition of the edit graph for its middle snake.
#[derive(Debug)]
enum Partition {
    /// The windows are equal.
    Unchanged,
    /// A single insertion or removal turns the old window into the new one.
    Edit(Item),
    /// The windows before and after the middle snake, both still to be
    /// solved.
    Split {
        before: (Window, Window),
        after: (Window, Window),
    },
}

/// The search directions of the bidirectional search.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Solves the shortest edit script between an old and a new sequence,
/// comparing elements through a memoized predicate.
pub struct Solver<'a, O, N, F>
where
    F: FnMut(&O, &N) -> bool,
{
    cache: EqualityCache<'a, O, N, F>,
    forward: ProgressTable,
    backward: ProgressTable,
}

impl<'a, O, N, F> Solver<'a, O, N, F>
where
    F: FnMut(&O, &N) -> bool,
{
    pub fn new(old: &'a [O], new: &'a [N], equals: F) -> Self {
        Self {
            cache: EqualityCache::new(old, new, equals),
            forward: ProgressTable::default(),
            backward: ProgressTable::default(),
        }
    }

    /// Number of distinct element pairs compared so far.
    pub fn evaluations(&self) -> usize { self.cache.evaluations() }

    /// Returns the shortest edit script turning the whole old sequence into
    /// the whole new one.
    pub fn solve(&mut self) -> Vec<Item> {
        self.solve_windows(
            Window::whole(self.cache.old_len()),
            Window::whole(self.cache.new_len()),
        )
    }

    fn solve_windows(&mut self, old: Window, new: Window) -> Vec<Item> {
        assert!(
            old.positions().end <= self.cache.old_len() && new.positions().end <= self.cache.new_len(),
            "windows {old:?} and {new:?} reach past the diffed sequences"
        );

        let mut items = Vec::new();
        let mut pending = vec![(old, new)];

        while let Some((old, new)) = pending.pop() {
            if new.is_empty() {
                items.extend(old.positions().map(|old_index| Item::Remove { old_index }));
                continue;
            }

            if old.is_empty() {
                items.extend(new.positions().map(|new_index| Item::Insert {
                    old_index: old.offset(),
                    new_index,
                }));
                continue;
            }

            match self.find_middle_snake(old, new) {
                Partition::Unchanged => {}
                Partition::Edit(item) => items.push(item),
                Partition::Split { before, after } => {
                    // LIFO: `before` has to be solved first.
                    pending.push(after);
                    pending.push(before);
                }
            }
        }

        items
    }

    /// The divide part of the divide-and-conquer strategy. Runs the forward
    /// and backward searches step by step until their furthest reaching paths
    /// overlap.
    ///
    /// By Lemma 1 in the paper the length of the shortest edit script has
    /// the same parity as `old.len() + new.len()`: when it's odd, the overlap
    /// is detected by the forward search, otherwise by the backward one.
    fn find_middle_snake(&mut self, old: Window, new: Window) -> Partition {
        let max_distance = old.len() + new.len();
        let table_size = ProgressTable::size_for(old.len(), new.len());
        self.forward.reset(table_size);
        self.backward.reset(table_size);

        let overlapping_direction = if max_distance % 2 == 1 {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let last_step = signed(max_distance.div_ceil(2) + 1);
        for step in 0..last_step {
            let diagonals = diagonals(step, old.len(), new.len());

            let partition = self
                .extend_forward(old, new, step, diagonals.clone(), overlapping_direction)
                .or_else(|| {
                    self.extend_backward(old, new, step, diagonals, overlapping_direction)
                });

            if let Some(partition) = partition {
                return partition;
            }
        }

        unreachable!("the searches of {old:?} and {new:?} never overlapped")
    }

    fn extend_forward(
        &mut self,
        old: Window,
        new: Window,
        step: isize,
        diagonals: RangeInclusive<isize>,
        overlapping_direction: Direction,
    ) -> Option<Partition> {
        let length_diff = signed(old.len()) - signed(new.len());

        for k in diagonals.step_by(2) {
            let moved_down = k == -step || (k != step && self.forward[k - 1] < self.forward[k + 1]);
            let start_x = if moved_down {
                self.forward[k + 1]
            } else {
                self.forward[k - 1] + 1
            };
            let start_y = diagonal_y(start_x, k);

            let (mut end_x, mut end_y) = (start_x, start_y);
            while end_x < old.len()
                && end_y < new.len()
                && self.cache.lookup(old.absolute(end_x), new.absolute(end_y))
            {
                end_x += 1;
                end_y += 1;
            }

            self.forward[k] = end_x;

            if !matches!(overlapping_direction, Direction::Forward) {
                continue;
            }

            let backward_k = length_diff - k;
            if (-(step - 1)..=step - 1).contains(&backward_k)
                && end_x + self.backward[backward_k] >= old.len()
            {
                trace!(
                    "forward search met the backward one in step {step} on diagonal {k}: \
                     old {old:?}, new {new:?}"
                );

                if step == 1 {
                    // The middle snake is the whole script: a single edit
                    // followed by the remaining common elements.
                    return Some(Partition::Edit(if moved_down {
                        Item::Insert {
                            old_index: old.offset() + start_x,
                            new_index: new.absolute(start_y - 1),
                        }
                    } else {
                        Item::Remove {
                            old_index: old.absolute(start_x - 1),
                        }
                    }));
                }

                return Some(Partition::Split {
                    before: (old.slice(0..start_x), new.slice(0..start_y)),
                    after: (
                        old.slice(end_x..old.len()),
                        new.slice(end_y..new.len()),
                    ),
                });
            }
        }

        None
    }

    /// Same as `extend_forward` but coordinates are measured from the end of
    /// the windows, so `x` and `y` grow towards their start.
    fn extend_backward(
        &mut self,
        old: Window,
        new: Window,
        step: isize,
        diagonals: RangeInclusive<isize>,
        overlapping_direction: Direction,
    ) -> Option<Partition> {
        let length_diff = signed(old.len()) - signed(new.len());

        for k in diagonals.step_by(2) {
            let moved_up = k == -step || (k != step && self.backward[k - 1] < self.backward[k + 1]);
            let start_x = if moved_up {
                self.backward[k + 1]
            } else {
                self.backward[k - 1] + 1
            };
            let start_y = diagonal_y(start_x, k);

            let (mut end_x, mut end_y) = (start_x, start_y);
            while end_x < old.len()
                && end_y < new.len()
                && self.cache.lookup(
                    old.absolute(old.len() - 1 - end_x),
                    new.absolute(new.len() - 1 - end_y),
                )
            {
                end_x += 1;
                end_y += 1;
            }

            self.backward[k] = end_x;

            if !matches!(overlapping_direction, Direction::Backward) {
                continue;
            }

            let forward_k = length_diff - k;
            if (-step..=step).contains(&forward_k) && self.forward[forward_k] + end_x >= old.len() {
                trace!(
                    "backward search met the forward one in step {step} on diagonal {k}: \
                     old {old:?}, new {new:?}"
                );

                if step == 0 {
                    return Some(Partition::Unchanged);
                }

                return Some(Partition::Split {
                    before: (
                        old.slice(0..old.len() - end_x),
                        new.slice(0..new.len() - end_y),
                    ),
                    after: (
                        old.slice(old.len() - start_x..old.len()),
                        new.slice(new.len() - start_y..new.len()),
                    ),
                });
            }
        }

        None
    }
}

/// The diagonals reachable in `step`. Around the corners of the edit graph
/// the range shrinks, as paths can't leave the graph.
fn diagonals(step: isize, old_len: usize, new_len: usize) -> RangeInclusive<isize> {
    let (old_len, new_len) = (signed(old_len), signed(new_len));

    let min_k = if step <= new_len {
        -step
    } else {
        step - 2 * new_len
    };
    let max_k = if step <= old_len {
        step
    } else {
        2 * old_len - step
    };

    min_k..=max_k
}

/// The `y` coordinate of the point `x` on diagonal `k`.
fn diagonal_y(x: usize, k: isize) -> usize {
    x.checked_add_signed(-k)
        .expect("furthest reaching points never leave the edit graph")
}

fn signed(value: usize) -> isize { isize::try_from(value).expect("sequence lengths must fit in isize") }

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn solve(old: &str, new: &str) -> Vec<Item> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        Solver::new(&old, &new, |o: &char, n: &char| o == n).solve()
    }

    fn remove(old_index: usize) -> Item { Item::Remove { old_index } }

    fn insert(old_index: usize, new_index: usize) -> Item {
        Item::Insert {
            old_index,
            new_index,
        }
    }

    #[test]
    fn test_empty_sequences() {
        assert!(solve("", "").is_empty());
    }

    #[test]
    fn test_remove_only() {
        assert_eq!(solve("a", ""), vec![remove(0)]);
        assert_eq!(solve("abc", ""), vec![remove(0), remove(1), remove(2)]);
    }

    #[test]
    fn test_insert_only() {
        assert_eq!(solve("", "a"), vec![insert(0, 0)]);
        assert_eq!(solve("", "abc"), vec![insert(0, 0), insert(0, 1), insert(0, 2)]);
    }

    #[test]
    fn test_nothing_in_common() {
        assert_eq!(
            solve("abc", "def"),
            vec![
                remove(0),
                remove(1),
                remove(2),
                insert(3, 0),
                insert(3, 1),
                insert(3, 2)
            ]
        );
    }

    #[test]
    fn test_myers_paper_example() {
        assert_debug_snapshot!(solve("abcabba", "cbabac"), @r"
        [
            Remove {
                old_index: 0,
            },
            Insert {
                old_index: 1,
                new_index: 0,
            },
            Remove {
                old_index: 2,
            },
            Remove {
                old_index: 5,
            },
            Insert {
                old_index: 7,
                new_index: 5,
            },
        ]
        ");
    }

    #[test]
    fn test_insert_inside_removed_run() {
        assert_eq!(
            solve("abgdef", "gh"),
            vec![
                remove(0),
                remove(1),
                remove(3),
                remove(4),
                insert(5, 1),
                remove(5)
            ]
        );
    }

    #[test]
    fn test_single_edit_partitions() {
        assert_eq!(solve("a", "ab"), vec![insert(1, 1)]);
        assert_eq!(solve("a", "ba"), vec![insert(0, 0)]);
        assert_eq!(solve("ab", "a"), vec![remove(1)]);
        assert_eq!(solve("ba", "a"), vec![remove(0)]);
        assert_eq!(solve("aaa", "abcabcac").len(), 5);
    }

    #[test]
    fn test_skewed_windows_with_aliased_diagonals() {
        assert_eq!(solve("a", "bab"), vec![insert(0, 0), insert(1, 2)]);
        assert_eq!(solve("b", "abc"), vec![insert(0, 0), insert(1, 2)]);
        assert_eq!(
            solve("a", "bcd"),
            vec![remove(0), insert(1, 0), insert(1, 1), insert(1, 2)]
        );
        assert_eq!(solve("x", "xyxy"), vec![insert(0, 0), insert(0, 1), insert(1, 3)]);
        assert_eq!(solve("abc", "b"), vec![remove(0), remove(2)]);
    }

    #[test]
    fn test_equal_sequences() {
        assert!(solve("abc", "abc").is_empty());
        assert!(solve("aa", "aa").is_empty());
    }

    #[test]
    fn test_each_pair_is_compared_once() {
        let old: Vec<char> = "the quick brown fox".chars().collect();
        let new: Vec<char> = "a quick brown dog jumps".chars().collect();
        let calls = Cell::new(0);

        let mut solver = Solver::new(&old, &new, |o: &char, n: &char| {
            calls.set(calls.get() + 1);
            o == n
        });
        solver.solve();

        assert_eq!(calls.get(), solver.evaluations());
        assert!(calls.get() <= old.len() * new.len());
    }

    #[test]
    fn test_mixed_element_types() {
        let old = [1_u32, 2, 3];
        let new = ["1", "3", "4"];

        let items = Solver::new(&old, &new, |o: &u32, n: &&str| o.to_string() == *n).solve();

        assert_eq!(items, vec![remove(1), insert(3, 2)]);
    }

    #[test]
    fn test_diagonals_shrink_at_the_corners() {
        assert_eq!(diagonals(0, 3, 1), 0..=0);
        assert_eq!(diagonals(1, 3, 1), -1..=1);
        assert_eq!(diagonals(2, 3, 1), 0..=2);
        assert_eq!(diagonals(3, 3, 1), 1..=3);
    }

    #[test]
    #[should_panic(expected = "reach past the diffed sequences")]
    fn test_window_outside_of_sequences() {
        let old = ['a'];
        let new = ['a'];

        Solver::new(&old, &new, |o: &char, n: &char| o == n)
            .solve_windows(Window::whole(2), Window::whole(1));
    }
}
