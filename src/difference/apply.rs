use std::collections::VecDeque;

use super::{Difference, Item, ReplayError};

/// An array-like collection that can be updated in place by replaying a
/// `Difference` on it.
///
/// Indices passed to the methods always refer to the collection's current
/// state: earlier insertions and removals of the same replay are already
/// accounted for.
pub trait EditTarget<N> {
    /// Insert `element` so that it ends up at `index`.
    fn insert(&mut self, index: usize, element: &N);

    /// The element at `index` is kept, `element` is its counterpart in the
    /// new sequence.
    fn update(&mut self, index: usize, element: &N);

    /// Remove the element at `index`.
    fn remove(&mut self, index: usize);
}

impl<T: Clone> EditTarget<T> for Vec<T> {
    fn insert(&mut self, index: usize, element: &T) { Vec::insert(self, index, element.clone()); }

    fn update(&mut self, index: usize, element: &T) { self[index] = element.clone(); }

    fn remove(&mut self, index: usize) { Vec::remove(self, index); }
}

impl<T: Clone> EditTarget<T> for VecDeque<T> {
    fn insert(&mut self, index: usize, element: &T) {
        VecDeque::insert(self, index, element.clone());
    }

    fn update(&mut self, index: usize, element: &T) { self[index] = element.clone(); }

    fn remove(&mut self, index: usize) {
        VecDeque::remove(self, index)
            .unwrap_or_else(|| panic!("no element to remove at index {index}"));
    }
}

/// Adapts three callbacks to an `EditTarget`.
struct Callbacks<I, U, R> {
    insert: I,
    update: U,
    remove: R,
}

impl<N, I, U, R> EditTarget<N> for Callbacks<I, U, R>
where
    I: FnMut(usize, &N),
    U: FnMut(usize, &N),
    R: FnMut(usize),
{
    fn insert(&mut self, index: usize, element: &N) { (self.insert)(index, element); }

    fn update(&mut self, index: usize, element: &N) { (self.update)(index, element); }

    fn remove(&mut self, index: usize) { (self.remove)(index); }
}

impl Difference {
    /// Replays the script as a series of callbacks, in the order needed to
    /// mutate an array-like collection holding the old sequence into `new`.
    ///
    /// Old elements that the script doesn't touch are reported through
    /// `update` together with their counterpart in `new`, so that the caller
    /// can verify or copy them.
    ///
    /// ```
    /// use std::cell::RefCell;
    ///
    /// use edit_script::difference;
    ///
    /// let old = ['a', 'b', 'c'];
    /// let new = ['b', 'c', 'd'];
    ///
    /// let log = RefCell::new(Vec::new());
    /// difference(&old, &new).apply(
    ///     &new,
    ///     |index, element| log.borrow_mut().push(format!("insert {element} at {index}")),
    ///     |_, _| {},
    ///     |index| log.borrow_mut().push(format!("remove {index}")),
    /// );
    ///
    /// assert_eq!(log.into_inner(), ["remove 0", "insert d at 2"]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the script references elements outside of `new`; use
    /// `try_apply` for scripts that weren't computed for `new`.
    pub fn apply<N, I, U, R>(&self, new: &[N], insert: I, update: U, remove: R)
    where
        I: FnMut(usize, &N),
        U: FnMut(usize, &N),
        R: FnMut(usize),
    {
        self.apply_to(
            new,
            &mut Callbacks {
                insert,
                update,
                remove,
            },
        );
    }

    /// Replays the script on `target`, which must hold the old sequence.
    ///
    /// ```
    /// use edit_script::difference;
    ///
    /// let mut current = vec![1, 2, 3, 4];
    /// let new = [0, 2, 4, 5];
    ///
    /// difference(&current, &new).apply_to(&new, &mut current);
    /// assert_eq!(current, new);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the script references elements outside of `new`, or if the
    /// target panics on an index it doesn't have.
    pub fn apply_to<N, E>(&self, new: &[N], target: &mut E)
    where
        E: EditTarget<N> + ?Sized,
    {
        // Position in the old sequence, position in the target as it's being
        // mutated, and the next element of `new` to produce.
        let mut old_index: usize = 0;
        let mut target_index: usize = 0;
        let mut new_index: usize = 0;

        for item in &self.items {
            while old_index < item.old_index() {
                target.update(target_index, &new[new_index]);
                old_index += 1;
                target_index += 1;
                new_index += 1;
            }

            match item {
                Item::Remove { .. } => {
                    target.remove(target_index);
                    old_index += 1;
                }
                Item::Insert { .. } => {
                    target.insert(target_index, &new[new_index]);
                    target_index += 1;
                    new_index += 1;
                }
            }
        }

        while new_index < new.len() {
            target.update(target_index, &new[new_index]);
            target_index += 1;
            new_index += 1;
        }
    }

    /// Validates the script against the sequence lengths, then replays it on
    /// `target` like `apply_to`.
    ///
    /// # Errors
    ///
    /// Returns a `ReplayError` without touching `target` if the script can't
    /// transform a sequence of `old_len` elements into `new`.
    pub fn try_apply_to<N, E>(
        &self,
        old_len: usize,
        new: &[N],
        target: &mut E,
    ) -> Result<(), ReplayError>
    where
        E: EditTarget<N> + ?Sized,
    {
        self.validate(old_len, new.len())?;
        self.apply_to(new, target);

        Ok(())
    }

    /// Validates the script against the sequence lengths, then replays it
    /// like `apply`.
    ///
    /// # Errors
    ///
    /// Returns a `ReplayError` without invoking any callback if the script
    /// can't transform a sequence of `old_len` elements into `new`.
    pub fn try_apply<N, I, U, R>(
        &self,
        old_len: usize,
        new: &[N],
        insert: I,
        update: U,
        remove: R,
    ) -> Result<(), ReplayError>
    where
        I: FnMut(usize, &N),
        U: FnMut(usize, &N),
        R: FnMut(usize),
    {
        self.try_apply_to(
            old_len,
            new,
            &mut Callbacks {
                insert,
                update,
                remove,
            },
        )
    }
}
