use super::{Difference, Item, ReplayError};

impl Difference {
    /// Checks that the script can be replayed against an old sequence of
    /// `old_len` elements and produces a sequence of `new_len` elements.
    ///
    /// Only the structure of the script is checked: bounds, ordering, and
    /// that insertions take the new elements in order. Whether the untouched
    /// old elements actually equal their new counterparts isn't.
    ///
    /// # Errors
    ///
    /// Returns the first `ReplayError` found while walking the script.
    pub fn validate(&self, old_len: usize, new_len: usize) -> Result<(), ReplayError> {
        // Old positions already walked past and new elements produced so far.
        let mut consumed_old: usize = 0;
        let mut produced_new: usize = 0;
        let mut previous_old_index: Option<usize> = None;

        for (position, item) in self.items.iter().enumerate() {
            let old_index = item.old_index();

            if let Some(previous_old_index) = previous_old_index {
                if old_index < previous_old_index {
                    return Err(ReplayError::Unordered {
                        position,
                        previous_old_index,
                        old_index,
                    });
                }
            }
            previous_old_index = Some(old_index);

            match *item {
                Item::Remove { old_index } => {
                    if old_index >= old_len {
                        return Err(ReplayError::OldIndexOutOfBounds { old_index, old_len });
                    }
                    if old_index < consumed_old {
                        return Err(ReplayError::DuplicateRemoval { old_index });
                    }

                    produced_new += old_index - consumed_old;
                    consumed_old = old_index + 1;
                }
                Item::Insert {
                    old_index,
                    new_index,
                } => {
                    if old_index > old_len {
                        return Err(ReplayError::OldIndexOutOfBounds { old_index, old_len });
                    }
                    if new_index >= new_len {
                        return Err(ReplayError::NewIndexOutOfBounds { new_index, new_len });
                    }

                    if old_index > consumed_old {
                        produced_new += old_index - consumed_old;
                        consumed_old = old_index;
                    }
                    if new_index != produced_new {
                        return Err(ReplayError::InsertOutOfSequence {
                            position,
                            expected_new_index: produced_new,
                            new_index,
                        });
                    }
                    produced_new += 1;
                }
            }
        }

        let actual = produced_new + (old_len - consumed_old);
        if actual != new_len {
            return Err(ReplayError::LengthMismatch {
                expected: new_len,
                actual,
            });
        }

        Ok(())
    }
}
