mod apply;
mod reconstruct;
mod replay_error;
mod validate;

use std::{slice, vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use apply::EditTarget;
pub use replay_error::ReplayError;

/// A single edit of an edit script.
///
/// `old_index` is always a coordinate of the old sequence: for removals it's
/// the removed element, for insertions it's the splice point, the inserted
/// element ends up right before the old element at `old_index`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Insert { old_index: usize, new_index: usize },
    Remove { old_index: usize },
}

impl Item {
    #[must_use]
    pub fn old_index(&self) -> usize {
        match self {
            Item::Insert { old_index, .. } | Item::Remove { old_index } => *old_index,
        }
    }

    /// The position of the inserted element in the new sequence, `None` for
    /// removals.
    #[must_use]
    pub fn new_index(&self) -> Option<usize> {
        match self {
            Item::Insert { new_index, .. } => Some(*new_index),
            Item::Remove { .. } => None,
        }
    }

    #[must_use]
    pub fn is_insert(&self) -> bool { matches!(self, Item::Insert { .. }) }

    #[must_use]
    pub fn is_remove(&self) -> bool { matches!(self, Item::Remove { .. }) }
}

/// An edit script transforming an old sequence into a new one.
///
/// The items are ordered by non-decreasing `old_index` so that they can be
/// replayed in a single left-to-right pass over the old sequence. A
/// `Difference` doesn't hold on to the diffed sequences, they have to be
/// passed again when replaying it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Difference {
    items: Vec<Item>,
}

impl Difference {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self { Self { items } }

    #[must_use]
    pub fn items(&self) -> &[Item] { &self.items }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> { self.items }

    pub fn iter(&self) -> slice::Iter<'_, Item> { self.items.iter() }

    /// Length of the edit script, i.e. the number of insertions and removals.
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns true when the diffed sequences are equal.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    #[must_use]
    pub fn insert_count(&self) -> usize { self.items.iter().filter(|item| item.is_insert()).count() }

    #[must_use]
    pub fn remove_count(&self) -> usize { self.items.iter().filter(|item| item.is_remove()).count() }
}

impl From<Vec<Item>> for Difference {
    fn from(items: Vec<Item>) -> Self { Self::new(items) }
}

impl IntoIterator for Difference {
    type Item = Item;
    type IntoIter = vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a> IntoIterator for &'a Difference {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}
