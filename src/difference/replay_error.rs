use thiserror::Error;

/// Error type for replaying an edit script against sequences it doesn't
/// describe.
///
/// Scripts computed by this crate never produce these when replayed against
/// the sequences they were computed from; they surface when a `Difference`
/// was built or deserialized elsewhere.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// An item points past the end of the old sequence
    #[error(
        "Invalid edit script: old index {old_index} is out of bounds for an old sequence of \
         {old_len} elements"
    )]
    OldIndexOutOfBounds {
        /// The offending old index
        old_index: usize,
        /// Length of the old sequence
        old_len: usize,
    },

    /// An insertion points past the end of the new sequence
    #[error(
        "Invalid edit script: new index {new_index} is out of bounds for a new sequence of \
         {new_len} elements"
    )]
    NewIndexOutOfBounds {
        /// The offending new index
        new_index: usize,
        /// Length of the new sequence
        new_len: usize,
    },

    /// The items are not sorted by their old index
    #[error(
        "Invalid edit script: item {position} has old index {old_index} which comes before the \
         previous item's old index {previous_old_index}"
    )]
    Unordered {
        /// Position of the offending item in the script
        position: usize,
        /// Old index of the item before it
        previous_old_index: usize,
        /// Old index of the offending item
        old_index: usize,
    },

    /// The same old element is removed more than once
    #[error("Invalid edit script: old element {old_index} is removed more than once")]
    DuplicateRemoval {
        /// The old index removed twice
        old_index: usize,
    },

    /// An insertion doesn't take the next unused element of the new sequence
    #[error(
        "Invalid edit script: item {position} inserts new element {new_index}, but the next new \
         element to produce is {expected_new_index}"
    )]
    InsertOutOfSequence {
        /// Position of the offending item in the script
        position: usize,
        /// The new index the insertion should have referenced
        expected_new_index: usize,
        /// The new index the insertion referenced
        new_index: usize,
    },

    /// Replaying the script doesn't consume the new sequence exactly
    #[error(
        "Invalid edit script: replaying it yields {actual} elements, but the new sequence has \
         {expected}"
    )]
    LengthMismatch {
        /// Length of the new sequence
        expected: usize,
        /// Length produced by the script
        actual: usize,
    },
}
