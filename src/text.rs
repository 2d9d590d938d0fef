use crate::{Difference, Item, Tokenizer, difference};

/// What happened to a token when turning the old text into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<'a> {
    Kept(&'a str),
    Removed(&'a str),
    Inserted(&'a str),
}

/// The edit script between two texts, together with the tokens it indexes.
///
/// ```
/// use edit_script::{BuiltinTokenizer, Change, text_difference};
///
/// let diff = text_difference("Hi there!", "Hi you!", &*BuiltinTokenizer::Word);
///
/// assert_eq!(
///     diff.changes(),
///     [
///         Change::Kept("Hi"),
///         Change::Kept(" "),
///         Change::Removed("there!"),
///         Change::Inserted("you!"),
///     ]
/// );
/// assert_eq!(diff.reconstruct(), "Hi you!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDifference<'a> {
    old_tokens: Vec<&'a str>,
    new_tokens: Vec<&'a str>,
    difference: Difference,
}

/// Tokenizes both texts and computes the edit script between the token
/// sequences.
#[must_use]
pub fn text_difference<'a>(old: &'a str, new: &'a str, tokenizer: &Tokenizer) -> TextDifference<'a> {
    let old_tokens = (tokenizer)(old);
    let new_tokens = (tokenizer)(new);
    let difference = difference(&old_tokens, &new_tokens);

    TextDifference {
        old_tokens,
        new_tokens,
        difference,
    }
}

impl<'a> TextDifference<'a> {
    #[must_use]
    pub fn old_tokens(&self) -> &[&'a str] { &self.old_tokens }

    #[must_use]
    pub fn new_tokens(&self) -> &[&'a str] { &self.new_tokens }

    #[must_use]
    pub fn difference(&self) -> &Difference { &self.difference }

    /// Every token of both texts in replay order: kept and removed tokens of
    /// the old text interleaved with the inserted tokens of the new one.
    #[must_use]
    pub fn changes(&self) -> Vec<Change<'a>> {
        let mut changes = Vec::with_capacity(self.old_tokens.len() + self.difference.insert_count());
        let mut old_index = 0;

        for item in &self.difference {
            // An insertion may follow the removal of its own splice point.
            let kept_until = item.old_index().max(old_index);
            changes.extend(
                self.old_tokens[old_index..kept_until]
                    .iter()
                    .copied()
                    .map(Change::Kept),
            );
            old_index = kept_until;

            match *item {
                Item::Remove { old_index: removed } => {
                    changes.push(Change::Removed(self.old_tokens[removed]));
                    old_index = removed + 1;
                }
                Item::Insert { new_index, .. } => {
                    changes.push(Change::Inserted(self.new_tokens[new_index]));
                }
            }
        }

        changes.extend(self.old_tokens[old_index..].iter().copied().map(Change::Kept));

        changes
    }

    /// Rebuilds the new text from the old tokens and the edit script.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        let mut text = String::new();
        self.difference
            .reconstruct_with(&self.old_tokens, &self.new_tokens, |token| text.push_str(token));

        text
    }
}
