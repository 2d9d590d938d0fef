use super::{Difference, Item, ReplayError};

impl Difference {
    /// Rebuilds the new sequence from `old` by walking the old positions,
    /// skipping removed elements, copying untouched ones, and taking inserted
    /// ones from `new`. Each element of the result is handed to `append` in
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the script references elements outside of `old` or `new`.
    pub fn reconstruct_with<'a, T, F>(&self, old: &'a [T], new: &'a [T], mut append: F)
    where
        F: FnMut(&'a T),
    {
        let mut old_index = 0;

        for item in &self.items {
            while old_index < item.old_index() {
                append(&old[old_index]);
                old_index += 1;
            }

            match *item {
                Item::Remove { .. } => old_index += 1,
                Item::Insert { new_index, .. } => append(&new[new_index]),
            }
        }

        for element in &old[old_index.min(old.len())..] {
            append(element);
        }
    }

    /// Rebuilds the new sequence from `old`, see `reconstruct_with`.
    ///
    /// ```
    /// use edit_script::difference;
    ///
    /// let old: Vec<char> = "abcabba".chars().collect();
    /// let new: Vec<char> = "cbabac".chars().collect();
    ///
    /// assert_eq!(difference(&old, &new).reconstruct(&old, &new), new);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the script references elements outside of `old` or `new`.
    #[must_use]
    pub fn reconstruct<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<T> {
        let mut result = Vec::with_capacity(new.len());
        self.reconstruct_with(old, new, |element| result.push(element.clone()));

        result
    }

    /// Validates the script against `old` and `new`, then rebuilds the new
    /// sequence like `reconstruct`.
    ///
    /// # Errors
    ///
    /// Returns a `ReplayError` if the script can't transform `old` into a
    /// sequence of `new.len()` elements.
    pub fn try_reconstruct<T: Clone>(&self, old: &[T], new: &[T]) -> Result<Vec<T>, ReplayError> {
        self.validate(old.len(), new.len())?;

        Ok(self.reconstruct(old, new))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::difference;

    #[test_case("", ""; "0x0")]
    #[test_case("a", ""; "1x0")]
    #[test_case("", "a"; "0x1")]
    #[test_case("a", "a"; "1x1 equal")]
    #[test_case("a", "b"; "1x1 different")]
    #[test_case("ab", ""; "2x0")]
    #[test_case("ab", "c"; "2x1 disjoint")]
    #[test_case("ab", "a"; "2x1 keep first")]
    #[test_case("ab", "b"; "2x1 keep last")]
    #[test_case("aa", "a"; "2x1 repeated")]
    #[test_case("", "ab"; "0x2")]
    #[test_case("a", "bc"; "1x2 disjoint")]
    #[test_case("a", "ab"; "1x2 append")]
    #[test_case("a", "ba"; "1x2 prepend")]
    #[test_case("a", "aa"; "1x2 repeated")]
    #[test_case("ab", "cd"; "2x2 disjoint")]
    #[test_case("ab", "ad"; "2x2 keep first")]
    #[test_case("ab", "ca"; "2x2 shift right")]
    #[test_case("ab", "bd"; "2x2 shift left")]
    #[test_case("ab", "cb"; "2x2 keep last")]
    #[test_case("aa", "ad"; "2x2 repeated keep first")]
    #[test_case("ab", "ab"; "2x2 equal")]
    #[test_case("ab", "aa"; "2x2 duplicate first")]
    #[test_case("ab", "bb"; "2x2 duplicate last")]
    #[test_case("ab", "ba"; "2x2 swap")]
    #[test_case("aa", "ba"; "2x2 replace first")]
    #[test_case("aa", "ab"; "2x2 replace last")]
    #[test_case("ba", "aa"; "2x2 repeated after replace")]
    #[test_case("aa", "aa"; "2x2 repeated equal")]
    #[test_case("abcabba", "cbabac"; "myers paper")]
    #[test_case("abgdef", "gh"; "shrink")]
    fn test_reconstruct(old: &str, new: &str) {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        let difference = difference(&old, &new);

        assert_eq!(difference.reconstruct(&old, &new), new);
        assert_eq!(difference.try_reconstruct(&old, &new), Ok(new));
    }

    #[test]
    fn test_reconstruct_with_borrows_elements() {
        let old = vec![String::from("keep"), String::from("drop")];
        let new = vec![String::from("keep"), String::from("add")];

        let mut rebuilt: Vec<&str> = Vec::new();
        difference(&old, &new).reconstruct_with(&old, &new, |element| rebuilt.push(element));

        assert_eq!(rebuilt, vec!["keep", "add"]);
    }

    #[test]
    fn test_try_reconstruct_rejects_foreign_script() {
        let old = vec![1, 2, 3];
        let new = vec![1, 2];
        let script = difference(&[1, 2, 3, 4], &[1, 2]);

        assert_eq!(
            script.try_reconstruct(&old, &new),
            Err(ReplayError::OldIndexOutOfBounds {
                old_index: 3,
                old_len: 3
            })
        );
    }
}
