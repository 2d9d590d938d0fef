use wasm_bindgen::prelude::*;

/// Wrapper type to expose an `Item` and its token to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditItem {
    kind: &'static str,
    old_index: usize,
    new_index: Option<usize>,
    text: String,
}

impl EditItem {
    pub(crate) fn insert(old_index: usize, new_index: usize, text: &str) -> Self {
        Self {
            kind: "insert",
            old_index,
            new_index: Some(new_index),
            text: text.to_owned(),
        }
    }

    pub(crate) fn remove(old_index: usize, text: &str) -> Self {
        Self {
            kind: "remove",
            old_index,
            new_index: None,
            text: text.to_owned(),
        }
    }
}

#[wasm_bindgen]
impl EditItem {
    /// Either `"insert"` or `"remove"`.
    #[must_use]
    pub fn kind(&self) -> String { self.kind.to_owned() }

    #[wasm_bindgen(js_name = oldIndex)]
    #[must_use]
    pub fn old_index(&self) -> usize { self.old_index }

    /// `undefined` for removals.
    #[wasm_bindgen(js_name = newIndex)]
    #[must_use]
    pub fn new_index(&self) -> Option<usize> { self.new_index }

    /// The inserted or removed token.
    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }
}
