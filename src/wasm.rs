//! Expose the `edit-script` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{BuiltinTokenizer, Item, text_difference};

mod edit_item;

pub use edit_item::EditItem;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::text_difference` listing the edits that turn
/// `old` into `new`, each carrying the token it inserts or removes.
#[wasm_bindgen(js_name = diffText)]
#[must_use]
pub fn diff_text(old: &str, new: &str, tokenizer: BuiltinTokenizer) -> Vec<EditItem> {
    set_panic_hook();

    let diff = text_difference(old, new, &*tokenizer);
    diff.difference()
        .iter()
        .map(|item| match *item {
            Item::Insert {
                old_index,
                new_index,
            } => EditItem::insert(old_index, new_index, diff.new_tokens()[new_index]),
            Item::Remove { old_index } => EditItem::remove(old_index, diff.old_tokens()[old_index]),
        })
        .collect()
}

/// Rebuilds `new` from `old` through the edit script computed between them.
#[wasm_bindgen(js_name = patchText)]
#[must_use]
pub fn patch_text(old: &str, new: &str, tokenizer: BuiltinTokenizer) -> String {
    set_panic_hook();

    text_difference(old, new, &*tokenizer).reconstruct()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
