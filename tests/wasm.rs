#![cfg(feature = "wasm")]

use edit_script::{BuiltinTokenizer, wasm::*};
use pretty_assertions::assert_eq;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_text() {
    let items = diff_text("Hi there!", "Hi you!", BuiltinTokenizer::Word);

    assert_eq!(items.len(), 2);

    assert_eq!(items[0].kind(), "remove");
    assert_eq!(items[0].old_index(), 2);
    assert_eq!(items[0].new_index(), None);
    assert_eq!(items[0].text(), "there!");

    assert_eq!(items[1].kind(), "insert");
    assert_eq!(items[1].old_index(), 3);
    assert_eq!(items[1].new_index(), Some(2));
    assert_eq!(items[1].text(), "you!");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_diff_identical_text() {
    assert!(diff_text("same\ntext\n", "same\ntext\n", BuiltinTokenizer::Line).is_empty());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_patch_text() {
    let old = "The quick brown fox\njumps over the lazy dog.";
    let new = "The quick red fox\nleaps over the dog!";

    for tokenizer in [
        BuiltinTokenizer::Character,
        BuiltinTokenizer::Word,
        BuiltinTokenizer::Line,
    ] {
        assert_eq!(patch_text(old, new, tokenizer), new);
    }
}
