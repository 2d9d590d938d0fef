use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod word_tokenizer;

/// A function splitting text into the tokens that get diffed. Tokens borrow
/// from the text and, concatenated, give back the text.
pub type Tokenizer = dyn Fn(&str) -> Vec<&str>;

/// The granularities text can be diffed at.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTokenizer {
    Character,
    Word,
    Line,
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
        }
    }
}
