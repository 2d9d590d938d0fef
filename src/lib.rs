//! Minimal edit scripts between two sequences.
//!
//! The script is computed with the linear-space variant of Myers' algorithm:
//! it only removes and inserts elements, never substitutes them, and has the
//! fewest edits possible.

mod diff;
mod difference;
mod solver;
mod text;
mod tokenizer;

pub use diff::{difference, difference_by};
pub use difference::{Difference, EditTarget, Item, ReplayError};
pub use text::{Change, TextDifference, text_difference};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, character_tokenizer::character_tokenizer,
    line_tokenizer::line_tokenizer, word_tokenizer::word_tokenizer,
};

#[cfg(feature = "wasm")]
pub mod wasm;
