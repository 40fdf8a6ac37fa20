//! HTML tokenizer module.
//!
//! Implements the parts of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! that a markup fragment exercises.

/// Character reference decoding per § 13.2.5.72.
mod character_reference;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerError, TokenizerState};
pub use token::{Attribute, Token};
