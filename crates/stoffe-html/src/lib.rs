//! Inert HTML fragment tokenizer and parser.
//!
//! # Scope
//!
//! This crate turns a short piece of markup into a detached
//! [`stoffe_dom::DomTree`], the way a browser fills a `<template>` element:
//!
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RAWTEXT, tag, attribute and comment states
//!   - Character references (numeric and a small named table)
//!
//! - **Fragment tree builder**
//!   - Stack of open elements, void elements, stray end tags
//!
//! Nothing parsed here is ever live: there is no script execution, no
//! resource loading and no styling. Callers copy what they trust out of the
//! tree and discard the rest.
//!
//! # Not Implemented
//!
//! - DOCTYPE and CDATA (read as bogus comments)
//! - RCDATA (`title`/`textarea` content is parsed as normal markup)
//! - Adoption agency, implied end tags, foster parenting

/// Fragment tree construction.
pub mod parser;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{
    FragmentParser, ParseIssue, parse_fragment, parse_fragment_with_issues, tree_to_string,
    write_tree,
};
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenizerError, TokenizerState};
