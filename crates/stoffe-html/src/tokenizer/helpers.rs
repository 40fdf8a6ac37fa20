//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Shared error paths (`eof-in-tag`, `eof-in-comment`)

use stoffe_common::warning::warn_once;

use super::core::{HTMLTokenizer, TokenizerError, TokenizerState};
use super::token::Token;

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#raw-text-elements)
///
/// Elements whose content the tokenizer reads as raw text. `script` belongs
/// here too: inside a fragment its content is inert text either way.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript",
];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the end of input has been reached.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position
    /// without consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Consume the given ASCII string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    ///
    /// Carriage returns are included because fragments are not run through
    /// newline normalization first.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C' | '\r')
    }

    /// "ASCII upper alpha - Append the lowercase version of the current input
    /// character"; "U+0000 NULL - ... Append a U+FFFD REPLACEMENT CHARACTER".
    pub(super) const fn lowercase_or_replace_null(c: char) -> char {
        Self::replace_null(c.to_ascii_lowercase())
    }

    /// "U+0000 NULL - This is an unexpected-null-character parse error."
    pub(super) const fn replace_null(c: char) -> char {
        if c == '\0' { '\u{FFFD}' } else { c }
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token" - adds the token to the output stream.
    pub(super) fn emit_token(&mut self) {
        let Some(mut token) = self.current_token.take() else {
            return;
        };

        if token.remove_duplicate_attributes() > 0 {
            self.log_parse_error("duplicate-attribute");
        }

        if let Token::StartTag { ref name, .. } = token {
            self.last_start_tag_name = Some(name.clone());

            // [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
            // "Switch the tokenizer to the RAWTEXT state."
            //
            // NOTE: In a full parser the tree builder switches the tokenizer. We run
            // the tokenizer before the parser, so raw text elements are
            // detected here.
            if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.switch_to(TokenizerState::RAWTEXT);
            }
        }

        self.token_stream.push(token);
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::Character { data: c });
    }

    /// Emit one character token per character of `s`.
    pub(super) fn emit_characters(&mut self, s: &str) {
        for c in s.chars() {
            self.emit_character_token(c);
        }
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::EndOfFile);
        self.at_eof = true;
    }

    /// "Append ... to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, s: &str) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_value(s);
        }
    }

    /// "Append the current input character to the comment token's data."
    pub(super) fn append_to_comment(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_comment(c.encode_utf8(&mut [0; 4]));
        }
    }

    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        matches!(
            (&self.last_start_tag_name, &self.current_token),
            (Some(last), Some(Token::EndTag { name, .. })) if name == last
        )
    }
}

// =============================================================================
// Shared Error Paths
// =============================================================================

impl HTMLTokenizer {
    /// "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag token is dropped.
    pub(super) fn eof_in_tag(&mut self) {
        self.log_parse_error("eof-in-tag");
        self.current_token = None;
        self.emit_eof_token();
    }

    /// "EOF - This is an eof-in-comment parse error. Emit the current comment
    /// token. Emit an end-of-file token."
    pub(super) fn eof_in_comment(&mut self) {
        self.log_parse_error("eof-in-comment");
        self.emit_token();
        self.emit_eof_token();
    }

    /// "U+003E GREATER-THAN SIGN (>) - This is an abrupt-closing-of-empty-comment
    /// parse error. Switch to the data state. Emit the current comment token."
    pub(super) fn abrupt_closing_of_empty_comment(&mut self) {
        self.log_parse_error("abrupt-closing-of-empty-comment");
        self.switch_to(TokenizerState::Data);
        self.emit_token();
    }

    /// Record a parse error and report it once.
    pub(super) fn log_parse_error(&mut self, code: &'static str) {
        let position = self.current_pos;
        warn_once("HTML Tokenizer", code);
        self.errors.push(TokenizerError { code, position });
    }
}
