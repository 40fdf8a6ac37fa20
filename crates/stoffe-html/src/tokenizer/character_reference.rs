//! Character reference decoding for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The HTML standard walks eight states to decode `&...;`. Fragments are short, so the
//! same outcome is computed here with lookahead, called right after the `&`
//! has been consumed.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::core::HTMLTokenizer;

/// Named character references likely to appear in link text.
/// Keys are entity names without the leading `&`. Legacy entries (no
/// semicolon) match the way browsers still accept them.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("amp;", "&"),
        ("amp", "&"),
        ("lt;", "<"),
        ("lt", "<"),
        ("gt;", ">"),
        ("gt", ">"),
        ("quot;", "\""),
        ("quot", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"),
        ("copy;", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("auml;", "\u{00E4}"),
        ("Auml;", "\u{00C4}"),
        ("ouml;", "\u{00F6}"),
        ("Ouml;", "\u{00D6}"),
        ("aring;", "\u{00E5}"),
        ("Aring;", "\u{00C5}"),
        ("euro;", "\u{20AC}"),
    ])
});

/// Longest entity name in [`NAMED_ENTITIES`], semicolon included.
const MAX_ENTITY_LEN: usize = 8;

impl HTMLTokenizer {
    /// Decode the character reference following an already consumed `&`.
    ///
    /// Returns the replacement text, or `"&"` (consuming nothing further) when
    /// the input does not start a recognised reference.
    pub(super) fn consume_character_reference(&mut self, in_attribute: bool) -> String {
        match self.peek_codepoint(0) {
            // "U+0023 NUMBER SIGN (#) - Switch to the numeric character reference state."
            Some('#') => self.consume_numeric_reference(),
            // "ASCII alphanumeric - Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => self.consume_named_reference(in_attribute),
            // "Anything else - Flush code points consumed as a character reference."
            _ => "&".to_string(),
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    fn consume_named_reference(&mut self, in_attribute: bool) -> String {
        let candidate: String = self.input[self.current_pos..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == ';')
            .take(MAX_ENTITY_LEN)
            .collect();

        // "Consume the maximum number of characters possible"
        let Some((name, value)) = (1..=candidate.len())
            .rev()
            .find_map(|len| NAMED_ENTITIES.get_key_value(&candidate[..len]))
        else {
            return "&".to_string();
        };

        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;),
        // and the next input character is either a U+003D EQUALS SIGN character
        // (=) or an ASCII alphanumeric, then, for historical reasons, flush code
        // points consumed as a character reference."
        if in_attribute && !name.ends_with(';') {
            let next = self.input[self.current_pos + name.len()..].chars().next();
            if next.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric()) {
                return "&".to_string();
            }
        }

        if !name.ends_with(';') {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }
        self.consume_string(name);
        (*value).to_string()
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    fn consume_numeric_reference(&mut self) -> String {
        let hex = matches!(self.peek_codepoint(1), Some('x' | 'X'));
        let prefix_len = if hex { 2 } else { 1 };
        let radix = if hex { 16 } else { 10 };

        let digits: String = self.input[self.current_pos + prefix_len..]
            .chars()
            .take_while(|c| c.is_digit(radix))
            .collect();

        // "absence-of-digits-in-numeric-character-reference parse error. Flush
        // code points consumed as a character reference."
        if digits.is_empty() {
            self.log_parse_error("absence-of-digits-in-numeric-character-reference");
            return "&".to_string();
        }

        self.current_pos += prefix_len + digits.len();
        if self.next_few_characters_are(";") {
            self.consume_string(";");
        } else {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }

        // [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
        // Null, out-of-range and surrogate code points become U+FFFD.
        let code = u32::from_str_radix(&digits, radix).unwrap_or(u32::MAX);
        let c = match code {
            0 => None,
            _ => char::from_u32(code),
        };
        if c.is_none() {
            self.log_parse_error("invalid-character-reference");
        }
        c.unwrap_or('\u{FFFD}').to_string()
    }
}
