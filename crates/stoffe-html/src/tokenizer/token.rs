use core::fmt;
use std::collections::HashSet;

/// A `name="value"` pair on a tag token.
///
/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Value with character references already decoded.
    pub value: String,
}

impl Attribute {
    /// Pair a name with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What the fragment tokenizer emits.
///
/// DOCTYPE tokens do not exist here: inside a fragment `<!DOCTYPE ...>` is
/// read as a bogus comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr=value ...>` or `<name ... />`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Whether the tag ended in `/>`.
        self_closing: bool,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// `</name>`. Attributes on end tags are legal to tokenize but never used.
    EndTag {
        /// Lowercased tag name.
        name: String,
        /// Attributes written on the end tag.
        attributes: Vec<Attribute>,
    },

    /// `<!-- data -->`, or a bogus comment.
    Comment {
        /// Text between the delimiters.
        data: String,
    },

    /// One character of text.
    Character {
        /// The character.
        data: char,
    },

    /// No more input.
    EndOfFile,
}

impl Token {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset, and its attributes list must be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// An end tag with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
            attributes: Vec::new(),
        }
    }

    /// A comment with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    fn tag_parts_mut(&mut self) -> Option<(&mut String, &mut Vec<Attribute>)> {
        match self {
            Self::StartTag {
                name, attributes, ..
            }
            | Self::EndTag { name, attributes } => Some((name, attributes)),
            _ => None,
        }
    }

    // The mutators below are called by the state machine on the token it is
    // building. On a token of the wrong kind they do nothing.

    /// "Append the current input character to the current tag token's tag name."
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Some((name, _)) = self.tag_parts_mut() {
            name.push(c);
        }
    }

    /// "Set the self-closing flag of the current tag token."
    pub fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// "Append the current input character to the comment token's data."
    pub fn append_to_comment(&mut self, s: &str) {
        if let Self::Comment { data } = self {
            data.push_str(s);
        }
    }

    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    pub fn start_new_attribute(&mut self) {
        if let Some((_, attributes)) = self.tag_parts_mut() {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// Append to the name of the attribute being built.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.tag_parts_mut().and_then(|(_, a)| a.last_mut()) {
            attr.name.push(c);
        }
    }

    /// Append to the value of the attribute being built.
    pub fn append_to_current_attribute_value(&mut self, s: &str) {
        if let Some(attr) = self.tag_parts_mut().and_then(|(_, a)| a.last_mut()) {
            attr.value.push_str(s);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "if there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute must
    /// be removed from the token."
    ///
    /// Done once at emit time, keeping the first occurrence of each name.
    /// Returns how many attributes were dropped.
    pub fn remove_duplicate_attributes(&mut self) -> usize {
        let Some((_, attributes)) = self.tag_parts_mut() else {
            return 0;
        };
        let before = attributes.len();
        let mut seen = HashSet::new();
        attributes.retain(|attr| seen.insert(attr.name.clone()));
        before - attributes.len()
    }
}

/// Tags and comments print as markup; characters print escaped in quotes.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                f.write_str("<")?;
                f.write_str(name)?;
                for Attribute { name, value } in attributes {
                    write!(f, " {name}=\"{value}\"")?;
                }
                f.write_str(if *self_closing { " />" } else { ">" })
            }
            Self::EndTag { name, .. } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => write!(f, "{:?}", data.to_string()),
            Self::EndOfFile => f.write_str("EOF"),
        }
    }
}
