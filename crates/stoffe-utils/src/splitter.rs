//! Splitting text around one kind of tag.
//!
//! ```text
//! split("see <a>link</a> here", "<a>", "</a>")
//!   => [Text "see ", Tag "<a>link</a>", Text " here"]
//! ```
//!
//! Markers are literal substrings, not patterns. There is no nesting: a tag
//! ends at the first close marker at or after its open marker.

use serde::Serialize;
use stoffe_common::warning::warn_once;
use strum_macros::Display;

use crate::error::TagTextError;

/// What a [`Fragment`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FragmentKind {
    /// Plain text, never to be interpreted as markup.
    Text,
    /// Raw markup from the open marker through the end of the close marker.
    Tag,
}

/// A contiguous slice of the input.
///
/// The fragments returned for an input partition it: concatenated in order
/// they reproduce it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fragment<'a> {
    /// The slice of the input.
    pub value: &'a str,
    /// Whether this is plain text or tag markup.
    #[serde(rename = "type")]
    pub kind: FragmentKind,
}

impl<'a> Fragment<'a> {
    /// A plain-text fragment.
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self {
            value,
            kind: FragmentKind::Text,
        }
    }

    /// A tag fragment.
    #[must_use]
    pub const fn tag(value: &'a str) -> Self {
        Self {
            value,
            kind: FragmentKind::Tag,
        }
    }

    /// Whether this fragment is tag markup.
    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.kind == FragmentKind::Tag
    }
}

/// Where the next tag starting at or after a cursor lies.
enum Span {
    /// No further open marker.
    Rest,
    /// A complete tag: `open_at..close_end`.
    Tag { open_at: usize, close_end: usize },
    /// An open marker with no close marker after it.
    Unterminated { open_at: usize },
}

fn next_span(text: &str, open_marker: &str, close_marker: &str, cursor: usize) -> Span {
    let Some(open_at) = text[cursor..].find(open_marker).map(|i| cursor + i) else {
        return Span::Rest;
    };
    text[open_at..]
        .find(close_marker)
        .map_or(Span::Unterminated { open_at }, |i| Span::Tag {
            open_at,
            close_end: open_at + i + close_marker.len(),
        })
}

/// Scan `text` once, always producing a lossless partition. The first
/// problem met (if any) is returned alongside; the scan recovers from it by
/// keeping the rest of the input as text.
pub(crate) fn scan<'a>(
    text: &'a str,
    open_marker: &str,
    close_marker: &str,
) -> (Vec<Fragment<'a>>, Option<TagTextError>) {
    if open_marker.is_empty() || close_marker.is_empty() {
        let fragments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::text(text)]
        };
        return (fragments, Some(TagTextError::EmptyMarker));
    }

    let mut fragments = Vec::new();
    let mut problem = None;
    let mut cursor = 0;

    // Every arm moves the cursor strictly forward: either to the end of the
    // input or past a close marker that starts at or after `cursor`.
    while cursor < text.len() {
        match next_span(text, open_marker, close_marker, cursor) {
            Span::Rest => {
                fragments.push(Fragment::text(&text[cursor..]));
                cursor = text.len();
            }
            Span::Tag { open_at, close_end } => {
                fragments.push(Fragment::text(&text[cursor..open_at]));
                fragments.push(Fragment::tag(&text[open_at..close_end]));
                cursor = close_end;
            }
            Span::Unterminated { open_at } => {
                problem = Some(TagTextError::UnterminatedTag { offset: open_at });
                fragments.push(Fragment::text(&text[cursor..]));
                cursor = text.len();
            }
        }
    }

    (fragments, problem)
}

/// Split `text` into plain-text and tag fragments.
///
/// A tag that starts exactly at the cursor is preceded by an empty text
/// fragment; an empty input yields no fragments at all.
///
/// Best effort: an open marker without a close marker leaves everything from
/// the current position to the end as a single text fragment, and empty
/// markers leave the whole input as text. Both are reported through the
/// warning sink. Use [`try_split`] to get them as errors instead.
#[must_use]
pub fn split<'a>(text: &'a str, open_marker: &str, close_marker: &str) -> Vec<Fragment<'a>> {
    let (fragments, problem) = scan(text, open_marker, close_marker);
    if let Some(problem) = problem {
        warn_once("Splitter", &format!("{}; kept as text", problem.kind()));
    }
    fragments
}

/// Like [`split`], but refuses input it would have to recover from.
///
/// # Errors
///
/// Returns [`TagTextError::EmptyMarker`] if either marker is empty and
/// [`TagTextError::UnterminatedTag`] if an open marker is never closed.
pub fn try_split<'a>(
    text: &'a str,
    open_marker: &str,
    close_marker: &str,
) -> Result<Vec<Fragment<'a>>, TagTextError> {
    match scan(text, open_marker, close_marker) {
        (_, Some(problem)) => Err(problem),
        (fragments, None) => Ok(fragments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_span_finds_close_after_open() {
        assert!(matches!(
            next_span("x<b>y</b>", "<b>", "</b>", 0),
            Span::Tag { open_at: 1, close_end: 9 }
        ));
        assert!(matches!(next_span("x<b>y", "<b>", "</b>", 0), Span::Unterminated { open_at: 1 }));
        assert!(matches!(next_span("</b><b>", "<b>", "</b>", 4), Span::Unterminated { open_at: 4 }));
        assert!(matches!(next_span("plain", "<b>", "</b>", 0), Span::Rest));
    }
}
