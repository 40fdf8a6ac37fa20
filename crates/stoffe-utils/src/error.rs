//! Errors raised while splitting, rendering and locating page elements.

use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// The splitter and renderer treat these as recoverable: they keep going and
/// hand the errors back as issues. Only the `try_*` functions and the
/// element-lookup helpers return them as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagTextError {
    /// An open or close marker was the empty string.
    #[error("open and close markers must not be empty")]
    EmptyMarker,

    /// An open marker with no close marker anywhere after it.
    #[error("open marker at byte {offset} has no matching close marker")]
    UnterminatedTag {
        /// Byte offset of the open marker in the input.
        offset: usize,
    },

    /// A tag fragment whose markup contains no element once parsed.
    #[error("tag fragment #{index} contains no element: {value:?}")]
    MalformedFragment {
        /// Position of the fragment in the split sequence.
        index: usize,
        /// The fragment's raw markup.
        value: String,
    },

    /// No element carries the requested id.
    #[error("no element with id {id:?}")]
    MissingElement {
        /// The id that was looked up.
        id: String,
    },
}

impl TagTextError {
    /// A short name for the kind of problem, without any of the input that
    /// caused it. Used as the warning message.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyMarker => "empty marker",
            Self::UnterminatedTag { .. } => "unterminated tag",
            Self::MalformedFragment { .. } => "tag fragment without an element",
            Self::MissingElement { .. } => "missing element",
        }
    }
}
