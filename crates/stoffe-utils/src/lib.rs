//! Tag-aware text rendering and small page helpers.
//!
//! The centrepiece is [`set_text_with_tag`]: it fills a container with text
//! in which exactly one kind of tag is honoured, e.g. links written as
//! `<a class="text-link" href="...">...</a>`, while everything else stays
//! literal text. It builds on [`split`], which partitions the text into
//! plain-text and tag fragments.
//!
//! ```text
//! "see <a class=\"text-link\" href=\"/x\" onclick=\"evil()\">docs</a>!"
//!
//!   #container
//!     "see "
//!     <a class="text-link" href="/x">
//!       "docs"
//!     "!"
//! ```
//!
//! The rest of the crate is the page toolkit the renderer ships with:
//! an element factory ([`create_element`]), text truncation, class helpers,
//! dark mode switching, an error message box and an image URL check.

pub mod element;
pub mod error;
pub mod page;
pub mod renderer;
pub mod splitter;

pub use element::{ElementSpec, add_classes, create_element};
pub use error::TagTextError;
pub use page::{
    ColorScheme, DEFAULT_MAX_DEPTH, ErrorMessage, ErrorMessageOptions, apply_color_scheme,
    dismiss_error_message, first_ancestor_with_class, show_error_message, toggle_dark_mode,
    truncate,
};
pub use renderer::{
    AllowedProperties, RenderOptions, RenderReport, set_text_with_tag, set_text_with_tag_opts,
};
pub use splitter::{Fragment, FragmentKind, split, try_split};
pub use stoffe_common::net::url_is_image;
