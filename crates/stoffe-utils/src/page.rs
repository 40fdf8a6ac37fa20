//! Small helpers for pages built on a [`DomTree`].

use std::borrow::Cow;
use std::time::Duration;

use stoffe_dom::{DomTree, NodeId};
use strum_macros::{Display, EnumString};

use crate::element::{ElementSpec, create_element};
use crate::error::TagTextError;

/// How many further ancestors [`first_ancestor_with_class`] climbs past the
/// parent by default.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Class on `<body>` while dark mode is on.
pub const DARK_MODE_CLASS: &str = "darkmode";

/// Class on the error box while it holds messages.
pub const ERROR_BOX_SHOWN_CLASS: &str = "show";

const DARK_TOGGLE_ID: &str = "colormode-toggle-dark";
const LIGHT_TOGGLE_ID: &str = "colormode-toggle-light";

/// Shorten `text` to at most `max_chars` characters plus an ellipsis,
/// cutting at the last space at or before `max_chars` so words stay whole.
///
/// When no such space exists past the first character the cut falls at
/// `max_chars` itself. Text that already fits is returned borrowed.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return Cow::Borrowed(text);
    }

    let cut = chars[..=max_chars]
        .iter()
        .rposition(|&c| c == ' ')
        .filter(|&space| space >= 1)
        .unwrap_or(max_chars);

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push('…');
    Cow::Owned(truncated)
}

/// The nearest proper ancestor of `start` carrying `class_name`.
///
/// Looks at the parent and at most `max_depth` ancestors above it.
#[must_use]
pub fn first_ancestor_with_class(
    tree: &DomTree,
    start: NodeId,
    class_name: &str,
    max_depth: usize,
) -> Option<NodeId> {
    tree.ancestors(start)
        .take(max_depth.saturating_add(1))
        .find(|&id| tree.as_element(id).is_some_and(|e| e.has_class(class_name)))
}

/// A page colour scheme, as reported by `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    /// `light`
    Light,
    /// `dark`
    Dark,
}

/// Switch dark mode on or off.
///
/// Sets or clears [`DARK_MODE_CLASS`] on `<body>` and checks the matching
/// colour mode toggle (`#colormode-toggle-dark` or `#colormode-toggle-light`),
/// unchecking the other as a radio group would. Missing toggles are ignored.
///
/// Returns `false` if the tree has no body.
pub fn toggle_dark_mode(tree: &mut DomTree, enable: bool) -> bool {
    let Some(body) = tree.body() else {
        return false;
    };
    if let Some(element) = tree.as_element_mut(body) {
        let _ = if enable {
            element.add_class(DARK_MODE_CLASS)
        } else {
            element.remove_class(DARK_MODE_CLASS)
        };
    }

    let (on, off) = if enable {
        (DARK_TOGGLE_ID, LIGHT_TOGGLE_ID)
    } else {
        (LIGHT_TOGGLE_ID, DARK_TOGGLE_ID)
    };
    if let Some(toggle) = tree.get_element_by_id(on) {
        let _ = tree.set_attribute(toggle, "checked", "");
    }
    if let Some(toggle) = tree.get_element_by_id(off)
        && let Some(element) = tree.as_element_mut(toggle)
    {
        let _ = element.attrs.remove("checked");
    }
    true
}

/// Apply a system colour scheme preference.
pub fn apply_color_scheme(tree: &mut DomTree, scheme: ColorScheme) -> bool {
    toggle_dark_mode(tree, scheme == ColorScheme::Dark)
}

/// Where and for how long [`show_error_message`] shows a message.
#[derive(Debug, Clone)]
pub struct ErrorMessageOptions {
    /// Id of the error box element.
    pub box_id: String,
    /// Delay before the message should be dismissed. Delays of one second or
    /// less mean the message stays until dismissed explicitly.
    pub auto_close_after: Duration,
}

impl Default for ErrorMessageOptions {
    fn default() -> Self {
        Self {
            box_id: "errors".to_string(),
            auto_close_after: Duration::from_secs(15),
        }
    }
}

/// A message shown by [`show_error_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    /// The error box holding the message.
    pub error_box: NodeId,
    /// The message element.
    pub node: NodeId,
    /// When the caller should call [`dismiss_error_message`], if ever.
    pub auto_close: Option<Duration>,
}

/// Append `text` as a new message to the error box and mark the box shown.
///
/// The tree has no clock; the caller schedules the dismissal using
/// [`ErrorMessage::auto_close`].
///
/// # Errors
///
/// Returns [`TagTextError::MissingElement`] if no element has the box id.
pub fn show_error_message(
    tree: &mut DomTree,
    text: &str,
    options: &ErrorMessageOptions,
) -> Result<ErrorMessage, TagTextError> {
    let error_box = tree
        .get_element_by_id(&options.box_id)
        .ok_or_else(|| TagTextError::MissingElement {
            id: options.box_id.clone(),
        })?;

    if let Some(element) = tree.as_element_mut(error_box) {
        let _ = element.add_class(ERROR_BOX_SHOWN_CLASS);
    }
    let node = create_element(
        tree,
        &ElementSpec {
            tag: "div",
            text,
            parent: Some(error_box),
            ..ElementSpec::default()
        },
    );

    let auto_close = Some(options.auto_close_after).filter(|delay| *delay > Duration::from_secs(1));
    Ok(ErrorMessage {
        error_box,
        node,
        auto_close,
    })
}

/// Remove a message and hide the error box once it holds no more elements.
pub fn dismiss_error_message(tree: &mut DomTree, message: &ErrorMessage) {
    tree.remove_child(message.error_box, message.node);
    let empty = tree.first_element_child(message.error_box).is_none();
    if empty && let Some(element) = tree.as_element_mut(message.error_box) {
        let _ = element.remove_class(ERROR_BOX_SHOWN_CLASS);
    }
}
