//! Building elements in one call.

use stoffe_dom::{DomTree, NodeId};
use stoffe_html::parse_fragment;

/// Everything [`create_element`] needs to know about the new element.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec<'a> {
    /// Tag name, lowercased on creation.
    pub tag: &'a str,
    /// Content. Empty text leaves the element without children.
    pub text: &'a str,
    /// Attributes, set in order. A later duplicate overwrites an earlier one.
    pub attributes: &'a [(&'a str, &'a str)],
    /// Classes to add; see [`add_classes`].
    pub classes: &'a [&'a str],
    /// Node to append the new element to.
    pub parent: Option<NodeId>,
    /// Parse `text` as markup instead of storing it as one text node.
    ///
    /// The markup is built in a detached tree first and copied over node by
    /// node, so only elements, text and comments ever reach `tree`.
    pub allow_markup: bool,
}

/// Create an element from `spec` and return its id.
pub fn create_element(tree: &mut DomTree, spec: &ElementSpec<'_>) -> NodeId {
    let element = tree.create_element(spec.tag);

    for &(name, value) in spec.attributes {
        let _ = tree.set_attribute(element, name, value);
    }

    let _ = add_classes(tree, element, spec.classes);

    if !spec.text.is_empty() {
        if spec.allow_markup {
            let fragment = parse_fragment(spec.text);
            for &child in fragment.children(NodeId::ROOT) {
                if let Some(copy) = tree.adopt_from(&fragment, child) {
                    tree.append_child(element, copy);
                }
            }
        } else {
            tree.set_text_content(element, spec.text);
        }
    }

    if let Some(parent) = spec.parent {
        tree.append_child(parent, element);
    }
    element
}

/// Add classes to the element at `node`.
///
/// Each entry may hold several whitespace-separated names. Empty names and
/// names already present are skipped. Returns whether anything was added;
/// `false` as well when `node` is not an element.
pub fn add_classes(tree: &mut DomTree, node: NodeId, classes: &[&str]) -> bool {
    let Some(element) = tree.as_element_mut(node) else {
        return false;
    };
    let mut added = false;
    for name in classes.iter().flat_map(|entry| entry.split_ascii_whitespace()) {
        added |= element.add_class(name);
    }
    added
}
