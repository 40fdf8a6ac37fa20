//! The minimal tree-node capability a renderer needs.

use crate::{DomTree, ElementData, NodeId};

/// Something a renderer can replace the content of.
///
/// This is deliberately smaller than a DOM: a container only has to drop its
/// children and accept new ones at the end. Nodes appended through this trait
/// are always freshly constructed by the caller; nothing from another tree is
/// ever attached.
pub trait NodeContainer {
    /// Remove every existing child.
    fn remove_all_children(&mut self);

    /// Append a text node holding `data` verbatim.
    fn append_text(&mut self, data: &str);

    /// Append a new element built from `element`, with `text` as its only
    /// child when non-empty.
    fn append_element(&mut self, element: ElementData, text: &str);
}

/// A [`NodeContainer`] over one node of a [`DomTree`].
pub struct Container<'a> {
    tree: &'a mut DomTree,
    id: NodeId,
}

impl<'a> Container<'a> {
    /// Wrap `id` in `tree`.
    pub const fn new(tree: &'a mut DomTree, id: NodeId) -> Self {
        Self { tree, id }
    }
}

impl NodeContainer for Container<'_> {
    fn remove_all_children(&mut self) {
        self.tree.remove_all_children(self.id);
    }

    fn append_text(&mut self, data: &str) {
        let text = self.tree.create_text_node(data);
        self.tree.append_child(self.id, text);
    }

    fn append_element(&mut self, element: ElementData, text: &str) {
        let node = self.tree.alloc(crate::NodeType::Element(element));
        self.tree.set_text_content(node, text);
        self.tree.append_child(self.id, node);
    }
}
