//! DOM tree for the stoffe page helpers.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/), plus the
//! [`NodeContainer`] capability that renderers write into.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.
//! [`DomTree::remove_all_children`] releases the removed subtrees and later
//! allocations reuse their slots, so a container can be re-rendered any number
//! of times. A node detached with [`DomTree::remove_child`] stays allocated and
//! can be appended again.

mod container;

pub use container::{Container, NodeContainer};

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    pub next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: We only store the local name and attributes. Namespaces and custom
/// element state are not modelled.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create an element with the given local name and no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: AttributesMap::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the class names from the class attribute, in order.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs
            .get("class")
            .map(String::as_str)
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    /// Whether `class_name` is one of the element's classes.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|c| c == class_name)
    }

    /// [§ 7.1 DOMTokenList add()](https://dom.spec.whatwg.org/#dom-domtokenlist-add)
    ///
    /// Appends `class_name` unless it is already present. Returns whether the
    /// class list changed.
    pub fn add_class(&mut self, class_name: &str) -> bool {
        if class_name.is_empty() || self.has_class(class_name) {
            return false;
        }
        let list = self.attrs.entry("class".to_string()).or_default();
        if !list.trim().is_empty() {
            list.push(' ');
        } else {
            list.clear();
        }
        list.push_str(class_name);
        true
    }

    /// [§ 7.1 DOMTokenList remove()](https://dom.spec.whatwg.org/#dom-domtokenlist-remove)
    ///
    /// Removes every occurrence of `class_name`. Returns whether it was present.
    pub fn remove_class(&mut self, class_name: &str) -> bool {
        if !self.has_class(class_name) {
            return false;
        }
        let remaining: Vec<&str> = self.classes().filter(|c| *c != class_name).collect();
        let joined = remaining.join(" ");
        let _ = self.attrs.insert("class".to_string(), joined);
        true
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
    /// Released slots, reused by [`DomTree::alloc`].
    free: Vec<NodeId>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
            free: Vec::new(),
        }
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of live nodes: attached or detached, but not released.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    ///
    /// Reuses a released slot when there is one.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = Node::detached(node_type);
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// [§ 4.5 createElement()](https://dom.spec.whatwg.org/#dom-document-createelement)
    ///
    /// Allocate a detached element with the given local name.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    /// [§ 4.5 createTextNode()](https://dom.spec.whatwg.org/#dom-document-createtextnode)
    ///
    /// Allocate a detached text node. The data is stored verbatim; it is never
    /// interpreted as markup.
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.alloc(NodeType::Text(data.to_string()))
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }

        let prev_last_child = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `child` from `parent`, relinking its former siblings. Does
    /// nothing if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(index) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == child)
        else {
            return;
        };
        let _ = self.nodes[parent.0].children.remove(index);

        let prev = self.nodes[child.0].prev_sibling.take();
        let next = self.nodes[child.0].next_sibling.take();
        if let Some(prev_id) = prev {
            self.nodes[prev_id.0].next_sibling = next;
        }
        if let Some(next_id) = next {
            self.nodes[next_id.0].prev_sibling = prev;
        }
        self.nodes[child.0].parent = None;
    }

    /// [§ 4.2.3 Replace all](https://dom.spec.whatwg.org/#concept-node-replace-all)
    ///
    /// "To replace all with a node within a parent, ... remove all parent's
    /// children." Used with a null node, as `innerHTML = ""` does.
    ///
    /// The removed children and their descendants are released: their ids
    /// must not be used afterwards, as new nodes may take their slots.
    pub fn remove_all_children(&mut self, parent: NodeId) {
        let mut released = std::mem::take(&mut self.nodes[parent.0].children);
        while let Some(id) = released.pop() {
            let node = std::mem::replace(
                &mut self.nodes[id.0],
                Node::detached(NodeType::Text(String::new())),
            );
            released.extend(node.children);
            self.free.push(id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over all descendants of a node in tree order, excluding the node.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        DescendantIterator { tree: self, stack }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 4.9 Element: setAttribute()](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// Sets (or replaces) an attribute. Returns the previous value. Attribute
    /// names are lowercased as they are for HTML elements.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Option<String> {
        self.as_element_mut(id)
            .and_then(|e| e.attrs.insert(name.to_ascii_lowercase(), value.to_string()))
    }

    /// [§ 4.4 textContent](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// "The descendant text content of a node node is the concatenation of the
    /// data of all the Text node descendants of node, in tree order."
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.as_text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|d| self.as_text(d))
            .collect()
    }

    /// [§ 4.4 textContent setter](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// "String replace all with the given value within this." An empty string
    /// leaves the node without children.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.remove_all_children(id);
        if !text.is_empty() {
            let text_node = self.create_text_node(text);
            self.append_child(id, text_node);
        }
    }

    /// [§ 4.2.4 getElementById()](https://dom.spec.whatwg.org/#dom-nonelementparentnode-getelementbyid)
    ///
    /// "The getElementById(elementId) method steps are to return the first
    /// element, in tree order, within this's descendants, whose ID is elementId."
    #[must_use]
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(NodeId::ROOT)
            .find(|&id| self.as_element(id).and_then(ElementData::id) == Some(element_id))
    }

    /// First element child of a node, skipping text and comments.
    ///
    /// [§ 4.2.6 firstElementChild](https://dom.spec.whatwg.org/#dom-parentnode-firstelementchild)
    #[must_use]
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.as_element(child).is_some())
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.first_element_child(NodeId::ROOT)
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// "The body element of a document is the first of the html element's children
    /// that is either a body element or a frameset element, or null if there is
    /// no such element."
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;

        self.children(html)
            .iter()
            .find(|&&id| {
                self.as_element(id)
                    .is_some_and(|e| e.tag_name == "body" || e.tag_name == "frameset")
            })
            .copied()
    }

    /// Copy the subtree rooted at `source_id` in `source` into this tree,
    /// returning the new (detached) root.
    ///
    /// [§ 4.2.3 Adopt](https://dom.spec.whatwg.org/#concept-node-adopt)
    pub fn adopt_from(&mut self, source: &Self, source_id: NodeId) -> Option<NodeId> {
        let node = source.get(source_id)?;
        let copy = self.alloc(node.node_type.clone());
        for &child in source.children(source_id) {
            if let Some(child_copy) = self.adopt_from(source, child) {
                self.append_child(copy, child_copy);
            }
        }
        Some(copy)
    }

    /// Borrow `id` as a [`NodeContainer`] that renderers can write into.
    pub fn container(&mut self, id: NodeId) -> Container<'_> {
        Container::new(self, id)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
