//! Tests for DOM tree mutation: remove_child, remove_all_children, text content,
//! class lists and the container capability.

use pretty_assertions::assert_eq;
use stoffe_dom::{DomTree, ElementData, NodeContainer, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

/// Helper to build `parent` with children `a`, `b`, `c` under the document.
fn three_children(tree: &mut DomTree) -> (NodeId, NodeId, NodeId, NodeId) {
    let parent = alloc_element(tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let a = alloc_element(tree, "a");
    let b = alloc_element(tree, "b");
    let c = alloc_element(tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);
    (parent, a, b, c)
}

// ========== remove_child ==========

#[test]
fn test_remove_child_single_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent).len(), 1);

    tree.remove_child(parent, child);

    assert_eq!(tree.children(parent).len(), 0);
    assert_eq!(tree.parent(child), None);
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);

    tree.remove_child(parent, a);

    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);

    tree.remove_child(parent, b);

    // a and c are siblings now
    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
}

#[test]
fn test_remove_child_not_a_child_is_noop() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let stranger = alloc_element(&mut tree, "x");

    tree.remove_child(parent, stranger);

    assert_eq!(tree.children(parent), &[a, b, c]);
}

#[test]
fn test_append_child_moves_from_old_parent() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let other = alloc_element(&mut tree, "section");
    tree.append_child(NodeId::ROOT, other);

    tree.append_child(other, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.children(other), &[b]);
    assert_eq!(tree.parent(b), Some(other));
    assert_eq!(tree.prev_sibling(b), None);
}

// ========== remove_all_children ==========

#[test]
fn test_remove_all_children_releases_subtrees() {
    let mut tree = DomTree::new();
    let (parent, a, ..) = three_children(&mut tree);
    let text = tree.create_text_node("inside a");
    tree.append_child(a, text);
    assert_eq!(tree.len(), 6);

    tree.remove_all_children(parent);

    assert!(tree.children(parent).is_empty());
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.parent(parent), Some(NodeId::ROOT));
}

#[test]
fn test_released_slots_are_reused() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let before = [a, b, c];

    tree.remove_all_children(parent);
    let d = tree.create_text_node("new");
    tree.append_child(parent, d);

    assert!(before.contains(&d));
    assert_eq!(tree.as_text(d), Some("new"));
    assert_eq!(tree.children(parent), &[d]);
    assert_eq!(tree.parent(d), Some(parent));
}

#[test]
fn test_repeated_replacement_keeps_arena_bounded() {
    let mut tree = DomTree::new();
    let (parent, ..) = three_children(&mut tree);

    for round in 0..100 {
        tree.remove_all_children(parent);
        let link = alloc_element(&mut tree, "a");
        tree.append_child(parent, link);
        tree.set_text_content(link, &format!("round {round}"));
    }

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.text_content(parent), "round 99");
    assert_eq!(tree.descendants(NodeId::ROOT).count() + 1, tree.len());
}

#[test]
fn test_removed_child_survives_and_can_be_reattached() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);

    tree.remove_child(parent, b);
    let len = tree.len();
    tree.append_child(parent, b);

    assert_eq!(tree.len(), len);
    assert_eq!(tree.children(parent), &[a, c, b]);
    assert_eq!(tree.as_element(b).unwrap().tag_name, "b");
}

// ========== text content ==========

#[test]
fn test_text_content_concatenates_descendants() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    let em = alloc_element(&mut tree, "em");
    let hello = tree.create_text_node("hello ");
    let world = tree.create_text_node("world");
    tree.append_child(p, hello);
    tree.append_child(p, em);
    tree.append_child(em, world);
    let comment = tree.alloc(NodeType::Comment("ignored".to_string()));
    tree.append_child(p, comment);

    assert_eq!(tree.text_content(p), "hello world");
    assert_eq!(tree.text_content(world), "world");
}

#[test]
fn test_set_text_content_replaces_children() {
    let mut tree = DomTree::new();
    let (parent, ..) = three_children(&mut tree);

    tree.set_text_content(parent, "<b>not markup</b>");

    assert_eq!(tree.children(parent).len(), 1);
    let child = tree.children(parent)[0];
    assert_eq!(tree.as_text(child), Some("<b>not markup</b>"));

    tree.set_text_content(parent, "");
    assert!(tree.children(parent).is_empty());
}

// ========== lookup ==========

#[test]
fn test_get_element_by_id_and_body() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let body = alloc_element(&mut tree, "body");
    let errors = alloc_element(&mut tree, "div");
    let _ = tree.set_attribute(errors, "id", "errors");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, body);
    tree.append_child(body, errors);

    assert_eq!(tree.body(), Some(body));
    assert_eq!(tree.get_element_by_id("errors"), Some(errors));
    assert_eq!(tree.get_element_by_id("missing"), None);
    assert_eq!(tree.ancestors(errors).collect::<Vec<_>>(), vec![body, html, NodeId::ROOT]);
}

// ========== class list ==========

#[test]
fn test_class_list_add_and_remove() {
    let mut element = ElementData::new("DIV");
    assert_eq!(element.tag_name, "div");

    assert!(element.add_class("card"));
    assert!(element.add_class("darkmode"));
    assert!(!element.add_class("card"));
    assert!(!element.add_class(""));
    assert_eq!(element.attr("class"), Some("card darkmode"));

    assert!(element.remove_class("card"));
    assert!(!element.remove_class("card"));
    assert_eq!(element.classes().collect::<Vec<_>>(), vec!["darkmode"]);
}

// ========== adopt ==========

#[test]
fn test_adopt_from_copies_subtree() {
    let mut source = DomTree::new();
    let b = alloc_element(&mut source, "b");
    let text = source.create_text_node("bold");
    source.append_child(b, text);

    let mut tree = DomTree::new();
    let copy = tree.adopt_from(&source, b).unwrap();

    assert_eq!(tree.parent(copy), None);
    assert_eq!(tree.as_element(copy).unwrap().tag_name, "b");
    assert_eq!(tree.text_content(copy), "bold");
}

// ========== container ==========

#[test]
fn test_container_replaces_content() {
    let mut tree = DomTree::new();
    let (parent, ..) = three_children(&mut tree);

    let mut container = tree.container(parent);
    container.remove_all_children();
    container.append_text("see ");
    let mut link = ElementData::new("a");
    let _ = link.attrs.insert("href".to_string(), "http://example.com/".to_string());
    container.append_element(link, "here");

    let children = tree.children(parent).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(tree.as_text(children[0]), Some("see "));
    assert_eq!(
        tree.as_element(children[1]).unwrap().attr("href"),
        Some("http://example.com/")
    );
    assert_eq!(tree.text_content(parent), "see here");
}
