//! Tests for the arena tree, the owned element tree and their shared
//! `SelectableElement` view.

use lectern_dom::{
    Attributes, DomTree, Element, ElementData, NodeId, NodeType, SelectableElement,
};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let mut data = ElementData::new(tag);
    for (name, value) in attrs {
        let _ = data.attrs.insert(*name, *value);
    }
    tree.alloc(NodeType::Element(data))
}

fn tags<E: SelectableElement>(elements: impl Iterator<Item = E>) -> Vec<String> {
    elements.map(|e| e.tag_name().to_string()).collect()
}

// ========== Attributes ==========

#[test]
fn test_attributes_keep_insertion_order() {
    let mut attrs = Attributes::new();
    let _ = attrs.insert("href", "/a");
    let _ = attrs.insert("class", "x");
    let _ = attrs.insert("title", "t");

    let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["href", "class", "title"]);
}

#[test]
fn test_attributes_reinsert_replaces_value_in_place() {
    let mut attrs = Attributes::new();
    let _ = attrs.insert("a", "1");
    let _ = attrs.insert("b", "2");

    assert_eq!(attrs.insert("a", "3"), Some("1".to_string()));
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("a"), Some("3"));
    assert_eq!(attrs.iter().next(), Some(("a", "3")));
}

#[test]
fn test_attributes_lookup_is_exact() {
    let attrs: Attributes = [("data-id", "7")].into_iter().collect();
    assert!(attrs.contains("data-id"));
    assert!(!attrs.contains("data"));
    assert_eq!(attrs.get("DATA-ID"), None);
}

#[test]
fn test_empty_value_is_still_present() {
    let attrs: Attributes = [("disabled", "")].into_iter().collect();
    assert!(attrs.contains("disabled"));
    assert_eq!(attrs.get("disabled"), Some(""));
}

// ========== ElementData ==========

#[test]
fn test_element_data_classes_split_on_whitespace() {
    let mut data = ElementData::new("li");
    let _ = data.attrs.insert("class", "  row\tactive \n odd ");
    assert_eq!(data.classes(), ["row", "active", "odd"]);
}

#[test]
fn test_element_data_without_class() {
    let data = ElementData::new("li");
    assert!(data.classes().is_empty());
    assert_eq!(data.id(), None);
}

// ========== DomTree ==========

#[test]
fn test_append_child_links_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "ul", &[]);
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "li", &[]);
    let b = alloc_element(&mut tree, "li", &[]);
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.last_child(parent), Some(b));
    assert_eq!(tree.document_element(), Some(parent));
}

#[test]
fn test_append_child_ignores_foreign_ids() {
    let mut tree = DomTree::new();
    tree.append_child(NodeId::ROOT, NodeId(42));
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_text_content_concatenates_in_document_order() {
    let mut tree = DomTree::new();
    let h3 = alloc_element(&mut tree, "h3", &[]);
    tree.append_child(NodeId::ROOT, h3);

    let first = tree.alloc(NodeType::Text("  Week ".to_string()));
    let em = alloc_element(&mut tree, "em", &[]);
    let inner = tree.alloc(NodeType::Text("1".to_string()));
    let comment = tree.alloc(NodeType::Comment("hidden".to_string()));
    let last = tree.alloc(NodeType::Text(" intro ".to_string()));
    tree.append_child(h3, first);
    tree.append_child(h3, em);
    tree.append_child(em, inner);
    tree.append_child(h3, comment);
    tree.append_child(h3, last);

    assert_eq!(tree.text_content(h3), "  Week 1 intro ");
    assert_eq!(tree.node(h3).text_content().trim(), "Week 1 intro");
}

#[test]
fn test_node_ref_children_skip_non_elements() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div", &[("id", "root")]);
    tree.append_child(NodeId::ROOT, div);

    let text = tree.alloc(NodeType::Text("x".to_string()));
    let span = alloc_element(&mut tree, "span", &[]);
    let comment = tree.alloc(NodeType::Comment("c".to_string()));
    let p = alloc_element(&mut tree, "p", &[]);
    tree.append_child(div, text);
    tree.append_child(div, span);
    tree.append_child(div, comment);
    tree.append_child(div, p);

    let node = tree.node(div);
    assert_eq!(tags(node.children()), ["span", "p"]);
    assert_eq!(node.attribute("id"), Some("root"));
    assert!(node.has_attribute("id"));
    assert!(!node.has_attribute("class"));
}

#[test]
fn test_document_node_has_no_tag_or_attributes() {
    let tree = DomTree::new();
    let root = tree.root_ref();
    assert_eq!(root.tag_name(), "");
    assert_eq!(root.attribute("id"), None);
    assert_eq!(root.children().count(), 0);
}

#[test]
fn test_node_ref_equality_is_per_tree() {
    let first = DomTree::new();
    let second = DomTree::new();
    assert_eq!(first.root_ref(), first.node(NodeId::ROOT));
    assert_ne!(first.root_ref(), second.root_ref());
}

// ========== Element ==========

#[test]
fn test_owned_element_builder() {
    let tree = Element::new("div").with_attr("id", "root").with_children([
        Element::new("ul").with_attr("class", "item_section_list"),
        Element::new("p"),
    ]);

    let root = &tree;
    assert_eq!(root.tag_name(), "div");
    assert_eq!(root.attribute("id"), Some("root"));
    assert_eq!(tags(root.children()), ["ul", "p"]);
}

#[test]
fn test_has_tag_ignores_ascii_case() {
    let upper = Element::new("DIV");
    assert!((&upper).has_tag("div"));
    assert!((&upper).has_tag("Div"));
    assert!(!(&upper).has_tag("span"));
}

#[test]
fn test_deep_owned_tree_drops() {
    let mut tree = Element::new("leaf");
    for _ in 0..200_000 {
        tree = Element::new("div").with_child(tree);
    }
    assert_eq!((&tree).children().count(), 1);
    drop(tree);
}

#[test]
fn test_dropping_a_child_keeps_its_siblings() {
    let mut tree = Element::new("ul").with_children([
        Element::new("li").with_child(Element::new("a")),
        Element::new("li").with_child(Element::new("b")),
    ]);
    drop(tree.children.remove(0));
    assert_eq!(tags((&tree).children()), ["li"]);
    assert_eq!(tags((&tree.children[0]).children()), ["b"]);
}
