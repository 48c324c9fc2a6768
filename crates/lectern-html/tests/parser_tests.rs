//! Integration tests for tree construction.

use lectern_dom::{DomTree, NodeId, NodeType};
use lectern_html::{
    HtmlTokenizer, TreeBuilder, parse_document, parse_document_with_issues, render_tree,
};

/// Helper to parse HTML through the two public stages
fn parse(html: &str) -> DomTree {
    let mut tokenizer = HtmlTokenizer::new(html.to_string());
    tokenizer.run();
    TreeBuilder::new(tokenizer.into_tokens()).run()
}

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.tag_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

/// Tag names of the element children of `id`
fn child_tags(tree: &DomTree, id: NodeId) -> Vec<&str> {
    tree.children(id)
        .iter()
        .filter_map(|&child_id| tree.as_element(child_id).map(|data| data.tag_name.as_str()))
        .collect()
}

fn element_children(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
    tree.children(id)
        .iter()
        .copied()
        .filter(|&child_id| tree.as_element(child_id).is_some())
        .collect()
}

#[test]
fn test_nested_elements() {
    let tree = parse("<html><body><div><p>Text</p></div></body></html>");

    let html = tree.document_element().unwrap();
    assert_eq!(child_tags(&tree, html), ["body"]);
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    let p = find_element(&tree, div, "p").unwrap();
    assert_eq!(tree.text_content(p), "Text");
}

#[test]
fn test_no_implied_html_or_body() {
    let tree = parse("<p>loose</p>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), ["p"]);
}

#[test]
fn test_element_attributes() {
    let tree = parse(r#"<div id="main" class="container" title="a &amp; b"></div>"#);
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    let data = tree.as_element(div).unwrap();

    assert_eq!(data.id(), Some("main"));
    assert_eq!(data.attrs.get("class"), Some("container"));
    assert_eq!(data.attrs.get("title"), Some("a & b"));
}

#[test]
fn test_void_elements_do_not_nest() {
    let tree = parse(r#"<p>a<br>b<input type="text">c</p>"#);
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();

    assert_eq!(child_tags(&tree, p), ["br", "input"]);
    assert_eq!(tree.children(p).len(), 5);
    assert_eq!(tree.text_content(p), "abc");
}

#[test]
fn test_self_closing_non_void_is_empty() {
    let tree = parse("<div/><p>after</p>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), ["div", "p"]);
}

#[test]
fn test_implied_end_of_list_items() {
    let tree = parse("<ul><li>one<li>two</ul>");
    let ul = find_element(&tree, NodeId::ROOT, "ul").unwrap();
    let items = element_children(&tree, ul);

    assert_eq!(items.len(), 2);
    assert_eq!(tree.text_content(items[0]), "one");
    assert_eq!(tree.text_content(items[1]), "two");
}

#[test]
fn test_nested_list_is_a_boundary() {
    let tree = parse("<ul><li>a<ul><li>b</ul><li>c</ul>");
    let outer = find_element(&tree, NodeId::ROOT, "ul").unwrap();
    let items = element_children(&tree, outer);

    assert_eq!(items.len(), 2);
    assert_eq!(tree.text_content(items[0]), "ab");
    assert_eq!(tree.text_content(items[1]), "c");
}

#[test]
fn test_implied_end_of_table_rows_and_cells() {
    let tree = parse("<table><tr><td>1<td>2<tr><th>3</table><p>");
    let table = find_element(&tree, NodeId::ROOT, "table").unwrap();
    let rows = element_children(&tree, table);

    assert_eq!(rows.len(), 2);
    assert_eq!(child_tags(&tree, rows[0]), ["td", "td"]);
    assert_eq!(child_tags(&tree, rows[1]), ["th"]);
    assert_eq!(child_tags(&tree, NodeId::ROOT), ["table", "p"]);
}

#[test]
fn test_implied_end_of_paragraph_and_options() {
    let tree = parse("<div><p>a<p>b</div><select><option>x<option>y</select>");
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    let select = find_element(&tree, NodeId::ROOT, "select").unwrap();

    assert_eq!(child_tags(&tree, div), ["p", "p"]);
    assert_eq!(child_tags(&tree, select), ["option", "option"]);
}

#[test]
fn test_definition_list_terms() {
    let tree = parse("<dl><dt>term<dd>one<dd>two</dl>");
    let dl = find_element(&tree, NodeId::ROOT, "dl").unwrap();
    assert_eq!(child_tags(&tree, dl), ["dt", "dd", "dd"]);
}

#[test]
fn test_end_tag_closes_intervening_elements() {
    let tree = parse("<div><span><b>x</div><p>after</p>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), ["div", "p"]);
}

#[test]
fn test_unmatched_end_tag_is_reported_and_ignored() {
    let (tree, issues) = parse_document_with_issues("<p>a</span>b</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("</span>"));
    assert_eq!(issues[0].token_index, 2);
    // The stray tag did not split the text.
    assert_eq!(tree.children(p).len(), 1);
    assert_eq!(tree.as_text(tree.children(p)[0]), Some("ab"));
}

#[test]
fn test_elements_left_open_at_eof() {
    let (tree, issues) = parse_document_with_issues("<div><p>open");
    assert!(issues.is_empty());
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(tree.text_content(p), "open");
}

#[test]
fn test_comment_kept_doctype_dropped() {
    let tree = parse("<!DOCTYPE html><!-- c --><html></html>");
    let kinds: Vec<bool> = tree
        .children(NodeId::ROOT)
        .iter()
        .map(|&id| {
            matches!(&tree.get(id).unwrap().node_type, NodeType::Comment(data) if data == " c ")
        })
        .collect();
    assert_eq!(kinds, [true, false]);
}

#[test]
fn test_script_content_is_a_single_text_node() {
    let tree = parse(r#"<script>document.write("<div>")</script>"#);
    let script = find_element(&tree, NodeId::ROOT, "script").unwrap();

    assert!(find_element(&tree, NodeId::ROOT, "div").is_none());
    assert_eq!(tree.text_content(script), r#"document.write("<div>")"#);
}

#[test]
fn test_parse_document_matches_staged_parse() {
    let html = "<ul class=a><li>x</li></ul>";
    assert_eq!(
        render_tree(&parse_document(html), NodeId::ROOT),
        render_tree(&parse(html), NodeId::ROOT)
    );
}

#[test]
fn test_render_tree_outline() {
    let tree = parse_document("<ul class=\"a\" hidden><li>x y</li><!-- n --></ul>");
    assert_eq!(
        render_tree(&tree, NodeId::ROOT),
        "Document\n  <ul class=\"a\" hidden>\n    <li>\n      \"x\u{00B7}y\"\n    <!--  n  -->\n"
    );
}
