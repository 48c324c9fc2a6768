//! Property tests over generated documents and selectors.
#![allow(clippy::needless_pass_by_value)]

use lectern_dom::{Element, SelectableElement};
use lectern_select::{Descendants, select};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const TAGS: [&str; 6] = ["div", "ul", "li", "a", "span", "p"];
const CLASSES: [&str; 4] = ["row", "item", "row item", "x"];
const IDS: [&str; 3] = ["main", "a1", "b2"];
const MAX_DEPTH: usize = 4;

fn pick<'a>(g: &mut Gen, choices: &[&'a str]) -> &'a str {
    g.choose(choices).copied().unwrap_or("div")
}

fn gen_element(g: &mut Gen, depth: usize) -> Element {
    let mut element = Element::new(pick(g, &TAGS));
    if bool::arbitrary(g) {
        element = element.with_attr("class", pick(g, &CLASSES));
    }
    if u8::arbitrary(g) % 4 == 0 {
        element = element.with_attr("id", pick(g, &IDS));
    }
    let children = if depth >= MAX_DEPTH { 0 } else { usize::arbitrary(g) % 4 };
    for _ in 0..children {
        element = element.with_child(gen_element(g, depth + 1));
    }
    element
}

/// A random document rooted at an arbitrary element.
#[derive(Debug, Clone)]
struct Doc(Element);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(gen_element(g, 0))
    }
}

/// One to four tag tokens.
#[derive(Debug, Clone)]
struct TagPath(Vec<&'static str>);

impl Arbitrary for TagPath {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 4;
        Self((0..len).map(|_| pick(g, &TAGS)).collect())
    }
}

/// A mix of every token form.
#[derive(Debug, Clone)]
struct AnySelector(String);

impl Arbitrary for AnySelector {
    fn arbitrary(g: &mut Gen) -> Self {
        const TOKENS: [&str; 10] = [
            "div", "li", "*", ".row", "ul.item", "#main", "a#a1", "[id]", "[class~=item]",
            "span[class^=r]",
        ];
        let len = usize::arbitrary(g) % 4;
        let tokens: Vec<&str> = (0..len).map(|_| pick(g, &TOKENS)).collect();
        Self(tokens.join(" "))
    }
}

#[quickcheck]
fn prop_blank_selector_is_identity(doc: Doc, spaces: u8) -> bool {
    let selector = " ".repeat(usize::from(spaces % 5));
    let result = select(&doc.0, &selector);
    result.len() == 1 && std::ptr::eq(result[0], &doc.0)
}

#[quickcheck]
fn prop_tag_path_returns_last_tag(doc: Doc, path: TagPath) -> bool {
    let last = path.0.last().copied().unwrap_or_default();
    select(&doc.0, &path.0.join(" "))
        .iter()
        .all(|element| element.tag_name() == last)
}

#[quickcheck]
fn prop_single_tag_matches_filtered_descendants(doc: Doc, path: TagPath) -> bool {
    let tag = path.0[0];
    let expected: Vec<&Element> = Descendants::new(&doc.0)
        .filter(|element| element.tag_name() == tag)
        .collect();
    let actual = select(&doc.0, tag);
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(&actual)
            .all(|(a, b)| std::ptr::eq(*a, *b))
}

#[quickcheck]
fn prop_wildcard_counts_every_descendant(doc: Doc) -> bool {
    fn count(element: &Element) -> usize {
        element.children.iter().map(|child| 1 + count(child)).sum()
    }
    select(&doc.0, "*").len() == count(&doc.0)
}

#[quickcheck]
fn prop_queries_are_idempotent(doc: Doc, selector: AnySelector) -> bool {
    let first = select(&doc.0, &selector.0);
    let second = select(&doc.0, &selector.0);
    first.len() == second.len() && first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b))
}

#[quickcheck]
fn prop_invalid_token_poisons_query(doc: Doc, selector: AnySelector, at: usize) -> bool {
    let mut tokens: Vec<&str> = selector.0.split_whitespace().collect();
    let at = at % (tokens.len() + 1);
    tokens.insert(at, "Invalid");
    select(&doc.0, &tokens.join(" ")).is_empty()
}
