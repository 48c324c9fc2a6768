//! Reading a course's lecture index page.
//!
//! The page is a list of sections. Each section is a `ul.item_section_list`
//! whose title is the `h3.list_header` at the same position in the page.
//! Inside a section, each lecture is a `div.item_resource` holding the
//! download links, titled by the `a.lecture-link` at the same position.

use lectern_dom::{NodeRef, SelectableElement};
use lectern_select::select;

/// Lists of lectures, one per section.
pub const SECTION_SELECTOR: &str = "ul.item_section_list";
/// Section headings, paired with [`SECTION_SELECTOR`] by position.
pub const SECTION_TITLE_SELECTOR: &str = "h3.list_header";
/// Containers of a lecture's download links.
pub const LECTURE_SELECTOR: &str = "div.item_resource";
/// Lecture titles, paired with [`LECTURE_SELECTOR`] by position.
pub const LECTURE_TITLE_SELECTOR: &str = "a.lecture-link";
/// Download links inside a lecture.
pub const RESOURCE_SELECTOR: &str = "a";

/// One section of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Trimmed heading text, empty when the page has fewer headings than
    /// sections.
    pub title: String,
    /// The section's list element.
    pub list: NodeRef<'a>,
}

/// One lecture of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture<'a> {
    /// Trimmed link text, empty when missing.
    pub title: String,
    /// The element holding the download links.
    pub row: NodeRef<'a>,
}

/// A downloadable file of a lecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The link target as written in the page.
    pub url: String,
    /// The lower-cased link title, which names the resource type.
    pub title: String,
}

/// Pair every element of `items` with the text of the title at the same
/// position.
fn zip_titles<'a>(items: Vec<NodeRef<'a>>, titles: &[NodeRef<'a>]) -> Vec<(String, NodeRef<'a>)> {
    if titles.len() != items.len() {
        log::debug!("{} items but {} titles", items.len(), titles.len());
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let title = titles
                .get(i)
                .map(|title| title.text_content().trim().to_string())
                .unwrap_or_default();
            (title, item)
        })
        .collect()
}

/// The sections of a lecture index, in page order.
#[must_use]
pub fn sections(doc: NodeRef<'_>) -> Vec<Section<'_>> {
    let titles = select(doc, SECTION_TITLE_SELECTOR);
    zip_titles(select(doc, SECTION_SELECTOR), &titles)
        .into_iter()
        .map(|(title, list)| Section { title, list })
        .collect()
}

/// The lectures of one section, in page order.
#[must_use]
pub fn lectures(section: NodeRef<'_>) -> Vec<Lecture<'_>> {
    let titles = select(section, LECTURE_TITLE_SELECTOR);
    zip_titles(select(section, LECTURE_SELECTOR), &titles)
        .into_iter()
        .map(|(title, row)| Lecture { title, row })
        .collect()
}

/// The download links of one lecture.
///
/// Links without `href` are skipped. A link without `title` gets an empty
/// title.
#[must_use]
pub fn resources(row: NodeRef<'_>) -> Vec<Resource> {
    select(row, RESOURCE_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let Some(url) = link.attribute("href") else {
                log::debug!("skipping link without href in {row:?}");
                return None;
            };
            Some(Resource {
                url: url.to_string(),
                title: link.attribute("title").unwrap_or_default().to_lowercase(),
            })
        })
        .collect()
}
