//! Lecture-index extraction and download planning.
//!
//! A saved lecture index page, parsed with `lectern-html`, is read with a
//! handful of selectors into sections, lectures and resource links. The
//! planner then names every file the way the downloader lays them out on
//! disk:
//!
//! ```text
//! <course>/NN - <section title>/NN - <lecture title>.<ext>
//! ```
//!
//! Nothing here touches the network or the filesystem.
//!
//! ```
//! use lectern_course::{PlanOptions, plan};
//! use lectern_html::parse_document;
//!
//! let tree = parse_document(concat!(
//!     r#"<h3 class="list_header">Week 1</h3>"#,
//!     r#"<ul class="item_section_list"><li>"#,
//!     r#"<a class="lecture-link">Welcome</a>"#,
//!     r#"<div class="item_resource"><a title="PDF" href="/s/welcome.pdf"></a></div>"#,
//!     r#"</li></ul>"#,
//! ));
//! let plan = plan(tree.root_ref(), "nlp", &PlanOptions::default());
//! assert_eq!(plan.downloads[0].relative_path().to_str(), Some("01 - Week 1/01 - Welcome.pdf"));
//! ```

pub mod index;
pub mod naming;
pub mod plan;
pub mod resource;
pub mod selection;
pub mod urls;

pub use index::{Lecture, Resource, Section, lectures, resources, sections};
pub use naming::{escape_name, file_extension};
pub use plan::{DownloadPlan, PlanOptions, PlannedDownload, plan};
pub use resource::ResourceType;
pub use selection::Selection;
pub use urls::{CourseUrls, is_authenticated};
