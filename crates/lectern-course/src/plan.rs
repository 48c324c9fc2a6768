//! Turning a lecture index into the list of files to fetch.

use std::path::PathBuf;

use lectern_dom::NodeRef;
use serde::{Deserialize, Serialize};

use crate::index::{lectures, resources, sections};
use crate::naming::{escape_name, file_extension, numbered};
use crate::resource::ResourceType;
use crate::selection::Selection;

/// How a plan is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// What to keep.
    pub selection: Selection,
    /// Also replace characters reserved on desktop filesystems.
    pub escape: bool,
}

/// One file of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDownload {
    /// Directory of the section, `NN - title`.
    pub section_dir: String,
    /// File name without extension, `NN - lecture title`.
    pub file_stem: String,
    /// File extension, without the dot.
    pub extension: String,
    /// Where the file comes from.
    pub url: String,
    /// The kind of material, when the link title names a known one.
    pub resource_type: Option<ResourceType>,
}

impl PlannedDownload {
    /// `file_stem.extension`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.extension)
    }

    /// Location of the file relative to the course directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.section_dir).join(self.file_name())
    }
}

/// Every file to fetch for a course, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadPlan {
    /// The course short name, which is also the top-level directory.
    pub course: String,
    /// Files in section, lecture, then link order.
    pub downloads: Vec<PlannedDownload>,
}

impl DownloadPlan {
    /// Number of planned files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    /// Whether nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }
}

/// Plan the downloads of a lecture index page.
///
/// Sections and lectures are numbered by their position on the page, so
/// filtering never renumbers them. A resource whose extension cannot be
/// told from its URL or its type is skipped with a warning.
#[must_use]
pub fn plan(doc: NodeRef<'_>, course: &str, options: &PlanOptions) -> DownloadPlan {
    let selection = &options.selection;
    let mut downloads = Vec::new();

    for (part, section) in sections(doc).into_iter().enumerate() {
        if !selection.wants_part(part) {
            continue;
        }
        let section_dir = numbered(part, &escape_name(&section.title, options.escape));
        log::debug!("section {section_dir}");

        for (row, lecture) in lectures(section.list).into_iter().enumerate() {
            if !selection.wants_row(row) {
                continue;
            }
            let file_stem = escape_name(&numbered(row, &lecture.title), options.escape);

            for resource in resources(lecture.row) {
                if !selection.wants_type(&resource.title) {
                    continue;
                }
                // Content types need the network; only the URL and type are known here.
                let Some(extension) = file_extension(&resource.url, "", &resource.title) else {
                    log::warn!(
                        "no extension for {:?} resource {}, skipping",
                        resource.title,
                        resource.url
                    );
                    continue;
                };
                downloads.push(PlannedDownload {
                    section_dir: section_dir.clone(),
                    file_stem: file_stem.clone(),
                    extension,
                    url: resource.url,
                    resource_type: ResourceType::from_page_title(&resource.title),
                });
            }
        }
    }

    log::info!("planned {} downloads for {course}", downloads.len());
    DownloadPlan {
        course: course.to_string(),
        downloads,
    }
}
