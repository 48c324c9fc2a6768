//! Resource types offered for each lecture.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A kind of lecture material.
///
/// The short name (`pdf`, `movie`, ...) is what users type; the page title
/// is what the lecture index puts in each link's `title` attribute.
///
/// ```
/// use std::str::FromStr;
/// use lectern_course::ResourceType;
///
/// let movie = ResourceType::from_str("movie").unwrap();
/// assert_eq!(movie.page_title(), "video (mp4)");
/// assert_eq!(movie.default_extension(), "mp4");
/// assert_eq!(movie.to_string(), "movie");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Lecture slides as PDF.
    Pdf,
    /// Lecture slides as PowerPoint.
    Ppt,
    /// Plain-text subtitles.
    Txt,
    /// SRT subtitles.
    Srt,
    /// The lecture video.
    Movie,
}

impl ResourceType {
    /// The lower-cased link title the lecture index uses for this type.
    #[must_use]
    pub const fn page_title(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ppt => "ppt",
            Self::Txt => "subtitles (text)",
            Self::Srt => "subtitles (srt)",
            Self::Movie => "video (mp4)",
        }
    }

    /// Extension used when neither the URL nor the content type gives one.
    #[must_use]
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ppt => "ppt",
            Self::Txt => "txt",
            Self::Srt => "srt",
            Self::Movie => "mp4",
        }
    }

    /// Look a type up by its page title, which must already be lower-cased.
    #[must_use]
    pub fn from_page_title(title: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.page_title() == title)
    }
}
