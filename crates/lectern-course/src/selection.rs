//! Which parts, lectures and resource types to keep.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceType;

/// Filters applied while planning. An empty list keeps everything.
///
/// Positions are zero-based; [`Selection::from_numbers`] converts the
/// one-based numbers users type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Zero-based section positions.
    pub parts: Vec<usize>,
    /// Zero-based lecture positions, applied inside every kept section.
    pub rows: Vec<usize>,
    /// Wanted resource types.
    pub types: Vec<ResourceType>,
}

/// Convert one-based numbers to positions. `0` names nothing and is dropped.
fn to_positions(what: &str, numbers: &[usize]) -> Vec<usize> {
    numbers
        .iter()
        .filter_map(|&number| {
            let position = number.checked_sub(1);
            if position.is_none() {
                log::warn!("{what} numbers start at 1, ignoring 0");
            }
            position
        })
        .collect()
}

impl Selection {
    /// Build a selection from one-based part and row numbers.
    ///
    /// ```
    /// use lectern_course::{ResourceType, Selection};
    ///
    /// let selection = Selection::from_numbers(&[1, 3], &[], vec![ResourceType::Pdf]);
    /// assert_eq!(selection.parts, [0, 2]);
    /// assert!(selection.wants_row(7));
    /// ```
    #[must_use]
    pub fn from_numbers(parts: &[usize], rows: &[usize], types: Vec<ResourceType>) -> Self {
        Self {
            parts: to_positions("part", parts),
            rows: to_positions("row", rows),
            types,
        }
    }

    /// Whether the section at `position` is kept.
    #[must_use]
    pub fn wants_part(&self, position: usize) -> bool {
        self.parts.is_empty() || self.parts.contains(&position)
    }

    /// Whether the lecture at `position` is kept.
    #[must_use]
    pub fn wants_row(&self, position: usize) -> bool {
        self.rows.is_empty() || self.rows.contains(&position)
    }

    /// Whether a resource whose link is titled `page_title` is kept.
    ///
    /// With a type filter in place, titles that name no known type are
    /// never kept.
    #[must_use]
    pub fn wants_type(&self, page_title: &str) -> bool {
        self.types.is_empty()
            || ResourceType::from_page_title(page_title).is_some_and(|kind| self.types.contains(&kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_keeps_everything() {
        let selection = Selection::default();
        assert!(selection.wants_part(0));
        assert!(selection.wants_row(42));
        assert!(selection.wants_type("video (mp4)"));
        assert!(selection.wants_type("unheard of"));
    }

    #[test]
    fn test_numbers_are_one_based() {
        let selection = Selection::from_numbers(&[0, 2], &[1], Vec::new());
        assert_eq!(selection.parts, [1]);
        assert_eq!(selection.rows, [0]);
        assert!(!selection.wants_part(0));
        assert!(selection.wants_part(1));
        assert!(selection.wants_row(0));
        assert!(!selection.wants_row(1));
    }

    #[test]
    fn test_type_filter_uses_page_titles() {
        let selection = Selection::from_numbers(&[], &[], vec![ResourceType::Movie, ResourceType::Txt]);
        assert!(selection.wants_type("video (mp4)"));
        assert!(selection.wants_type("subtitles (text)"));
        assert!(!selection.wants_type("subtitles (srt)"));
        assert!(!selection.wants_type("movie"));
        assert!(!selection.wants_type(""));
    }
}
