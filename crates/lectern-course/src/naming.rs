//! File and directory names for downloaded material.

use crate::resource::ResourceType;

/// Characters replaced by `_` when escaping is requested. They are
/// reserved on common desktop filesystems.
pub const ILLEGAL_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Make `name` usable as a single path component.
///
/// Path separators (`/` and `\`) always become `_`. With `escape_illegal`,
/// so do the [`ILLEGAL_CHARS`].
///
/// ```
/// use lectern_course::escape_name;
///
/// assert_eq!(escape_name("Intro: a/b", false), "Intro: a_b");
/// assert_eq!(escape_name("Intro: a/b", true), "Intro_ a_b");
/// ```
#[must_use]
pub fn escape_name(name: &str, escape_illegal: bool) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || (escape_illegal && ILLEGAL_CHARS.contains(&c)) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// `NN - title` with a two-digit, one-based number.
#[must_use]
pub fn numbered(index: usize, title: &str) -> String {
    format!("{:02} - {title}", index + 1)
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// The extension of the URL's last path segment, when it is exactly
/// `stem.ext` with a word-character extension.
///
/// `/a/b.pdf` gives `pdf`; `/a/b.tar.gz`, `/a/.pdf` and `/a/b.pdf?x=1` give
/// nothing.
#[must_use]
pub fn url_extension(url: &str) -> Option<&str> {
    let (_, segment) = url.rsplit_once('/')?;
    let (stem, extension) = segment.split_once('.')?;
    (!stem.is_empty() && is_word(extension)).then_some(extension)
}

/// The subtype of a bare `type/subtype` content type, when it is made of
/// word characters only (`video/mp4` gives `mp4`; `text/html; charset=utf-8`
/// gives nothing).
#[must_use]
pub fn content_type_extension(content_type: &str) -> Option<&str> {
    let (_, subtype) = content_type.rsplit_once('/')?;
    is_word(subtype).then_some(subtype)
}

/// Pick a file extension for a resource.
///
/// Tries the URL, then the content type, then the default extension of the
/// resource type named by `page_title`. `None` when all three fail.
#[must_use]
pub fn file_extension(url: &str, content_type: &str, page_title: &str) -> Option<String> {
    url_extension(url)
        .or_else(|| content_type_extension(content_type))
        .or_else(|| ResourceType::from_page_title(page_title).map(ResourceType::default_extension))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_separators_always() {
        assert_eq!(escape_name(r"a/b\c", false), "a_b_c");
        assert_eq!(escape_name(r#"<a>:"b"|?*"#, false), r#"<a>:"b"|?*"#);
        assert_eq!(escape_name(r#"<a>:"b"|?*"#, true), "_a___b____");
    }

    #[test]
    fn test_numbered() {
        assert_eq!(numbered(0, "Intro"), "01 - Intro");
        assert_eq!(numbered(9, "Ten"), "10 - Ten");
        assert_eq!(numbered(99, "Many"), "100 - Many");
    }

    #[test]
    fn test_url_extension() {
        assert_eq!(url_extension("https://x.org/files/lecture1.pdf"), Some("pdf"));
        assert_eq!(url_extension("https://x.org/a/B.MP4"), Some("MP4"));
        assert_eq!(url_extension("https://x.org/a/b.tar.gz"), None);
        assert_eq!(url_extension("https://x.org/a/.pdf"), None);
        assert_eq!(url_extension("https://x.org/a/b.pdf?x=1"), None);
        assert_eq!(url_extension("https://x.org/download?lecture_id=3"), None);
        assert_eq!(url_extension("lecture.pdf"), None);
    }

    #[test]
    fn test_content_type_extension() {
        assert_eq!(content_type_extension("video/mp4"), Some("mp4"));
        assert_eq!(content_type_extension("application/pdf"), Some("pdf"));
        assert_eq!(content_type_extension("text/html; charset=utf-8"), None);
        assert_eq!(content_type_extension("application/vnd.ms-powerpoint"), None);
        assert_eq!(content_type_extension(""), None);
    }

    #[test]
    fn test_file_extension_fallbacks() {
        let url = "https://x.org/lecture/download?id=7";
        assert_eq!(
            file_extension("https://x.org/a/b.srt", "video/mp4", "pdf"),
            Some("srt".to_string())
        );
        assert_eq!(file_extension(url, "video/mp4", "pdf"), Some("mp4".to_string()));
        assert_eq!(file_extension(url, "", "subtitles (text)"), Some("txt".to_string()));
        assert_eq!(file_extension(url, "", "slides"), None);
    }
}
