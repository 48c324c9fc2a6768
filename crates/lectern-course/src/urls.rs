//! Course page addresses.

use serde::Serialize;

const WWW: &str = "https://www.coursera.org";
const CLASS: &str = "https://class.coursera.org";

/// The pages a download session visits, derived from the course's short
/// name (the `nlp` in `class.coursera.org/nlp/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseUrls {
    /// The course short name.
    pub course: String,
    /// Login form.
    pub login: String,
    /// Course home page, used to check that login worked.
    pub home: String,
    /// Lecture index page.
    pub lectures: String,
}

impl CourseUrls {
    /// Derive every address for `course`.
    ///
    /// ```
    /// use lectern_course::CourseUrls;
    ///
    /// let urls = CourseUrls::new("nlp");
    /// assert_eq!(urls.lectures, "https://class.coursera.org/nlp/lecture/index");
    /// ```
    #[must_use]
    pub fn new(course: &str) -> Self {
        Self {
            course: course.to_string(),
            login: format!(
                "{WWW}/{course}/auth/auth_redirector?type=login&subtype=normal&email="
            ),
            home: format!("{CLASS}/{course}/class/index"),
            lectures: format!("{CLASS}/{course}/lecture/index"),
        }
    }

    /// The logout link present on every page of a logged-in session.
    #[must_use]
    pub fn logout(&self) -> String {
        format!("{CLASS}/{}/auth/logout", self.course)
    }
}

/// Whether `page` was served to a logged-in user of `course`.
#[must_use]
pub fn is_authenticated(page: &str, course: &str) -> bool {
    page.contains(&CourseUrls::new(course).logout())
}
