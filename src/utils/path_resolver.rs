//! Splitting of inbound request paths into a shortname and a remainder.

/// A request path split into its lookup key and trailing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Candidate shortname (first segment, trimmed).
    pub shortname: String,
    /// Remaining segments in request order, forwarded to the target.
    pub remainder: Vec<String>,
}

impl ResolvedPath {
    /// Builds the redirect location for `target`.
    ///
    /// The remainder is appended after a `/`. An empty remainder yields the
    /// bare target; a trailing empty segment keeps the request's trailing slash.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let path = resolve_request_path("/wiki/Page");
    /// assert_eq!(
    ///     path.redirect_target("http://example.com/Wiki"),
    ///     "http://example.com/Wiki/Page"
    /// );
    /// ```
    pub fn redirect_target(&self, target: &str) -> String {
        if self.remainder.is_empty() {
            return target.to_string();
        }

        format!("{}/{}", target, self.remainder.join("/"))
    }

    /// Returns the remainder joined with `/`, or `None` when there is none.
    pub fn remainder_path(&self) -> Option<String> {
        if self.remainder.is_empty() {
            None
        } else {
            Some(self.remainder.join("/"))
        }
    }
}

/// Splits a request path on `/`.
///
/// A single leading `/` is ignored. The first segment, trimmed of surrounding
/// whitespace, is the candidate shortname; the rest are kept verbatim.
pub fn resolve_request_path(raw_path: &str) -> ResolvedPath {
    let path = raw_path.strip_prefix('/').unwrap_or(raw_path);
    let mut segments = path.split('/');

    let shortname = segments.next().unwrap_or_default().trim().to_string();
    let remainder = segments.map(str::to_string).collect();

    ResolvedPath {
        shortname,
        remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortname_only() {
        let path = resolve_request_path("/wiki");

        assert_eq!(path.shortname, "wiki");
        assert!(path.remainder.is_empty());
        assert_eq!(path.redirect_target("http://example.com"), "http://example.com");
        assert_eq!(path.remainder_path(), None);
    }

    #[test]
    fn test_remainder_appended() {
        let path = resolve_request_path("/wiki/Page");

        assert_eq!(path.shortname, "wiki");
        assert_eq!(path.remainder, vec!["Page".to_string()]);
        assert_eq!(
            path.redirect_target("http://example.com/Wiki"),
            "http://example.com/Wiki/Page"
        );
    }

    #[test]
    fn test_multiple_remainder_segments_keep_order() {
        let path = resolve_request_path("docs/std/vec/struct.Vec.html");

        assert_eq!(path.shortname, "docs");
        assert_eq!(
            path.redirect_target("https://doc.rust-lang.org"),
            "https://doc.rust-lang.org/std/vec/struct.Vec.html"
        );
        assert_eq!(
            path.remainder_path().as_deref(),
            Some("std/vec/struct.Vec.html")
        );
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let path = resolve_request_path("/wiki/");
        assert_eq!(path.redirect_target("http://example.com"), "http://example.com/");
    }

    #[test]
    fn test_shortname_is_trimmed() {
        let path = resolve_request_path("/ wiki /Page");
        assert_eq!(path.shortname, "wiki");
    }

    #[test]
    fn test_empty_path() {
        let path = resolve_request_path("/");

        assert_eq!(path.shortname, "");
        assert!(path.remainder.is_empty());
    }
}
