//! Request path and template name helpers.

/// Path requested when no slug segments are given.
pub const ROOT_PATH: &str = "/";

/// Builds the sitemap path for a catch-all slug.
///
/// No segments (absent or empty) means the root path; otherwise every
/// segment is prefixed with `/`.
///
/// # Examples
///
/// ```
/// use pageprops_core::paths::build_request_path;
///
/// assert_eq!(build_request_path(None), "/");
/// assert_eq!(build_request_path(Some(&["a".to_string(), "b".to_string()])), "/a/b");
/// ```
pub fn build_request_path(slug: Option<&[String]>) -> String {
    match slug {
        Some(segments) if !segments.is_empty() => segments
            .iter()
            .map(|segment| format!("/{segment}"))
            .collect(),
        _ => ROOT_PATH.to_string(),
    }
}

/// Strips every character outside `[0-9a-zA-Z]` from a template name.
pub fn sanitize_template_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}
