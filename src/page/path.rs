//! Output path rendering from the pagination path template.
//!
//! Page 1 lives at the archive directory itself; later pages append the
//! rendered template (default `page:num/`), giving directory-style URLs
//! like `/archive/tech/page3/`.

use crate::slug::join_segments;

/// Token substituted with the decimal page number.
pub const NUM_TOKEN: &str = ":num";

/// Prepend `/` unless already present; never doubles it.
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Site-root-absolute path for page `n` of the archive rooted at `dir`.
///
/// The template is caller-supplied and expected to contain exactly one
/// `:num` token; a malformed template is not rejected here — no
/// substitution (or several) simply propagates into the path.
///
/// # Examples
/// ```
/// use arcgen::page::page_path;
/// assert_eq!(page_path(1, "archive/tech", "page:num/"), "/archive/tech");
/// assert_eq!(page_path(3, "archive/tech", "page:num/"), "/archive/tech/page3/");
/// ```
pub fn page_path(n: usize, dir: &str, template: &str) -> String {
    if n == 1 {
        return ensure_leading_slash(dir);
    }
    let rendered = template.replace(NUM_TOKEN, &n.to_string());
    ensure_leading_slash(&join_segments(dir, &rendered))
}

/// [`page_path`] lifted over missing neighbors: `None` in, `None` out.
pub fn page_num_to_path(n: Option<usize>, dir: &str, template: &str) -> Option<String> {
    n.map(|n| page_path(n, dir, template))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "page:num/";

    #[test]
    fn test_page_one_is_the_dir() {
        assert_eq!(page_path(1, "archive/tech", TEMPLATE), "/archive/tech");
        // Never doubled when already absolute.
        assert_eq!(page_path(1, "/archive/tech", TEMPLATE), "/archive/tech");
    }

    #[test]
    fn test_later_pages_render_template() {
        assert_eq!(page_path(2, "archive/tech", TEMPLATE), "/archive/tech/page2/");
        assert_eq!(page_path(3, "archive/tech", TEMPLATE), "/archive/tech/page3/");
        assert_eq!(page_path(12, "a", "p/:num"), "/a/p/12");
    }

    #[test]
    fn test_empty_dir() {
        assert_eq!(page_path(1, "", TEMPLATE), "/");
        assert_eq!(page_path(2, "", TEMPLATE), "/page2/");
    }

    #[test]
    fn test_malformed_template_propagates() {
        // No token: no substitution occurs.
        assert_eq!(page_path(2, "archive", "page/"), "/archive/page/");
        // Two tokens: both substituted.
        assert_eq!(page_path(2, "archive", ":num-:num/"), "/archive/2-2/");
    }

    #[test]
    fn test_page_num_to_path_none() {
        assert_eq!(page_num_to_path(None, "archive", TEMPLATE), None);
        assert_eq!(
            page_num_to_path(Some(1), "archive", TEMPLATE).as_deref(),
            Some("/archive")
        );
    }
}
