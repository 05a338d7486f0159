//! Group-key slugification and archive directory layout.
//!
//! A group key (e.g. a category name) is arbitrary text; its slug is
//! the normalized path segment the archive directory is named after.
//! Distinct keys may collapse to the same slug (`"C++"` and `"C--"`
//! both become `"c"`); the last writer wins on the output directory.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of underscores or non-word characters (Unicode `\w` semantics).
static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]+").unwrap());

/// Two or more consecutive hyphens.
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Convert a group key to a URL-safe, filesystem-safe path segment.
///
/// Every maximal run of `_` or non-word characters becomes a single
/// `-`, hyphen runs are collapsed, the result is lowercased and carries
/// no leading/trailing hyphen. Idempotent; empty input yields empty
/// output (callers must treat an empty slug as an invalid archive).
///
/// # Examples
/// ```
/// use arcgen::slug::slugify;
/// assert_eq!(slugify("Foo Bar_Baz!!"), "foo-bar-baz");
/// assert_eq!(slugify("Go & Rust"), "go-rust");
/// ```
pub fn slugify(raw: &str) -> String {
    let dashed = NON_WORD_RUN.replace_all(raw, "-");
    let collapsed = HYPHEN_RUN.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_lowercase()
}

/// Strip all leading and trailing `/` from a base directory.
///
/// Interior slashes are preserved: `"/blog/archive/"` -> `"blog/archive"`.
pub fn normalize_base_dir(raw: &str) -> &str {
    raw.trim_start_matches('/').trim_end_matches('/')
}

/// Directory for one group's archive: `<base_dir>/<slug>`.
///
/// Uses `/` as separator regardless of platform; an empty side is
/// skipped rather than producing a dangling separator.
pub fn archive_dir(base_dir: &str, group_key: &str) -> String {
    join_segments(normalize_base_dir(base_dir), &slugify(group_key))
}

/// `/`-join two path fragments, skipping empty sides.
pub(crate) fn join_segments(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_owned(),
        (_, true) => a.to_owned(),
        (false, false) => format!("{a}/{b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Foo Bar_Baz!!"), "foo-bar-baz");
        assert_eq!(slugify("Go & Rust"), "go-rust");
        assert_eq!(slugify("ruby"), "ruby");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("a___b"), "a-b");
        assert_eq!(slugify("a!?#b"), "a-b");
    }

    #[test]
    fn test_slugify_unicode_words_preserved() {
        // Unicode letters are word characters; only the space collapses.
        assert_eq!(slugify("日本語 post"), "日本語-post");
        assert_eq!(slugify("Café Au Lait"), "café-au-lait");
    }

    #[test]
    fn test_slugify_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for raw in ["Foo Bar_Baz!!", "Go & Rust", "a -- b", "日本語 post", ""] {
            let once = slugify(raw);
            assert_eq!(slugify(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_slugify_collision() {
        // Distinct keys collapsing to one slug is accepted behavior.
        assert_eq!(slugify("C++"), slugify("C--"));
    }

    #[test]
    fn test_normalize_base_dir() {
        assert_eq!(normalize_base_dir("/archive/"), "archive");
        assert_eq!(normalize_base_dir("///blog/archive///"), "blog/archive");
        assert_eq!(normalize_base_dir("archive"), "archive");
        assert_eq!(normalize_base_dir(""), "");
        assert_eq!(normalize_base_dir("/"), "");
    }

    #[test]
    fn test_archive_dir() {
        assert_eq!(archive_dir("archive", "Ruby"), "archive/ruby");
        assert_eq!(archive_dir("/archive/", "Go & Rust"), "archive/go-rust");
        assert_eq!(archive_dir("", "Ruby"), "ruby");
        assert_eq!(archive_dir("archive", "!!!"), "archive");
    }

    #[test]
    fn test_join_segments() {
        assert_eq!(join_segments("a", "b"), "a/b");
        assert_eq!(join_segments("", "b"), "b");
        assert_eq!(join_segments("a", ""), "a");
        assert_eq!(join_segments("", ""), "");
    }
}
