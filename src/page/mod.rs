//! Page descriptors - the unit of archive output.

mod build;
mod path;

pub use build::build_page;
pub use path::{NUM_TOKEN, ensure_leading_slash, page_num_to_path, page_path};

use std::path::PathBuf;

use serde::Serialize;

/// One rendered listing page's content and navigation links.
///
/// Produced fresh every generation run; immutable, with no identity
/// beyond `(archive_id, group_key, page_number)`. Handed off wholesale
/// to the rendering collaborator.
///
/// # Example
///
/// ```text
/// archive_id:   category
/// group_key:    Go & Rust        slug: go-rust
/// page 2 of 3   (per_page = 5, total_items = 12)
/// output_path:  /archive/go-rust/page2/
/// previous:     /archive/go-rust
/// next:         /archive/go-rust/page3/
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor<T> {
    /// Identifier for the whole archive type (e.g. "category").
    pub archive_id: String,
    /// Raw group key this page belongs to.
    pub group_key: String,
    /// Normalized path segment derived from the group key.
    pub slug: String,

    /// 1-based page number.
    pub page_number: usize,
    /// Total pages in this group.
    pub total_pages: usize,
    /// Page size; `None` means pagination is disabled.
    pub per_page: Option<usize>,
    /// Item count for the whole group.
    pub total_items: usize,
    /// Contiguous item subrange belonging to this page, in input order.
    pub items: Vec<T>,

    /// `None` on page 1.
    pub previous_page_number: Option<usize>,
    /// `None` on page 1.
    pub previous_page_path: Option<String>,
    /// `None` on the last page.
    pub next_page_number: Option<usize>,
    /// `None` on the last page.
    pub next_page_path: Option<String>,

    /// Absolute-from-site-root output path. Page 1 resolves to
    /// `/<base>/<slug>`, page N>1 to `/<base>/<slug>/<template>/`.
    pub output_path: String,
    /// Layout resource handed to the renderer, opaque here.
    pub template_path: PathBuf,
}

impl<T: Serialize> PageDescriptor<T> {
    /// Flat key-value record for the rendering engine.
    ///
    /// Shape: page identity fields at the top level, pagination fields
    /// grouped under a nested `"paginator"` object so they cannot
    /// collide with top-level page fields. This nested shape is the one
    /// supported record layout; the historical flattened duplicates are
    /// not reproduced.
    pub fn render_record(&self) -> serde_json::Value {
        let paginator = serde_json::json!({
            "page_number": self.page_number,
            "total_pages": self.total_pages,
            "per_page": self.per_page,
            "total_items": self.total_items,
            "items": self.items,
            "previous_page_number": self.previous_page_number,
            "previous_page_path": self.previous_page_path,
            "next_page_number": self.next_page_number,
            "next_page_path": self.next_page_path,
        });
        serde_json::json!({
            "archive_id": self.archive_id,
            "group_key": self.group_key,
            "slug": self.slug,
            "output_path": self.output_path,
            "template_path": self.template_path,
            "paginator": paginator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArchiveConfig;

    #[test]
    fn test_render_record_shape() {
        let config = ArchiveConfig {
            archive_id: "category".into(),
            base_dir: "archive".into(),
            per_page: Some(2),
            ..Default::default()
        };
        let items = ["p1", "p2", "p3"];
        let page = build_page(&config, "Ruby", &items, 1).unwrap();
        let record = page.render_record();

        assert_eq!(record["archive_id"], "category");
        assert_eq!(record["slug"], "ruby");
        assert_eq!(record["output_path"], "/archive/ruby");

        let paginator = &record["paginator"];
        assert_eq!(paginator["page_number"], 1);
        assert_eq!(paginator["total_pages"], 2);
        assert_eq!(paginator["items"], serde_json::json!(["p1", "p2"]));
        assert_eq!(paginator["next_page_path"], "/archive/ruby/page2/");
        assert!(paginator["previous_page_path"].is_null());
    }
}
