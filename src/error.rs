//! Archive generation error types.

use thiserror::Error;

/// Errors produced while splitting a group into pages.
///
/// Every variant is a synchronous programming/input error: nothing here
/// is retried, and a failed group yields no descriptors past the
/// failure point.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// `per_page` was configured as zero. Page-count math is undefined,
    /// so the whole run for this archive aborts.
    #[error("per_page must be at least 1")]
    InvalidPerPage,

    /// A page number outside `1..=total_pages` was requested. Never
    /// clamped: an invalid page number indicates an orchestration bug
    /// upstream.
    #[error("page {page_number} is out of range (archive has {total_pages} page(s))")]
    PageOutOfRange {
        page_number: usize,
        total_pages: usize,
    },

    /// The group key slugified to an empty path segment and the
    /// configured policy is `reject`.
    #[error("group key `{group_key}` slugifies to an empty path segment")]
    EmptySlug { group_key: String },

    /// A lower-level error annotated with the group it occurred in.
    #[error("archive group `{group_key}`: {source}")]
    Group {
        group_key: String,
        #[source]
        source: Box<ArchiveError>,
    },
}

impl ArchiveError {
    /// Attach group context, unless it is already present.
    pub(crate) fn for_group(self, group_key: &str) -> Self {
        match self {
            err @ (Self::Group { .. } | Self::EmptySlug { .. }) => err,
            err => Self::Group {
                group_key: group_key.to_owned(),
                source: Box::new(err),
            },
        }
    }
}
