//! Pure descriptor construction.
//!
//! Everything is computed up front from the inputs — there is no
//! partially-initialized builder whose later fields depend on earlier
//! assignments, so field ordering cannot introduce bugs.

use crate::config::ArchiveConfig;
use crate::error::ArchiveError;
use crate::page::{PageDescriptor, page_num_to_path, page_path};
use crate::paginate::{page_count, slice_bounds};
use crate::slug::{archive_dir, slugify};

/// Build the descriptor for one `(group_key, page_number)` pair.
///
/// `items` is the group's full ordered item list; only the subrange for
/// this page is copied into the descriptor. Fails with
/// [`ArchiveError::PageOutOfRange`] for a page number beyond the
/// group's page count — never clamps, since an invalid page number
/// means the orchestration upstream is broken.
pub fn build_page<T: Clone>(
    config: &ArchiveConfig,
    group_key: &str,
    items: &[T],
    page_number: usize,
) -> Result<PageDescriptor<T>, ArchiveError> {
    let total_items = items.len();
    let total_pages = page_count(total_items, config.per_page)?;
    let (start, end) = slice_bounds(total_items, config.per_page, page_number)?;

    let dir = archive_dir(&config.base_dir, group_key);
    let template = &config.paginate_path_template;

    let previous_page_number = (page_number > 1).then(|| page_number - 1);
    let next_page_number = (page_number < total_pages).then(|| page_number + 1);

    Ok(PageDescriptor {
        archive_id: config.archive_id.clone(),
        group_key: group_key.to_owned(),
        slug: slugify(group_key),
        page_number,
        total_pages,
        per_page: config.per_page,
        total_items,
        items: items[start..end].to_vec(),
        previous_page_number,
        previous_page_path: page_num_to_path(previous_page_number, &dir, template),
        next_page_number,
        next_page_path: page_num_to_path(next_page_number, &dir, template),
        output_path: page_path(page_number, &dir, template),
        template_path: config.template_path.clone(),
    })
}
