//! Per-group, per-page orchestration.
//!
//! Owns the cardinality contract: for each group, exactly
//! `page_count(items, per_page)` descriptors, numbered from 1, in the
//! caller's group order. Generation is a pure function of its inputs —
//! no shared state, no I/O — so independent archive types (categories,
//! tags) can run in parallel without coordination.

use crate::config::{ArchiveConfig, EmptyKeys};
use crate::error::ArchiveError;
use crate::page::{PageDescriptor, build_page};
use crate::paginate::page_count;
use crate::slug::slugify;

/// Lazily produce descriptors for every `(group, page)` pair.
///
/// `groups` supplies `(group_key, items)` pairs in display order; items
/// within a group are already in final display order (this layer never
/// sorts or filters). The returned iterator yields `Ok` descriptors
/// until the first error and nothing afterwards — a failed group
/// contributes no partial output past the failure point.
pub fn generate<T, I>(
    config: &ArchiveConfig,
    groups: I,
) -> Descriptors<'_, T, <I as IntoIterator>::IntoIter>
where
    T: Clone,
    I: IntoIterator<Item = (String, Vec<T>)>,
{
    Descriptors {
        config,
        groups: groups.into_iter(),
        current: None,
        failed: false,
    }
}

/// Materialize the whole run, or return its first error.
pub fn generate_to_vec<T, I>(
    config: &ArchiveConfig,
    groups: I,
) -> Result<Vec<PageDescriptor<T>>, ArchiveError>
where
    T: Clone,
    I: IntoIterator<Item = (String, Vec<T>)>,
{
    generate(config, groups).collect()
}

/// Iterator over page descriptors, flat across groups.
pub struct Descriptors<'a, T, I> {
    config: &'a ArchiveConfig,
    groups: I,
    current: Option<GroupState<T>>,
    failed: bool,
}

/// Pagination progress within one group.
struct GroupState<T> {
    key: String,
    items: Vec<T>,
    next_page: usize,
    total_pages: usize,
}

impl<'a, T, I> Descriptors<'a, T, I> {
    /// Validate a group and compute its page count before page 1.
    fn start_group(config: &ArchiveConfig, key: String, items: Vec<T>) -> Result<GroupState<T>, ArchiveError> {
        if config.empty_keys == EmptyKeys::Reject && slugify(&key).is_empty() {
            return Err(ArchiveError::EmptySlug { group_key: key });
        }
        let total_pages =
            page_count(items.len(), config.per_page).map_err(|e| e.for_group(&key))?;
        Ok(GroupState {
            key,
            items,
            next_page: 1,
            total_pages,
        })
    }
}

impl<'a, T, I> Iterator for Descriptors<'a, T, I>
where
    T: Clone,
    I: Iterator<Item = (String, Vec<T>)>,
{
    type Item = Result<PageDescriptor<T>, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(state) = self.current.as_mut() {
                if state.next_page <= state.total_pages {
                    let page = state.next_page;
                    state.next_page += 1;
                    let result = build_page(self.config, &state.key, &state.items, page)
                        .map_err(|e| e.for_group(&state.key));
                    if let Err(err) = &result {
                        // Unreachable from this loop's own page numbers;
                        // if it fires, the contract is broken upstream.
                        crate::log!("error"; "{err}");
                        self.failed = true;
                        self.current = None;
                    }
                    return Some(result);
                }
                self.current = None;
            }

            let (key, items) = self.groups.next()?;
            match Self::start_group(self.config, key, items) {
                Ok(state) => self.current = Some(state),
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
