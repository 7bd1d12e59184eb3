//! Page-window computation over in-memory collections.
//!
//! A [`Paginator`] derives a page count from an item count and a page size
//! and slices page windows out of a borrowed collection. Out-of-range pages
//! yield an empty window rather than an error. [`bind_pagination`] wires one
//! shared paginator into several pagination controls at once and hands the
//! selected window to a binder closure.

use crate::error::{AmpError, AmpResult};

/// Encapsulates pagination logic: item count, page size, derived page count,
/// and page-window slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    item_count: usize,
    page_size: usize,
    page_count: usize,
}

impl Paginator {
    /// Create a paginator for `item_count` items at `page_size` per page.
    ///
    /// A zero page size is a contract violation and fails with
    /// [`AmpError::InvalidArgument`].
    pub fn new(item_count: usize, page_size: usize) -> AmpResult<Self> {
        if page_size == 0 {
            return Err(AmpError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            item_count,
            page_size,
            page_count: item_count.div_ceil(page_size),
        })
    }

    /// Total number of items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages: `ceil(item_count / page_size)`.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The window of `items` for zero-based `page`.
    ///
    /// Pages beyond the page count yield an empty slice, never an error.
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page > self.page_count {
            return &[];
        }
        let start = page * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Contract for UI-ish controls that render pagination state.
///
/// A control receives the shared [`Paginator`] and reports which page the
/// user has selected.
pub trait PaginationControl {
    /// Hand the control the paginator that holds the pagination math.
    fn set_paginator(&mut self, paginator: Paginator);

    /// The current page, resolved by the control.
    fn current_page(&self) -> usize;
}

/// Bind a collection to one or more pagination controls.
///
/// Every control receives the shared paginator; the last control's reported
/// page selects the window passed to `binder`. With no controls the first
/// page is bound.
pub fn bind_pagination<'a, T, F>(
    items: &'a [T],
    total_items: usize,
    page_size: usize,
    controls: &mut [&mut dyn PaginationControl],
    binder: F,
) -> AmpResult<()>
where
    F: FnOnce(&'a [T]),
{
    let paginator = Paginator::new(total_items, page_size)?;

    let mut current_page = 0;
    for control in controls.iter_mut() {
        control.set_paginator(paginator);
        current_page = control.current_page();
    }

    binder(paginator.page(items, current_page));
    Ok(())
}
