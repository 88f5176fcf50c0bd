//! Pagination functionality for tables

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Rows per page when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Returns the number of pages needed for `total_items`
///
/// Never less than 1, even for an empty data set or a zero page size.
///
/// # Examples
///
/// ```
/// use easytable::pagination::total_pages;
///
/// assert_eq!(total_pages(5, 2), 3);
/// assert_eq!(total_pages(4, 2), 2);
/// assert_eq!(total_pages(0, 10), 1);
/// ```
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
	if page_size == 0 {
		return 1;
	}
	total_items.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
	page.max(1).min(total_pages.max(1))
}

/// Returns the 0-based index range of `page` (1-based), clipped to `total_items`
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
	let start = page
		.saturating_sub(1)
		.saturating_mul(page_size)
		.min(total_items);
	let end = start.saturating_add(page_size).min(total_items);
	start..end
}

/// Returns the slice of `items` shown on `page` (1-based)
///
/// # Examples
///
/// ```
/// use easytable::pagination::paginate;
///
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(paginate(&items, 3, 2), &[5]);
/// assert!(paginate(&items, 4, 2).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
	&items[page_bounds(page, page_size, items.len())]
}

/// Position of the current page within the filtered, sorted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
	/// Current page number (1-indexed)
	pub number: usize,
	/// Total number of pages
	pub num_pages: usize,
	/// Rows per page
	pub page_size: usize,
	/// Number of rows across all pages
	pub count: usize,
}

impl PageInfo {
	/// Describes page `number` of `count` rows, clamping the number into range
	pub fn new(number: usize, page_size: usize, count: usize) -> Self {
		let num_pages = total_pages(count, page_size);
		Self {
			number: clamp_page(number, num_pages),
			num_pages,
			page_size,
			count,
		}
	}

	/// A single page holding all `count` rows, used when pagination is off
	pub fn single(count: usize) -> Self {
		Self {
			number: 1,
			num_pages: 1,
			page_size: count,
			count,
		}
	}

	/// Returns the 0-based index range of this page's rows
	pub fn bounds(&self) -> Range<usize> {
		page_bounds(self.number, self.page_size, self.count)
	}

	/// Returns the 1-based index of the first row on this page, or 0 when empty
	///
	/// # Examples
	///
	/// ```
	/// use easytable::PageInfo;
	///
	/// let page = PageInfo::new(2, 3, 15);
	/// assert_eq!(page.start_index(), 4);
	/// assert_eq!(page.end_index(), 6);
	/// ```
	pub fn start_index(&self) -> usize {
		let bounds = self.bounds();
		if bounds.is_empty() { 0 } else { bounds.start + 1 }
	}

	/// Returns the 1-based index of the last row on this page, or 0 when empty
	pub fn end_index(&self) -> usize {
		let bounds = self.bounds();
		if bounds.is_empty() { 0 } else { bounds.end }
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.number < self.num_pages
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Footer text, e.g. `"Showing 1 to 10 of 57 entries"`
	pub fn summary(&self) -> String {
		format!(
			"Showing {} to {} of {} entries",
			self.start_index(),
			self.end_index(),
			self.count
		)
	}
}
