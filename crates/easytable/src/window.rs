//! Pagination window
//!
//! Abbreviates the list of page links so large tables do not render one
//! control per page. The first and last pages are always present, the
//! current page is shown with one neighbour on each side, and gaps are
//! marked with an ellipsis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "page")]
pub enum PageLink {
	/// A link to a page (1-indexed)
	Page(usize),
	/// Marker for a run of omitted pages
	Ellipsis,
}

impl PageLink {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page(self) -> Option<usize> {
		match self {
			Self::Page(page) => Some(page),
			Self::Ellipsis => None,
		}
	}
}

impl fmt::Display for PageLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(page) => write!(f, "{page}"),
			Self::Ellipsis => f.write_str("…"),
		}
	}
}

/// Builds the page links shown for `current` out of `total_pages`
///
/// `current` is clamped into range first.
///
/// # Examples
///
/// ```
/// use easytable::page_window;
/// use easytable::PageLink::{Ellipsis, Page};
///
/// assert_eq!(page_window(1, 1), vec![Page(1)]);
/// assert_eq!(
///     page_window(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
	let total = total_pages.max(1);
	if total == 1 {
		return vec![PageLink::Page(1)];
	}

	let current = current.clamp(1, total);
	let start = current.saturating_sub(1).max(2);
	let end = (current + 1).min(total - 1);

	let mut links = Vec::with_capacity(7);
	links.push(PageLink::Page(1));

	if start > 2 {
		links.push(PageLink::Ellipsis);
	}

	links.extend((start..=end).map(PageLink::Page));

	if end < total - 1 {
		links.push(PageLink::Ellipsis);
	}

	links.push(PageLink::Page(total));
	links
}
