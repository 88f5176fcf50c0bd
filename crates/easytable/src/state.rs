//! View state and its transitions
//!
//! [`ViewState`] is the only mutable data of a table instance. Every user
//! interaction is a [`ViewEvent`]; [`ViewState::apply`] maps
//! `(state, event)` to the next state without touching the rows.

use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE_SIZE, clamp_page};
use crate::sorting::SortState;

/// A discrete user interaction with the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
	/// The search text changed
	Search(String),
	/// A column header was activated
	Sort(String),
	/// Move forward one page
	NextPage,
	/// Move back one page
	PreviousPage,
	/// Jump to a page (1-indexed)
	GoToPage(usize),
	/// A new page size was selected
	SetPageSize(usize),
}

/// Per-instance view parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
	query: String,
	sort: SortState,
	current_page: usize,
	page_size: usize,
}

impl Default for ViewState {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}

impl ViewState {
	/// Initial state: page 1, no query, no sort
	pub fn new(page_size: usize) -> Self {
		Self {
			query: String::new(),
			sort: SortState::none(),
			current_page: 1,
			page_size,
		}
	}

	/// Returns the search text (empty means no filter)
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Returns the sort configuration
	pub fn sort(&self) -> &SortState {
		&self.sort
	}

	/// Returns the current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the rows-per-page setting
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Next state after `event`, given the current number of pages
	///
	/// - A changed query or page size goes back to page 1
	/// - `NextPage` and `PreviousPage` stop at the last and first page
	/// - `GoToPage` is clamped into `[1, total_pages]`
	/// - `Sort` cycles the sort state of the requested field
	///
	/// # Examples
	///
	/// ```
	/// use easytable::{ViewEvent, ViewState};
	///
	/// let state = ViewState::new(2).apply(&ViewEvent::GoToPage(3), 3);
	/// assert_eq!(state.current_page(), 3);
	///
	/// let state = state.apply(&ViewEvent::NextPage, 3);
	/// assert_eq!(state.current_page(), 3);
	///
	/// let state = state.apply(&ViewEvent::Search("bo".to_string()), 3);
	/// assert_eq!(state.current_page(), 1);
	/// ```
	pub fn apply(&self, event: &ViewEvent, total_pages: usize) -> Self {
		let mut next = self.clone();
		match event {
			ViewEvent::Search(query) => {
				if *query != self.query {
					next.query = query.clone();
					next.current_page = 1;
				}
			}
			ViewEvent::Sort(field) => {
				next.sort = self.sort.cycle(field);
			}
			ViewEvent::NextPage => {
				if self.current_page < total_pages {
					next.current_page = self.current_page + 1;
				}
			}
			ViewEvent::PreviousPage => {
				if self.current_page > 1 {
					next.current_page = self.current_page - 1;
				}
			}
			ViewEvent::GoToPage(page) => {
				next.current_page = clamp_page(*page, total_pages);
			}
			ViewEvent::SetPageSize(size) => {
				if *size != self.page_size {
					next.page_size = *size;
					next.current_page = 1;
				}
			}
		}
		next
	}

	/// Returns this state with the page clamped into `[1, total_pages]`
	pub fn clamped(&self, total_pages: usize) -> Self {
		Self {
			current_page: clamp_page(self.current_page, total_pages),
			..self.clone()
		}
	}
}
