//! Table instance: columns, options and view state driving the pipeline

use std::collections::HashSet;

use crate::column::Column;
use crate::config::TableOptions;
use crate::error::{Result, TableError};
use crate::filtering::filter_rows;
use crate::pagination::PageInfo;
use crate::row::Row;
use crate::sorting::{SortDirection, sort_rows};
use crate::state::{ViewEvent, ViewState};
use crate::window::{PageLink, page_window};

/// Header cell description for a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
	/// Field of the column
	pub field: &'a str,
	/// Header text
	pub label: &'a str,
	/// Whether clicking the header sorts
	pub sortable: bool,
	/// Direction indicator when this column is the sort key
	pub sort: Option<SortDirection>,
}

/// What a table shows for the current rows and view state
#[derive(Debug, Clone)]
pub struct TableView<'r> {
	/// Rows of the current page, filtered and sorted
	pub rows: Vec<&'r Row>,
	/// Position of the current page
	pub page: PageInfo,
	/// Abbreviated page links
	pub window: Vec<PageLink>,
	/// Number of rows before filtering
	pub total_rows: usize,
}

impl TableView<'_> {
	/// Footer text, e.g. `"Showing 1 to 10 of 57 entries"`
	pub fn summary(&self) -> String {
		self.page.summary()
	}

	/// Returns true when no row is shown
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns true when search removed rows
	pub fn is_filtered(&self) -> bool {
		self.page.count < self.total_rows
	}
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A data table instance
///
/// Holds the column definitions, the options and the per-instance
/// [`ViewState`]. Rows stay owned by the caller and are passed to every call,
/// so the table always works on the latest data.
///
/// ```mermaid
/// graph LR
///     A[Rows] --> B[Filter]
///     B --> C[Sort]
///     C --> D[Paginate]
///     D --> E[TableView]
///     S[ViewState] --> B
///     S --> C
///     S --> D
///     V[ViewEvent] --> S
/// ```
///
/// # Example
///
/// ```rust
/// use easytable::{Column, DataTable, Row, TableOptions};
///
/// let rows = vec![
///     Row::new("1").with("name", "Bob").with("age", 30),
///     Row::new("2").with("name", "Ann").with("age", 25),
/// ];
/// let mut table = DataTable::with_options(
///     vec![Column::text("name", "Name"), Column::number("age", "Age")],
///     TableOptions::new().searchable(),
/// )
/// .unwrap();
///
/// table.sort_by(&rows, "age").unwrap();
/// let view = table.view(&rows);
/// assert_eq!(view.rows[0].id(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
	columns: Vec<Column>,
	options: TableOptions,
	state: ViewState,
}

impl DataTable {
	/// Creates a table with default options
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		Self::with_options(columns, TableOptions::default())
	}

	/// Creates a table with the given options
	///
	/// # Errors
	///
	/// Returns `DuplicateColumn` when two columns share a field, and
	/// `InvalidConfig` when the options fail validation.
	pub fn with_options(columns: Vec<Column>, options: TableOptions) -> Result<Self> {
		options.validate()?;

		let mut seen = HashSet::new();
		for column in &columns {
			if !seen.insert(column.field()) {
				return Err(TableError::DuplicateColumn(column.field().to_string()));
			}
		}

		let state = ViewState::new(options.page_size);
		Ok(Self {
			columns,
			options,
			state,
		})
	}

	/// Returns the column definitions
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Returns the column for `field`
	pub fn column(&self, field: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.field() == field)
	}

	/// Returns the table options
	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	/// Returns the current view state
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// Discards the view state and starts over from page 1, no query, no sort
	pub fn reset(&mut self) {
		self.state = ViewState::new(self.options.page_size);
	}

	/// Describes the header row
	pub fn headers(&self) -> Vec<Header<'_>> {
		self.columns
			.iter()
			.map(|column| Header {
				field: column.field(),
				label: column.label(),
				sortable: column.is_sortable(),
				sort: self.state.sort().direction_for(column.field()),
			})
			.collect()
	}

	/// Checks every row value against its column's declared kind
	///
	/// Duplicate row identifiers are only logged: they affect rendering keys,
	/// not the view pipeline.
	pub fn validate_rows(&self, rows: &[Row]) -> Result<()> {
		let mut ids = HashSet::new();
		for row in rows {
			if !ids.insert(row.id()) {
				tracing::warn!(row_id = row.id(), "Duplicate row identifier");
			}
			for column in &self.columns {
				let value = column.value(row);
				if let Some(found) = value.kind()
					&& !column.accepts(value)
				{
					return Err(TableError::KindMismatch {
						row_id: row.id().to_string(),
						field: column.field().to_string(),
						expected: column.kind(),
						found,
					});
				}
			}
		}
		Ok(())
	}

	/// Filters and sorts `rows` for the current state, without paginating
	pub fn process<'r>(&self, rows: &'r [Row]) -> Vec<&'r Row> {
		Self::process_with(&self.columns, &self.options, &self.state, rows)
	}

	fn process_with<'r>(
		columns: &[Column],
		options: &TableOptions,
		state: &ViewState,
		rows: &'r [Row],
	) -> Vec<&'r Row> {
		let query = if options.enable_search {
			state.query()
		} else {
			""
		};
		let mut processed = filter_rows(rows, columns, query, options.match_policy);

		let sort = state.sort();
		if let Some(column) = sort
			.key()
			.and_then(|key| columns.iter().find(|column| column.field() == key))
		{
			sort_rows(&mut processed, column, sort.direction());
		}

		tracing::debug!(
			total = rows.len(),
			matched = processed.len(),
			query = state.query(),
			sort = ?sort.to_query(),
			"Processed table rows"
		);
		processed
	}

	fn page_info_with(options: &TableOptions, state: &ViewState, count: usize) -> PageInfo {
		if options.enable_pagination {
			PageInfo::new(state.current_page(), state.page_size(), count)
		} else {
			PageInfo::single(count)
		}
	}

	/// Number of pages for `rows` under the current state
	pub fn total_pages(&self, rows: &[Row]) -> usize {
		Self::page_info_with(&self.options, &self.state, self.process(rows).len()).num_pages
	}

	/// Applies a user interaction
	///
	/// The resulting page is clamped against the rows as seen by the new
	/// state.
	///
	/// # Errors
	///
	/// - `SearchDisabled` for a search on a table without search
	/// - `ColumnNotFound` / `NotSortable` for a sort on an unknown or
	///   non-sortable column
	/// - `PaginationDisabled` / `InvalidPageSize` for a page-size change that
	///   cannot be honoured
	pub fn dispatch(&mut self, rows: &[Row], event: ViewEvent) -> Result<()> {
		self.check_event(&event)?;

		let total_pages = self.total_pages(rows);
		let next = self.state.apply(&event, total_pages);

		let count = Self::process_with(&self.columns, &self.options, &next, rows).len();
		let num_pages = Self::page_info_with(&self.options, &next, count).num_pages;
		self.state = next.clamped(num_pages);

		tracing::debug!(
			event = ?event,
			page = self.state.current_page(),
			num_pages,
			page_size = self.state.page_size(),
			"View state transition"
		);
		Ok(())
	}

	fn check_event(&self, event: &ViewEvent) -> Result<()> {
		match event {
			ViewEvent::Search(_) if !self.options.enable_search => Err(TableError::SearchDisabled),
			ViewEvent::Sort(field) => {
				let column = self
					.column(field)
					.ok_or_else(|| TableError::ColumnNotFound(field.clone()))?;
				if column.is_sortable() {
					Ok(())
				} else {
					Err(TableError::NotSortable(field.clone()))
				}
			}
			ViewEvent::SetPageSize(_) if !self.options.enable_pagination => {
				Err(TableError::PaginationDisabled)
			}
			ViewEvent::SetPageSize(size) if !self.options.allows_page_size(*size) => {
				Err(TableError::InvalidPageSize(*size))
			}
			_ => Ok(()),
		}
	}

	/// Sets the search text
	pub fn search(&mut self, rows: &[Row], query: impl Into<String>) -> Result<()> {
		self.dispatch(rows, ViewEvent::Search(query.into()))
	}

	/// Requests a sort on `field`, cycling ascending, descending, unsorted
	pub fn sort_by(&mut self, rows: &[Row], field: &str) -> Result<()> {
		self.dispatch(rows, ViewEvent::Sort(field.to_string()))
	}

	/// Moves to the next page; a no-op on the last page
	pub fn next_page(&mut self, rows: &[Row]) -> Result<()> {
		self.dispatch(rows, ViewEvent::NextPage)
	}

	/// Moves to the previous page; a no-op on the first page
	pub fn previous_page(&mut self, rows: &[Row]) -> Result<()> {
		self.dispatch(rows, ViewEvent::PreviousPage)
	}

	/// Jumps to `page`, clamped into range
	pub fn go_to_page(&mut self, rows: &[Row], page: usize) -> Result<()> {
		self.dispatch(rows, ViewEvent::GoToPage(page))
	}

	/// Selects a new page size and returns to page 1
	pub fn set_page_size(&mut self, rows: &[Row], size: usize) -> Result<()> {
		self.dispatch(rows, ViewEvent::SetPageSize(size))
	}

	/// Runs the pipeline and returns the current page
	///
	/// The stored page is clamped first, so a data set that shrank since the
	/// last call never leaves the view on a page past the end.
	pub fn view<'r>(&mut self, rows: &'r [Row]) -> TableView<'r> {
		let processed = self.process(rows);
		let page = Self::page_info_with(&self.options, &self.state, processed.len());

		if self.options.enable_pagination && page.number != self.state.current_page() {
			tracing::warn!(
				requested = self.state.current_page(),
				clamped = page.number,
				num_pages = page.num_pages,
				"Current page out of range, clamping"
			);
			self.state = self.state.clamped(page.num_pages);
		}

		let window = page_window(page.number, page.num_pages);
		let page_rows = processed[page.bounds()].to_vec();

		TableView {
			rows: page_rows,
			page,
			window,
			total_rows: rows.len(),
		}
	}
}
