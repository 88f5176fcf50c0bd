//! HTML rendering
//!
//! Produces plain markup for a [`TableView`]: optional search box and
//! page-size selector, the table itself, and the pagination footer. Styling
//! and event wiring are left to the host page; controls carry `data-*`
//! attributes naming the [`ViewEvent`](crate::ViewEvent) they trigger.

use std::fmt;

use crate::table::{DataTable, TableView};
use crate::window::PageLink;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use easytable::render::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Renders `view` of `table` as an HTML fragment
///
/// Cell text, labels and the query are escaped, custom renderer output
/// included.
pub fn render_html(table: &DataTable, view: &TableView<'_>) -> String {
	HtmlTable { table, view }.to_string()
}

/// HTML markup of one table view
pub struct HtmlTable<'a, 'r> {
	table: &'a DataTable,
	view: &'a TableView<'r>,
}

impl<'a, 'r> HtmlTable<'a, 'r> {
	/// Wraps a table and one of its views
	pub fn new(table: &'a DataTable, view: &'a TableView<'r>) -> Self {
		Self { table, view }
	}

	fn write_controls(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let options = self.table.options();
		if !options.enable_search && !options.enable_pagination {
			return Ok(());
		}

		writeln!(f, "<div class=\"easytable-controls\">")?;
		if options.enable_search {
			writeln!(
				f,
				"<input type=\"search\" class=\"easytable-search\" placeholder=\"Search...\" value=\"{}\">",
				escape_html(self.table.state().query())
			)?;
		}
		if options.enable_pagination {
			self.write_page_size_selector(f)?;
		}
		writeln!(f, "</div>")
	}

	fn write_page_size_selector(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let current = self.table.state().page_size();
		let mut sizes = self.table.options().page_size_options.clone();
		if !sizes.contains(&current) {
			sizes.push(current);
			sizes.sort_unstable();
		}

		write!(f, "<select class=\"easytable-page-size\">")?;
		for size in sizes {
			let selected = if size == current { " selected" } else { "" };
			write!(f, "<option value=\"{size}\"{selected}>{size}</option>")?;
		}
		writeln!(f, "</select>")
	}

	fn write_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<thead>\n<tr>")?;
		for header in self.table.headers() {
			let field = escape_html(header.field);
			let label = escape_html(header.label);
			match (header.sortable, header.sort) {
				(true, Some(direction)) => write!(
					f,
					"<th data-sort=\"{}\" class=\"sortable sorted\">{} {}</th>",
					field,
					label,
					direction.indicator()
				)?,
				(true, None) => write!(f, "<th data-sort=\"{}\" class=\"sortable\">{}</th>", field, label)?,
				(false, _) => write!(f, "<th>{}</th>", label)?,
			}
		}
		writeln!(f, "</tr>\n</thead>")
	}

	fn write_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "<tbody>")?;
		if self.view.is_empty() {
			writeln!(
				f,
				"<tr><td colspan=\"{}\" class=\"easytable-empty\">No data</td></tr>",
				self.table.columns().len().max(1)
			)?;
		}

		for row in &self.view.rows {
			write!(f, "<tr data-id=\"{}\">", escape_html(row.id()))?;
			for column in self.table.columns() {
				let cell = escape_html(&column.render(row));
				if column.classes().is_empty() {
					write!(f, "<td>{}</td>", cell)?;
				} else {
					write!(f, "<td class=\"{}\">{}</td>", escape_html(column.classes()), cell)?;
				}
			}
			writeln!(f, "</tr>")?;
		}
		writeln!(f, "</tbody>")
	}

	fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let page = &self.view.page;
		writeln!(f, "<div class=\"easytable-footer\">")?;
		writeln!(f, "<span class=\"easytable-summary\">{}</span>", self.view.summary())?;
		write!(f, "<nav class=\"easytable-pages\">")?;

		write!(
			f,
			"<button data-page=\"previous\"{}>Previous</button>",
			disabled(!page.has_previous())
		)?;
		for link in &self.view.window {
			match link {
				PageLink::Page(number) if *number == page.number => {
					write!(f, "<button data-page=\"{number}\" class=\"current\">{number}</button>")?
				}
				PageLink::Page(number) => write!(f, "<button data-page=\"{number}\">{number}</button>")?,
				PageLink::Ellipsis => write!(f, "<span class=\"ellipsis\">{}</span>", link)?,
			}
		}
		write!(
			f,
			"<button data-page=\"next\"{}>Next</button>",
			disabled(!page.has_next())
		)?;

		writeln!(f, "</nav>\n</div>")
	}
}

impl fmt::Display for HtmlTable<'_, '_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "<div class=\"easytable\">")?;
		self.write_controls(f)?;
		writeln!(f, "<table>")?;
		self.write_head(f)?;
		self.write_body(f)?;
		writeln!(f, "</table>")?;
		if self.table.options().enable_pagination {
			self.write_footer(f)?;
		}
		writeln!(f, "</div>")
	}
}

fn disabled(is_disabled: bool) -> &'static str {
	if is_disabled { " disabled" } else { "" }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::{CellRenderer, Column};
	use crate::config::TableOptions;
	use crate::row::Row;

	fn rows() -> Vec<Row> {
		vec![
			Row::new("1").with("name", "<Bob>").with("age", 30),
			Row::new("2").with("name", "Ann").with("age", 25),
			Row::new("3").with("name", "Cid"),
		]
	}

	#[test]
	fn test_plain_table_has_no_controls() {
		let rows = rows();
		let mut table = DataTable::new(vec![Column::text("name", "Name")]).unwrap();
		let view = table.view(&rows);
		let html = render_html(&table, &view);
		assert!(!html.contains("easytable-search"));
		assert!(!html.contains("easytable-footer"));
		assert!(html.contains("<tr data-id=\"2\"><td>Ann</td></tr>"));
	}

	#[test]
	fn test_cells_are_escaped() {
		let rows = rows();
		let mut table = DataTable::new(vec![Column::text("name", "Name")]).unwrap();
		let view = table.view(&rows);
		let html = render_html(&table, &view);
		assert!(html.contains("<td>&lt;Bob&gt;</td>"));
		assert!(!html.contains("<Bob>"));
	}

	#[test]
	fn test_sorted_header_shows_indicator() {
		let rows = rows();
		let mut table = DataTable::new(vec![
			Column::text("name", "Name").sortable(false),
			Column::number("age", "Age"),
		])
		.unwrap();
		table.sort_by(&rows, "age").unwrap();
		table.sort_by(&rows, "age").unwrap();
		let view = table.view(&rows);
		let html = render_html(&table, &view);
		assert!(html.contains("<th>Name</th>"));
		assert!(html.contains("<th data-sort=\"age\" class=\"sortable sorted\">Age ▼</th>"));
	}

	#[test]
	fn test_custom_renderer_and_null_cell() {
		let rows = rows();
		let mut table = DataTable::new(vec![
			Column::number("age", "Age").renderer(|value, _row| {
				if value.is_null() {
					"n/a".to_string()
				} else {
					format!("{value} yrs")
				}
			}),
		])
		.unwrap();
		let view = table.view(&rows);
		let html = render_html(&table, &view);
		assert!(html.contains("<td>30 yrs</td>"));
		assert!(html.contains("<td>n/a</td>"));
	}

	#[test]
	fn test_footer_and_controls() {
		let rows = rows();
		let options = TableOptions::new().paginated(2).searchable();
		let mut table = DataTable::with_options(vec![Column::text("name", "Name")], options).unwrap();
		let view = table.view(&rows);
		let html = render_html(&table, &view);
		assert!(html.contains("class=\"easytable-search\""));
		assert!(html.contains("<option value=\"2\" selected>2</option>"));
		assert!(html.contains("Showing 1 to 2 of 3 entries"));
		assert!(html.contains("<button data-page=\"previous\" disabled>Previous</button>"));
		assert!(html.contains("<button data-page=\"1\" class=\"current\">1</button>"));
		assert!(html.contains("<button data-page=\"next\">Next</button>"));
	}

	#[test]
	fn test_empty_view() {
		let mut table = DataTable::new(vec![Column::text("name", "Name")]).unwrap();
		let view = table.view(&[]);
		let html = render_html(&table, &view);
		assert!(html.contains("No data"));
	}

	#[test]
	fn test_shared_renderer_via_with_renderer() {
		let rows = rows();
		let upper = CellRenderer::custom(|value, _row| value.to_string().to_uppercase());
		let mut table = DataTable::new(vec![
			Column::text("name", "Name").with_renderer(upper.clone()),
			Column::text("id", "Id").with_renderer(upper),
		])
		.unwrap();
		let view = table.view(&rows);
		let html = HtmlTable::new(&table, &view).to_string();
		assert!(html.contains("<tr data-id=\"2\"><td>ANN</td><td>2</td></tr>"));
		assert_eq!(html, render_html(&table, &view));
	}
}
