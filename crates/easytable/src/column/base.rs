//! Base column definition

use std::fmt::Debug;

use super::renderer::CellRenderer;
use crate::row::Row;
use crate::value::{Value, ValueKind};

/// A table column definition
///
/// Each column is responsible for:
/// - Naming the row field it displays and the header label
/// - Declaring the kind of value the field holds
/// - Rendering cells through its [`CellRenderer`]
/// - Saying whether it can be sorted and whether it takes part in search
///
/// # Example
///
/// ```rust
/// use easytable::{Column, Row, ValueKind};
///
/// let age = Column::number("age", "Age").renderer(|value, _row| format!("{value} yrs"));
/// assert_eq!(age.kind(), ValueKind::Number);
///
/// let row = Row::new("1").with("age", 30);
/// assert_eq!(age.render(&row), "30 yrs");
/// ```
#[derive(Clone)]
pub struct Column {
	field: String,
	label: String,
	kind: ValueKind,
	renderer: CellRenderer,
	sortable: bool,
	searchable: bool,
	css_classes: String,
}

impl Column {
	/// Creates a column with an explicit value kind
	pub fn new(field: impl Into<String>, label: impl Into<String>, kind: ValueKind) -> Self {
		Self {
			field: field.into(),
			label: label.into(),
			kind,
			renderer: CellRenderer::Plain,
			sortable: true,
			searchable: true,
			css_classes: String::new(),
		}
	}

	/// Creates a text column
	pub fn text(field: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(field, label, ValueKind::Text)
	}

	/// Creates a numeric column
	pub fn number(field: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(field, label, ValueKind::Number)
	}

	/// Sets a custom cell renderer
	pub fn renderer<F>(mut self, f: F) -> Self
	where
		F: Fn(&Value, &Row) -> String + Send + Sync + 'static,
	{
		self.renderer = CellRenderer::custom(f);
		self
	}

	/// Replaces the cell renderer
	pub fn with_renderer(mut self, renderer: CellRenderer) -> Self {
		self.renderer = renderer;
		self
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column takes part in search
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	/// Sets CSS classes for the cells of this column
	pub fn css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.css_classes = css_classes.into();
		self
	}

	/// Returns the row field this column reads
	///
	/// This is the identifier used for sorting.
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Returns the header text
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the declared value kind
	pub fn kind(&self) -> ValueKind {
		self.kind
	}

	/// Returns the cell renderer
	pub fn cell_renderer(&self) -> &CellRenderer {
		&self.renderer
	}

	/// Returns whether this column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns whether this column takes part in search
	pub fn is_searchable(&self) -> bool {
		self.searchable
	}

	/// Returns the CSS classes applied to cells of this column
	pub fn classes(&self) -> &str {
		&self.css_classes
	}

	/// Reads this column's value from a row
	pub fn value<'r>(&self, row: &'r Row) -> &'r Value {
		row.get(&self.field)
	}

	/// Renders this column's cell for a row
	pub fn render(&self, row: &Row) -> String {
		self.renderer.render(self.value(row), row)
	}

	/// Returns true when `value` agrees with the declared kind
	///
	/// Null is accepted by every kind.
	pub fn accepts(&self, value: &Value) -> bool {
		value.kind().is_none_or(|kind| kind == self.kind)
	}
}

impl Debug for Column {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("field", &self.field)
			.field("label", &self.label)
			.field("kind", &self.kind)
			.field("renderer", &self.renderer)
			.field("sortable", &self.sortable)
			.field("searchable", &self.searchable)
			.field("css_classes", &self.css_classes)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_column_creation() {
		let column = Column::text("name", "Name");
		assert_eq!(column.field(), "name");
		assert_eq!(column.label(), "Name");
		assert_eq!(column.kind(), ValueKind::Text);
		assert!(column.is_sortable());
		assert!(column.is_searchable());
		assert!(!column.cell_renderer().is_custom());
	}

	#[test]
	fn test_column_render_plain() {
		let column = Column::text("name", "Name");
		let row = Row::new("1").with("name", "Hello");
		assert_eq!(column.render(&row), "Hello");
	}

	#[test]
	fn test_column_render_missing_value_is_empty() {
		let column = Column::number("age", "Age");
		let row = Row::new("1");
		assert_eq!(column.render(&row), "");
	}

	#[test]
	fn test_column_builder() {
		let column = Column::text("name", "Name")
			.sortable(false)
			.searchable(false)
			.css_classes("custom-class");

		assert!(!column.is_sortable());
		assert!(!column.is_searchable());
		assert_eq!(column.classes(), "custom-class");
	}

	#[test]
	fn test_column_accepts_declared_kind_and_null() {
		let column = Column::number("age", "Age");
		assert!(column.accepts(&Value::from(3)));
		assert!(column.accepts(&Value::Null));
		assert!(!column.accepts(&Value::from("three")));
	}
}
