//! Cell renderers

use std::fmt;
use std::sync::Arc;

use crate::row::Row;
use crate::value::Value;

/// Signature of a custom cell formatting function
///
/// Receives the cell value and the whole row.
pub type RenderFn = dyn Fn(&Value, &Row) -> String + Send + Sync;

/// How a column turns a cell value into display text
#[derive(Clone, Default)]
pub enum CellRenderer {
	/// Display the value as is; null renders as the empty string
	#[default]
	Plain,
	/// Format the value with a caller-supplied function
	Custom(Arc<RenderFn>),
}

impl CellRenderer {
	/// Wraps a formatting function
	///
	/// # Example
	///
	/// ```rust
	/// use easytable::{CellRenderer, Row, Value};
	///
	/// let renderer = CellRenderer::custom(|value: &Value, _row: &Row| format!("{value} yrs"));
	/// let row = Row::new("1");
	/// assert_eq!(renderer.render(&Value::from(30), &row), "30 yrs");
	/// ```
	pub fn custom<F>(f: F) -> Self
	where
		F: Fn(&Value, &Row) -> String + Send + Sync + 'static,
	{
		Self::Custom(Arc::new(f))
	}

	/// Renders one cell
	pub fn render(&self, value: &Value, row: &Row) -> String {
		match self {
			Self::Plain => value.to_string(),
			Self::Custom(f) => f(value, row),
		}
	}

	/// Returns true for [`CellRenderer::Custom`]
	pub fn is_custom(&self) -> bool {
		matches!(self, Self::Custom(_))
	}
}

impl fmt::Debug for CellRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Plain => f.write_str("Plain"),
			Self::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}
