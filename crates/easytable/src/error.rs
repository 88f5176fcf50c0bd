//! Error types for easytable

use thiserror::Error;

use crate::value::ValueKind;

/// Error type for table configuration and view-state events
///
/// The filter, sort and paginate stages never fail; these errors only come
/// from building a table or from dispatching an event it cannot honour.
#[derive(Debug, Error)]
pub enum TableError {
	/// No column is defined for the requested field
	#[error("Column not found: {0}")]
	ColumnNotFound(String),

	/// The column exists but sorting was disabled for it
	#[error("Column is not sortable: {0}")]
	NotSortable(String),

	/// Two columns reference the same field
	#[error("Duplicate column field: {0}")]
	DuplicateColumn(String),

	/// Page size is zero or not one of the selectable options
	#[error("Invalid page size: {0}")]
	InvalidPageSize(usize),

	/// A page-size change was requested on a table without pagination
	#[error("Pagination is disabled for this table")]
	PaginationDisabled,

	/// A search was requested on a table without a search box
	#[error("Search is disabled for this table")]
	SearchDisabled,

	/// A row value contradicts the kind declared by its column
	#[error("Row {row_id}: field '{field}' expected {expected} value, found {found}")]
	KindMismatch {
		/// Identifier of the offending row
		row_id: String,
		/// Field holding the value
		field: String,
		/// Kind declared by the column
		expected: ValueKind,
		/// Kind actually stored in the row
		found: ValueKind,
	},

	/// Row data could not be interpreted
	#[error("Invalid row: {0}")]
	InvalidRow(String),

	/// Table options failed validation
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	/// Table options could not be parsed from TOML
	#[error("Failed to parse configuration: {0}")]
	ConfigParse(#[from] toml::de::Error),

	/// Writing an export format failed
	#[cfg(feature = "export")]
	#[error("Export error: {0}")]
	Export(String),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
