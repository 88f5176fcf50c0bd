//! CSV and JSON export
//!
//! Exports cover every row the current view state selects (search and sort
//! applied), not just the current page.

use serde_json::{Map, Value as JsonValue};

use crate::error::{Result, TableError};
use crate::row::Row;
use crate::table::DataTable;
use crate::value::Value;

/// Writes the filtered, sorted rows as CSV
///
/// The first record holds the column labels; cells use each column's
/// renderer.
///
/// # Examples
///
/// ```
/// use easytable::{Column, DataTable, Row};
/// use easytable::export::to_csv;
///
/// let rows = vec![Row::new("1").with("name", "Bob").with("age", 30)];
/// let table = DataTable::new(vec![Column::text("name", "Name"), Column::number("age", "Age")]).unwrap();
/// assert_eq!(to_csv(&table, &rows).unwrap(), "Name,Age\nBob,30\n");
/// ```
pub fn to_csv(table: &DataTable, rows: &[Row]) -> Result<String> {
	let mut writer = csv::Writer::from_writer(Vec::new());

	writer
		.write_record(table.columns().iter().map(|column| column.label()))
		.map_err(|e| TableError::Export(e.to_string()))?;

	for row in table.process(rows) {
		writer
			.write_record(table.columns().iter().map(|column| column.render(row)))
			.map_err(|e| TableError::Export(e.to_string()))?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| TableError::Export(e.to_string()))?;
	String::from_utf8(bytes).map_err(|e| TableError::Export(e.to_string()))
}

/// Returns the filtered, sorted rows as a JSON array
///
/// Each object holds the row identifier plus the raw value of every column.
pub fn to_json(table: &DataTable, rows: &[Row]) -> JsonValue {
	let records = table
		.process(rows)
		.into_iter()
		.map(|row| {
			let mut object = Map::new();
			object.insert("id".to_string(), JsonValue::String(row.id().to_string()));
			for column in table.columns() {
				object.insert(column.field().to_string(), json_value(column.value(row)));
			}
			JsonValue::Object(object)
		})
		.collect();
	JsonValue::Array(records)
}

/// Serializes the JSON export to a string
pub fn to_json_string(table: &DataTable, rows: &[Row]) -> Result<String> {
	serde_json::to_string_pretty(&to_json(table, rows)).map_err(|e| TableError::Export(e.to_string()))
}

fn json_value(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Number(n) => serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
		Value::Text(s) => JsonValue::String(s.clone()),
	}
}
