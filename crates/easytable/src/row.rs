//! Row records
//!
//! A [`Row`] is a structured key-value mapping that always carries a text
//! identifier under [`ID_FIELD`]. The identifier is a stable rendering key;
//! the view pipeline never looks rows up by it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::value::Value;

/// Name of the identifier field every row carries
pub const ID_FIELD: &str = "id";

static NULL: Value = Value::Null;

/// One record of the data set
///
/// # Examples
///
/// ```
/// use easytable::{Row, Value};
///
/// let row = Row::new("1").with("name", "Bob").with("age", 30);
/// assert_eq!(row.id(), "1");
/// assert_eq!(row.get("name"), &Value::from("Bob"));
/// assert!(row.get("missing").is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>", into = "BTreeMap<String, Value>")]
pub struct Row {
	fields: BTreeMap<String, Value>,
}

impl Row {
	/// Creates a row with the given identifier and no other fields
	pub fn new(id: impl Into<String>) -> Self {
		let mut fields = BTreeMap::new();
		fields.insert(ID_FIELD.to_string(), Value::Text(id.into()));
		Self { fields }
	}

	/// Sets a field, builder style
	pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set(field, value);
		self
	}

	/// Sets a field
	///
	/// Writing the identifier field stores the text form of the value, so the
	/// row keeps a text identifier.
	pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		let field = field.into();
		let value = value.into();
		let value = if field == ID_FIELD {
			Value::Text(value.to_string())
		} else {
			value
		};
		self.fields.insert(field, value);
	}

	/// Returns the row identifier
	pub fn id(&self) -> &str {
		self.fields
			.get(ID_FIELD)
			.and_then(Value::as_text)
			.unwrap_or_default()
	}

	/// Returns the value of a field, or [`Value::Null`] when absent
	pub fn get(&self, field: &str) -> &Value {
		self.fields.get(field).unwrap_or(&NULL)
	}

	/// Returns true when the row has an entry for `field`
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}
}

impl TryFrom<BTreeMap<String, Value>> for Row {
	type Error = TableError;

	fn try_from(mut fields: BTreeMap<String, Value>) -> Result<Self, Self::Error> {
		let id = match fields.remove(ID_FIELD) {
			Some(Value::Text(id)) => id,
			Some(Value::Number(n)) => n.to_string(),
			Some(Value::Null) | None => {
				return Err(TableError::InvalidRow(format!(
					"missing '{}' field",
					ID_FIELD
				)));
			}
		};
		fields.insert(ID_FIELD.to_string(), Value::Text(id));
		Ok(Self { fields })
	}
}

impl From<Row> for BTreeMap<String, Value> {
	fn from(row: Row) -> Self {
		row.fields
	}
}
