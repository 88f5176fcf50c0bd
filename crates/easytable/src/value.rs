//! Cell values and their declared kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of value a column is declared to hold
///
/// `Null` is not a kind: an absent value is accepted by every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
	/// Free text, compared case-insensitively
	#[default]
	Text,
	/// Numeric value, compared numerically
	Number,
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text => f.write_str("text"),
			Self::Number => f.write_str("number"),
		}
	}
}

/// A single field value of a row
///
/// Serialized untagged, so JSON `null`, numbers and strings map directly
/// onto the three variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Absent value; displays as the empty string and always sorts last
	#[default]
	Null,
	/// Numeric value
	Number(f64),
	/// Text value
	Text(String),
}

impl Value {
	/// Returns the kind of this value, or `None` for null
	///
	/// # Examples
	///
	/// ```
	/// use easytable::{Value, ValueKind};
	///
	/// assert_eq!(Value::from(3).kind(), Some(ValueKind::Number));
	/// assert_eq!(Value::from("x").kind(), Some(ValueKind::Text));
	/// assert_eq!(Value::Null.kind(), None);
	/// ```
	pub fn kind(&self) -> Option<ValueKind> {
		match self {
			Self::Null => None,
			Self::Number(_) => Some(ValueKind::Number),
			Self::Text(_) => Some(ValueKind::Text),
		}
	}

	/// Returns true for [`Value::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the numeric payload, if any
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the text payload, if any
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Lowercased display form, the representation search and text sorting work on
	pub fn folded(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Text(s) => s.to_lowercase(),
			Self::Number(_) => self.to_string().to_lowercase(),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Number(n) => write!(f, "{n}"),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Self::Text(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Self::Text(s)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Self::Number(n)
	}
}

impl From<f32> for Value {
	fn from(n: f32) -> Self {
		Self::Number(f64::from(n))
	}
}

impl From<i32> for Value {
	fn from(n: i32) -> Self {
		Self::Number(f64::from(n))
	}
}

impl From<u32> for Value {
	fn from(n: u32) -> Self {
		Self::Number(f64::from(n))
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Self::Number(n as f64)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_null_displays_empty() {
		assert_eq!(Value::Null.to_string(), "");
	}

	#[test]
	fn test_integral_number_displays_without_fraction() {
		assert_eq!(Value::from(30).to_string(), "30");
		assert_eq!(Value::from(2.5).to_string(), "2.5");
	}

	#[test]
	fn test_folded_lowercases_text() {
		assert_eq!(Value::from("Ann").folded(), "ann");
		assert_eq!(Value::Null.folded(), "");
	}

	#[test]
	fn test_option_conversion() {
		assert_eq!(Value::from(None::<i32>), Value::Null);
		assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
	}

	#[test]
	fn test_untagged_deserialization() {
		let values: Vec<Value> = serde_json::from_str(r#"[null, 25, "Ann"]"#).unwrap();
		assert_eq!(
			values,
			vec![Value::Null, Value::Number(25.0), Value::Text("Ann".to_string())]
		);
	}

	#[test]
	fn test_kind_display() {
		assert_eq!(ValueKind::Number.to_string(), "number");
		assert_eq!(ValueKind::Text.to_string(), "text");
	}
}
