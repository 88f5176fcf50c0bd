//! Single-column sorting

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;
use crate::value::Value;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for plain field names and `Descending` for names
	/// prefixed with `-` (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}

	/// Applies this direction to an ascending comparison
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}

	/// Arrow shown next to a sorted header
	pub fn indicator(self) -> &'static str {
		match self {
			Self::Ascending => "▲",
			Self::Descending => "▼",
		}
	}
}

/// Current sort configuration: at most one column and a direction
///
/// The direction only means something while a key is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
	key: Option<String>,
	direction: SortDirection,
}

impl SortState {
	/// No sorting
	pub fn none() -> Self {
		Self::default()
	}

	/// Sorts by `key` in `direction`
	pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			key: Some(key.into()),
			direction,
		}
	}

	/// Parses the `?sort=` notation: `"age"`, `"-age"`, or empty for no sort
	///
	/// # Examples
	///
	/// ```
	/// use easytable::{SortDirection, SortState};
	///
	/// assert_eq!(SortState::from_query("-age"), SortState::by("age", SortDirection::Descending));
	/// assert_eq!(SortState::from_query(""), SortState::none());
	/// ```
	pub fn from_query(s: &str) -> Self {
		let (direction, field) = SortDirection::parse_from_query(s.trim());
		if field.is_empty() {
			Self::none()
		} else {
			Self::by(field, direction)
		}
	}

	/// Formats this state in the `?sort=` notation, or `None` when unsorted
	pub fn to_query(&self) -> Option<String> {
		self.key.as_ref().map(|key| match self.direction {
			SortDirection::Ascending => key.clone(),
			SortDirection::Descending => format!("-{}", key),
		})
	}

	/// Returns the field currently sorted by
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Returns the sort direction
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Returns true when a sort key is set
	pub fn is_active(&self) -> bool {
		self.key.is_some()
	}

	/// Returns the direction when sorting by `field`, if it is the active key
	pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
		match self.key.as_deref() {
			Some(key) if key == field => Some(self.direction),
			_ => None,
		}
	}

	/// Next state after a sort request on `field`
	///
	/// Repeated requests on the same field cycle ascending, descending, then
	/// unsorted. A request on another field starts at ascending.
	///
	/// # Examples
	///
	/// ```
	/// use easytable::{SortDirection, SortState};
	///
	/// let asc = SortState::none().cycle("age");
	/// assert_eq!(asc, SortState::by("age", SortDirection::Ascending));
	/// let desc = asc.cycle("age");
	/// assert_eq!(desc, SortState::by("age", SortDirection::Descending));
	/// assert_eq!(desc.cycle("age"), SortState::none());
	/// ```
	pub fn cycle(&self, field: &str) -> Self {
		match self.direction_for(field) {
			Some(SortDirection::Ascending) => Self::by(field, SortDirection::Descending),
			Some(SortDirection::Descending) => Self::none(),
			None => Self::by(field, SortDirection::Ascending),
		}
	}
}

/// Compares two cell values
///
/// Null sorts after everything in both directions. Two numbers compare
/// numerically and two non-numbers by lowercased display string. When a
/// column mixes kinds, numbers come before text in both directions, which
/// keeps the order total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use easytable::{SortDirection, Value};
/// use easytable::sorting::compare_values;
///
/// let null = Value::Null;
/// let one = Value::from(1);
/// assert_eq!(compare_values(&null, &one, SortDirection::Ascending), Ordering::Greater);
/// assert_eq!(compare_values(&null, &one, SortDirection::Descending), Ordering::Greater);
/// assert_eq!(compare_values(&Value::from(10), &Value::from("5"), SortDirection::Descending), Ordering::Less);
/// ```
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
	match (a, b) {
		(Value::Null, Value::Null) => Ordering::Equal,
		(Value::Null, _) => Ordering::Greater,
		(_, Value::Null) => Ordering::Less,
		(Value::Number(x), Value::Number(y)) => direction.apply(x.total_cmp(y)),
		(Value::Number(_), _) => Ordering::Less,
		(_, Value::Number(_)) => Ordering::Greater,
		_ => direction.apply(a.folded().cmp(&b.folded())),
	}
}

/// Sorts rows in place by one column, keeping equal rows in their order
pub fn sort_rows(rows: &mut [&Row], column: &Column, direction: SortDirection) {
	rows.sort_by(|a, b| compare_values(column.value(a), column.value(b), direction));
}
