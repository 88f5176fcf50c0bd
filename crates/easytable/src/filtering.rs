//! Free-text search filtering
//!
//! The search surface of a row is the set of fields referenced by searchable
//! columns, minus the identifier field. Matching is case-insensitive and runs
//! on each value's display string.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::{ID_FIELD, Row};

/// How a lowercased field value is matched against the lowercased query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
	/// The query occurs anywhere in the value
	#[default]
	Contains,
	/// The value starts with the query
	Prefix,
}

impl MatchPolicy {
	/// Applies the policy to already-lowercased strings
	///
	/// # Examples
	///
	/// ```
	/// use easytable::MatchPolicy;
	///
	/// assert!(MatchPolicy::Contains.matches("charlie", "li"));
	/// assert!(!MatchPolicy::Prefix.matches("charlie", "li"));
	/// assert!(MatchPolicy::Prefix.matches("charlie", "ch"));
	/// ```
	pub fn matches(self, value: &str, query: &str) -> bool {
		match self {
			Self::Contains => value.contains(query),
			Self::Prefix => value.starts_with(query),
		}
	}
}

/// Returns the columns whose fields make up the search surface
pub fn search_surface(columns: &[Column]) -> impl Iterator<Item = &Column> {
	columns
		.iter()
		.filter(|column| column.is_searchable() && column.field() != ID_FIELD)
}

/// Returns true when any searchable field of `row` matches `query`
///
/// `query` must already be lowercased.
pub fn row_matches(row: &Row, columns: &[Column], query: &str, policy: MatchPolicy) -> bool {
	search_surface(columns).any(|column| policy.matches(&column.value(row).folded(), query))
}

/// Keeps the rows matching `query`, in their original order
///
/// An empty query keeps every row.
pub fn filter_rows<'r>(
	rows: &'r [Row],
	columns: &[Column],
	query: &str,
	policy: MatchPolicy,
) -> Vec<&'r Row> {
	if query.is_empty() {
		return rows.iter().collect();
	}

	let query = query.to_lowercase();
	rows.iter()
		.filter(|row| row_matches(row, columns, &query, policy))
		.collect()
}
