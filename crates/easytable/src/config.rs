//! Table options
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```toml
//! enable_pagination = true
//! enable_search = true
//! page_size = 25
//! match_policy = "prefix"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::filtering::MatchPolicy;
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Caller-supplied switches for a table instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
	/// Split rows into pages and show the pagination footer
	pub enable_pagination: bool,
	/// Show the search box and filter rows by its text
	pub enable_search: bool,
	/// Initial rows per page
	pub page_size: usize,
	/// Page sizes offered by the page-size selector
	pub page_size_options: Vec<usize>,
	/// How the search text is matched against field values
	pub match_policy: MatchPolicy,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			enable_pagination: false,
			enable_search: false,
			page_size: DEFAULT_PAGE_SIZE,
			page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
			match_policy: MatchPolicy::default(),
		}
	}
}

impl TableOptions {
	/// Creates the default options (no pagination, no search)
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables pagination with the given initial page size
	pub fn paginated(mut self, page_size: usize) -> Self {
		self.enable_pagination = true;
		self.page_size = page_size;
		self
	}

	/// Enables the search box
	pub fn searchable(mut self) -> Self {
		self.enable_search = true;
		self
	}

	/// Sets the search match policy
	pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
		self.match_policy = policy;
		self
	}

	/// Sets the selectable page sizes
	pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
		self.page_size_options = options;
		self
	}

	/// Parses options from a TOML document and validates them
	///
	/// Missing keys take their default value.
	///
	/// # Examples
	///
	/// ```
	/// use easytable::{MatchPolicy, TableOptions};
	///
	/// let options = TableOptions::from_toml_str("enable_search = true\nmatch_policy = \"prefix\"").unwrap();
	/// assert!(options.enable_search);
	/// assert_eq!(options.match_policy, MatchPolicy::Prefix);
	/// assert_eq!(options.page_size, 10);
	/// ```
	pub fn from_toml_str(s: &str) -> Result<Self> {
		let options: Self = toml::from_str(s)?;
		options.validate()?;
		Ok(options)
	}

	/// Checks that the page size and page-size options are usable
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(TableError::InvalidConfig(
				"page_size must be positive".to_string(),
			));
		}
		if self.page_size_options.is_empty() {
			return Err(TableError::InvalidConfig(
				"page_size_options must not be empty".to_string(),
			));
		}
		if self.page_size_options.contains(&0) {
			return Err(TableError::InvalidConfig(
				"page_size_options must be positive".to_string(),
			));
		}
		Ok(())
	}

	/// Returns true when `size` may be selected at runtime
	///
	/// The initial page size is always allowed, even if it is not one of the
	/// listed options.
	pub fn allows_page_size(&self, size: usize) -> bool {
		size > 0 && (size == self.page_size || self.page_size_options.contains(&size))
	}
}
