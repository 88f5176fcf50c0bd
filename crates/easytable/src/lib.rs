//! Data table view engine
//!
//! This crate turns caller-owned rows and a list of column definitions into
//! the rows a table should show, with free-text search, single-column sorting
//! and pagination, and renders the result as HTML.
//!
//! # Features
//!
//! - **Columns**: Field, label, declared value kind and an optional custom cell renderer
//! - **Search**: Case-insensitive substring or prefix matching over searchable columns
//! - **Sorting**: Stable single-column sort, nulls last, three-state header toggle
//! - **Pagination**: Page slicing, clamped navigation and an abbreviated page window
//! - **View state**: Pure `(state, event) -> state` transitions
//! - **Configuration**: Options built in code or loaded from TOML
//! - **Export**: CSV and JSON export (requires `export` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTable] --> B[Columns]
//!     A --> C[TableOptions]
//!     A --> D[ViewState]
//!     R[Rows] --> F[Filter]
//!     F --> S[Sort]
//!     S --> P[Paginate]
//!     P --> V[TableView]
//!     D --> F
//!     D --> S
//!     D --> P
//!     V --> H[HTML]
//!     V --> W[Page window]
//!     A --> K[Export]
//!     K --> L[CSV]
//!     K --> M[JSON]
//! ```
//!
//! # Example
//!
//! ```rust
//! use easytable::{Column, DataTable, Row, TableOptions};
//!
//! let rows = vec![
//!     Row::new("1").with("name", "Bob").with("age", 30),
//!     Row::new("2").with("name", "Ann").with("age", 25),
//!     Row::new("3").with("name", "Cid").with("age", None::<i32>),
//! ];
//! let columns = vec![Column::text("name", "Name"), Column::number("age", "Age")];
//! let mut table = DataTable::with_options(columns, TableOptions::new().paginated(2).searchable()).unwrap();
//!
//! table.sort_by(&rows, "age").unwrap();
//! let view = table.view(&rows);
//! let names: Vec<String> = view.rows.iter().map(|row| row.get("name").to_string()).collect();
//! assert_eq!(names, vec!["Ann", "Bob"]);
//! assert_eq!(view.summary(), "Showing 1 to 2 of 3 entries");
//!
//! let html = easytable::render::render_html(&table, &view);
//! assert!(html.contains("Age ▲"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod config;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod filtering;
pub mod pagination;
pub mod render;
pub mod row;
pub mod sorting;
pub mod state;
pub mod table;
pub mod value;
pub mod window;

// Re-exports for convenience
pub use column::{CellRenderer, Column};
pub use config::TableOptions;
pub use error::{Result, TableError};
pub use filtering::MatchPolicy;
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageInfo};
pub use row::{ID_FIELD, Row};
pub use sorting::{SortDirection, SortState};
pub use state::{ViewEvent, ViewState};
pub use table::{DataTable, Header, TableView};
pub use value::{Value, ValueKind};
pub use window::{PageLink, page_window};
