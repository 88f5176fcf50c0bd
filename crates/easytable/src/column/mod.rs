//! Column definitions
//!
//! A column maps one row field to a header label, declares the kind of value
//! the field holds, and decides how its cells are displayed:
//! - [`CellRenderer::Plain`]: the value's display string
//! - [`CellRenderer::Custom`]: a caller-supplied formatting function

pub mod base;
pub mod renderer;

// Re-exports
pub use base::Column;
pub use renderer::{CellRenderer, RenderFn};
