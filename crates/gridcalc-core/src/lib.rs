//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula grid.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`CellValue`] - Represents cell values (empty, text, numbers, error markers)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and single-column ranges
//! - [`Grid`] - An immutable snapshot of a fixed-size table of cells
//! - [`GridSettings`] - Grid dimensions and the formula marker
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, CellValue, Grid};
//!
//! let grid = Grid::new(10, 5).unwrap();
//! let addr = CellAddress::parse("B3").unwrap();
//!
//! // Edits produce a new snapshot; the original is left untouched.
//! let next = grid.set(addr, CellValue::text("42")).unwrap();
//! assert_eq!(next.get(addr).unwrap(), &CellValue::text("42"));
//! assert!(grid.get(addr).unwrap().is_empty());
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod settings;

// Re-exports for convenience
pub use cell::{CellAddress, CellError, CellRange, CellValue, SharedString};
pub use error::{Error, Result};
pub use grid::Grid;
pub use settings::GridSettings;

/// Maximum number of columns in a grid (one letter per column, `A`..=`Z`)
pub const MAX_COLS: u16 = 26;

/// Row count of the reference configuration
pub const DEFAULT_ROWS: u32 = 10;

/// Column count of the reference configuration
pub const DEFAULT_COLS: u16 = 5;

/// Marker that distinguishes a formula from literal text
pub const DEFAULT_FORMULA_MARKER: char = '=';
