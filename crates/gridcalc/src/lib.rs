//! # gridcalc
//!
//! A minimal formula grid. Cells hold literal text, or formulas that start
//! with a marker character (`=` by default) and are evaluated once, when the
//! cell is committed. The result is frozen as the cell's value.
//!
//! ## Features
//!
//! - Immutable grid snapshots with per-row copy-on-write
//! - Arithmetic formulas: `=(1+2)*3`
//! - Aggregates over a column range: `=SUM(A1:A3)`, `AVERAGE`, `MAX`, `MIN`
//! - Failed formulas stored as the `Invalid Formula` marker, with the
//!   reason available through [`FormulaEngine::try_evaluate`]
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let engine = FormulaEngine::default();
//! let mut grid = Grid::default();
//!
//! for (cell, raw) in [("A1", "1"), ("A2", "2"), ("A3", "3"), ("B1", "=SUM(A1:A3)")] {
//!     let addr = CellAddress::parse(cell).unwrap();
//!     grid = engine.commit(&grid, addr, raw).unwrap();
//! }
//!
//! let b1 = CellAddress::parse("B1").unwrap();
//! assert_eq!(grid.get(b1).unwrap().to_string(), "6");
//! ```

pub mod prelude;

// Re-export core types
pub use gridcalc_core::{
    CellAddress, CellError, CellRange, CellValue, Error, Grid, GridSettings, Result,
    SharedString, DEFAULT_COLS, DEFAULT_FORMULA_MARKER, DEFAULT_ROWS, MAX_COLS,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, parse_formula, resolve_range, AggregateFunction, BinaryOperator, Expr, Formula,
    FormulaEngine, FormulaError, FormulaErrorKind, FormulaResult, UnaryOperator,
};
