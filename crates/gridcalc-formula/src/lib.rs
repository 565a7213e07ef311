//! # gridcalc-formula
//!
//! Formula parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Formula parsing (text → AST) for arithmetic and aggregate formulas
//! - Formula evaluation (AST + grid snapshot → number)
//! - The aggregate functions `SUM`, `AVERAGE`, `MAX` and `MIN`
//! - [`FormulaEngine`], which turns committed cell text into a stored value
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, CellValue, Grid};
//! use gridcalc_formula::FormulaEngine;
//!
//! let engine = FormulaEngine::default();
//! let grid = Grid::new(10, 5).unwrap();
//!
//! let grid = engine.commit(&grid, CellAddress::new(0, 0), "1").unwrap();
//! let grid = engine.commit(&grid, CellAddress::new(1, 0), "2").unwrap();
//!
//! assert_eq!(engine.evaluate("=SUM(A1:A2)", &grid), CellValue::Number(3.0));
//! assert_eq!(engine.evaluate("=2+2", &grid), CellValue::Number(4.0));
//! assert_eq!(engine.evaluate("=10/0", &grid).to_string(), "Invalid Formula");
//! ```

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::{BinaryOperator, Expr, Formula, UnaryOperator};
pub use engine::FormulaEngine;
pub use error::{FormulaError, FormulaErrorKind, FormulaResult};
pub use evaluator::{evaluate, resolve_range};
pub use functions::AggregateFunction;
pub use parser::{parse_formula, MAX_NESTING_DEPTH, MAX_OPERATORS};
