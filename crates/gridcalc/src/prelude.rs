//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellError,
    CellRange,
    CellValue,

    // Error types
    Error,
    FormulaError,
    FormulaErrorKind,
    Result,

    // Main types
    FormulaEngine,
    Grid,
    GridSettings,
};
