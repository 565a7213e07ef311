//! Formula engine
//!
//! Turns the raw text committed to a cell into the value the grid stores.

use crate::error::FormulaResult;
use crate::evaluator;
use crate::parser::parse_formula;
use gridcalc_core::{CellAddress, CellError, CellValue, Grid, GridSettings, DEFAULT_FORMULA_MARKER};

/// Dispatches committed cell text to literal storage or formula evaluation
///
/// The engine holds no grid state: every call reads the snapshot it is
/// given and keeps nothing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaEngine {
    marker: char,
}

impl FormulaEngine {
    /// Create an engine that treats text starting with `marker` as a formula
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// Create an engine using the marker in `settings`
    pub fn from_settings(settings: &GridSettings) -> Self {
        Self::new(settings.formula_marker)
    }

    /// The formula marker
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Check whether raw cell text is a formula
    pub fn is_formula(&self, raw: &str) -> bool {
        raw.starts_with(self.marker)
    }

    /// Evaluate raw cell text, reporting why a formula failed
    ///
    /// Empty text yields an empty cell and other non-formula text is kept
    /// verbatim, with no numeric coercion. Formulas evaluate to a number.
    pub fn try_evaluate(&self, raw: &str, grid: &Grid) -> FormulaResult<CellValue> {
        if raw.is_empty() {
            return Ok(CellValue::Empty);
        }

        let body = match raw.strip_prefix(self.marker) {
            Some(body) => body.trim(),
            None => return Ok(CellValue::text(raw)),
        };

        let formula = parse_formula(body)?;
        let result = evaluator::evaluate(&formula, grid)?;
        Ok(CellValue::Number(result))
    }

    /// Evaluate raw cell text into the value to store
    ///
    /// Never fails: any formula error becomes the
    /// [`CellError::InvalidFormula`] marker.
    pub fn evaluate(&self, raw: &str, grid: &Grid) -> CellValue {
        match self.try_evaluate(raw, grid) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("formula '{}' rejected: {}", raw, e);
                CellValue::Error(CellError::InvalidFormula)
            }
        }
    }

    /// Commit raw text to a cell, returning the next snapshot
    ///
    /// Fails only when `addr` lies outside the grid; formula errors are
    /// stored as the error marker.
    pub fn commit(&self, grid: &Grid, addr: CellAddress, raw: &str) -> gridcalc_core::Result<Grid> {
        let value = self.evaluate(raw, grid);
        log::trace!("commit {} = {:?}", addr, value);
        grid.set(addr, value)
    }
}

impl Default for FormulaEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FORMULA_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormulaError, FormulaErrorKind};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn invalid() -> CellValue {
        CellValue::Error(CellError::InvalidFormula)
    }

    #[test]
    fn test_literal_text_is_kept() {
        let engine = FormulaEngine::default();
        let grid = Grid::default();

        assert_eq!(engine.evaluate("hello", &grid), CellValue::text("hello"));
        assert_eq!(engine.evaluate("42", &grid), CellValue::text("42"));
        assert_eq!(engine.evaluate(" =1+1", &grid), CellValue::text(" =1+1"));
        assert_eq!(engine.evaluate("", &grid), CellValue::Empty);
    }

    #[test]
    fn test_formula_evaluates_to_number() {
        let engine = FormulaEngine::default();
        let grid = Grid::default();

        assert_eq!(engine.evaluate("=2+2", &grid), CellValue::Number(4.0));
        assert_eq!(engine.evaluate("=  (1 + 2) * 3  ", &grid), CellValue::Number(9.0));
    }

    #[test]
    fn test_failures_become_marker() {
        let engine = FormulaEngine::default();
        let grid = Grid::default();

        let failing = [
            "=10/0",
            "=",
            "=1+",
            "=FOO(A1:A3)",
            "=SUM(A1)",
            "=SUM(A1:B3)",
            "=SUM(A0:A2)",
        ];
        for raw in failing {
            assert_eq!(engine.evaluate(raw, &grid), invalid(), "{raw}");
        }
        assert_eq!(engine.evaluate("=10/0", &grid).to_string(), "Invalid Formula");
    }

    #[test]
    fn test_try_evaluate_reports_reason() {
        let engine = FormulaEngine::default();
        let grid = Grid::default();

        let kind = |raw: &str| engine.try_evaluate(raw, &grid).unwrap_err().kind();
        assert_eq!(kind("=(1+2"), FormulaErrorKind::Syntax);
        assert_eq!(kind("=1/0"), FormulaErrorKind::Domain);
        assert_eq!(kind("=SUM(A1:A99)"), FormulaErrorKind::Parse);
        assert_eq!(kind("=MEDIAN(A1:A3)"), FormulaErrorKind::Unsupported);
        assert_eq!(
            engine.try_evaluate("=5/0", &grid),
            Err(FormulaError::Domain("division by zero".into()))
        );
    }

    #[test]
    fn test_custom_marker() {
        let engine = FormulaEngine::new('#');
        let grid = Grid::default();

        assert_eq!(engine.evaluate("#1+1", &grid), CellValue::Number(2.0));
        assert_eq!(engine.evaluate("=1+1", &grid), CellValue::text("=1+1"));
        assert!(engine.is_formula("#SUM(A1:A2)"));
        assert!(!engine.is_formula("SUM(A1:A2)"));

        let settings = GridSettings {
            formula_marker: '@',
            ..GridSettings::default()
        };
        assert_eq!(FormulaEngine::from_settings(&settings).marker(), '@');
    }

    #[test]
    fn test_commit() {
        let engine = FormulaEngine::default();
        let g0 = Grid::default();
        let a1 = CellAddress::new(0, 0);
        let a2 = CellAddress::new(1, 0);
        let a3 = CellAddress::new(2, 0);

        let g1 = engine.commit(&g0, a1, "5").unwrap();
        let g2 = engine.commit(&g1, a2, "=A1").unwrap();
        let g3 = engine.commit(&g2, a3, "=SUM(A1:A2)").unwrap();

        assert_eq!(g3.get(a1).unwrap(), &CellValue::text("5"));
        assert_eq!(g3.get(a2).unwrap(), &invalid());
        // The error marker is skipped, not propagated
        assert_eq!(g3.get(a3).unwrap(), &CellValue::Number(5.0));
        assert_eq!(g0.get(a1).unwrap(), &CellValue::Empty);
    }

    #[test]
    fn test_commit_result_is_frozen() {
        let engine = FormulaEngine::default();
        let a1 = CellAddress::new(0, 0);
        let b1 = CellAddress::new(0, 1);

        let grid = engine.commit(&Grid::default(), a1, "1").unwrap();
        let grid = engine.commit(&grid, b1, "=SUM(A1:A1)").unwrap();
        let grid = engine.commit(&grid, a1, "100").unwrap();

        assert_eq!(grid.get(b1).unwrap(), &CellValue::Number(1.0));
    }

    #[test]
    fn test_commit_out_of_bounds() {
        let engine = FormulaEngine::default();
        let grid = Grid::default();
        let err = engine
            .commit(&grid, CellAddress::new(10, 0), "x")
            .unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    proptest! {
        #[test]
        fn prop_non_formula_text_is_identity(text in "[^=].*") {
            let engine = FormulaEngine::default();
            let grid = Grid::default();
            prop_assert_eq!(engine.evaluate(&text, &grid), CellValue::text(text.clone()));
        }
    }
}
