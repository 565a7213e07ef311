//! Formula evaluator
//!
//! Evaluates formula ASTs against a grid snapshot to produce a number.

use crate::ast::{BinaryOperator, Expr, Formula, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::{CellRange, Grid};

/// Evaluate a parsed formula against a grid snapshot
///
/// The result is always finite; negative zero is reported as zero.
pub fn evaluate(formula: &Formula, grid: &Grid) -> FormulaResult<f64> {
    let result = match formula {
        Formula::Arithmetic(expr) => evaluate_expr(expr)?,
        Formula::Aggregate { function, range } => {
            let values = resolve_range(range, grid)?;
            function.apply(&values)
        }
    };

    if !result.is_finite() {
        return Err(FormulaError::Domain(format!(
            "result {} is not a finite number",
            result
        )));
    }

    // -0 renders as "-0"; store plain zero instead
    Ok(if result == 0.0 { 0.0 } else { result })
}

/// Evaluate an arithmetic expression
pub fn evaluate_expr(expr: &Expr) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::UnaryOp { op, operand } => {
            let n = evaluate_expr(operand)?;
            match op {
                UnaryOperator::Negate => Ok(-n),
            }
        }

        Expr::BinaryOp { op, left, right } => {
            let l = evaluate_expr(left)?;
            let r = evaluate_expr(right)?;
            match op {
                BinaryOperator::Add => Ok(l + r),
                BinaryOperator::Subtract => Ok(l - r),
                BinaryOperator::Multiply => Ok(l * r),
                BinaryOperator::Divide => {
                    if r == 0.0 {
                        Err(FormulaError::Domain("division by zero".into()))
                    } else {
                        Ok(l / r)
                    }
                }
            }
        }
    }
}

/// Collect the numeric values of a range's cells
///
/// Only single-column ranges are supported. Cells that are empty, hold
/// non-numeric text or hold an error marker are skipped. Both ends of the
/// range must lie inside the grid.
pub fn resolve_range(range: &CellRange, grid: &Grid) -> FormulaResult<Vec<f64>> {
    if !range.is_single_column() {
        return Err(FormulaError::Unsupported(format!(
            "range {} spans more than one column",
            range
        )));
    }

    // A reversed range is empty wherever its endpoints lie.
    if range.row_count() == 0 {
        return Ok(Vec::new());
    }

    for addr in [range.start, range.end] {
        if !grid.contains(addr) {
            return Err(FormulaError::Parse(format!(
                "reference {} is outside the {}x{} grid",
                addr,
                grid.rows(),
                grid.cols()
            )));
        }
    }

    let mut values = Vec::with_capacity(range.row_count() as usize);
    for addr in range.cells() {
        if let Some(n) = grid.get(addr)?.as_number() {
            values.push(n);
        }
    }

    Ok(values)
}
