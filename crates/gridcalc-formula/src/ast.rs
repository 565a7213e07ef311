//! Formula Abstract Syntax Tree types

use crate::functions::AggregateFunction;
use gridcalc_core::CellRange;

/// A parsed formula (the text after the marker)
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// Infix arithmetic over numeric literals, e.g. `(1+2)*3`
    Arithmetic(Expr),
    /// An aggregate over a column range, e.g. `SUM(A1:A3)`
    Aggregate {
        function: AggregateFunction,
        range: CellRange,
    },
}

/// Arithmetic expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}
