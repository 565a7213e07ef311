//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// None of these reach the grid: the engine stores every failure as the
/// same error marker. The variants exist so callers and tests can tell
/// the reasons apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Malformed cell or range reference (bad letter, non-positive or
    /// out-of-grid row)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Arithmetic expression that does not follow the grammar
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Numerically undefined operation, such as division by zero
    #[error("Domain error: {0}")]
    Domain(String),

    /// Text that looks like a formula but matches no supported form
    #[error("Unsupported formula: {0}")]
    Unsupported(String),
}

/// Discriminant of [`FormulaError`], for asserting on the reason alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaErrorKind {
    Parse,
    Syntax,
    Domain,
    Unsupported,
}

impl FormulaError {
    /// Get the kind of this error
    pub fn kind(&self) -> FormulaErrorKind {
        match self {
            FormulaError::Parse(_) => FormulaErrorKind::Parse,
            FormulaError::Syntax(_) => FormulaErrorKind::Syntax,
            FormulaError::Domain(_) => FormulaErrorKind::Domain,
            FormulaError::Unsupported(_) => FormulaErrorKind::Unsupported,
        }
    }
}

impl From<gridcalc_core::Error> for FormulaError {
    fn from(err: gridcalc_core::Error) -> Self {
        FormulaError::Parse(err.to_string())
    }
}
