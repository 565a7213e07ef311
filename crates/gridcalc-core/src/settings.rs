//! Grid configuration

use crate::{DEFAULT_COLS, DEFAULT_FORMULA_MARKER, DEFAULT_ROWS};

/// Parameters fixed when a grid is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Number of rows
    pub rows: u32,
    /// Number of columns (at most [`crate::MAX_COLS`])
    pub cols: u16,
    /// Leading character that marks a formula
    pub formula_marker: char,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            formula_marker: DEFAULT_FORMULA_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GridSettings::default();
        assert_eq!(settings.rows, 10);
        assert_eq!(settings.cols, 5);
        assert_eq!(settings.formula_marker, '=');
    }
}
