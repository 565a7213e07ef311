//! Built-in aggregate functions

use std::fmt;

/// Functions that reduce a range's numeric cells to one number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Average,
    Max,
    Min,
}

impl AggregateFunction {
    /// Every supported function, in the order they are listed to users
    pub const ALL: [AggregateFunction; 4] = [
        AggregateFunction::Sum,
        AggregateFunction::Average,
        AggregateFunction::Max,
        AggregateFunction::Min,
    ];

    /// Function name (uppercase)
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Average => "AVERAGE",
            AggregateFunction::Max => "MAX",
            AggregateFunction::Min => "MIN",
        }
    }

    /// One-line summary for help listings
    pub fn description(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "Adds values",
            AggregateFunction::Average => "Finds average",
            AggregateFunction::Max => "Finds the largest value",
            AggregateFunction::Min => "Finds the smallest value",
        }
    }

    /// Look up a function by its exact uppercase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Apply the function to a set of numbers
    ///
    /// An empty set yields 0 for every function.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        match self {
            AggregateFunction::Sum => values.iter().sum(),
            AggregateFunction::Average => {
                values.iter().sum::<f64>() / values.len() as f64
            }
            AggregateFunction::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregateFunction::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
