use std::error::Error;
use std::fmt;

/// Custom error type for statistics kernel failures
#[derive(Debug, PartialEq)]
pub enum AnalysisError {
    EmptyDataset,
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::EmptyDataset => write!(f, "Dataset contains no rows"),
            AnalysisError::LengthMismatch { left, right } => {
                write!(f, "Column lengths differ: {} vs {}", left, right)
            }
        }
    }
}

impl Error for AnalysisError {}
