use crate::minimize::MinimizerError;
use std::fmt;

/// Error types surfaced to callers of the analysis engine
///
/// All three variants are recoverable: a failed computation returns a
/// distinguishable value for the caller to render as a degraded message
/// while the rest of the display keeps working.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    InvalidCoefficients(String),
    OptimizationFailed(MinimizerError),
    RangeAnalysisFailed(MinimizerError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::InvalidCoefficients(msg) => {
                write!(f, "Invalid coefficients: {}", msg)
            }
            AnalysisError::OptimizationFailed(err) => {
                write!(f, "Could not determine critical points numerically: {}", err)
            }
            AnalysisError::RangeAnalysisFailed(err) => {
                write!(f, "Could not determine range numerically: {}", err)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
