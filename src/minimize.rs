use std::fmt;

pub mod bracket;
pub mod brent;
pub mod golden;
pub mod objective;

pub use self::bracket::{Bracket, BracketOptions, BracketResult};
pub use self::brent::{Brent, BrentResult};
pub use self::golden::{Golden, GoldenResult};
pub use self::objective::{ObjFn, PolyFn, SingleDimFn};

/// Error types for the scalar optimizers
#[derive(Debug, Clone, PartialEq)]
pub enum MinimizerError {
    FunctionEvaluationError,
    InvalidBracket,
    InvalidInitialPoints,
    InvalidStepSize,
    InvalidTolerance,
    MaxIterationsExceeded,
    NoMinimumFound,
    NumericalOverflow,
    SameSignError,
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MinimizerError::FunctionEvaluationError => {
                write!(f, "Function evaluation returned invalid value")
            }
            MinimizerError::InvalidBracket => {
                write!(f, "Invalid bracket: ensure a < b")
            }
            MinimizerError::InvalidInitialPoints => {
                write!(f, "Invalid initial points: ensure a != b and both finite")
            }
            MinimizerError::InvalidStepSize => {
                write!(f, "Step size must be positive and finite")
            }
            MinimizerError::InvalidTolerance => write!(f, "Tolerance must be positive"),
            MinimizerError::MaxIterationsExceeded => write!(f, "Maximum iterations exceeded"),
            MinimizerError::NoMinimumFound => {
                write!(f, "No minimum bracket found within search limits")
            }
            MinimizerError::NumericalOverflow => {
                write!(f, "Numerical overflow during bracket expansion")
            }
            MinimizerError::SameSignError => {
                write!(
                    f,
                    "Function values at bracket endpoints must have opposite signs"
                )
            }
        }
    }
}

impl std::error::Error for MinimizerError {}
