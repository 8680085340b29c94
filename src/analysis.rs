use crate::critical::{self, CriticalPoint};
use crate::error::AnalysisError;
use crate::interval::Interval;
use crate::polynomial::Polynomial;
use crate::range::{self, RangeDescription};
use std::fmt;

/// Input domain of a polynomial.
///
/// Always the whole real line, since no x makes a polynomial undefined,
/// but carried as a tagged value so display code handles it like the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    AllReals,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::AllReals => write!(f, "all real numbers"),
        }
    }
}

/// Everything recomputed for one interaction.
///
/// The range and critical-point outcomes are carried as `Result`s so a
/// numerical failure in one degrades to a diagnostic message while the
/// rest of the display keeps rendering.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub domain: Domain,
    pub range: Result<RangeDescription, AnalysisError>,
    pub critical_points: Result<Vec<CriticalPoint>, AnalysisError>,
    /// Theoretical maximum number of real critical points (degree - 1).
    /// Informational only; the probe search may find fewer.
    pub max_critical_points: usize,
}

/// Analyze one polynomial over one plot window.
///
/// Pure function of its inputs: no caching, no shared state, each call
/// runs every computation to completion and returns a fresh result.
pub fn analyze(poly: &Polynomial, window: &Interval) -> Analysis {
    Analysis {
        domain: Domain::AllReals,
        range: range::analyze(poly),
        critical_points: critical::report(poly, window),
        max_critical_points: poly.degree().saturating_sub(1),
    }
}
