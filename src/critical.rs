use crate::error::AnalysisError;
use crate::interval::Interval;
use crate::minimize::{Brent, Golden, PolyFn};
use crate::polynomial::Polynomial;
use std::fmt;

/// Margin inside each window edge. Candidates closer than this to a
/// boundary are treated as the window's edge effect, not a genuine
/// interior critical point.
const EDGE_MARGIN: f64 = 0.01;

/// Location and value of a local extremum inside the plot window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for CriticalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Critical points visible in the window, found by two bounded probes.
///
/// One golden-section probe minimizes P over the window and a second
/// minimizes -P, both on the original polynomial rather than its
/// derivative. At most two points can come out of a call, so polynomials
/// with more than two real critical points in view are under-reported;
/// the theoretical maximum is degree - 1. See [`report_from_derivative`]
/// for the exhaustive variant.
///
/// Candidates within 0.01 of either window edge are discarded, survivors
/// are rounded to 2 decimal places, deduplicated, and sorted ascending
/// by x with y recomputed at the rounded location.
///
/// # Errors
/// * `OptimizationFailed` when either probe fails to converge or the
///   polynomial evaluates to a non-finite value inside the window
pub fn report(
    poly: &Polynomial,
    window: &Interval,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    // A line or constant has no interior extremum
    if poly.degree() < 2 {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::with_capacity(2);

    let mut min_probe = Golden::new(PolyFn::new(poly.clone()));
    let found_min = min_probe
        .minimize(window.low(), window.high())
        .map_err(AnalysisError::OptimizationFailed)?;
    candidates.push(found_min.xmin);

    let mut max_probe = Golden::new(PolyFn::negated(poly.clone()));
    let found_max = max_probe
        .minimize(window.low(), window.high())
        .map_err(AnalysisError::OptimizationFailed)?;
    candidates.push(found_max.xmin);

    Ok(collect(poly, window, candidates))
}

/// Every real critical point in the window, via derivative root-finding.
///
/// Scans P' for sign changes across the window and polishes each bracket
/// with Brent's method, so all simple roots of the derivative in view are
/// recovered instead of the two the probe search can see. Double roots
/// produce no sign change and stay invisible. Filtering, rounding, and
/// ordering match [`report`].
pub fn report_from_derivative(
    poly: &Polynomial,
    window: &Interval,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    if poly.degree() < 2 {
        return Ok(Vec::new());
    }

    let mut scanner = Brent::new(PolyFn::new(poly.derivative()));
    let roots = scanner.find_all_roots(window.low(), window.high(), None, None);

    Ok(collect(poly, window, roots))
}

/// Shared candidate pipeline: margin filter, round to hundredths, dedup,
/// sort, then pair with the function value at the rounded location.
fn collect(poly: &Polynomial, window: &Interval, candidates: Vec<f64>) -> Vec<CriticalPoint> {
    let mut xs: Vec<f64> = candidates
        .into_iter()
        .filter(|&x| x > window.low() + EDGE_MARGIN && x < window.high() - EDGE_MARGIN)
        .map(round_hundredths)
        .collect();

    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup();

    xs.into_iter()
        .map(|x| CriticalPoint {
            x,
            y: poly.evaluate(x),
        })
        .collect()
}

fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
