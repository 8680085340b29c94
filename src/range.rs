use crate::error::AnalysisError;
use crate::minimize::{Bracket, BracketOptions, Golden, MinimizerError, PolyFn};
use crate::polynomial::Polynomial;
use std::fmt;

/// How the set of output values of a polynomial is bounded.
///
/// Decided by degree parity and the sign of the leading coefficient; the
/// bound itself comes from one global extremum computation.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeDescription {
    /// Odd degree: the leading term dominates with opposite signs as
    /// x goes to +/- infinity, so every real value is reached.
    Unbounded,
    /// Even degree opening upward: y >= y_min.
    BoundedBelow(f64),
    /// Even degree opening downward: y <= y_max.
    BoundedAbove(f64),
}

impl fmt::Display for RangeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeDescription::Unbounded => write!(f, "all real numbers"),
            RangeDescription::BoundedBelow(y) => write!(f, "y >= {:.2}", y),
            RangeDescription::BoundedAbove(y) => write!(f, "y <= {:.2}", y),
        }
    }
}

/// Describe the range of a polynomial.
///
/// Odd degrees are a closed-form fact and cost nothing. Even degrees run a
/// global extremum search seeded at the origin: bracket expansion walks
/// downhill until a minimum is enclosed, then golden section refines inside
/// the bracket. For polynomials whose extrema sit far from the origin the
/// seeded search can settle on a local rather than global extremum; the
/// reported bound is then conservative in the wrong direction. Known
/// numerical limitation of origin-seeded search.
///
/// # Errors
/// * `InvalidCoefficients` when the leading coefficient is zero for a
///   degree above 0 (the caller should have substituted a default)
/// * `RangeAnalysisFailed` when the global search does not converge, e.g.
///   coefficients large enough to overflow during bracket expansion
pub fn analyze(poly: &Polynomial) -> Result<RangeDescription, AnalysisError> {
    if poly.is_constant() {
        // Single value; reuse the opening-direction convention so the
        // parity logic downstream never sees a special case.
        let c = poly.evaluate(0.0);
        return Ok(if c >= 0.0 {
            RangeDescription::BoundedBelow(c)
        } else {
            RangeDescription::BoundedAbove(c)
        });
    }

    let lead = poly.leading_coefficient();
    if lead == 0.0 {
        return Err(AnalysisError::InvalidCoefficients(format!(
            "leading coefficient must be non-zero for degree {}",
            poly.degree()
        )));
    }

    if poly.degree() % 2 == 1 {
        return Ok(RangeDescription::Unbounded);
    }

    if lead > 0.0 {
        let y_min = global_minimum_value(PolyFn::new(poly.clone()))
            .map_err(AnalysisError::RangeAnalysisFailed)?;
        Ok(RangeDescription::BoundedBelow(y_min))
    } else {
        let y_neg = global_minimum_value(PolyFn::negated(poly.clone()))
            .map_err(AnalysisError::RangeAnalysisFailed)?;
        Ok(RangeDescription::BoundedAbove(-y_neg))
    }
}

/// Minimum value of the objective over the whole real line, approximated by
/// bracketing a minimum from x = 0 and refining inside the bracket.
fn global_minimum_value(objective: PolyFn) -> Result<f64, MinimizerError> {
    let options = BracketOptions::default();

    let mut bracket = Bracket::new(objective.clone());
    let enclosed =
        bracket.bracket_minimum_auto(0.0, options.initial_step, Some(options.max_iters))?;

    let mut golden = Golden::new(objective);
    let refined = golden.golden_section_search(enclosed.a, enclosed.c, None, None)?;
    Ok(refined.fmin)
}
