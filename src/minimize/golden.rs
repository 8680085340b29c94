use crate::minimize::{MinimizerError, ObjFn};
use std::fmt;

/// Result of golden section search
#[derive(Debug, Clone)]
pub struct GoldenResult {
    pub xmin: f64,
    pub fmin: f64,
    pub iters: usize,
    pub converged: bool,
}

#[derive(Clone)]
pub struct Golden {
    xmin: f64,
    fmin: f64,
    f: Box<dyn ObjFn>,
    iters: usize,
    converged: bool,
}

impl Golden {
    /// Golden ratio constant (φ - 1)
    const GOLDEN_RATIO: f64 = 0.618_033_988_749_895;

    pub fn new<F>(f: F) -> Self
    where
        F: ObjFn + 'static,
    {
        Golden {
            xmin: 0.0,
            fmin: 0.0,
            f: Box::new(f),
            iters: 0,
            converged: false,
        }
    }

    pub fn new_boxed(f: Box<dyn ObjFn>) -> Self {
        Golden {
            xmin: 0.0,
            fmin: 0.0,
            f,
            iters: 0,
            converged: false,
        }
    }

    /// Golden section search for finding the minimum of a unimodal function
    ///
    /// If the function is multimodal on `[a, b]` the search converges to
    /// whichever local minimum the interior bracketing lands on.
    ///
    /// # Arguments
    /// * `a` - Left bracket boundary
    /// * `b` - Right bracket boundary
    /// * `tol` - Convergence tolerance (default: 1e-6)
    /// * `max_iters` - Maximum iterations (default: 100)
    ///
    /// # Returns
    /// * `GoldenResult` containing the minimum point, function value, and convergence info
    ///
    /// # Errors
    /// * `InvalidBracket` if a >= b
    /// * `InvalidTolerance` if tolerance <= 0
    /// * `FunctionEvaluationError` if the objective returns a non-finite value
    /// * `MaxIterationsExceeded` if convergence not reached
    pub fn golden_section_search(
        &mut self,
        a: f64,
        b: f64,
        tol: Option<f64>,
        max_iters: Option<usize>,
    ) -> Result<GoldenResult, MinimizerError> {
        self.converged = false;
        let tol = tol.unwrap_or(1e-6);
        let max_iter = max_iters.unwrap_or(100);

        // Validate inputs
        if a >= b || !a.is_finite() || !b.is_finite() {
            return Err(MinimizerError::InvalidBracket);
        }
        if tol <= 0.0 {
            return Err(MinimizerError::InvalidTolerance);
        }

        let mut x1 = a;
        let mut x4 = b;

        // Initial interior points using golden ratio
        let mut x2 = x1 + (1.0 - Golden::GOLDEN_RATIO) * (x4 - x1);
        let mut x3 = x1 + Golden::GOLDEN_RATIO * (x4 - x1);

        let mut f2 = self.f.call_scalar(x2);
        let mut f3 = self.f.call_scalar(x3);

        if !f2.is_finite() || !f3.is_finite() {
            return Err(MinimizerError::FunctionEvaluationError);
        }

        self.iters = 0;

        // Main iteration loop
        while (x4 - x1).abs() > tol && self.iters < max_iter {
            self.iters += 1;

            if f2 < f3 {
                // Minimum is in [x1, x3]
                x4 = x3;
                x3 = x2;
                f3 = f2;
                x2 = x1 + (1.0 - Golden::GOLDEN_RATIO) * (x4 - x1);
                f2 = self.f.call_scalar(x2);
            } else {
                // Minimum is in [x2, x4]
                x1 = x2;
                x2 = x3;
                f2 = f3;
                x3 = x1 + Golden::GOLDEN_RATIO * (x4 - x1);
                f3 = self.f.call_scalar(x3);
            }

            if !f2.is_finite() || !f3.is_finite() {
                return Err(MinimizerError::FunctionEvaluationError);
            }
        }

        if self.iters >= max_iter {
            return Err(MinimizerError::MaxIterationsExceeded);
        }

        // Return the point with smaller function value
        if f2 < f3 {
            self.xmin = x2;
            self.fmin = f2;
        } else {
            self.xmin = x3;
            self.fmin = f3;
        };

        self.converged = true;
        Ok(GoldenResult {
            xmin: self.xmin,
            fmin: self.fmin,
            iters: self.iters,
            converged: self.converged,
        })
    }

    /// Convenience function with default parameters
    pub fn minimize(&mut self, a: f64, b: f64) -> Result<GoldenResult, MinimizerError> {
        self.golden_section_search(a, b, None, None)
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn fmin(&self) -> f64 {
        self.fmin
    }

    pub fn iters(&self) -> usize {
        self.iters
    }
}

impl fmt::Debug for Golden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Golden( xmin: {}, fmin: {}, iters: {}, converged: {})",
            self.xmin, self.fmin, self.iters, self.converged
        )
    }
}
