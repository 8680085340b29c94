use crate::minimize::{MinimizerError, ObjFn};
use std::fmt;

/// Result of Brent's method root finding
#[derive(Debug, Clone)]
pub struct BrentResult {
    pub root: f64,
    pub froot: f64,
    pub fn_evals: usize,
    pub iters: usize,
    pub converged: bool,
    pub final_bracket_size: f64,
}

#[derive(Clone)]
pub struct Brent {
    root: f64,
    froot: f64,
    f: Box<dyn ObjFn>,
    iters: usize,
    converged: bool,
}

impl Brent {
    pub fn new<F>(f: F) -> Self
    where
        F: ObjFn + 'static,
    {
        Brent {
            root: 0.0,
            froot: 0.0,
            f: Box::new(f),
            iters: 0,
            converged: false,
        }
    }

    pub fn new_boxed(f: Box<dyn ObjFn>) -> Self {
        Brent {
            root: 0.0,
            froot: 0.0,
            f,
            iters: 0,
            converged: false,
        }
    }

    /// Brent's method for finding roots of a function
    ///
    /// Combines the robustness of bisection with the speed of inverse
    /// quadratic interpolation and the secant method.
    ///
    /// # Arguments
    /// * `a` - Left bracket boundary (f(a) and f(b) must have opposite signs)
    /// * `b` - Right bracket boundary
    /// * `tol` - Convergence tolerance (default: 1e-12)
    /// * `max_iters` - Maximum iterations (default: 100)
    ///
    /// # Returns
    /// * `BrentResult` containing the root, function value, and convergence info
    ///
    /// # Errors
    /// * `InvalidBracket` if a >= b
    /// * `InvalidTolerance` if tolerance <= 0
    /// * `FunctionEvaluationError` if the function returns a non-finite value
    /// * `SameSignError` if f(a) and f(b) have the same sign
    /// * `MaxIterationsExceeded` if convergence not reached
    pub fn find_root_bracketed(
        &mut self,
        mut a: f64,
        mut b: f64,
        tol: Option<f64>,
        max_iters: Option<usize>,
    ) -> Result<BrentResult, MinimizerError> {
        self.converged = false;
        let tol = tol.unwrap_or(1e-12);
        let max_iter = max_iters.unwrap_or(100);

        // Validate inputs
        if a >= b {
            return Err(MinimizerError::InvalidBracket);
        }
        if tol <= 0.0 {
            return Err(MinimizerError::InvalidTolerance);
        }

        let mut fa = self.f.call_scalar(a);
        let mut fb = self.f.call_scalar(b);
        let mut evaluations = 2;

        if !fa.is_finite() || !fb.is_finite() {
            return Err(MinimizerError::FunctionEvaluationError);
        }

        // Check that f(a) and f(b) have opposite signs
        if fa * fb > 0.0 {
            return Err(MinimizerError::SameSignError);
        }

        // Ensure |f(a)| >= |f(b)|
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        let mut mflag = true;
        let mut d = 0.0;

        self.iters = 0;

        while fb.abs() > tol && (b - a).abs() > tol && self.iters < max_iter {
            self.iters += 1;

            let mut s = if fa != fc && fb != fc {
                // Inverse quadratic interpolation
                a * fb * fc / ((fa - fb) * (fa - fc))
                    + b * fa * fc / ((fb - fa) * (fb - fc))
                    + c * fa * fb / ((fc - fa) * (fc - fb))
            } else {
                // Secant method
                b - fb * (b - a) / (fb - fa)
            };

            // Check conditions for using bisection instead
            let lo = (3.0 * a + b) / 4.0;
            let condition1 = if lo <= b {
                !(lo..=b).contains(&s)
            } else {
                !(b..=lo).contains(&s)
            };
            let condition2 = mflag && (s - b).abs() >= (b - c).abs() / 2.0;
            let condition3 = !mflag && (s - b).abs() >= (c - d).abs() / 2.0;
            let condition4 = mflag && (b - c).abs() < tol;
            let condition5 = !mflag && (c - d).abs() < tol;

            if condition1 || condition2 || condition3 || condition4 || condition5 {
                // Bisection method
                s = (a + b) / 2.0;
                mflag = true;
            } else {
                mflag = false;
            }

            let fs = self.f.call_scalar(s);
            evaluations += 1;

            if !fs.is_finite() {
                return Err(MinimizerError::FunctionEvaluationError);
            }

            // Update for next iteration
            d = c;
            c = b;
            fc = fb;

            if fa * fs < 0.0 {
                b = s;
                fb = fs;
            } else {
                a = s;
                fa = fs;
            }

            // Ensure |f(a)| >= |f(b)|
            if fa.abs() < fb.abs() {
                std::mem::swap(&mut a, &mut b);
                std::mem::swap(&mut fa, &mut fb);
            }
        }

        if self.iters >= max_iter {
            return Err(MinimizerError::MaxIterationsExceeded);
        }

        self.root = b;
        self.froot = fb;
        self.converged = true;
        Ok(BrentResult {
            root: self.root,
            froot: self.froot,
            fn_evals: evaluations,
            iters: self.iters,
            converged: self.converged,
            final_bracket_size: (b - a).abs(),
        })
    }

    /// Convenience function with default parameters
    pub fn find_root(&mut self, a: f64, b: f64) -> Result<BrentResult, MinimizerError> {
        self.find_root_bracketed(a, b, None, None)
    }

    /// Find all roots in an interval by subdividing and applying Brent's method
    ///
    /// # Arguments
    /// * `a` - Left boundary of search interval
    /// * `b` - Right boundary of search interval
    /// * `subdivisions` - Number of subdivisions to scan (default: 100)
    /// * `tol` - Root tolerance (default: 1e-12)
    ///
    /// # Returns
    /// * Vector of unique roots found in the interval, sorted ascending
    pub fn find_all_roots(
        &mut self,
        a: f64,
        b: f64,
        subdivisions: Option<usize>,
        tol: Option<f64>,
    ) -> Vec<f64> {
        let n_sub = subdivisions.unwrap_or(100);
        let tol = tol.unwrap_or(1e-12);
        let mut roots: Vec<f64> = Vec::new();

        if !(a < b) || n_sub == 0 {
            return roots;
        }

        let dx = (b - a) / n_sub as f64;

        for i in 0..n_sub {
            let x1 = a + i as f64 * dx;
            let x2 = a + (i + 1) as f64 * dx;

            let f1 = self.f.call_scalar(x1);
            let f2 = self.f.call_scalar(x2);

            // Check for sign change
            if f1 * f2 < 0.0 {
                if let Ok(result) = self.find_root_bracketed(x1, x2, Some(tol), None) {
                    let is_unique = roots
                        .iter()
                        .all(|&existing| (result.root - existing).abs() > tol * 10.0);

                    if is_unique {
                        roots.push(result.root);
                    }
                }
            }

            // Check for exact zero at the left grid point
            if f1.abs() < tol {
                let is_unique = roots.iter().all(|&existing| (x1 - existing).abs() > tol * 10.0);
                if is_unique {
                    roots.push(x1);
                }
            }
        }

        // Check the right endpoint
        if self.f.call_scalar(b).abs() < tol {
            let is_unique = roots.iter().all(|&existing| (b - existing).abs() > tol * 10.0);
            if is_unique {
                roots.push(b);
            }
        }

        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        roots
    }

    pub fn root(&self) -> f64 {
        self.root
    }

    pub fn froot(&self) -> f64 {
        self.froot
    }

    pub fn iters(&self) -> usize {
        self.iters
    }
}

impl fmt::Debug for Brent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Brent( root: {}, froot: {}, iters: {}, converged: {})",
            self.root, self.froot, self.iters, self.converged
        )
    }
}
