use crate::minimize::{MinimizerError, ObjFn};
use std::fmt;

/// Result of minimum bracketing
#[derive(Debug, Clone)]
pub struct BracketResult {
    pub a: f64,  // Left bracket point
    pub b: f64,  // Middle point (should have lowest function value)
    pub c: f64,  // Right bracket point
    pub fa: f64, // f(a)
    pub fb: f64, // f(b)
    pub fc: f64, // f(c)
    pub iterations: usize,
    pub function_evaluations: usize,
    pub bracket_width: f64,
}

impl BracketResult {
    /// Check if the bracket is valid (fb < fa and fb < fc)
    pub fn is_valid(&self) -> bool {
        self.fb < self.fa && self.fb < self.fc
    }

    /// Get the width of the bracket
    pub fn width(&self) -> f64 {
        (self.c - self.a).abs()
    }

    /// Get the best point in the bracket
    pub fn best_point(&self) -> f64 {
        self.b
    }

    /// Get the best function value
    pub fn best_value(&self) -> f64 {
        self.fb
    }
}

/// Options for bracket expansion
#[derive(Debug, Clone)]
pub struct BracketOptions {
    pub initial_step: f64,
    pub max_iters: usize,
}

impl Default for BracketOptions {
    fn default() -> Self {
        Self {
            initial_step: 1.0,
            max_iters: 100,
        }
    }
}

#[derive(Clone)]
pub struct Bracket {
    a: f64,
    b: f64,
    c: f64,
    fa: f64,
    fb: f64,
    fc: f64,
    iters: usize,
    converged: bool,
    f: Box<dyn ObjFn>,
}

impl Bracket {
    /// Golden ratio constant for bracket expansion
    const GOLDEN_RATIO: f64 = 1.618033988749895;
    const LIMIT: f64 = 100.0; // Maximum expansion factor per step
    const TINY: f64 = 1e-20; // Small number to avoid division by zero
    const OVERFLOW_GUARD: f64 = 1e100;

    pub fn new<F>(f: F) -> Self
    where
        F: ObjFn + 'static,
    {
        Bracket {
            a: -1.0,
            b: 1.0,
            c: 2.0,
            fa: 0.0,
            fb: 0.0,
            fc: 0.0,
            iters: 0,
            converged: false,
            f: Box::new(f),
        }
    }

    pub fn new_boxed(f: Box<dyn ObjFn>) -> Self {
        Bracket {
            a: -1.0,
            b: 1.0,
            c: 2.0,
            fa: 0.0,
            fb: 0.0,
            fc: 0.0,
            iters: 0,
            converged: false,
            f,
        }
    }

    fn eval(&self, x: f64) -> Result<f64, MinimizerError> {
        let fx = self.f.call_scalar(x);
        if !fx.is_finite() {
            return Err(MinimizerError::FunctionEvaluationError);
        }
        Ok(fx)
    }

    fn finish(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        fa: f64,
        fb: f64,
        fc: f64,
        function_evaluations: usize,
    ) -> Result<BracketResult, MinimizerError> {
        // Order the points so a <= b <= c, values following their points
        let mut points = [(a, fa), (b, fb), (c, fc)];
        points.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap());
        let ((a, fa), (b, fb), (c, fc)) = (points[0], points[1], points[2]);

        if !(fb < fa && fb < fc) {
            return Err(MinimizerError::NoMinimumFound);
        }

        self.a = a;
        self.b = b;
        self.c = c;
        self.fa = fa;
        self.fb = fb;
        self.fc = fc;
        self.converged = true;
        Ok(BracketResult {
            a,
            b,
            c,
            fa,
            fb,
            fc,
            iterations: self.iters,
            function_evaluations,
            bracket_width: (c - a).abs(),
        })
    }

    /// Bracket a minimum starting from two initial points
    ///
    /// Finds three points (a, b, c) such that a < b < c and f(b) < f(a) and
    /// f(b) < f(c), guaranteeing a minimum exists in [a, c].
    ///
    /// Uses golden ratio expansion with a parabolic extrapolation trial at
    /// each step. Expansion walks downhill from the initial points, so a
    /// monotonic objective fails with an error rather than looping.
    ///
    /// # Arguments
    /// * `a` - First initial point
    /// * `b` - Second initial point (must differ from a)
    /// * `max_iters` - Maximum expansion iterations (default: 100)
    ///
    /// # Returns
    /// * `BracketResult` containing the bracket points and function values
    pub fn bracket_minimum(
        &mut self,
        mut a: f64,
        mut b: f64,
        max_iters: Option<usize>,
    ) -> Result<BracketResult, MinimizerError> {
        self.converged = false;
        let max_iter = max_iters.unwrap_or(100);

        // Validate initial points
        if a == b || !a.is_finite() || !b.is_finite() {
            return Err(MinimizerError::InvalidInitialPoints);
        }

        let mut fa = self.eval(a)?;
        let mut fb = self.eval(b)?;
        let mut function_evaluations = 2;

        // Walk downhill: ensure f(b) <= f(a)
        if fa < fb {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        // First guess for c using golden ratio
        let mut c = b + Self::GOLDEN_RATIO * (b - a);
        let mut fc = self.eval(c)?;
        function_evaluations += 1;

        self.iters = 0;

        // Keep expanding until we bracket a minimum
        while fb > fc && self.iters < max_iter {
            self.iters += 1;

            // Parabolic extrapolation through (a, fa), (b, fb), (c, fc)
            let r = (b - a) * (fb - fc);
            let q = (b - c) * (fb - fa);
            let denom = if (q - r).abs() > Self::TINY {
                q - r
            } else {
                Self::TINY.copysign(q - r)
            };
            let u = b - ((b - c) * q - (b - a) * r) / (2.0 * denom);
            let ulim = b + Self::LIMIT * (c - b);

            let (new_point, new_value) = if (b - u) * (u - c) > 0.0 {
                // Parabolic u lies between b and c
                let fu = self.eval(u)?;
                function_evaluations += 1;

                if fu < fc {
                    // Minimum between b and c
                    return self.finish(b, u, c, fb, fu, fc, function_evaluations);
                } else if fu > fb {
                    // Minimum between a and u
                    return self.finish(a, b, u, fa, fb, fu, function_evaluations);
                }

                // Parabolic fit didn't help; golden expansion past c
                let un = c + Self::GOLDEN_RATIO * (c - b);
                let fun = self.eval(un)?;
                function_evaluations += 1;
                (un, fun)
            } else if (c - u) * (u - ulim) > 0.0 {
                // Parabolic u between c and the expansion limit: accept it
                let fu = self.eval(u)?;
                function_evaluations += 1;
                (u, fu)
            } else if (u - ulim) * (ulim - c) >= 0.0 {
                // Clamp the parabolic step to the expansion limit
                let fu = self.eval(ulim)?;
                function_evaluations += 1;
                (ulim, fu)
            } else {
                // Reject parabolic u, use golden expansion
                let un = c + Self::GOLDEN_RATIO * (c - b);
                let fun = self.eval(un)?;
                function_evaluations += 1;
                (un, fun)
            };

            if !new_point.is_finite() || new_point.abs() > Self::OVERFLOW_GUARD {
                return Err(MinimizerError::NumericalOverflow);
            }

            // Shift points
            a = b;
            b = c;
            c = new_point;
            fa = fb;
            fb = fc;
            fc = new_value;
        }

        if self.iters >= max_iter {
            return Err(MinimizerError::MaxIterationsExceeded);
        }

        self.finish(a, b, c, fa, fb, fc, function_evaluations)
    }

    /// Bracket a minimum with a specific initial step size
    pub fn bracket_minimum_with_step(
        &mut self,
        start_point: f64,
        initial_step: f64,
        max_iters: Option<usize>,
    ) -> Result<BracketResult, MinimizerError> {
        if initial_step == 0.0 || !initial_step.is_finite() {
            return Err(MinimizerError::InvalidStepSize);
        }

        let a = start_point;
        let b = start_point + initial_step;

        self.bracket_minimum(a, b, max_iters)
    }

    /// Bracket minimum with automatic direction detection
    ///
    /// Tries both positive and negative directions from the starting point
    /// to find a good bracket automatically.
    pub fn bracket_minimum_auto(
        &mut self,
        start_point: f64,
        initial_step: f64,
        max_iters: Option<usize>,
    ) -> Result<BracketResult, MinimizerError> {
        if initial_step <= 0.0 || !initial_step.is_finite() {
            return Err(MinimizerError::InvalidStepSize);
        }

        // Try positive direction first
        match self.bracket_minimum_with_step(start_point, initial_step, max_iters) {
            Ok(result) => Ok(result),
            Err(_) => {
                // Try negative direction
                self.bracket_minimum_with_step(start_point, -initial_step, max_iters)
            }
        }
    }

    /// Convenience function with default parameters
    pub fn bracket(&mut self, a: f64, b: f64) -> Result<BracketResult, MinimizerError> {
        self.bracket_minimum(a, b, None)
    }
}

impl fmt::Debug for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bracket( a: {}, b: {}, c: {}, fa: {}, fb: {}, fc: {}, iters: {}, converged: {})",
            self.a, self.b, self.c, self.fa, self.fb, self.fc, self.iters, self.converged
        )
    }
}
