use crate::polynomial::Polynomial;
use dyn_clone::DynClone;

// Define a trait for the objective function
pub trait ObjFn: DynClone {
    fn call_scalar(&self, x: f64) -> f64;
}
dyn_clone::clone_trait_object!(ObjFn);

// Wrapper for single-dimensional functions
#[derive(Clone)]
pub struct SingleDimFn<F>(pub F)
where
    F: Fn(f64) -> f64 + Clone;

// Convenience constructors
impl<F> SingleDimFn<F>
where
    F: Fn(f64) -> f64 + Clone,
{
    pub fn new(f: F) -> Self {
        SingleDimFn(f)
    }
}

// Implementation for single-dimensional functions
impl<F> ObjFn for SingleDimFn<F>
where
    F: Fn(f64) -> f64 + Clone,
{
    fn call_scalar(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

/// Objective closed over a polynomial, optionally negated.
///
/// Negation turns every maximization into a minimization of the same
/// polynomial; the reported function value must be negated back by the
/// caller.
#[derive(Clone, Debug)]
pub struct PolyFn {
    poly: Polynomial,
    negate: bool,
}

impl PolyFn {
    pub fn new(poly: Polynomial) -> Self {
        PolyFn {
            poly,
            negate: false,
        }
    }

    pub fn negated(poly: Polynomial) -> Self {
        PolyFn { poly, negate: true }
    }
}

impl ObjFn for PolyFn {
    fn call_scalar(&self, x: f64) -> f64 {
        let y = self.poly.evaluate(x);
        if self.negate {
            -y
        } else {
            y
        }
    }
}
