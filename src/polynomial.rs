use crate::error::AnalysisError;
use crate::interval::Interval;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;

/// Real polynomial stored as its coefficients, highest power first.
///
/// `coeffs[0]` multiplies x^n and the last entry is the constant term, so
/// the length is degree + 1. An empty vector behaves as the constant 0.
/// Values are never mutated in place; every interaction builds a fresh
/// polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        Polynomial { coeffs }
    }

    /// Constructor enforcing the non-zero leading coefficient invariant.
    ///
    /// Callers that accept user input should substitute a non-zero default
    /// (and warn) instead of letting a zero leading entry silently lower the
    /// degree; this constructor reports the violation so they can.
    pub fn checked(coeffs: Vec<f64>) -> Result<Polynomial, AnalysisError> {
        if coeffs.len() > 1 && coeffs[0] == 0.0 {
            return Err(AnalysisError::InvalidCoefficients(format!(
                "leading coefficient must be non-zero for degree {}",
                coeffs.len() - 1
            )));
        }
        Ok(Polynomial { coeffs })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree implied by the coefficient count. The empty polynomial reports
    /// degree 0, same as a lone constant.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs.first().copied().unwrap_or(0.0)
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Evaluate P(x) = sum of coeffs[i] * x^(n-i) via Horner's scheme.
    ///
    /// Total over all finite x and every coefficient vector, including the
    /// all-zero and the empty vector (both evaluate to 0).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Coefficients of the first derivative.
    ///
    /// Entry i of the result is coeffs[i] * (n - i); the constant term is
    /// dropped. A constant (or empty) polynomial yields the empty vector,
    /// which evaluates as the constant 0.
    pub fn derivative(&self) -> Polynomial {
        let n = self.coeffs.len().saturating_sub(1);
        let mut derived = Vec::with_capacity(n);
        for i in 0..n {
            derived.push(self.coeffs[i] * (n - i) as f64);
        }
        Polynomial::new(derived)
    }

    /// Evaluate the polynomial on `n` evenly spaced points across `window`,
    /// for plotting.
    pub fn sample(&self, window: &Interval, n: usize) -> Vec<(f64, f64)> {
        window
            .linspace(n)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.degree();
        let mut printed = false;

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            let power = n - i;

            if printed {
                write!(f, "{}", if a > 0.0 { " + " } else { " - " })?;
            } else if a < 0.0 {
                write!(f, "-")?;
            }

            let magnitude = a.abs();
            if power == 0 || magnitude != 1.0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            printed = true;
        }

        if !printed {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = SimpleError;

    /// Parse a comma or whitespace separated coefficient list, highest power
    /// first, e.g. `"1, 0, -3, 2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coeffs = Vec::new();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            match token.parse::<f64>() {
                Ok(c) => coeffs.push(c),
                Err(_) => bail!("invalid coefficient: {}", token),
            }
        }
        if coeffs.is_empty() {
            bail!("no coefficients given");
        }
        Ok(Polynomial::new(coeffs))
    }
}

#[cfg(test)]
mod polynomial_tests {
    use super::*;
    use crate::poly;
    use float_cmp::{approx_eq, F64Margin};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-10,
        ulps: 10,
    };

    // Direct power-sum definition, used as oracle against Horner
    fn direct_sum(coeffs: &[f64], x: f64) -> f64 {
        let n = coeffs.len() - 1;
        coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c * x.powi((n - i) as i32))
            .sum()
    }

    #[test]
    fn test_evaluate_against_direct_sum() {
        let vectors = [
            vec![1.0, 0.0, -3.0, 2.0],
            vec![2.0, -1.0, 0.5],
            vec![-0.25, 0.0, 0.0, 1.0, -7.0, 3.0],
            vec![4.2],
            vec![0.0, 0.0, 0.0],
        ];

        for coeffs in &vectors {
            let p = Polynomial::new(coeffs.clone());
            for x in [-10.0, -2.5, -1.0, 0.0, 0.1, 1.0, 3.7, 25.0] {
                assert!(
                    approx_eq!(f64, p.evaluate(x), direct_sum(coeffs, x), MARGIN),
                    "mismatch for {:?} at x = {}",
                    coeffs,
                    x
                );
            }
        }
    }

    #[test]
    fn test_evaluate_known_values() {
        // P(x) = x^3 - 3x + 2
        let p = poly![1.0, 0.0, -3.0, 2.0];

        assert_eq!(p.evaluate(1.0), 0.0);
        assert_eq!(p.evaluate(0.0), 2.0);
        assert_eq!(p.evaluate(-1.0), 4.0);
        assert_eq!(p.evaluate(-2.0), 0.0);
    }

    #[test]
    fn test_evaluate_degenerate() {
        assert_eq!(Polynomial::new(vec![]).evaluate(3.0), 0.0);
        assert_eq!(poly![0.0, 0.0, 0.0].evaluate(5.0), 0.0);
        assert_eq!(poly![7.5].evaluate(-100.0), 7.5);
    }

    #[test]
    fn test_derivative() {
        let p = poly![1.0, 0.0, -3.0, 2.0];

        assert_eq!(p.derivative(), poly![3.0, 0.0, -3.0]);
    }

    #[test]
    fn test_derivative_of_constant_is_empty() {
        let p = poly![4.0];
        let dp = p.derivative();

        assert!(dp.coefficients().is_empty());
        assert_eq!(dp.evaluate(2.0), 0.0);
    }

    #[test]
    fn test_derivative_is_linear() {
        let p = poly![2.0, -4.0, 1.0, 3.0];
        let q = poly![-1.0, 0.0, 5.0, 2.0];
        let sum = Polynomial::new(
            p.coefficients()
                .iter()
                .zip(q.coefficients())
                .map(|(a, b)| a + b)
                .collect(),
        );

        let expected = Polynomial::new(
            p.derivative()
                .coefficients()
                .iter()
                .zip(q.derivative().coefficients())
                .map(|(a, b)| a + b)
                .collect(),
        );
        assert_eq!(sum.derivative(), expected);
    }

    #[test]
    fn test_degree_and_leading() {
        assert_eq!(poly![1.0, 0.0, -3.0, 2.0].degree(), 3);
        assert_eq!(poly![5.0].degree(), 0);
        assert_eq!(Polynomial::new(vec![]).degree(), 0);
        assert_eq!(poly![-2.0, 1.0].leading_coefficient(), -2.0);
        assert_eq!(Polynomial::new(vec![]).leading_coefficient(), 0.0);
    }

    #[test]
    fn test_checked_rejects_zero_leading() {
        let result = Polynomial::checked(vec![0.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidCoefficients(_))
        ));

        assert!(Polynomial::checked(vec![1.0, 0.0, 2.0]).is_ok());
        // Degree 0 carries no leading constraint
        assert!(Polynomial::checked(vec![0.0]).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", poly![1.0, 0.0, -3.0, 2.0]), "x^3 - 3x + 2");
        assert_eq!(format!("{}", poly![-1.0, 0.0, 0.0]), "-x^2");
        assert_eq!(format!("{}", poly![2.5, -1.0]), "2.5x - 1");
        assert_eq!(format!("{}", poly![1.0]), "1");
        assert_eq!(format!("{}", poly![0.0, 0.0]), "0");
        assert_eq!(format!("{}", poly![-2.0, 0.0, 1.5, 0.0]), "-2x^3 + 1.5x");
    }

    #[test]
    fn test_from_str() {
        let p: Polynomial = "1, 0, -3, 2".parse().unwrap();
        assert_eq!(p, poly![1.0, 0.0, -3.0, 2.0]);

        let p: Polynomial = "2.5 -1".parse().unwrap();
        assert_eq!(p, poly![2.5, -1.0]);

        assert!("".parse::<Polynomial>().is_err());
        assert!("1, two, 3".parse::<Polynomial>().is_err());
    }

    #[test]
    fn test_sample() {
        let p = poly![1.0, 0.0]; // P(x) = x
        let window = Interval::new(0.0, 1.0).unwrap();

        let pts = p.sample(&window, 5);

        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], (0.0, 0.0));
        assert_eq!(pts[4], (1.0, 1.0));
        for &(x, y) in &pts {
            assert!(approx_eq!(f64, x, y, MARGIN));
        }
    }
}
