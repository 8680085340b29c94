use float_cmp::{approx_eq, F64Margin};
use polylab::prelude::*;
use rand::Rng;

const MARGIN: F64Margin = F64Margin {
    epsilon: 1e-9,
    ulps: 10,
};

// Bound checks allow the optimizer's tolerance
const BOUND_TOL: f64 = 1e-3;

#[test]
fn cubic_full_analysis() {
    let p: Polynomial = "1, 0, -3, 2".parse().unwrap();
    assert_eq!(format!("{}", p), "x^3 - 3x + 2");
    assert_eq!(p.evaluate(1.0), 0.0);
    assert_eq!(p.derivative(), poly![3.0, 0.0, -3.0]);

    let window = Interval::new(-5.0, 5.0).unwrap();
    let analysis = analyze(&p, &window);

    assert_eq!(analysis.domain, Domain::AllReals);
    assert_eq!(analysis.range.unwrap(), RangeDescription::Unbounded);
    assert_eq!(analysis.max_critical_points, 2);

    let points = analysis.critical_points.unwrap();
    assert_eq!(points.len(), 2);
    assert!(approx_eq!(f64, points[0].x, -1.0, MARGIN));
    assert!(approx_eq!(f64, points[0].y, 4.0, MARGIN));
    assert!(approx_eq!(f64, points[1].x, 1.0, MARGIN));
    assert!(approx_eq!(f64, points[1].y, 0.0, MARGIN));
}

#[test]
fn even_degree_bound_holds_on_random_samples() {
    let polynomials = [
        poly![1.0, 0.0, -2.0, 0.0, 1.0],
        poly![2.0, 0.0, 3.0],
        poly![0.5, -1.0, -2.0, 0.0, 4.0],
    ];
    let mut rng = rand::thread_rng();

    for p in &polynomials {
        let y_min = match polylab::range::analyze(p).unwrap() {
            RangeDescription::BoundedBelow(y) => y,
            other => panic!("expected BoundedBelow for {}, got {:?}", p, other),
        };

        for _ in 0..10_000 {
            let x: f64 = rng.gen_range(-50.0..50.0);
            let y = p.evaluate(x);
            assert!(
                y >= y_min - BOUND_TOL,
                "range bound {} violated by {} at x = {} for {}",
                y_min,
                y,
                x,
                p
            );
        }
    }
}

#[test]
fn odd_degree_always_unbounded() {
    let mut rng = rand::thread_rng();

    for degree in [1usize, 3, 5] {
        for _ in 0..100 {
            let mut coeffs: Vec<f64> = (0..=degree).map(|_| rng.gen_range(-100.0..100.0)).collect();
            // Keep the leading entry clear of zero so the degree is honest
            coeffs[0] = rng.gen_range(0.1..100.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

            let p = Polynomial::checked(coeffs).unwrap();
            assert_eq!(
                polylab::range::analyze(&p).unwrap(),
                RangeDescription::Unbounded,
                "degree {} polynomial {} should be unbounded",
                degree,
                p
            );
        }
    }
}

#[test]
fn reporter_is_idempotent() {
    let window = Interval::new(-5.0, 5.0).unwrap();
    let polynomials = [
        poly![1.0, 0.0, -3.0, 2.0],
        poly![1.0, 0.0, -2.0, 0.0, 1.0],
        poly![-2.0, 0.0, 1.0, 0.0, 0.0, 3.0],
    ];

    for p in &polynomials {
        let first = report(p, &window).unwrap();
        let second = report(p, &window).unwrap();
        assert_eq!(first, second, "probe reporter not idempotent for {}", p);

        let first = report_from_derivative(p, &window).unwrap();
        let second = report_from_derivative(p, &window).unwrap();
        assert_eq!(first, second, "derivative reporter not idempotent for {}", p);
    }
}

#[test]
fn extremum_inside_boundary_margin_is_excluded() {
    // Vertex at window.low + 0.001
    let p = poly![1.0, 2.0 * 4.999, 4.999 * 4.999];
    let window = Interval::new(-5.0, 5.0).unwrap();

    let points = report(&p, &window).unwrap();

    assert!(points.is_empty(), "got {:?}", points);
}

#[test]
fn near_zero_width_window_does_not_crash() {
    let p = poly![1.0, 0.0, -3.0, 2.0];
    let window = Interval::new(0.0, 0.001).unwrap();

    // Empty or a failure value are both acceptable; a panic is not
    match report(&p, &window) {
        Ok(points) => assert!(points.is_empty()),
        Err(AnalysisError::OptimizationFailed(_)) => {}
        Err(other) => panic!("unexpected error kind: {:?}", other),
    }

    let analysis = analyze(&p, &window);
    assert_eq!(analysis.range.unwrap(), RangeDescription::Unbounded);
}

#[test]
fn derivative_reporter_outperforms_probes_on_quartic() {
    // x^4 - 2x^2 has three real critical points in view
    let p = poly![1.0, 0.0, -2.0, 0.0, 0.0];
    let window = Interval::new(-5.0, 5.0).unwrap();

    let probed = report(&p, &window).unwrap();
    let exhaustive = report_from_derivative(&p, &window).unwrap();

    assert!(probed.len() <= 2);
    assert_eq!(exhaustive.len(), 3);
    // Every probed point must also be seen by the exhaustive reporter
    for point in &probed {
        assert!(
            exhaustive.iter().any(|q| q == point),
            "probe point {} missing from {:?}",
            point,
            exhaustive
        );
    }
}

#[test]
fn constant_polynomial_degenerates_cleanly() {
    let p = poly![4.0];
    let window = Interval::new(-5.0, 5.0).unwrap();

    let analysis = analyze(&p, &window);

    assert_eq!(analysis.range.unwrap(), RangeDescription::BoundedBelow(4.0));
    assert!(analysis.critical_points.unwrap().is_empty());
    assert_eq!(analysis.max_critical_points, 0);
}
