use floatscope::compare::{approx_eq, observed_epsilon, ulp_distance, Tolerance};

#[test]
fn sum_differs_exactly_but_not_approximately() {
    let sum = 0.1 + 0.2;
    assert!(sum != 0.3, "0.1 + 0.2 should not be exactly 0.3");
    assert!(
        approx_eq(sum, 0.3, Tolerance::default()),
        "default tolerance should absorb one rounding"
    );
}

#[test]
fn sum_is_one_ulp_off() {
    let d = ulp_distance(0.1 + 0.2, 0.3).expect("finite operands");
    assert!(d <= 2, "0.1 + 0.2 should be within 2 ULP of 0.3, got {d}");
    assert!(d >= 1, "0.1 + 0.2 should not be exactly 0.3");
}

#[test]
fn observed_epsilon_matches_constant() {
    assert_eq!(observed_epsilon(), f64::EPSILON);
}

#[test]
fn absolute_tolerance_floor() {
    assert!(approx_eq(1e-12, -1e-12, Tolerance::abs(1e-11)));
    assert!(
        !approx_eq(1e-12, -1e-12, Tolerance::rel(1e-3)),
        "relative tolerance alone cannot bridge values straddling zero"
    );
}

#[test]
fn infinities() {
    assert!(approx_eq(f64::INFINITY, f64::INFINITY, Tolerance::default()));
    assert!(!approx_eq(f64::INFINITY, f64::MAX, Tolerance::default()));
    assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, Tolerance::default()));
}

#[test]
fn ulp_distance_across_zero() {
    // -0.0 and +0.0 are the same point on the ULP scale.
    assert_eq!(ulp_distance(-0.0, 0.0), Some(0));
    // Adjacent denormals on either side of zero are 2 apart.
    let tiny = f64::from_bits(1);
    assert_eq!(ulp_distance(-tiny, tiny), Some(2));
}
