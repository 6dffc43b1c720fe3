use floatscope::quadratic::{Quadratic, Roots};

fn two(r: Roots) -> (f64, f64) {
    match r {
        Roots::Two { smaller, larger } => (smaller, larger),
        other => panic!("expected two real roots, got {other:?}"),
    }
}

#[test]
fn stable_recovers_the_small_root() {
    // x^2 + 1e8 x + 1 = 0; the small root is ~ -1e-8.
    let q = Quadratic::new(1.0, 1e8, 1.0);
    let (_, small) = two(q.roots_stable());
    let rel = ((small + 1e-8) / 1e-8).abs();
    assert!(
        rel < 1e-12,
        "stable small root should match -1e-8 to near machine precision, rel={rel}"
    );
    assert!(
        q.residual(small).abs() < 1e-8,
        "residual at stable small root should be tiny, got {}",
        q.residual(small)
    );
}

#[test]
fn naive_destroys_the_small_root() {
    let q = Quadratic::new(1.0, 1e8, 1.0);
    let (_, small_naive) = two(q.roots_naive());
    let rel = ((small_naive + 1e-8) / 1e-8).abs();
    assert!(
        rel > 1e-4,
        "the textbook formula should visibly miss the small root, rel={rel}"
    );
    assert!(
        q.residual(small_naive).abs() > 1e-4,
        "residual should expose the bad root, got {}",
        q.residual(small_naive)
    );
}

#[test]
fn both_agree_on_the_large_root() {
    let q = Quadratic::new(1.0, 1e8, 1.0);
    let (large_naive, _) = two(q.roots_naive());
    let (large_stable, _) = two(q.roots_stable());
    // No cancellation on the -b - sqrt(disc) branch for positive b.
    let rel = ((large_naive - large_stable) / large_stable).abs();
    assert!(rel < 1e-14, "large roots should agree, rel={rel}");
}

#[test]
fn well_conditioned_case() {
    // (x - 2)(x - 3) = x^2 - 5x + 6
    let q = Quadratic::new(1.0, -5.0, 6.0);
    let (s, l) = two(q.roots_stable());
    assert!((s - 2.0).abs() < 1e-14);
    assert!((l - 3.0).abs() < 1e-14);
}

#[test]
fn double_root() {
    // (x + 1)^2 = x^2 + 2x + 1
    match Quadratic::new(1.0, 2.0, 1.0).roots_stable() {
        Roots::Double(x) => assert!((x + 1.0).abs() < 1e-14),
        other => panic!("expected a double root, got {other:?}"),
    }
}

#[test]
fn negative_b_uses_the_other_branch() {
    // (x - 1e8)(x - 1e-8): b = -(1e8 + 1e-8)
    let q = Quadratic::new(1.0, -(1e8 + 1e-8), 1.0);
    let (small, large) = two(q.roots_stable());
    assert!(((small - 1e-8) / 1e-8).abs() < 1e-10, "small root off: {small}");
    assert!(((large - 1e8) / 1e8).abs() < 1e-14, "large root off: {large}");
}

#[test]
fn complex_and_degenerate() {
    match Quadratic::new(2.0, 0.0, 8.0).roots_stable() {
        Roots::Complex { re, im } => {
            assert_eq!(re, 0.0);
            assert!((im - 2.0).abs() < 1e-14);
        }
        other => panic!("expected complex roots, got {other:?}"),
    }
    assert_eq!(Quadratic::new(0.0, 4.0, -2.0).roots_stable(), Roots::Linear(0.5));
    assert_eq!(Quadratic::new(0.0, 0.0, 3.0).roots_naive(), Roots::Constant);
}

#[test]
fn naive_and_stable_share_degenerate_handling() {
    let q = Quadratic::new(0.0, 2.0, -4.0);
    assert_eq!(q.roots_naive(), q.roots_stable());
}
