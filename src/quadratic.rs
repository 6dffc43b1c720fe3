//! Quadratic roots: the textbook formula versus the numerically stable one.
//!
//! For `x^2 + 1e8 x + 1 = 0` the small root is about `-1e-8`. The textbook
//! formula computes it as `(-b + sqrt(b^2 - 4ac)) / 2a`, where `sqrt(disc)`
//! agrees with `b` in nearly every digit, so the addition cancels
//! catastrophically. The stable variant picks the non-cancelling sign first
//! (`q = -(b + sign(b) sqrt(disc)) / 2`) and recovers the other root from the
//! product identity `x1 * x2 = c / a`.

/// Coefficients of `a x^2 + b x + c`.
#[derive(Debug, Clone, Copy)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Result of solving a (possibly degenerate) quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Two distinct real roots, ordered.
    Two { smaller: f64, larger: f64 },
    /// One real double root.
    Double(f64),
    /// Complex conjugate pair `re ± im·i`.
    Complex { re: f64, im: f64 },
    /// `a == 0`: the equation is linear with this single root.
    Linear(f64),
    /// `a == b == 0`: no variable left (either no solution or all of ℝ).
    Constant,
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `b^2 - 4ac`.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluate the polynomial at `x` (Horner form), for checking residuals.
    pub fn residual(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// The quadratic formula exactly as taught: `(-b ± sqrt(disc)) / 2a`.
    ///
    /// Susceptible to cancellation whenever `|4ac| << b^2`, where one of the
    /// `-b ± sqrt(disc)` numerators subtracts nearly equal quantities.
    pub fn roots_naive(&self) -> Roots {
        if let Some(r) = self.degenerate() {
            return r;
        }
        let disc = self.discriminant();
        if disc < 0.0 {
            return self.complex_pair(disc);
        }
        let sq = disc.sqrt();
        let r1 = (-self.b - sq) / (2.0 * self.a);
        let r2 = (-self.b + sq) / (2.0 * self.a);
        Self::order(r1, r2)
    }

    /// Cancellation-free variant: compute the large-magnitude root first with
    /// `q = -(b + sign(b) sqrt(disc)) / 2`, then the other as `c / q`.
    pub fn roots_stable(&self) -> Roots {
        if let Some(r) = self.degenerate() {
            return r;
        }
        let disc = self.discriminant();
        if disc < 0.0 {
            return self.complex_pair(disc);
        }
        let sq = disc.sqrt();
        // With b == 0 either sign works; pick +.
        let sign = if self.b < 0.0 { -1.0 } else { 1.0 };
        let q = -0.5 * (self.b + sign * sq);
        if q == 0.0 {
            // b == 0 and disc == 0, so both roots are zero.
            return Roots::Double(0.0);
        }
        let r1 = q / self.a;
        let r2 = self.c / q;
        Self::order(r1, r2)
    }

    fn degenerate(&self) -> Option<Roots> {
        if self.a != 0.0 {
            return None;
        }
        if self.b == 0.0 {
            Some(Roots::Constant)
        } else {
            Some(Roots::Linear(-self.c / self.b))
        }
    }

    fn complex_pair(&self, disc: f64) -> Roots {
        Roots::Complex {
            re: -self.b / (2.0 * self.a),
            im: (-disc).sqrt() / (2.0 * self.a.abs()),
        }
    }

    fn order(r1: f64, r2: f64) -> Roots {
        if r1 == r2 {
            Roots::Double(r1)
        } else if r1 < r2 {
            Roots::Two {
                smaller: r1,
                larger: r2,
            }
        } else {
            Roots::Two {
                smaller: r2,
                larger: r1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_cases() {
        assert_eq!(
            Quadratic::new(0.0, 2.0, -4.0).roots_stable(),
            Roots::Linear(2.0)
        );
        assert_eq!(Quadratic::new(0.0, 0.0, 1.0).roots_stable(), Roots::Constant);
    }

    #[test]
    fn complex_pair() {
        // x^2 + 1 = 0 -> ±i
        match Quadratic::new(1.0, 0.0, 1.0).roots_stable() {
            Roots::Complex { re, im } => {
                assert_eq!(re, 0.0);
                assert_eq!(im, 1.0);
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }
}
