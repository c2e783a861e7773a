// File: crates/overlay-core/src/scale.rs
// Summary: Linear domain-to-range scale used for both chart axes.

/// Linear map from `[d0, d1]` onto `[r0, r1]`. No clamping: values outside
/// the domain land outside the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
    slope: f64,
}

impl LinearScale {
    /// A zero-width domain collapses to `r0` for every input. This departs
    /// from the common `span || 1` divisor guard on purpose: with divisor 1
    /// only `v == d0` lands on `r0`, and a degenerate scale must be constant.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        let [d0, d1] = domain;
        let [r0, r1] = range;
        let span = d1 - d0;
        let slope = if span == 0.0 { 0.0 } else { (r1 - r0) / span };
        Self { d0, d1, r0, r1, slope }
    }

    /// The `[0,1] -> [0,1]` scale used when there is nothing to plot.
    pub fn identity() -> Self { Self::new([0.0, 1.0], [0.0, 1.0]) }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) * self.slope
    }

    /// Map a range value back into the domain. `None` for a degenerate
    /// domain or an empty range.
    pub fn invert(&self, r: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some(self.d0 + (r - self.r0) / self.slope)
    }

    pub fn domain(&self) -> [f64; 2] { [self.d0, self.d1] }
    pub fn range(&self) -> [f64; 2] { [self.r0, self.r1] }
    pub fn is_degenerate(&self) -> bool { self.d0 == self.d1 }

    /// Closure form, for callers that only need to evaluate.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Copy {
        move |v| self.apply(v)
    }
}

/// Build a reusable linear scale function.
pub fn make_scale(domain: [f64; 2], range: [f64; 2]) -> impl Fn(f64) -> f64 + Copy {
    LinearScale::new(domain, range).into_fn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_round_trips_inside_domain() {
        let s = LinearScale::new([10.0, 20.0], [400.0, 0.0]);
        let px = s.apply(12.5);
        assert!((s.invert(px).unwrap() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_scale_is_not_invertible() {
        assert_eq!(LinearScale::new([3.0, 3.0], [0.0, 10.0]).invert(5.0), None);
    }
}
