//! Hermite-spline representation.
//!
//! A piecewise cubic defined per interval by the two bounding knots, their
//! values, and their first derivatives. Interval coefficients are computed
//! per query rather than stored, so the representation is just the three
//! knot arrays.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::locate;

/// Piecewise-cubic Hermite spline over sorted knots.
///
/// Queries outside `[min_t, max_t]` evaluate the boundary interval's cubic
/// beyond its nominal range, extrapolating smoothly.
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    ts: Vec<f64>,
    xs: Vec<f64>,
    ds: Vec<f64>,
}

impl HermiteSpline {
    /// Builds a spline from sorted knots `ts`, values `xs`, and first
    /// derivatives `ds`.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if the arrays differ in length.
    /// - [`InterpolationError::InsufficientPoints`] with fewer than 2 knots.
    pub fn new(ts: Vec<f64>, xs: Vec<f64>, ds: Vec<f64>) -> Result<Self, InterpolationError> {
        if ts.len() != xs.len() || ts.len() != ds.len() {
            return Err(InterpolationError::UnequalLength {
                t_len: ts.len(),
                x_len: xs.len().max(ds.len()),
            });
        }
        if ts.len() < 2 {
            return Err(InterpolationError::InsufficientPoints {
                got: ts.len(),
                need: 2,
            });
        }
        Ok(Self { ts, xs, ds })
    }

    /// Interval index whose cubic covers `t`, clamped to the boundary
    /// intervals for out-of-domain queries.
    fn interval(&self, t: f64) -> usize {
        locate(&self.ts, t).min(self.ts.len() - 2)
    }

    /// Cubic coefficients of interval `i` in `dx = t - ts[i]` form:
    /// `x0 + dx*(c1 + dx*(c2 + dx*c3))`.
    fn coefficients(&self, i: usize) -> (f64, f64, f64, f64) {
        let h = self.ts[i + 1] - self.ts[i];
        let slope = (self.xs[i + 1] - self.xs[i]) / h;
        let c1 = self.ds[i];
        let c2 = (3.0 * slope - 2.0 * self.ds[i] - self.ds[i + 1]) / h;
        let c3 = (self.ds[i] + self.ds[i + 1] - 2.0 * slope) / (h * h);
        (self.xs[i], c1, c2, c3)
    }

    /// Spline value at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        let i = self.interval(t);
        let (x0, c1, c2, c3) = self.coefficients(i);
        let dx = t - self.ts[i];
        x0 + dx * (c1 + dx * (c2 + dx * c3))
    }

    /// Value, first derivative, and second derivative at `t`.
    pub fn differentiate(&self, t: f64) -> (f64, f64, f64) {
        let i = self.interval(t);
        let (x0, c1, c2, c3) = self.coefficients(i);
        let dx = t - self.ts[i];
        let value = x0 + dx * (c1 + dx * (c2 + dx * c3));
        let first = c1 + dx * (2.0 * c2 + 3.0 * c3 * dx);
        let second = 2.0 * c2 + 6.0 * c3 * dx;
        (value, first, second)
    }

    /// Definite integral from the first knot up to `t`: full closed-form
    /// interval integrals up to the interval containing `t`, plus the
    /// partial integral within it.
    pub fn integrate(&self, t: f64) -> f64 {
        let k = self.interval(t);
        let mut sum = 0.0;
        for i in 0..k {
            sum += self.interval_integral(i, self.ts[i + 1] - self.ts[i]);
        }
        sum + self.interval_integral(k, t - self.ts[k])
    }

    /// Closed-form integral of interval `i`'s cubic over `[ts[i], ts[i]+dx]`.
    fn interval_integral(&self, i: usize, dx: f64) -> f64 {
        let (x0, c1, c2, c3) = self.coefficients(i);
        dx * (x0 + dx * (c1 / 2.0 + dx * (c2 / 3.0 + dx * c3 / 4.0)))
    }

    /// The knot positions.
    pub fn ts(&self) -> &[f64] {
        &self.ts
    }
}
