//! Cubic spline interpolation with configurable boundary conditions.
//!
//! Builds a piecewise cubic with continuous first and second derivatives
//! through all samples. The per-knot first derivatives are the unknowns of a
//! tridiagonal linear system: interior rows encode C² continuity, boundary
//! rows encode the selected [`BoundaryCondition`] in closed form. The solved
//! derivatives feed a [`HermiteSpline`], which provides evaluation,
//! differentiation, and definite integration.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::boundary::BoundaryCondition;
use crate::interpolation::spline::helpers::solve_tridiagonal;
use crate::interpolation::spline::hermite::HermiteSpline;
use crate::sorting::sort_paired;

/// Cubic spline interpolator.
///
/// Configured with a boundary condition per end ([`Self::natural`] uses zero
/// curvature at both), prepared from a [`SampleSet`], then evaluated through
/// its cached [`HermiteSpline`].
#[derive(Debug, Clone, Default)]
pub struct CubicSplineInterpolator {
    left: BoundaryCondition,
    right: BoundaryCondition,
    spline: Option<HermiteSpline>,
}

impl CubicSplineInterpolator {
    /// A natural spline: zero curvature at both ends.
    pub fn natural() -> Self {
        Self::default()
    }

    /// A spline with explicit boundary conditions.
    pub fn with_boundaries(left: BoundaryCondition, right: BoundaryCondition) -> Self {
        Self {
            left,
            right,
            spline: None,
        }
    }

    /// Solves for the per-knot derivatives and caches the resulting
    /// Hermite representation.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `samples` holds no points.
    /// - [`InterpolationError::InsufficientPoints`] with fewer than 2 points.
    pub fn prepare(&mut self, samples: &SampleSet) -> Result<(), InterpolationError> {
        if samples.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        self.spline = Some(fit(samples.ts(), samples.xs(), self.left, self.right)?);
        Ok(())
    }

    fn spline(&self) -> Result<&HermiteSpline, InterpolationError> {
        self.spline.as_ref().ok_or(InterpolationError::NotPrepared)
    }

    /// Spline value at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate(&self, t: f64) -> Result<f64, InterpolationError> {
        Ok(self.spline()?.eval(t))
    }

    /// Spline value at `t` with a zero error estimate: the spline family
    /// carries no error estimation.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate_with_error(&self, t: f64) -> Result<(f64, f64), InterpolationError> {
        Ok((self.spline()?.eval(t), 0.0))
    }

    /// Evaluates outside the sampled domain: the boundary interval's cubic
    /// extends beyond its nominal range, so this delegates to
    /// [`Self::interpolate`].
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn extrapolate(&self, t: f64) -> Result<f64, InterpolationError> {
        self.interpolate(t)
    }

    /// Value, first derivative, and second derivative at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn differentiate(&self, t: f64) -> Result<(f64, f64, f64), InterpolationError> {
        Ok(self.spline()?.differentiate(t))
    }

    /// Definite integral from the domain's lower bound up to `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn integrate(&self, t: f64) -> Result<f64, InterpolationError> {
        Ok(self.spline()?.integrate(t))
    }

    /// Always false for the spline family.
    pub fn supports_error_estimation(&self) -> bool {
        false
    }
}

/// Fits a cubic spline to raw `(t, x)` arrays.
///
/// The arrays are stably sorted by `t` first — this path also accepts raw
/// unsorted input directly, bypassing the sample container.
///
/// # Errors
/// - [`InterpolationError::UnequalLength`] if the arrays differ in length.
/// - [`InterpolationError::InsufficientPoints`] with fewer than 2 points.
pub fn fit(
    ts: &[f64],
    xs: &[f64],
    left: BoundaryCondition,
    right: BoundaryCondition,
) -> Result<HermiteSpline, InterpolationError> {
    if ts.len() != xs.len() {
        return Err(InterpolationError::UnequalLength {
            t_len: ts.len(),
            x_len: xs.len(),
        });
    }
    let n = ts.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n, need: 2 });
    }

    let (ts, xs) = sort_paired(ts, xs);

    // a parabola is not well-defined through 2 points; fall back to natural
    // ends
    let (left, right) = if n == 2
        && left == BoundaryCondition::ParabolicallyTerminated
        && right == BoundaryCondition::ParabolicallyTerminated
    {
        (BoundaryCondition::Natural, BoundaryCondition::Natural)
    } else {
        (left, right)
    };

    let mut sub = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut sup = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    let h0 = ts[1] - ts[0];
    let slope0 = (xs[1] - xs[0]) / h0;
    match left {
        BoundaryCondition::ParabolicallyTerminated => {
            diag[0] = 1.0;
            sup[0] = 1.0;
            rhs[0] = 2.0 * slope0;
        }
        BoundaryCondition::FirstDerivative(v) => {
            diag[0] = 1.0;
            rhs[0] = v;
        }
        BoundaryCondition::SecondDerivative(v) => {
            diag[0] = 2.0;
            sup[0] = 1.0;
            rhs[0] = 3.0 * slope0 - 0.5 * v * h0;
        }
        BoundaryCondition::Natural => {
            diag[0] = 2.0;
            sup[0] = 1.0;
            rhs[0] = 3.0 * slope0;
        }
    }

    for i in 1..n - 1 {
        let h_prev = ts[i] - ts[i - 1];
        let h_next = ts[i + 1] - ts[i];
        let slope_prev = (xs[i] - xs[i - 1]) / h_prev;
        let slope_next = (xs[i + 1] - xs[i]) / h_next;
        sub[i] = h_next;
        diag[i] = 2.0 * (h_prev + h_next);
        sup[i] = h_prev;
        rhs[i] = 3.0 * (h_next * slope_prev + h_prev * slope_next);
    }

    let h_last = ts[n - 1] - ts[n - 2];
    let slope_last = (xs[n - 1] - xs[n - 2]) / h_last;
    match right {
        BoundaryCondition::ParabolicallyTerminated => {
            sub[n - 1] = 1.0;
            diag[n - 1] = 1.0;
            rhs[n - 1] = 2.0 * slope_last;
        }
        BoundaryCondition::FirstDerivative(v) => {
            diag[n - 1] = 1.0;
            rhs[n - 1] = v;
        }
        BoundaryCondition::SecondDerivative(v) => {
            sub[n - 1] = 1.0;
            diag[n - 1] = 2.0;
            rhs[n - 1] = 3.0 * slope_last + 0.5 * v * h_last;
        }
        BoundaryCondition::Natural => {
            sub[n - 1] = 1.0;
            diag[n - 1] = 2.0;
            rhs[n - 1] = 3.0 * slope_last;
        }
    }

    let derivatives = solve_tridiagonal(sub, diag, sup, rhs);
    HermiteSpline::new(ts, xs, derivatives)
}
