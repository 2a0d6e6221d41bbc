//! Spline endpoint behavior.

/// Boundary condition applied independently at each end of a cubic spline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundaryCondition {
    /// The outermost segment degenerates to a parabola.
    ParabolicallyTerminated,
    /// The slope at the endpoint is pinned to the given value.
    FirstDerivative(f64),
    /// The curvature at the endpoint is pinned to the given value.
    SecondDerivative(f64),
    /// Zero curvature at the endpoint; shorthand for `SecondDerivative(0.0)`.
    Natural,
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        Self::Natural
    }
}
