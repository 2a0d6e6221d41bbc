//! Algorithm selection and dispatch.
//!
//! [`Method`] enumerates the supported interpolation algorithms and maps a
//! tag to a default-configured instance. [`Interpolant`] is the common
//! capability surface over the concrete algorithms: one tagged enum with
//! match dispatch rather than a trait-object hierarchy, since the two
//! implementations share no code.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::rational::RationalInterpolator;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::CubicSplineInterpolator;

/// Interpolation algorithm variants.
/// - [`Method::Rational`] Bulirsch–Stoer rational interpolation
/// - [`Method::CubicSpline`] natural cubic spline interpolation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Rational,
    CubicSpline,
}

impl Method {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Method::Rational => "rational",
            Method::CubicSpline => "cubic spline",
        }
    }

    /// A default-configured instance of the selected algorithm: unbounded
    /// order for rational, natural boundaries for the cubic spline.
    pub fn instantiate(self) -> Interpolant {
        match self {
            Method::Rational => Interpolant::Rational(RationalInterpolator::new()),
            Method::CubicSpline => {
                Interpolant::CubicSpline(CubicSplineInterpolator::natural())
            }
        }
    }
}

/// A concrete interpolation algorithm behind the common capability surface.
#[derive(Debug, Clone)]
pub enum Interpolant {
    Rational(RationalInterpolator),
    CubicSpline(CubicSplineInterpolator),
}

impl Interpolant {
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Interpolant::Rational(_) => Method::Rational.algorithm_name(),
            Interpolant::CubicSpline(_) => Method::CubicSpline.algorithm_name(),
        }
    }

    /// Precomputes whatever per-sample state the algorithm needs. Valid
    /// until the source sample set next changes.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `samples` holds no points.
    /// - [`InterpolationError::InsufficientPoints`] below the algorithm's
    ///   minimum (2 for the cubic spline).
    pub fn prepare(&mut self, samples: &SampleSet) -> Result<(), InterpolationError> {
        match self {
            Interpolant::Rational(algorithm) => algorithm.prepare(samples),
            Interpolant::CubicSpline(algorithm) => algorithm.prepare(samples),
        }
    }

    /// Interpolated value at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate(&self, t: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolant::Rational(algorithm) => algorithm.interpolate(t),
            Interpolant::CubicSpline(algorithm) => algorithm.interpolate(t),
        }
    }

    /// Interpolated value plus an error estimate; the estimate is zero when
    /// [`Interpolant::supports_error_estimation`] is false.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate_with_error(&self, t: f64) -> Result<(f64, f64), InterpolationError> {
        match self {
            Interpolant::Rational(algorithm) => algorithm.interpolate_with_error(t),
            Interpolant::CubicSpline(algorithm) => algorithm.interpolate_with_error(t),
        }
    }

    /// Evaluates outside the sampled domain. Both shipped algorithms
    /// delegate to interpolation.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn extrapolate(&self, t: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolant::Rational(algorithm) => algorithm.extrapolate(t),
            Interpolant::CubicSpline(algorithm) => algorithm.extrapolate(t),
        }
    }

    /// Value, first derivative, and second derivative at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::Unsupported`] for the rational algorithm.
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn differentiate(&self, t: f64) -> Result<(f64, f64, f64), InterpolationError> {
        match self {
            Interpolant::Rational(_) => Err(InterpolationError::Unsupported {
                algorithm: self.algorithm_name(),
                operation: "differentiation",
            }),
            Interpolant::CubicSpline(algorithm) => algorithm.differentiate(t),
        }
    }

    /// Definite integral from the domain's lower bound up to `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::Unsupported`] for the rational algorithm.
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn integrate(&self, t: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolant::Rational(_) => Err(InterpolationError::Unsupported {
                algorithm: self.algorithm_name(),
                operation: "integration",
            }),
            Interpolant::CubicSpline(algorithm) => algorithm.integrate(t),
        }
    }

    pub fn supports_error_estimation(&self) -> bool {
        match self {
            Interpolant::Rational(algorithm) => algorithm.supports_error_estimation(),
            Interpolant::CubicSpline(algorithm) => algorithm.supports_error_estimation(),
        }
    }

    pub fn supports_differentiation(&self) -> bool {
        matches!(self, Interpolant::CubicSpline(_))
    }

    pub fn supports_integration(&self) -> bool {
        matches!(self, Interpolant::CubicSpline(_))
    }
}
