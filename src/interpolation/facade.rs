//! Interpolation facade.
//!
//! [`Interpolation`] pairs one [`SampleSet`] with one [`Interpolant`]. The
//! algorithm's prepared state is derived data: any structural change to the
//! samples invalidates it. The facade tracks this with the sample set's
//! version counter — it records the version it last prepared against and
//! lazily re-prepares on the next evaluation whenever the versions differ,
//! so a stale interpolant is never consulted.

use crate::interpolation::algorithms::{Interpolant, Method};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

/// One sample set plus one interpolation algorithm, with lazy
/// (re)preparation and domain-based dispatch between interpolation and
/// extrapolation.
#[derive(Debug, Clone)]
pub struct Interpolation {
    samples: SampleSet,
    algorithm: Interpolant,
    prepared_version: Option<u64>,
}

impl Interpolation {
    /// Wraps `samples` with a default-configured algorithm for `method`.
    /// Starts unprepared; the first evaluation prepares.
    pub fn new(samples: SampleSet, method: Method) -> Self {
        Self::with_algorithm(samples, method.instantiate())
    }

    /// Wraps `samples` with a pre-configured algorithm, e.g. a cubic spline
    /// with custom boundary conditions or an order-bounded rational
    /// interpolator.
    pub fn with_algorithm(samples: SampleSet, algorithm: Interpolant) -> Self {
        Self {
            samples,
            algorithm,
            prepared_version: None,
        }
    }

    /// Builds the sample set from raw parallel arrays and wraps it.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if the arrays differ in length.
    /// - [`InterpolationError::NonFinite`] if any value is NaN or infinite.
    pub fn from_arrays(ts: &[f64], xs: &[f64], method: Method) -> Result<Self, InterpolationError> {
        Ok(Self::new(SampleSet::from_arrays(ts, xs)?, method))
    }

    /// The observed sample set.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Mutable access to the sample set. Mutations bump its version, which
    /// marks the prepared state dirty for the next evaluation.
    pub fn samples_mut(&mut self) -> &mut SampleSet {
        &mut self.samples
    }

    /// Inserts or overwrites a sample; the prepared state becomes dirty.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteSample`] if either value is NaN or
    ///   infinite.
    pub fn insert(&mut self, t: f64, x: f64) -> Result<(), InterpolationError> {
        self.samples.insert(t, x)
    }

    /// The algorithm behind the facade.
    pub fn algorithm(&self) -> &Interpolant {
        &self.algorithm
    }

    fn ensure_prepared(&mut self) -> Result<(), InterpolationError> {
        let current = self.samples.version();
        if self.prepared_version != Some(current) {
            self.algorithm.prepare(&self.samples)?;
            self.prepared_version = Some(current);
        }
        Ok(())
    }

    /// Whether `t` lies inside the sampled domain. False for an empty set.
    fn in_domain(&self, t: f64) -> bool {
        match (self.samples.min_t(), self.samples.max_t()) {
            (Some(min), Some(max)) => min <= t && t <= max,
            _ => false,
        }
    }

    /// Evaluates at `t`: interpolation inside `[min_t, max_t]`,
    /// extrapolation outside. Prepares the algorithm first when the sample
    /// set changed since the last evaluation.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] /
    ///   [`InterpolationError::InsufficientPoints`] from preparation.
    pub fn evaluate(&mut self, t: f64) -> Result<f64, InterpolationError> {
        self.ensure_prepared()?;
        if self.in_domain(t) {
            self.algorithm.interpolate(t)
        } else {
            self.algorithm.extrapolate(t)
        }
    }

    /// Evaluates at `t` with an error estimate.
    ///
    /// This always uses interpolation semantics, even for `t` outside the
    /// sampled domain — it never dispatches to `extrapolate`. Callers
    /// needing both extrapolation and error estimation must combine the
    /// algorithm primitives themselves. Inherited behavior, kept as is.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] /
    ///   [`InterpolationError::InsufficientPoints`] from preparation.
    pub fn evaluate_with_error(&mut self, t: f64) -> Result<(f64, f64), InterpolationError> {
        self.ensure_prepared()?;
        self.algorithm.interpolate_with_error(t)
    }

    /// Value, first derivative, and second derivative at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::Unsupported`] when the algorithm does not
    ///   differentiate; preparation errors as for [`Self::evaluate`].
    pub fn differentiate(&mut self, t: f64) -> Result<(f64, f64, f64), InterpolationError> {
        self.ensure_prepared()?;
        self.algorithm.differentiate(t)
    }

    /// Definite integral from the domain's lower bound up to `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::Unsupported`] when the algorithm does not
    ///   integrate; preparation errors as for [`Self::evaluate`].
    pub fn integrate(&mut self, t: f64) -> Result<f64, InterpolationError> {
        self.ensure_prepared()?;
        self.algorithm.integrate(t)
    }

    pub fn supports_error_estimation(&self) -> bool {
        self.algorithm.supports_error_estimation()
    }

    pub fn supports_differentiation(&self) -> bool {
        self.algorithm.supports_differentiation()
    }

    pub fn supports_integration(&self) -> bool {
        self.algorithm.supports_integration()
    }
}
