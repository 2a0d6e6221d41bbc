//! Bulirsch–Stoer rational interpolation.
//!
//! Approximates `x(t)` by a diagonal rational function passing exactly
//! through a local window of samples around the query point, using the
//! rational analogue of Neville's tableau recurrence. Rational functions
//! can represent poles, which also makes this family well suited to
//! extrapolation beyond the sampled domain.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::{locate, SampleSet};

/// Seed offset added to the `d` tableau column, preventing a rare exact
/// zero-over-zero when a sample value coincides with a tableau entry.
const TINY_OFFSET: f64 = 1e-15;

/// Bulirsch–Stoer rational interpolator.
///
/// Snapshots the sample set at [`RationalInterpolator::prepare`] and
/// evaluates lazily per query over a window of up to
/// `min(maximum_order, sample count)` consecutive samples nearest the query
/// point.
#[derive(Debug, Clone)]
pub struct RationalInterpolator {
    ts: Vec<f64>,
    xs: Vec<f64>,
    maximum_order: usize,
    effective_order: usize,
}

impl Default for RationalInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalInterpolator {
    /// An interpolator with no order bound: every prepared sample
    /// participates in each evaluation.
    pub fn new() -> Self {
        Self {
            ts: Vec::new(),
            xs: Vec::new(),
            maximum_order: usize::MAX,
            effective_order: 0,
        }
    }

    /// An interpolator using at most `order` samples per evaluation.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidOrder`] if `order` is 0.
    pub fn with_maximum_order(order: usize) -> Result<Self, InterpolationError> {
        if order == 0 {
            return Err(InterpolationError::InvalidOrder);
        }
        Ok(Self {
            maximum_order: order,
            ..Self::new()
        })
    }

    /// Rebounds the order. After a successful [`RationalInterpolator::prepare`]
    /// the effective order is recomputed in place; no re-prepare is needed.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidOrder`] if `order` is 0.
    pub fn set_maximum_order(&mut self, order: usize) -> Result<(), InterpolationError> {
        if order == 0 {
            return Err(InterpolationError::InvalidOrder);
        }
        self.maximum_order = order;
        if !self.ts.is_empty() {
            self.effective_order = order.min(self.ts.len());
        }
        Ok(())
    }

    /// Number of samples actually used per evaluation:
    /// `min(maximum_order, sample count)`. Zero before preparation.
    pub fn effective_order(&self) -> usize {
        self.effective_order
    }

    /// Snapshots `samples` and fixes the effective order.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `samples` holds no points.
    pub fn prepare(&mut self, samples: &SampleSet) -> Result<(), InterpolationError> {
        if samples.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        self.ts = samples.ts().to_vec();
        self.xs = samples.xs().to_vec();
        self.effective_order = self.maximum_order.min(self.ts.len());
        Ok(())
    }

    /// Interpolated value at `t`.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate(&self, t: f64) -> Result<f64, InterpolationError> {
        self.interpolate_with_error(t).map(|(value, _)| value)
    }

    /// Interpolated value at `t` plus an error estimate.
    ///
    /// The estimate is the magnitude of the final tableau correction — an
    /// indication, not a formal bound. A query that coincides exactly with a
    /// stored `t` returns the stored `x` with zero error and no numerical
    /// work.
    ///
    /// When an internal denominator vanishes the rational function has
    /// (numerically) hit a pole; `(f64::INFINITY, 0.0)` is returned rather
    /// than NaN. The correct sign of the infinity at a pole is ambiguous,
    /// and positive is returned as a known limitation.
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn interpolate_with_error(&self, t: f64) -> Result<(f64, f64), InterpolationError> {
        if self.ts.is_empty() {
            return Err(InterpolationError::NotPrepared);
        }

        let n = self.ts.len();
        let order = self.effective_order;

        // center the window on whichever neighbor of the located index is
        // numerically closer to the query, clipped to stay in bounds
        let mut near = locate(&self.ts, t);
        if near + 1 < n && (t - self.ts[near]).abs() > (self.ts[near + 1] - t).abs() {
            near += 1;
        }
        let offset = near.saturating_sub((order - 1) / 2).min(n - order);
        let ts = &self.ts[offset..offset + order];
        let xs = &self.xs[offset..offset + order];

        // seed the tableau columns, tracking the nearest window member; an
        // exact hit short-circuits to the stored sample
        let mut c = xs.to_vec();
        let mut d = vec![0.0; order];
        let mut ns: isize = 0;
        let mut hh = (t - ts[0]).abs();
        for i in 0..order {
            let h = (t - ts[i]).abs();
            if h == 0.0 {
                return Ok((xs[i], 0.0));
            }
            if h < hh {
                ns = i as isize;
                hh = h;
            }
            d[i] = c[i] + TINY_OFFSET;
        }

        let mut value = xs[ns as usize];
        ns -= 1;
        let mut error = 0.0;

        for level in 1..order {
            for i in 0..order - level {
                let w = c[i + 1] - d[i];
                let hp = ts[i + level] - t;
                let ho = (ts[i] - t) * d[i] / hp;
                let mut den = ho - c[i + 1];
                if den == 0.0 {
                    return Ok((f64::INFINITY, 0.0));
                }
                den = w / den;
                d[i] = c[i + 1] * den;
                c[i] = ho * den;
            }

            // walk the tableau along the diagonal staying closest to the
            // query point
            error = if 2 * (ns + 1) < (order - level) as isize {
                c[(ns + 1) as usize]
            } else {
                let correction = d[ns as usize];
                ns -= 1;
                correction
            };
            value += error;
        }

        Ok((value, error))
    }

    /// Evaluates outside the sampled domain.
    ///
    /// Rational interpolation extrapolates by construction, so this
    /// delegates to [`RationalInterpolator::interpolate`].
    ///
    /// # Errors
    /// - [`InterpolationError::NotPrepared`] before a successful prepare.
    pub fn extrapolate(&self, t: f64) -> Result<f64, InterpolationError> {
        self.interpolate(t)
    }

    /// Always true: every evaluation carries a tableau-based estimate.
    pub fn supports_error_estimation(&self) -> bool {
        true
    }
}
