//! Ordered sample container.
//!
//! [`SampleSet`] stores `(t, x)` pairs in two parallel vectors kept sorted
//! ascending by `t` across every mutation. Algorithms locate a query's
//! neighborhood with [`SampleSet::locate`] and read samples through
//! bounds-checked accessors.
//!
//! Mutations bump a version counter before returning; the facade compares
//! versions to decide whether its prepared algorithm state is stale.

use crate::interpolation::errors::InterpolationError;
use crate::sorting::sort_paired;

/// Ordered collection of `(t, x)` samples, sorted ascending by `t`.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    ts: Vec<f64>,
    xs: Vec<f64>,
    version: u64,
}

/// Index of the last element of `ts` that is `<= t`.
///
/// Returns 0 when `t` precedes all elements and `ts.len() - 1` when it
/// follows all of them. Equal keys resolve to the last equal index.
pub(crate) fn locate(ts: &[f64], t: f64) -> usize {
    let pos = ts.partition_point(|&ti| ti <= t);
    pos.saturating_sub(1)
}

fn non_finite_idx(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

impl SampleSet {
    /// Builds a sample set from parallel `t`/`x` arrays.
    ///
    /// The pairs are stably sorted by `t`, carrying `x` along, so the input
    /// need not be ordered. Duplicate `t` values are kept in their original
    /// relative order.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if the arrays differ in length.
    /// - [`InterpolationError::NonFinite`] if any value is NaN or infinite.
    pub fn from_arrays(ts: &[f64], xs: &[f64]) -> Result<Self, InterpolationError> {
        if ts.len() != xs.len() {
            return Err(InterpolationError::UnequalLength {
                t_len: ts.len(),
                x_len: xs.len(),
            });
        }
        if let Some(index) = non_finite_idx(ts).or_else(|| non_finite_idx(xs)) {
            return Err(InterpolationError::NonFinite { index });
        }

        let (ts, xs) = sort_paired(ts, xs);
        Ok(Self { ts, xs, version: 0 })
    }

    /// Builds a sample set from an unordered `(t, x)` pair source.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFinite`] if any value is NaN or infinite.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (ts, xs): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::from_arrays(&ts, &xs)
    }

    /// Index of the sample with the largest `t` less than or equal to the
    /// query, via binary search.
    ///
    /// Returns 0 for queries before all samples and `len() - 1` for queries
    /// after all samples.
    pub fn locate(&self, t: f64) -> usize {
        locate(&self.ts, t)
    }

    /// The `t` value at `index`.
    ///
    /// # Errors
    /// - [`InterpolationError::IndexOutOfRange`] outside `[0, len())`.
    pub fn t(&self, index: usize) -> Result<f64, InterpolationError> {
        self.ts
            .get(index)
            .copied()
            .ok_or(InterpolationError::IndexOutOfRange {
                index,
                len: self.ts.len(),
            })
    }

    /// The `x` value at `index`.
    ///
    /// # Errors
    /// - [`InterpolationError::IndexOutOfRange`] outside `[0, len())`.
    pub fn x(&self, index: usize) -> Result<f64, InterpolationError> {
        self.xs
            .get(index)
            .copied()
            .ok_or(InterpolationError::IndexOutOfRange {
                index,
                len: self.xs.len(),
            })
    }

    /// Smallest stored `t`, or `None` for an empty set.
    pub fn min_t(&self) -> Option<f64> {
        self.ts.first().copied()
    }

    /// Largest stored `t`, or `None` for an empty set.
    pub fn max_t(&self) -> Option<f64> {
        self.ts.last().copied()
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.ts.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.ts.is_empty()
    }

    /// Mutation counter, bumped by every structural change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sorted view of the stored `t` values.
    pub fn ts(&self) -> &[f64] {
        &self.ts
    }

    /// Stored `x` values, ordered to match [`SampleSet::ts`].
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Inserts a sample, or overwrites `x` when an exactly equal `t` is
    /// already stored.
    ///
    /// The sorted order is preserved by inserting in place, and the version
    /// counter is bumped before this returns.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteSample`] if either value is NaN or
    ///   infinite.
    pub fn insert(&mut self, t: f64, x: f64) -> Result<(), InterpolationError> {
        if !t.is_finite() || !x.is_finite() {
            return Err(InterpolationError::NonFiniteSample { t, x });
        }

        let pos = self.ts.partition_point(|&ti| ti <= t);
        if pos > 0 && self.ts[pos - 1] == t {
            self.xs[pos - 1] = x;
        } else {
            self.ts.insert(pos, t);
            self.xs.insert(pos, x);
        }
        self.version += 1;
        Ok(())
    }
}
