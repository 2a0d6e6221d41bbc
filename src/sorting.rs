//! Sorting helpers for parallel key/payload arrays.
//!
//! Raw `(t, x)` arrays pass through [`sort_paired`] before entering the
//! sample container or the spline builder: a stable sort by key that carries
//! the payload array along, so samples sharing a key keep their original
//! relative order.

/// Stable sort of `keys` ascending, carrying `payload` along.
///
/// Uses the IEEE total order, so the result is well-defined even for inputs
/// that slipped past finiteness validation.
pub fn sort_paired(keys: &[f64], payload: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut pairs: Vec<(f64, f64)> = keys
        .iter()
        .copied()
        .zip(payload.iter().copied())
        .collect();

    // slice::sort_by is stable, preserving payload order on key ties
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    pairs.into_iter().unzip()
}
