//! One-dimensional function approximation.
//!
//! Given a finite set of samples `(t, x(t))`, `brook` produces a continuous
//! stand-in usable for interpolation inside the sampled domain, extrapolation
//! outside it, and, for the cubic spline, differentiation, definite
//! integration, and error estimation.
//!
//! Two algorithm families are provided:
//! - [`interpolation::RationalInterpolator`] — Bulirsch–Stoer diagonal
//!   rational interpolation, able to represent poles, with a built-in error
//!   estimate and a configurable order bound.
//! - [`interpolation::CubicSplineInterpolator`] — a cubic spline through all
//!   knots with configurable endpoint behavior, built by solving a
//!   tridiagonal system for the per-knot first derivatives.
//!
//! The usual entry point is the [`interpolation::Interpolation`] facade,
//! which owns the sample set, keeps the prepared algorithm state consistent
//! across mutations, and dispatches between interpolation and extrapolation:
//!
//! ```
//! use brook::interpolation::{Interpolation, Method};
//!
//! // samples of x(t) = 1/t, which the rational family represents exactly
//! let t = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let x = [1.0, 0.5, 1.0 / 3.0, 0.25, 0.2];
//! let mut f = Interpolation::from_arrays(&t, &x, Method::Rational)?;
//! assert!((f.evaluate(2.5)? - 0.4).abs() < 1e-12);
//! # Ok::<(), brook::interpolation::InterpolationError>(())
//! ```

pub mod interpolation;
pub mod sorting;
