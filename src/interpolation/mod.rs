pub mod algorithms;
pub mod errors;
pub mod facade;
pub mod rational;
pub mod samples;
pub mod spline;

pub use algorithms::{Interpolant, Method};
pub use errors::InterpolationError;
pub use facade::Interpolation;
pub use rational::RationalInterpolator;
pub use samples::SampleSet;
pub use spline::{BoundaryCondition, CubicSplineInterpolator, HermiteSpline};
