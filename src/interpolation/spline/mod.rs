pub mod boundary;
pub mod cubic;
pub mod helpers;
pub mod hermite;

pub use boundary::BoundaryCondition;
pub use cubic::CubicSplineInterpolator;
pub use hermite::HermiteSpline;
