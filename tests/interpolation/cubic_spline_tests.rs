use brook::interpolation::errors::InterpolationError;
use brook::interpolation::samples::SampleSet;
use brook::interpolation::spline::cubic::{fit, CubicSplineInterpolator};
use brook::interpolation::spline::BoundaryCondition;

type BrookResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn quadratic_samples() -> Result<SampleSet, InterpolationError> {
    SampleSet::from_arrays(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])
}

#[test]
fn evaluation_before_prepare_fails() {
    let spline = CubicSplineInterpolator::natural();
    assert!(matches!(
        spline.interpolate(1.0).unwrap_err(),
        InterpolationError::NotPrepared
    ));
    assert!(matches!(
        spline.differentiate(1.0).unwrap_err(),
        InterpolationError::NotPrepared
    ));
    assert!(matches!(
        spline.integrate(1.0).unwrap_err(),
        InterpolationError::NotPrepared
    ));
}

#[test]
fn too_few_points_rejected() -> BrookResult {
    let mut spline = CubicSplineInterpolator::natural();

    let empty = SampleSet::from_arrays(&[], &[])?;
    assert!(matches!(
        spline.prepare(&empty).unwrap_err(),
        InterpolationError::EmptyInput
    ));

    let single = SampleSet::from_arrays(&[1.0], &[1.0])?;
    assert!(matches!(
        spline.prepare(&single).unwrap_err(),
        InterpolationError::InsufficientPoints { got: 1, need: 2 }
    ));
    Ok(())
}

#[test]
fn fit_rejects_unequal_lengths() {
    let err = fit(
        &[0.0, 1.0],
        &[0.0, 1.0, 2.0],
        BoundaryCondition::Natural,
        BoundaryCondition::Natural,
    )
    .unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { t_len: 2, x_len: 3 }));
}

#[test]
fn passes_through_knots() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::natural();
    spline.prepare(&samples)?;

    for i in 0..samples.len() {
        let value = spline.interpolate(samples.t(i)?)?;
        assert!(approx_eq(value, samples.x(i)?), "knot {i}: got {value}");
    }
    Ok(())
}

#[test]
fn natural_boundaries_near_quadratic_midpoint() -> BrookResult {
    // zero end curvature distorts the pure quadratic slightly; the exact
    // natural-spline value here is 2.2
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::natural();
    spline.prepare(&samples)?;

    let value = spline.interpolate(1.5)?;
    assert!((value - 2.25).abs() < 0.06, "got {value}");
    assert!(approx_eq(value, 2.2));
    Ok(())
}

#[test]
fn natural_boundaries_have_zero_end_curvature() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::natural();
    spline.prepare(&samples)?;

    let (_, _, second_left) = spline.differentiate(0.0)?;
    let (_, _, second_right) = spline.differentiate(3.0)?;
    assert!(approx_eq(second_left, 0.0));
    assert!(approx_eq(second_right, 0.0));
    Ok(())
}

#[test]
fn parabolic_termination_reproduces_quadratic() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::with_boundaries(
        BoundaryCondition::ParabolicallyTerminated,
        BoundaryCondition::ParabolicallyTerminated,
    );
    spline.prepare(&samples)?;

    assert!(approx_eq(spline.interpolate(1.5)?, 2.25));
    // boundary cubic extends beyond the domain
    assert!(approx_eq(spline.extrapolate(4.0)?, 16.0));
    assert!(approx_eq(spline.extrapolate(-1.0)?, 1.0));
    Ok(())
}

#[test]
fn first_derivative_boundaries_reproduce_quadratic() -> BrookResult {
    // x = t^2 has slopes 0 and 6 at the ends; pinning them makes the spline
    // exact, so value, derivatives, and integrals are all closed-form
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::with_boundaries(
        BoundaryCondition::FirstDerivative(0.0),
        BoundaryCondition::FirstDerivative(6.0),
    );
    spline.prepare(&samples)?;

    let (value, first, second) = spline.differentiate(1.5)?;
    assert!(approx_eq(value, 2.25));
    assert!(approx_eq(first, 3.0));
    assert!(approx_eq(second, 2.0));

    assert!(approx_eq(spline.integrate(3.0)?, 9.0));
    assert!(approx_eq(spline.integrate(1.5)?, 1.125));
    // integration below the domain start is a negative partial interval
    assert!(approx_eq(spline.integrate(-1.0)?, -1.0 / 3.0));
    Ok(())
}

#[test]
fn second_derivative_boundary_honored() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::with_boundaries(
        BoundaryCondition::SecondDerivative(5.0),
        BoundaryCondition::Natural,
    );
    spline.prepare(&samples)?;

    let (_, _, second) = spline.differentiate(0.0)?;
    assert!(approx_eq(second, 5.0));
    Ok(())
}

#[test]
fn derivatives_continuous_at_interior_knots() -> BrookResult {
    let ts: [f64; 6] = [0.0, 0.7, 1.3, 2.0, 3.1, 4.0];
    let xs: Vec<f64> = ts.iter().map(|&t| t.sin()).collect();
    let samples = SampleSet::from_arrays(&ts, &xs)?;

    let mut spline = CubicSplineInterpolator::natural();
    spline.prepare(&samples)?;

    for &knot in &ts[1..ts.len() - 1] {
        let (_, first_left, second_left) = spline.differentiate(knot - 1e-9)?;
        let (_, first_right, second_right) = spline.differentiate(knot + 1e-9)?;
        assert!(
            (first_left - first_right).abs() < 1e-6,
            "C1 break at {knot}"
        );
        assert!(
            (second_left - second_right).abs() < 1e-6,
            "C2 break at {knot}"
        );
    }
    Ok(())
}

#[test]
fn two_points_with_parabolic_ends_fall_back_to_line() -> BrookResult {
    let samples = SampleSet::from_arrays(&[2.0, 5.0], &[7.0, 1.0])?;
    let mut spline = CubicSplineInterpolator::with_boundaries(
        BoundaryCondition::ParabolicallyTerminated,
        BoundaryCondition::ParabolicallyTerminated,
    );
    spline.prepare(&samples)?;

    assert!(approx_eq(spline.interpolate(3.0)?, 5.0));
    assert!(approx_eq(spline.interpolate(4.0)?, 3.0));
    Ok(())
}

#[test]
fn fit_sorts_raw_arrays() -> BrookResult {
    // same data, shuffled; the raw-array path sorts before assembling
    let sorted = fit(
        &[0.0, 1.0, 2.0, 3.0],
        &[0.0, 1.0, 4.0, 9.0],
        BoundaryCondition::Natural,
        BoundaryCondition::Natural,
    )?;
    let shuffled = fit(
        &[2.0, 0.0, 3.0, 1.0],
        &[4.0, 0.0, 9.0, 1.0],
        BoundaryCondition::Natural,
        BoundaryCondition::Natural,
    )?;

    assert_eq!(shuffled.ts(), &[0.0, 1.0, 2.0, 3.0]);
    for i in 0..=30 {
        let t = 3.0 * f64::from(i) / 30.0;
        assert!(approx_eq(sorted.eval(t), shuffled.eval(t)), "at t={t}");
    }
    Ok(())
}

#[test]
fn no_error_estimation_capability() {
    let spline = CubicSplineInterpolator::natural();
    assert!(!spline.supports_error_estimation());
}

#[test]
fn interpolate_with_error_reports_zero() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut spline = CubicSplineInterpolator::natural();
    spline.prepare(&samples)?;

    let (value, error) = spline.interpolate_with_error(1.5)?;
    assert!(approx_eq(value, 2.2));
    assert_eq!(error, 0.0);
    Ok(())
}
