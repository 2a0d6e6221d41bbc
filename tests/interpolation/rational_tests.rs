use brook::interpolation::errors::InterpolationError;
use brook::interpolation::rational::RationalInterpolator;
use brook::interpolation::samples::SampleSet;

type BrookResult = Result<(), InterpolationError>;

fn quadratic_samples() -> Result<SampleSet, InterpolationError> {
    SampleSet::from_arrays(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])
}

#[test]
fn evaluation_before_prepare_fails() {
    let algorithm = RationalInterpolator::new();
    assert!(matches!(
        algorithm.interpolate(1.0).unwrap_err(),
        InterpolationError::NotPrepared
    ));
}

#[test]
fn prepare_rejects_empty_set() {
    let mut algorithm = RationalInterpolator::new();
    let empty = SampleSet::from_arrays(&[], &[]).unwrap();
    assert!(matches!(
        algorithm.prepare(&empty).unwrap_err(),
        InterpolationError::EmptyInput
    ));
}

#[test]
fn stored_samples_reproduced_exactly() -> BrookResult {
    let samples = quadratic_samples()?;
    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;

    for i in 0..samples.len() {
        let (value, error) = algorithm.interpolate_with_error(samples.t(i)?)?;
        assert_eq!(value, samples.x(i)?, "exact hit at index {i}");
        assert_eq!(error, 0.0);
    }
    Ok(())
}

#[test]
fn quadratic_near_midpoint() -> BrookResult {
    // quadratic data is degenerate for the intermediate odd-level rational
    // interpolants, so the tableau lands near, not on, the polynomial value
    let samples = quadratic_samples()?;
    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;

    let (value, error) = algorithm.interpolate_with_error(1.5)?;
    assert!((value - 2.25).abs() < 0.15, "got {value}");
    assert!(error.abs() < 0.5);
    Ok(())
}

#[test]
fn reciprocal_reproduced_to_machine_precision() -> BrookResult {
    // 1/t lies inside the diagonal rational family, so interpolation is
    // essentially exact between the knots
    let ts = [1.0, 2.0, 3.0, 4.0, 5.0];
    let xs: Vec<f64> = ts.iter().map(|&t| 1.0 / t).collect();
    let samples = SampleSet::from_arrays(&ts, &xs)?;

    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;

    let (value, error) = algorithm.interpolate_with_error(2.5)?;
    assert!((value - 0.4).abs() < 1e-12, "got {value}");
    assert!(error.abs() < 1e-12);
    Ok(())
}

#[test]
fn extrapolates_beyond_domain() -> BrookResult {
    let ts = [1.0, 2.0, 3.0, 4.0, 5.0];
    let xs: Vec<f64> = ts.iter().map(|&t| 1.0 / t).collect();
    let samples = SampleSet::from_arrays(&ts, &xs)?;

    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;

    let value = algorithm.extrapolate(6.0)?;
    assert!((value - 1.0 / 6.0).abs() < 1e-10, "got {value}");
    Ok(())
}

#[test]
fn order_truncation() -> BrookResult {
    let samples = quadratic_samples()?;

    let mut algorithm = RationalInterpolator::with_maximum_order(2)?;
    algorithm.prepare(&samples)?;
    assert_eq!(algorithm.effective_order(), 2);

    // rebounding after prepare recomputes in place, clamped to the count
    algorithm.set_maximum_order(3)?;
    assert_eq!(algorithm.effective_order(), 3);
    algorithm.set_maximum_order(10)?;
    assert_eq!(algorithm.effective_order(), 4);
    Ok(())
}

#[test]
fn zero_order_rejected() {
    assert!(matches!(
        RationalInterpolator::with_maximum_order(0).unwrap_err(),
        InterpolationError::InvalidOrder
    ));

    let mut algorithm = RationalInterpolator::new();
    assert!(matches!(
        algorithm.set_maximum_order(0).unwrap_err(),
        InterpolationError::InvalidOrder
    ));
}

#[test]
fn single_sample_is_constant() -> BrookResult {
    let samples = SampleSet::from_arrays(&[2.0], &[7.0])?;
    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;
    assert_eq!(algorithm.effective_order(), 1);

    let (value, error) = algorithm.interpolate_with_error(100.0)?;
    assert_eq!(value, 7.0);
    assert_eq!(error, 0.0);
    Ok(())
}

#[test]
fn pole_yields_positive_infinity() -> BrookResult {
    // engineered so the level-1 denominator vanishes exactly at t = 0:
    // the tableau needs (t0 - t) * d0 / (t1 - t) == x1, with d0 = x0 + 1e-15
    let x1 = -(1.0_f64 + 1e-15);
    let samples = SampleSet::from_arrays(&[-1.0, 1.0], &[1.0, x1])?;

    let mut algorithm = RationalInterpolator::new();
    algorithm.prepare(&samples)?;

    let (value, error) = algorithm.interpolate_with_error(0.0)?;
    assert!(value.is_infinite() && value.is_sign_positive(), "got {value}");
    assert_eq!(error, 0.0);
    assert!(!value.is_nan());
    Ok(())
}

#[test]
fn reports_error_estimation_capability() {
    assert!(RationalInterpolator::new().supports_error_estimation());
}
