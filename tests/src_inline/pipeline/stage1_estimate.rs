use super::*;

const TOL: f64 = 1e-9;

fn assert_simplex(f: &StructureFractions) {
    for v in f.values() {
        assert!(v >= 0.0, "negative fraction in {f:?}");
    }
    assert!((f.total() - 1.0).abs() < TOL, "sum {} in {f:?}", f.total());
}

#[test]
fn test_reference_reading() {
    let f = estimate(-12000.0, -8000.0, 15000.0).unwrap();
    assert!((f.alpha_helix - 12.0 / 35.0).abs() < TOL);
    assert!((f.beta_sheet - 8.0 / 35.0).abs() < TOL);
    assert!(f.turn.abs() < TOL);
    assert!((f.random_coil - 15.0 / 35.0).abs() < TOL);
    assert_simplex(&f);
}

#[test]
fn test_zero_input_is_all_turn() {
    let f = estimate(0.0, 0.0, 0.0).unwrap();
    assert_eq!(f.alpha_helix, 0.0);
    assert_eq!(f.beta_sheet, 0.0);
    assert_eq!(f.random_coil, 0.0);
    assert!((f.turn - 1.0).abs() < TOL);
}

#[test]
fn test_positive_208_clamps_alpha_to_zero() {
    let f = estimate(5000.0, -3000.0, 1000.0).unwrap();
    assert_eq!(f.alpha_helix, 0.0);
    assert!(f.beta_sheet > 0.0);

    let f = estimate(1e9, 0.0, 0.0).unwrap();
    assert_eq!(f.alpha_helix, 0.0);
    assert!((f.turn - 1.0).abs() < TOL);
}

#[test]
fn test_sign_rules_for_217_and_195() {
    let f = estimate(0.0, 4000.0, -4000.0).unwrap();
    assert_eq!(f.beta_sheet, 0.0);
    assert_eq!(f.random_coil, 0.0);
    assert!((f.turn - 1.0).abs() < TOL);
}

#[test]
fn test_turn_takes_remainder() {
    // v = [-0.25, 0.25, 0.5] -> alpha 0.25, beta 0, coil 0.5, turn 0.25
    let f = estimate(-1.0, 1.0, 2.0).unwrap();
    assert!((f.alpha_helix - 0.25).abs() < TOL);
    assert_eq!(f.beta_sheet, 0.0);
    assert!((f.turn - 0.25).abs() < TOL);
    assert!((f.random_coil - 0.5).abs() < TOL);
}

#[test]
fn test_scale_invariance() {
    let base = estimate(-12000.0, -8000.0, 15000.0).unwrap();
    for k in [1e-3, 0.5, 2.5, 1e6] {
        let scaled = estimate(-12000.0 * k, -8000.0 * k, 15000.0 * k).unwrap();
        for (a, b) in base.values().iter().zip(scaled.values()) {
            assert!((a - b).abs() < TOL, "k={k}: {a} vs {b}");
        }
    }
}

#[test]
fn test_simplex_over_sign_grid() {
    let grid = [-25000.0, -1.0, -0.0, 0.0, 3.5, 18000.0, 1e-13];
    for &a in &grid {
        for &b in &grid {
            for &c in &grid {
                let f = estimate(a, b, c).unwrap();
                assert_simplex(&f);
            }
        }
    }
}

#[test]
fn test_reject_non_finite() {
    match estimate(f64::NAN, 0.0, 0.0) {
        Err(EstimateError::InvalidInput { wavelength, value }) => {
            assert_eq!(wavelength, Wavelength::Nm208);
            assert!(value.is_nan());
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    let err = estimate(1.0, f64::NEG_INFINITY, 0.0).unwrap_err();
    assert_eq!(
        err,
        EstimateError::InvalidInput {
            wavelength: Wavelength::Nm217,
            value: f64::NEG_INFINITY
        }
    );
    assert!(err.to_string().contains("217 nm"));
}

#[test]
fn test_passthrough_non_finite_collapses_to_turn() {
    let params = EstimatorParams::with_policy(NonFinitePolicy::Passthrough);
    let cases = [
        EllipticityReading::new(f64::NAN, -8000.0, 15000.0),
        EllipticityReading::new(f64::INFINITY, -8000.0, 15000.0),
        EllipticityReading::new(-12000.0, -8000.0, f64::NEG_INFINITY),
    ];
    for reading in &cases {
        let f = estimate_with(reading, &params).unwrap();
        assert_eq!(f.alpha_helix, 0.0);
        assert_eq!(f.beta_sheet, 0.0);
        assert_eq!(f.random_coil, 0.0);
        assert!((f.turn - 1.0).abs() < TOL, "{reading:?} -> {f:?}");
    }
}

#[test]
fn test_determinism_bits() {
    let a = estimate(-10450.5, -9120.25, 21010.0).unwrap();
    let b = estimate(-10450.5, -9120.25, 21010.0).unwrap();
    for (x, y) in a.values().iter().zip(b.values()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_stage_helpers() {
    let v = scale_readings(&[-2.0, 1.0, 1.0], 0.0);
    assert_eq!(v, [-0.5, 0.25, 0.25]);

    let raw = map_components(&[-0.5, -0.6, 0.3]);
    assert_eq!(raw.alpha, 0.5);
    assert_eq!(raw.beta, 0.6);
    assert_eq!(raw.coil, 0.3);
    assert_eq!(raw.turn, 0.0);

    assert_eq!(renormalize([1.0, 1.0, 1.0, 1.0], 0.0), [0.25; 4]);
}

#[test]
fn test_clamp_non_negative() {
    assert_eq!(clamp_non_negative(0.4), 0.4);
    assert_eq!(clamp_non_negative(-0.4), 0.0);
    assert_eq!(clamp_non_negative(f64::NAN), 0.0);
    assert!(clamp_non_negative(-0.0).is_sign_positive());
}
