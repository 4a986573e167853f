use super::*;

#[test]
fn test_quantiles() {
    let v = vec![5.0f64, 1.0, 4.0, 2.0, 3.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(quantile_indexed(&v, 0.9), 5.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_median_even_length_takes_upper() {
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 3.0);
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[0.25, 0.75]), 0.5);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(12.0 / 35.0), "0.342857");
    assert_eq!(format_f64_6(1e-17), "0.000000");
}
