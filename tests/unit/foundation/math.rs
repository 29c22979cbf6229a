use super::*;

#[test]
fn ensure_finite_rejects_nan_and_inf() {
    assert_eq!(ensure_finite("t", 1.25).unwrap(), 1.25);
    assert!(matches!(
        ensure_finite("t", f64::NAN),
        Err(FieldError::NumericDomain(_))
    ));
    assert!(matches!(
        ensure_finite("t", f64::NEG_INFINITY),
        Err(FieldError::NumericDomain(_))
    ));
}

#[test]
fn ensure_positive_is_a_config_error() {
    assert!(matches!(
        ensure_positive("duration", 0.0),
        Err(FieldError::Config(_))
    ));
    assert!(ensure_positive("duration", -1.0).is_err());
    assert!(ensure_positive("duration", f64::INFINITY).is_err());
    assert_eq!(ensure_positive("duration", 0.5).unwrap(), 0.5);
}

#[test]
fn gradient_hits_every_stop() {
    let stops = [
        Rgb8::new(0, 0, 0),
        Rgb8::new(100, 100, 100),
        Rgb8::new(200, 0, 50),
    ];
    assert_eq!(gradient_at(&stops, 0.0), stops[0]);
    assert_eq!(gradient_at(&stops, 0.5), stops[1]);
    assert_eq!(gradient_at(&stops, 1.0), stops[2]);
    assert_eq!(gradient_at(&stops, 0.25), Rgb8::new(50, 50, 50));
    assert_eq!(gradient_at(&stops[..1], 0.7), stops[0]);
}

#[test]
fn spread_covers_unit_interval() {
    assert_eq!(spread(0, 1), 0.0);
    assert_eq!(spread(0, 5), 0.0);
    assert_eq!(spread(4, 5), 1.0);
    assert_eq!(spread(2, 5), 0.5);
}
