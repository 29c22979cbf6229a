use super::*;

fn grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
}

#[test]
fn reference_bound_is_point_seven() {
    assert!((HeightField::REFERENCE.bound() - 0.70).abs() < 1e-12);
}

#[test]
fn height_stays_within_bound() {
    let f = HeightField::default();
    for t in [0.0, 1.23, 17.0, -42.5, 1.0e6] {
        for u in grid(-3.0, 3.0, 41) {
            for v in grid(-3.0, 3.0, 41) {
                let z = f.height(u, v, t);
                assert!(z.abs() <= 0.70 + 1e-12, "z={z} at ({u},{v},{t})");
            }
        }
    }
}

#[test]
fn bound_is_approached() {
    // sin(2.2u + 1.2t) = 1 and cos(2.2v - 0.9t) = 1 at t = 0, u = pi / 4.4, v = 0.
    let u = std::f64::consts::PI / 4.4;
    let z = surface_height(u, 0.0, 0.0);
    assert!((z - 0.70).abs() < 1e-12);
}

#[test]
fn height_is_repeatable() {
    let f = HeightField::REFERENCE;
    for (u, v, t) in [(0.3, -1.7, 2.5), (-2.9, 2.9, 36.0), (0.0, 0.0, 0.0)] {
        assert_eq!(f.height(u, v, t).to_bits(), f.height(u, v, t).to_bits());
    }
}

#[test]
fn checked_rejects_non_finite() {
    let f = HeightField::REFERENCE;
    assert!(matches!(
        f.height_checked(0.0, 0.0, f64::NAN),
        Err(FieldError::NumericDomain(_))
    ));
    assert!(f.height_checked(f64::INFINITY, 0.0, 0.0).is_err());
    assert_eq!(
        f.height_checked(0.5, 0.5, 1.0).unwrap(),
        f.height(0.5, 0.5, 1.0)
    );
}

#[test]
fn validate_rejects_non_finite_constants() {
    let f = HeightField {
        k_u: f64::NAN,
        ..HeightField::REFERENCE
    };
    assert!(matches!(f.validate(), Err(FieldError::Config(_))));
    HeightField::REFERENCE.validate().unwrap();
}
