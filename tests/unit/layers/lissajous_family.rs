use super::*;
use crate::field::lissajous::lissajous_point;

fn family() -> LissajousFamily {
    LissajousFamily::new(&LissajousFamilyConfig::default()).unwrap()
}

#[test]
fn offsets_are_evenly_spaced() {
    let f = family();
    assert_eq!(f.curves().len(), 18);
    for (i, c) in f.curves().iter().enumerate() {
        assert!((c.phase_offset - i as f64 * TAU / 18.0).abs() < 1e-12);
    }
}

#[test]
fn config_validation() {
    let bad_samples = LissajousFamilyConfig {
        samples: 99,
        ..LissajousFamilyConfig::default()
    };
    assert!(matches!(
        LissajousFamily::new(&bad_samples),
        Err(FieldError::Config(_))
    ));
    let empty = LissajousFamilyConfig {
        count: 0,
        ..LissajousFamilyConfig::default()
    };
    assert!(LissajousFamily::new(&empty).is_err());
    let traced = LissajousFamilyConfig {
        traced: 18,
        ..LissajousFamilyConfig::default()
    };
    assert!(LissajousFamily::new(&traced).is_err());
}

#[test]
fn recompute_resamples_every_curve_at_current_phase() {
    let mut f = family();
    let phase = 1.3;
    f.recompute(0.5, phase).unwrap();
    for (i, c) in f.curves().iter().enumerate() {
        let path = f.path(i).unwrap();
        assert_eq!(path.len(), 200);
        assert_eq!(path[17], c.point(17.0 * TAU / 200.0, phase));
    }
}

#[test]
fn all_samples_respect_amplitudes() {
    let mut f = family();
    f.recompute(3.0, 7.7).unwrap();
    let p = LissajousParams::REFERENCE;
    for i in 0..18 {
        for pt in f.path(i).unwrap() {
            assert!(pt.x.abs() <= p.amp_x + 1e-9);
            assert!(pt.y.abs() <= p.amp_y + 1e-9);
        }
    }
}

#[test]
fn tracer_wraps_time_modulo_tau() {
    let mut f = family();
    let t = 10.0 * TAU + 0.75;
    let pos = f.tracer().position_at(t, 0.2);
    let expected = lissajous_point(0.75, &LissajousParams::REFERENCE, 0.2);
    assert!((pos.x - expected.x).abs() < 1e-9);
    assert!((pos.y - expected.y).abs() < 1e-9);

    // Negative time wraps into [0, 2pi) as well.
    let neg = f.tracer().position_at(-0.5, 0.0);
    let wrapped = lissajous_point(TAU - 0.5, &LissajousParams::REFERENCE, 0.0);
    assert!((neg.x - wrapped.x).abs() < 1e-9);

    f.recompute(t, 0.2).unwrap();
    assert_eq!(f.tracer().position(), pos);
}

#[test]
fn trail_grows_one_point_per_frame() {
    let mut f = family();
    for n in 1..=300u32 {
        f.recompute(f64::from(n) * 0.05, f64::from(n) * 0.02).unwrap();
        assert_eq!(f.tracer().trail().len(), n as usize);
    }
    assert_eq!(f.tracer().trail().last(), Some(f.tracer().position()));
}

#[test]
fn bounded_trail_caps_length() {
    let cfg = LissajousFamilyConfig {
        trail: TrailCapacity::bounded(10).unwrap(),
        ..LissajousFamilyConfig::default()
    };
    let mut f = LissajousFamily::new(&cfg).unwrap();
    for n in 0..25 {
        f.recompute(n as f64, 0.0).unwrap();
    }
    assert_eq!(f.tracer().trail().len(), 10);
    assert_eq!(f.tracer().trail().dropped(), 15);
}

#[test]
fn rejected_input_leaves_trail_untouched() {
    let mut f = family();
    f.recompute(1.0, 0.0).unwrap();
    assert!(matches!(
        f.recompute(1.0, f64::NAN),
        Err(FieldError::NumericDomain(_))
    ));
    assert_eq!(f.tracer().trail().len(), 1);
}

#[test]
fn parallel_matches_sequential() {
    let mut a = family();
    let mut b = family();
    a.recompute_with(2.0, 0.9, false).unwrap();
    b.recompute_with(2.0, 0.9, true).unwrap();
    for i in 0..18 {
        assert_eq!(a.path(i), b.path(i));
    }
}

#[test]
fn emit_lists_curves_then_trail_then_marker() {
    let mut f = family();
    f.recompute(0.1, 0.0).unwrap();
    let mut out = Vec::new();
    f.emit(&mut out);
    assert_eq!(out.len(), 18 + 2);
    assert!(matches!(
        &out[0],
        Primitive::Polyline {
            role: PathRole::Curve,
            ..
        }
    ));
    match &out[18] {
        Primitive::Polyline { points, role, .. } => {
            assert_eq!(*role, PathRole::Trail);
            assert_eq!(points.len(), 1);
        }
        other => panic!("expected trail, got {other:?}"),
    }
    assert!(matches!(&out[19], Primitive::Dot { .. }));
}

#[test]
fn curves_spread_across_the_curve_gradient() {
    use crate::scene::palette::{BLUE_D, CURVE_GRADIENT, PURPLE_D, TRAIL_GRADIENT};

    let mut f = family();
    assert_eq!(f.curve_color(0), Some(PURPLE_D));
    assert_eq!(f.curve_color(17), Some(BLUE_D));
    assert_ne!(f.curve_color(9), Some(PURPLE_D));
    assert_ne!(f.curve_color(9), Some(BLUE_D));
    assert_eq!(f.curve_color(18), None);

    f.recompute(0.4, 0.1).unwrap();
    let mut out = Vec::new();
    f.emit(&mut out);
    for (i, prim) in out[..18].iter().enumerate() {
        match prim {
            Primitive::Polyline { colors, .. } => {
                assert_eq!(colors.as_slice(), &[f.curve_color(i).unwrap()]);
            }
            other => panic!("expected curve, got {other:?}"),
        }
    }
    match &out[18] {
        Primitive::Polyline { colors, .. } => assert_eq!(colors.as_slice(), &TRAIL_GRADIENT),
        other => panic!("expected trail, got {other:?}"),
    }

    let json = serde_json::to_value(&out[0]).unwrap();
    let rgb = &json["colors"][0];
    assert_eq!(rgb["r"], u64::from(CURVE_GRADIENT[0].r));
}

#[test]
fn custom_colors_flow_through_config() {
    let solid = Rgb8::new(10, 20, 30);
    let cfg = LissajousFamilyConfig {
        count: 4,
        curve_colors: vec![solid],
        trail_colors: vec![],
        ..LissajousFamilyConfig::default()
    };
    let f = LissajousFamily::new(&cfg).unwrap();
    for i in 0..4 {
        assert_eq!(f.curve_color(i), Some(solid));
    }
    let mut out = Vec::new();
    f.emit(&mut out);
    assert!(matches!(&out[4], Primitive::Polyline { colors, .. } if colors.is_empty()));
}
