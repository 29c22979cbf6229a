use super::*;

fn grid() -> RadialPulseGrid {
    RadialPulseGrid::new(&PulseGridConfig::default()).unwrap()
}

#[test]
fn rejects_empty_lattice_and_bad_spacing() {
    let cfg = PulseGridConfig {
        rows: 0,
        ..PulseGridConfig::default()
    };
    assert!(matches!(
        RadialPulseGrid::new(&cfg),
        Err(FieldError::Config(_))
    ));
    let cfg = PulseGridConfig {
        spacing: 0.0,
        ..PulseGridConfig::default()
    };
    assert!(RadialPulseGrid::new(&cfg).is_err());
}

#[test]
fn lattice_is_centered_on_origin() {
    let g = grid();
    assert_eq!(g.markers().len(), 12 * 22);
    let first = g.marker(0, 0).unwrap().position;
    let last = g.marker(11, 21).unwrap().position;
    assert!((first.x + 10.5 * 0.6).abs() < 1e-12);
    assert!((first.y + 5.5 * 0.6).abs() < 1e-12);
    assert!((first.x + last.x).abs() < 1e-12);
    assert!((first.y + last.y).abs() < 1e-12);
    assert!(g.marker(12, 0).is_none());
}

#[test]
fn gradient_runs_from_first_to_last_stop() {
    let g = grid();
    let stops = &crate::scene::palette::PULSE_GRADIENT;
    assert_eq!(g.markers()[0].color, stops[0]);
    assert_eq!(g.markers().last().unwrap().color, stops[stops.len() - 1]);
}

#[test]
fn recompute_uses_distance_to_source() {
    let mut g = grid();
    let src = Point::new(-5.0, -2.5);
    let t = 3.7;
    g.recompute(t, src).unwrap();
    let w = PulseWave::REFERENCE;
    for m in g.markers() {
        assert_eq!(m.scale, w.scale(m.position.distance(src), t));
    }
    assert_eq!(g.source(), src);
}

#[test]
fn scales_stay_in_envelope_and_positions_never_move() {
    let mut g = grid();
    let before: Vec<_> = g.markers().iter().map(|m| m.position).collect();
    for step in 0..50 {
        let t = step as f64 * 0.37;
        let src = Point::new(-5.0 + step as f64 * 0.16, -2.5 + step as f64 * 0.06);
        g.recompute(t, src).unwrap();
        for m in g.markers() {
            assert!((0.1842..=0.3112).contains(&m.scale));
        }
    }
    let after: Vec<_> = g.markers().iter().map(|m| m.position).collect();
    assert_eq!(before, after);
    assert_eq!(g.dims(), (12, 22));
}

#[test]
fn parallel_matches_sequential() {
    let mut a = grid();
    let mut b = grid();
    let src = Point::new(1.25, -0.5);
    a.recompute_with(8.0, src, false).unwrap();
    b.recompute_with(8.0, src, true).unwrap();
    assert_eq!(a.markers(), b.markers());
}

#[test]
fn non_finite_source_is_rejected() {
    let mut g = grid();
    assert!(matches!(
        g.recompute(1.0, Point::new(f64::NAN, 0.0)),
        Err(FieldError::NumericDomain(_))
    ));
    assert!(g.recompute(f64::INFINITY, Point::ORIGIN).is_err());
}

#[test]
fn emit_appends_source_dot_after_markers() {
    let g = grid();
    let mut out = Vec::new();
    g.emit(&mut out);
    assert_eq!(out.len(), 12 * 22 + 1);
    assert!(matches!(out.last(), Some(Primitive::Dot { .. })));
}
