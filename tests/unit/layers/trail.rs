use super::*;

fn p(x: f64) -> Point3 {
    Point3::new(x, 0.0, 0.0)
}

#[test]
fn length_tracks_pushes_below_capacity() {
    let mut trail = Trail::new(TrailCapacity::default());
    for i in 0..250 {
        trail.push(p(i as f64));
    }
    assert_eq!(trail.len(), 250);
    assert_eq!(trail.dropped(), 0);
    assert_eq!(trail.last(), Some(p(249.0)));
}

#[test]
fn bounded_trail_drops_oldest_first() {
    let mut trail = Trail::new(TrailCapacity::bounded(3).unwrap());
    for i in 0..5 {
        trail.push(p(i as f64));
    }
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.pushed(), 5);
    assert_eq!(trail.dropped(), 2);
    assert_eq!(trail.to_vec(), vec![p(2.0), p(3.0), p(4.0)]);
}

#[test]
fn unbounded_trail_keeps_everything() {
    let mut trail = Trail::new(TrailCapacity::Unbounded);
    for i in 0..10_000 {
        trail.push(p(i as f64));
    }
    assert_eq!(trail.len(), 10_000);
    assert_eq!(trail.iter().next(), Some(&p(0.0)));
}

#[test]
fn zero_bound_is_not_constructible() {
    assert!(TrailCapacity::bounded(0).is_none());
    assert_eq!(
        TrailCapacity::default(),
        TrailCapacity::bounded(TrailCapacity::DEFAULT_BOUND).unwrap()
    );
}
