use super::*;

#[test]
fn declare_assigns_sequential_ids() {
    let mut tv = TimeValues::new();
    let t = tv.declare("t", 0.0).unwrap();
    let phase = tv.declare("phase", 1.5).unwrap();
    assert_ne!(t, phase);
    assert_eq!(tv.len(), 2);
    assert_eq!(tv.get(phase), 1.5);
    assert_eq!(tv.name(t), Some("t"));
    assert_eq!(tv.id_of("phase"), Some(phase));
    assert_eq!(tv.id_of("missing"), None);
}

#[test]
fn declare_rejects_duplicates_and_non_finite() {
    let mut tv = TimeValues::new();
    tv.declare("t", 0.0).unwrap();
    assert!(matches!(tv.declare("t", 1.0), Err(FieldError::Config(_))));
    assert!(matches!(
        tv.declare("u", f64::NAN),
        Err(FieldError::NumericDomain(_))
    ));
    assert!(tv.declare("", 0.0).is_err());
}

#[test]
fn set_overwrites_and_iter_preserves_order() {
    let mut tv = TimeValues::new();
    let a = tv.declare("a", 1.0).unwrap();
    tv.declare("b", 2.0).unwrap();
    tv.set(a, 9.0);
    let pairs: Vec<_> = tv.iter().collect();
    assert_eq!(pairs, vec![("a", 9.0), ("b", 2.0)]);
}
