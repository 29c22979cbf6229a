use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn names_round_trip_through_from_str() {
    for p in Preset::ALL {
        assert_eq!(p.name().parse::<Preset>().unwrap(), p);
    }
    assert!(matches!(
        "nope".parse::<Preset>(),
        Err(FieldError::Config(_))
    ));
}

#[test]
fn frame_counts_follow_schedules() {
    let opts = PresetOpts::default();
    assert_eq!(lissajous_flow(&opts).unwrap().total_frames(), 300 + 360 + 15);
    assert_eq!(pulse_grid(&opts).unwrap().total_frames(), 150 + 210 + 18);
    assert_eq!(surface_wave(&opts).unwrap().total_frames(), 180 + 300 + 18);

    let hq = PresetOpts {
        high_quality: true,
        ..PresetOpts::default()
    };
    assert_eq!(hq.fps().as_f64(), 60.0);
    assert_eq!(surface_wave(&hq).unwrap().total_frames(), 360 + 600 + 36);
}

#[test]
fn tiled_surface_requires_an_image() {
    let err = build_preset(Preset::TiledSurface, &PresetOpts::default()).unwrap_err();
    assert!(matches!(err, FieldError::ResourceLoad(_)));

    let opts = PresetOpts {
        image: Some(ImageSample::solid(8, 8, Rgb8::new(5, 6, 7)).unwrap()),
        ..PresetOpts::default()
    };
    let driver = build_preset(Preset::TiledSurface, &opts).unwrap();
    assert_eq!(driver.total_frames(), 300 + 30);
}

#[test]
fn pulse_source_drifts_to_its_destination() {
    let driver = pulse_grid(&PresetOpts::default()).unwrap();
    let last = driver.last().unwrap().unwrap();
    assert_eq!(last.value("t"), Some(28.0));
    assert_eq!(last.value("source.x"), Some(3.0));
    assert_eq!(last.value("source.y"), Some(0.5));
}

#[test]
fn lissajous_flow_ends_on_its_targets() {
    let driver = lissajous_flow(&PresetOpts::default()).unwrap();
    let last = driver.last().unwrap().unwrap();
    assert_eq!(last.value("t"), Some(20.0 * TAU));
    assert_eq!(last.value("phase"), Some(20.0 * PI));
    let curves = last.layer("curves").unwrap();
    // 18 curves, one trail, one marker.
    assert_eq!(curves.primitives.len(), 20);
}
