use super::*;

#[test]
fn shot_table_matches_reference_values() {
    let w = ShotType::Wide.framing();
    assert_eq!((w.fov_degrees, w.distance_multiplier), (60.0, 2.5));
    let c = ShotType::Closeup.framing();
    assert_eq!((c.fov_degrees, c.distance_multiplier), (35.0, 0.8));
    assert_eq!(ShotType::DutchAngle.framing().roll_degrees, 15.0);
    assert!(ShotType::LowAngle.framing().height_offset < 0.0);
    assert!(ShotType::HighAngle.framing().height_offset > 0.0);
    assert_eq!(ShotType::OverShoulder.framing().lateral_offset, 0.3);
}

#[test]
fn shot_names_round_trip() {
    for s in ShotType::ALL {
        assert_eq!(ShotType::parse(s.as_str()), Some(s));
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, format!("\"{}\"", s.as_str()));
    }
    assert_eq!(ShotType::parse("Close-Up"), Some(ShotType::Closeup));
    assert_eq!(ShotType::parse("aerial"), None);
}

#[test]
fn transition_blend_lengths() {
    assert_eq!(Transition::Cut.blend_frames(), 0);
    assert_eq!(Transition::Fast.blend_frames(), 5);
    assert_eq!(Transition::Smooth.blend_frames(), 15);
    assert_eq!(Transition::Slow.blend_frames(), 30);
    assert_eq!(Transition::parse(" SLOW "), Some(Transition::Slow));
    assert_eq!(Transition::parse("dissolve"), None);
}

#[test]
fn framing_lerp_is_componentwise() {
    let a = ShotType::Wide.framing();
    let b = ShotType::Closeup.framing();
    let mid = Framing::lerp(&a, &b, 0.5);
    assert_eq!(mid.fov_degrees, 47.5);
    assert!((mid.distance_multiplier - 1.65).abs() < 1e-12);
    assert_eq!(Framing::lerp(&a, &b, 0.0), a);
    let end = Framing::lerp(&a, &b, 1.0);
    assert!((end.distance_multiplier - b.distance_multiplier).abs() < 1e-12);
    assert!((end.height_offset - b.height_offset).abs() < 1e-12);
}
