use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn clamp_pins_to_last_frame() {
    let r = FrameRange::from_duration(10);
    assert_eq!(r.len_frames(), 10);
    assert_eq!(r.clamp(FrameIndex(42)), FrameIndex(9));
    let empty = FrameRange::from_duration(0);
    assert!(empty.is_empty());
    assert_eq!(empty.clamp(FrameIndex(3)), FrameIndex(0));
}

#[test]
fn normalized_time_spans_first_to_last_frame() {
    assert_eq!(normalized_time(0.0, 360), 0.0);
    assert_eq!(normalized_time(359.0, 360), 1.0);
    assert_eq!(normalized_time(500.0, 360), 1.0);
    assert_eq!(normalized_time(0.0, 1), 0.0);
    assert!((normalized_time(50.0, 101) - 0.5).abs() < 1e-12);
}

#[test]
fn finite_checks_reject_nan() {
    assert!(ensure_finite(f64::NAN, "x").is_err());
    assert!(ensure_finite_vec(Vec3::new(0.0, f64::INFINITY, 0.0), "v").is_err());
    assert!(ensure_finite_vec(Vec3::ONE, "v").is_ok());
}

#[test]
fn tokens_fold_case_and_separators() {
    assert_eq!(normalize_token("  Ease-In Out "), "ease_in_out");
    assert_eq!(normalize_token("three_point"), "three_point");
}
