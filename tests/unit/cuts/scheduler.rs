use super::*;

fn kinds(s: &CutSchedule) -> Vec<DiagnosticKind> {
    s.diagnostics.iter().map(|d| d.kind).collect()
}

#[test]
fn empty_list_is_constant_medium() {
    let s = resolve_cuts(&[], 120, 7);
    assert!(!s.framing.is_explicit());
    assert!(s.markers.is_empty());
    assert!(s.diagnostics.is_empty());
    let medium = ShotType::Medium.framing();
    for f in [0.0, 37.5, 119.0] {
        assert_eq!(s.framing.sample(f), medium);
    }
}

#[test]
fn wide_then_closeup_blends_before_the_cut() {
    let events = vec![
        CutEvent::new(0, "wide").with_transition("cut"),
        CutEvent::new(100, "closeup").with_transition("smooth"),
    ];
    let s = resolve_cuts(&events, 200, 7);
    assert!(s.diagnostics.is_empty());

    let f0 = s.framing.sample(0.0);
    assert_eq!((f0.fov_degrees, f0.distance_multiplier), (60.0, 2.5));
    let f100 = s.framing.sample(100.0);
    assert_eq!((f100.fov_degrees, f100.distance_multiplier), (35.0, 0.8));
    let f92 = s.framing.sample(92.0);
    assert!(f92.fov_degrees < 60.0 && f92.fov_degrees > 35.0);
    assert!(f92.distance_multiplier < 2.5 && f92.distance_multiplier > 0.8);

    // Window is [85, 100]; before it the wide framing holds.
    assert_eq!(s.framing.sample(85.0), ShotType::Wide.framing());
    assert_eq!(s.framing.sample(199.0), ShotType::Closeup.framing());
}

#[test]
fn blend_window_never_starts_before_previous_cut() {
    let events = vec![
        CutEvent::new(10, "wide"),
        CutEvent::new(20, "closeup").with_transition("slow"),
    ];
    let s = resolve_cuts(&events, 100, 7);
    assert_eq!(s.framing.sample(10.0), ShotType::Wide.framing());
    let mid = s.framing.sample(15.0);
    assert!((mid.fov_degrees - 47.5).abs() < 1e-9);
    assert_eq!(s.framing.sample(20.0), ShotType::Closeup.framing());
}

#[test]
fn first_framing_holds_before_first_cut() {
    let s = resolve_cuts(&[CutEvent::new(50, "closeup")], 100, 7);
    assert_eq!(s.framing.sample(0.0), ShotType::Closeup.framing());
    assert_eq!(s.framing.cuts()[0].transition, Transition::Cut);
}

#[test]
fn hard_cut_switches_on_the_frame() {
    let events = vec![
        CutEvent::new(0, "wide"),
        CutEvent::new(30, "closeup").with_transition("cut"),
    ];
    let s = resolve_cuts(&events, 60, 7);
    assert_eq!(s.framing.sample(29.999), ShotType::Wide.framing());
    assert_eq!(s.framing.sample(30.0), ShotType::Closeup.framing());
}

#[test]
fn default_transitions_are_cut_then_smooth() {
    let events = vec![
        CutEvent::new(40, "medium"),
        CutEvent::new(0, "wide"),
        CutEvent::new(80, "closeup"),
    ];
    let s = resolve_cuts(&events, 100, 7);
    let t: Vec<_> = s.framing.cuts().iter().map(|c| c.transition).collect();
    assert_eq!(
        t,
        vec![Transition::Cut, Transition::Smooth, Transition::Smooth]
    );
    let frames: Vec<_> = s.framing.cuts().iter().map(|c| c.frame).collect();
    assert_eq!(frames, vec![0, 40, 80]);
}

#[test]
fn out_of_range_frames_are_clamped_or_dropped() {
    let events = vec![
        CutEvent::new(-5, "wide"),
        CutEvent::new(100, "closeup"),
        CutEvent::new(250, "medium"),
    ];
    let s = resolve_cuts(&events, 100, 7);
    assert_eq!(
        kinds(&s),
        vec![
            DiagnosticKind::CutClampedToStart,
            DiagnosticKind::CutBeyondDuration,
            DiagnosticKind::CutBeyondDuration,
        ]
    );
    assert_eq!(s.framing.cuts().len(), 1);
    assert_eq!(s.framing.cuts()[0].frame, 0);
}

#[test]
fn duplicates_keep_the_last_event() {
    let events = vec![
        CutEvent::new(0, "wide"),
        CutEvent::new(50, "closeup"),
        CutEvent::new(50, "dutch_angle"),
    ];
    let s = resolve_cuts(&events, 100, 7);
    assert_eq!(kinds(&s), vec![DiagnosticKind::DuplicateCutFrame]);
    assert_eq!(s.framing.cuts().len(), 2);
    assert_eq!(s.framing.cuts()[1].shot, ShotType::DutchAngle);
}

#[test]
fn unknown_names_fall_back() {
    let events = vec![CutEvent::new(0, "aerial").with_transition("dissolve")];
    let s = resolve_cuts(&events, 10, 7);
    assert_eq!(
        kinds(&s),
        vec![
            DiagnosticKind::UnknownShotType,
            DiagnosticKind::UnknownTransition
        ]
    );
    let c = s.framing.cuts()[0];
    assert_eq!(c.shot, ShotType::Medium);
    assert_eq!(c.transition, Transition::Smooth);
}

#[test]
fn markers_are_numbered_in_frame_order() {
    let events = vec![CutEvent::new(60, "closeup"), CutEvent::new(0, "wide")];
    let s = resolve_cuts(&events, 100, 7);
    let names: Vec<_> = s.markers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["CUT_1_wide", "CUT_2_closeup"]);
    assert_eq!(s.markers[1].frame, 60);
}

#[test]
fn cut_event_accepts_type_alias_in_json() {
    let ev: CutEvent = serde_json::from_str(r#"{"frame": 12, "type": "wide"}"#).unwrap();
    assert_eq!(ev, CutEvent::new(12, "wide"));
}

#[test]
fn cut_angles_are_seeded_and_bounded() {
    let events: Vec<_> = (0..12).map(|i| CutEvent::new(i * 10, "medium")).collect();
    let a = resolve_cuts(&events, 200, 42);
    let b = resolve_cuts(&events, 200, 42);
    let c = resolve_cuts(&events, 200, 43);

    let angles = |s: &CutSchedule| -> Vec<f64> {
        s.framing.cuts().iter().map(|c| c.angle_offset).collect()
    };
    assert_eq!(angles(&a), angles(&b));
    assert_ne!(angles(&a), angles(&c));
    assert!(
        angles(&a)
            .iter()
            .all(|x| x.abs() <= CUT_ANGLE_VARIATION)
    );
    assert!(angles(&a).windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn cut_angle_holds_then_blends_with_framing() {
    let events = vec![
        CutEvent::new(0, "wide").with_transition("cut"),
        CutEvent::new(100, "closeup").with_transition("smooth"),
    ];
    let s = resolve_cuts(&events, 200, 9);
    let a0 = s.framing.cuts()[0].angle_offset;
    let a1 = s.framing.cuts()[1].angle_offset;
    assert_eq!(s.framing.angle_at(0.0), a0);
    assert_eq!(s.framing.angle_at(85.0), a0);
    assert_eq!(s.framing.angle_at(100.0), a1);
    assert_eq!(s.framing.angle_at(150.0), a1);
    let mid = s.framing.angle_at(92.0);
    assert!(mid >= a0.min(a1) && mid <= a0.max(a1));

    assert_eq!(resolve_cuts(&[], 50, 9).framing.angle_at(10.0), 0.0);
}
