use super::*;

#[test]
fn three_point_aliases() {
    for s in ["three_point", "3point", "3-point", "three-point", "Three Point"] {
        assert_eq!(LightingStyle::parse(s), Some(LightingStyle::ThreePoint), "{s}");
    }
    assert_eq!(LightingStyle::parse("disco"), None);
}

#[test]
fn names_round_trip() {
    for s in [
        LightingStyle::ThreePoint,
        LightingStyle::Dramatic,
        LightingStyle::Neon,
        LightingStyle::Natural,
        LightingStyle::Studio,
    ] {
        assert_eq!(LightingStyle::parse(s.as_str()), Some(s));
    }
}
