use super::*;
use crate::scene::model::Bounds;

fn metrics() -> SceneMetrics {
    Bounds::Sphere {
        center: Vec3::new(0.0, 1.0, 0.0),
        radius: 2.0,
    }
    .metrics()
}

fn resolve(style: &str) -> LightingResolution {
    resolve_lighting(&LightingRequest::with_style(style), &metrics(), None)
}

fn names(r: &LightingResolution) -> Vec<&str> {
    r.rig.iter().map(|l| l.name.as_str()).collect()
}

#[test]
fn three_point_layout() {
    let r = resolve("three_point");
    assert!(r.diagnostics.is_empty());
    assert_eq!(names(&r), vec!["key", "fill", "back"]);
    let m = metrics();
    let key = &r.rig[0];
    assert_eq!(key.kind, LightKind::Area);
    assert_eq!(key.role, LightRole::Key);
    assert_eq!(key.intensity, 1000.0);
    // +45 degrees: equal +X and +Z offsets.
    let off = key.position - m.center;
    assert!((off.x - off.z).abs() < 1e-9 && off.x > 0.0);
    assert!((off.y - 0.8 * 2.0 * m.radius).abs() < 1e-9);
    let fill = &r.rig[1];
    assert!((fill.position - m.center).x < 0.0);
    assert_eq!(fill.color_rgb, fill_tint(kelvin_to_rgb(5500.0)));
    let back = &r.rig[2];
    assert_eq!(back.kind, LightKind::Spot);
    assert!((back.position - m.center).z < 0.0);
    assert!(back.spot.is_some());
}

#[test]
fn lights_aim_at_focus() {
    let target = Vec3::new(0.5, 0.0, 0.0);
    let r = resolve_lighting(&LightingRequest::default(), &metrics(), Some(target));
    for l in &r.rig {
        assert!((l.direction.length() - 1.0).abs() < 1e-12);
        let expected = (target - l.position).normalize();
        assert!((l.direction - expected).length() < 1e-12);
    }
}

#[test]
fn dramatic_rim_pins_temperature() {
    let mut req = LightingRequest::with_style("dramatic");
    req.color_temperature = 3200.0;
    let r = resolve_lighting(&req, &metrics(), None);
    assert_eq!(names(&r), vec!["key", "rim"]);
    assert_eq!(r.rig[0].color_temperature_kelvin, Some(3200.0));
    assert_eq!(r.rig[1].color_temperature_kelvin, Some(6500.0));
    assert_eq!(r.rig[1].role, LightRole::Rim);
    assert!(r.rig[0].position.y > r.rig[1].position.y);
}

#[test]
fn neon_uses_gels_without_temperature() {
    let r = resolve("neon");
    assert_eq!(r.rig.len(), 5);
    assert_eq!(r.rig[0].color_rgb, gel::CYAN);
    assert_eq!(r.rig[1].color_rgb, gel::MAGENTA);
    assert_eq!(r.rig[2].color_rgb, gel::PURPLE);
    assert_eq!(r.rig[3].color_rgb, gel::PINK);
    assert!(r.rig.iter().all(|l| l.color_temperature_kelvin.is_none()));
    let ambient = &r.rig[4];
    assert_eq!(ambient.role, LightRole::Ambient);
    assert!(ambient.direction.y < -0.99);
}

#[test]
fn natural_has_sun_sky_and_bounce() {
    let mut req = LightingRequest::with_style("natural");
    req.color_temperature = 4000.0;
    let r = resolve_lighting(&req, &metrics(), None);
    assert_eq!(names(&r), vec!["sun", "sky", "bounce"]);
    assert_eq!(r.rig[0].kind, LightKind::Directional);
    assert_eq!(r.rig[0].color_temperature_kelvin, Some(4000.0));
    assert_eq!(r.rig[1].color_temperature_kelvin, Some(9000.0));
    assert_eq!(r.rig[2].color_temperature_kelvin, Some(6500.0));
}

#[test]
fn studio_places_four_softboxes_on_cardinals() {
    let r = resolve("studio");
    let m = metrics();
    assert_eq!(r.rig.len(), 4);
    assert!(r.rig.iter().all(|l| l.kind == LightKind::Area));
    let dirs: Vec<Vec3> = r.rig.iter().map(|l| l.position - m.center).collect();
    assert!(dirs[0].z > 0.0 && dirs[0].x.abs() < 1e-9);
    assert!(dirs[1].x > 0.0 && dirs[1].z.abs() < 1e-9);
    assert!(dirs[2].z < 0.0 && dirs[2].x.abs() < 1e-9);
    assert!(dirs[3].x < 0.0 && dirs[3].z.abs() < 1e-9);
}

#[test]
fn intensity_scales_every_light() {
    let base = resolve("studio");
    let mut req = LightingRequest::with_style("studio");
    req.intensity = 2.0;
    let r = resolve_lighting(&req, &metrics(), None);
    for (a, b) in base.rig.iter().zip(r.rig.iter()) {
        assert_eq!(b.intensity, a.intensity * 2.0);
    }
}

#[test]
fn out_of_range_parameters_clamp_with_diagnostics() {
    let req = LightingRequest {
        style: "3point".to_owned(),
        intensity: 40.0,
        color_temperature: 1200.0,
    };
    let r = resolve_lighting(&req, &metrics(), None);
    let kinds: Vec<_> = r.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::IntensityClamped,
            DiagnosticKind::ColorTemperatureClamped
        ]
    );
    assert_eq!(r.rig[0].intensity, 1000.0 * 5.0);
    assert_eq!(r.rig[0].color_temperature_kelvin, Some(2700.0));
}

#[test]
fn unknown_style_falls_back_to_three_point() {
    let r = resolve("disco");
    assert_eq!(r.style, LightingStyle::ThreePoint);
    assert_eq!(r.diagnostics.len(), 1);
    assert_eq!(r.diagnostics[0].kind, DiagnosticKind::UnknownLightingStyle);
    assert_eq!(r.rig, resolve("three_point").rig);
}
