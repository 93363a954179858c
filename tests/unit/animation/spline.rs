use super::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn path_passes_through_every_control_point() {
    let pts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(4.0, 0.0, 3.0),
        Vec3::new(5.0, 2.0, 1.0),
        Vec3::new(9.0, -1.0, 0.5),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(12.0, 4.0, 2.0),
    ];
    let path = CatmullRomPath::new(pts.clone()).unwrap();
    let n = pts.len();
    for (i, p) in pts.iter().enumerate() {
        let u = i as f64 / (n - 1) as f64;
        assert!(close(path.point_at(u), *p), "knot {i}");
    }
}

#[test]
fn two_points_are_linear() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(10.0, 4.0, -2.0);
    let path = CatmullRomPath::new(vec![a, b]).unwrap();
    assert!(close(path.point_at(0.5), Vec3::new(5.0, 2.0, -1.0)));
    assert!(close(path.point_at(-1.0), a));
    assert!(close(path.point_at(2.0), b));
}

#[test]
fn collinear_evenly_spaced_points_stay_on_the_line() {
    let path = CatmullRomPath::new(vec![
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ])
    .unwrap();
    let p = path.point_at(0.25);
    assert!(close(p, Vec3::new(0.5, 0.0, 0.0)));
}

#[test]
fn path_rejects_short_or_non_finite_input() {
    assert!(CatmullRomPath::new(vec![Vec3::ZERO]).is_err());
    assert!(CatmullRomPath::new(vec![Vec3::ZERO, Vec3::splat(f64::NAN)]).is_err());
}

#[test]
fn path_deserialization_validates() {
    let ok: CatmullRomPath = serde_json::from_str("[[0,0,0],[1,2,3]]").unwrap();
    assert_eq!(ok.points().len(), 2);
    assert!(serde_json::from_str::<CatmullRomPath>("[[0,0,0]]").is_err());
}

#[test]
fn scalar_knots_interpolate_smoothly() {
    let knots = [0.0, 1.0, 0.0, -1.0];
    assert_eq!(catmull_rom_through(&knots, 1.0), Some(1.0));
    assert_eq!(catmull_rom_through(&knots, 3.0), Some(-1.0));
    let mid = catmull_rom_through(&knots, 1.5).unwrap();
    assert!(mid > -1.0 && mid < 1.0);
    assert_eq!(catmull_rom_through::<f64>(&[], 0.5), None);
    assert_eq!(catmull_rom_through(&[4.0], 0.5), Some(4.0));
}

#[test]
fn bezier_hits_endpoints_and_midpoint_of_straight_line() {
    let p0 = Vec3::ZERO;
    let p3 = Vec3::new(3.0, 0.0, 0.0);
    let p1 = Vec3::new(1.0, 0.0, 0.0);
    let p2 = Vec3::new(2.0, 0.0, 0.0);
    assert!(close(cubic_bezier(p0, p1, p2, p3, 0.0), p0));
    assert!(close(cubic_bezier(p0, p1, p2, p3, 1.0), p3));
    assert!(close(cubic_bezier(p0, p1, p2, p3, 0.5), Vec3::new(1.5, 0.0, 0.0)));
}

#[test]
fn crane_arc_rises_between_level_endpoints() {
    let start = Vec3::new(-4.0, 1.0, 6.0);
    let end = Vec3::new(4.0, 1.0, 6.0);
    let arc = BezierArc::crane(start, end, 2.0);
    assert!(close(arc.point_at(0.0), start));
    assert!(close(arc.point_at(1.0), end));
    let top = arc.point_at(0.5);
    assert!(top.y > 1.0 && top.y <= 1.0 + 2.0 * 0.7 + 1e-9);
    assert!((arc.controls[1].y - 2.4).abs() < 1e-12);
    assert!((arc.controls[1].x + 2.0).abs() < 1e-12);
}
