use std::ops::{Add, Mul, Sub};

use crate::{
    animation::lerp::Lerp,
    foundation::core::{Vec3, ensure_finite_vec},
    foundation::error::{CineError, CineResult},
};

/// Uniform Catmull-Rom segment between `p1` (`t = 0`) and `p2` (`t = 1`).
pub fn catmull_rom<T>(p0: T, p1: T, p2: T, p3: T, t: f64) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

/// Sample a Catmull-Rom curve through `knots` at fractional knot position `s`.
///
/// `s` is measured in knot units (`s = i` lands on `knots[i]`) and clamped to the knot span.
/// Endpoint tangents use phantom points mirrored from the adjacent segment.
pub(crate) fn catmull_rom_through<T>(knots: &[T], s: f64) -> Option<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let n = knots.len();
    match n {
        0 => return None,
        1 => return Some(knots[0]),
        _ => {}
    }
    let last = (n - 1) as f64;
    let s = s.clamp(0.0, last);
    let i = (s.floor() as usize).min(n - 2);
    let local = s - i as f64;
    if local == 0.0 {
        return Some(knots[i]);
    }
    if local == 1.0 {
        return Some(knots[i + 1]);
    }

    let p1 = knots[i];
    let p2 = knots[i + 1];
    let p0 = if i == 0 { p1 * 2.0 - p2 } else { knots[i - 1] };
    let p3 = if i + 2 < n {
        knots[i + 2]
    } else {
        p2 * 2.0 - p1
    };
    Some(catmull_rom(p0, p1, p2, p3, local))
}

/// Catmull-Rom path through at least two control points.
///
/// Control point `i` sits at `u = i / (n - 1)`. Two points degenerate to a straight line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec3>", into = "Vec<Vec3>")]
pub struct CatmullRomPath {
    points: Vec<Vec3>,
}

impl CatmullRomPath {
    /// Build a path. Requires at least two finite points.
    pub fn new(points: Vec<Vec3>) -> CineResult<Self> {
        if points.len() < 2 {
            return Err(CineError::validation(
                "catmull-rom path needs at least 2 control points",
            ));
        }
        for p in &points {
            ensure_finite_vec(*p, "path control point")?;
        }
        Ok(Self { points })
    }

    /// Control points in order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Evaluate the path at `u` in `[0, 1]` (clamped).
    pub fn point_at(&self, u: f64) -> Vec3 {
        let u = u.clamp(0.0, 1.0);
        if let [a, b] = self.points.as_slice() {
            return <Vec3 as Lerp>::lerp(a, b, u);
        }
        let s = u * (self.points.len() - 1) as f64;
        catmull_rom_through(&self.points, s).unwrap_or(self.points[0])
    }
}

impl TryFrom<Vec<Vec3>> for CatmullRomPath {
    type Error = CineError;

    fn try_from(points: Vec<Vec3>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<CatmullRomPath> for Vec<Vec3> {
    fn from(path: CatmullRomPath) -> Self {
        path.points
    }
}

/// Cubic Bezier evaluated with De Casteljau's construction.
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f64) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let l = |a: &Vec3, b: &Vec3| <Vec3 as Lerp>::lerp(a, b, t);
    let q0 = l(&p0, &p1);
    let q1 = l(&p1, &p2);
    let q2 = l(&p2, &p3);
    let r0 = l(&q0, &q1);
    let r1 = l(&q1, &q2);
    l(&r0, &r1)
}

/// Four-point cubic Bezier arc.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierArc {
    /// Control points `[start, handle_a, handle_b, end]`.
    pub controls: [Vec3; 4],
}

impl BezierArc {
    /// Crane arc from `start` to `end` rising by `arc_height`.
    ///
    /// The apex reference sits above the midpoint at `max(start.y, end.y) + arc_height`; each handle
    /// lies halfway toward it horizontally at 70% of the arc height above its own endpoint.
    pub fn crane(start: Vec3, end: Vec3, arc_height: f64) -> Self {
        let mid = (start + end) * 0.5;
        let apex = Vec3::new(mid.x, start.y.max(end.y) + arc_height, mid.z);
        let handle = |from: Vec3| {
            let h = from + (apex - from) * 0.5;
            Vec3::new(h.x, from.y + arc_height * 0.7, h.z)
        };
        Self {
            controls: [start, handle(start), handle(end), end],
        }
    }

    /// Evaluate the arc at `t` in `[0, 1]` (clamped).
    pub fn point_at(&self, t: f64) -> Vec3 {
        let [p0, p1, p2, p3] = self.controls;
        cubic_bezier(p0, p1, p2, p3, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spline.rs"]
mod tests;
