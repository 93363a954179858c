use crate::{
    animation::ease::Ease,
    animation::lerp::Lerp,
    animation::spline::{BezierArc, CatmullRomPath},
    foundation::core::Vec3,
};

/// Camera body trajectory over normalized scene time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Fixed position.
    Hold {
        /// Camera position.
        position: Vec3,
    },
    /// Straight travel between two points.
    Linear {
        /// Position at `t = 0`.
        from: Vec3,
        /// Position at `t = 1`.
        to: Vec3,
        /// Time remapping.
        ease: Ease,
    },
    /// Travel through waypoints along a Catmull-Rom path.
    Path {
        /// Waypoint path.
        path: CatmullRomPath,
        /// Time remapping.
        ease: Ease,
    },
    /// Crane travel along a Bezier arc.
    Arc {
        /// Arc geometry.
        arc: BezierArc,
        /// Time remapping.
        ease: Ease,
    },
}

impl Motion {
    /// Position at normalized time `t` in `[0, 1]`.
    pub fn position_at(&self, t: f64) -> Vec3 {
        match self {
            Self::Hold { position } => *position,
            Self::Linear { from, to, ease } => <Vec3 as Lerp>::lerp(from, to, ease.apply(t)),
            Self::Path { path, ease } => path.point_at(ease.apply(t)),
            // Bounce may overshoot 1; the arc clamps its parameter.
            Self::Arc { arc, ease } => arc.point_at(ease.apply(t)),
        }
    }

    /// Position at `t = 0`.
    pub fn start(&self) -> Vec3 {
        self.position_at(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
