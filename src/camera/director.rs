use std::f64::consts::TAU;

use crate::{
    animation::ease::Ease,
    animation::motion::Motion,
    animation::spline::{BezierArc, CatmullRomPath, catmull_rom},
    camera::style::{CameraStyle, MovementSpeed},
    foundation::core::{Vec3, WORLD_UP, normalized_time},
    foundation::diagnostic::{Diagnostic, DiagnosticKind, Stage},
    foundation::math::knot_rng,
    scene::model::{CameraRequest, SceneMetrics},
};

/// Depth-of-field settings for the backend camera.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepthOfField {
    /// Focus distance in world units.
    pub focus_distance: f64,
    /// Aperture f-number.
    pub f_stop: f64,
}

/// Camera state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Camera position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// Up vector before roll is applied.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Roll around the view axis in degrees.
    pub roll_degrees: f64,
    /// Optional depth of field.
    pub dof: Option<DepthOfField>,
}

/// Tuning for the camera director.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectorOpts {
    /// Frames between handheld jitter knots.
    pub jitter_knot_spacing: u64,
    /// Handheld positional amplitude at medium speed, in world units.
    pub jitter_amplitude: f64,
    /// Handheld roll amplitude at medium speed, in degrees.
    pub jitter_roll_degrees: f64,
}

impl Default for DirectorOpts {
    fn default() -> Self {
        Self {
            jitter_knot_spacing: 5,
            jitter_amplitude: 0.05,
            jitter_roll_degrees: 0.3,
        }
    }
}

/// Smooth bounded shake built from seeded knots.
///
/// Knot `i` sits at frame `i * knot_spacing`; values between knots follow a Catmull-Rom curve and
/// are clamped to the amplitude so the shake never exceeds its bound.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandheldJitter {
    /// Stream seed.
    pub seed: u64,
    /// Frames between knots (at least 1).
    pub knot_spacing: u64,
    /// Horizontal amplitude; vertical uses half of it.
    pub amplitude: f64,
    /// Roll amplitude in degrees.
    pub roll_degrees: f64,
}

impl HandheldJitter {
    fn knot(&self, index: i64) -> (Vec3, f64) {
        let mut rng = knot_rng(self.seed, index);
        let offset = Vec3::new(
            rng.next_signed() * self.amplitude,
            rng.next_signed() * self.amplitude * 0.5,
            rng.next_signed() * self.amplitude,
        );
        let roll = rng.next_signed() * self.roll_degrees;
        (offset, roll)
    }

    /// Positional offset and roll at a (possibly fractional) frame.
    pub fn sample(&self, frame: f64) -> (Vec3, f64) {
        let s = frame.max(0.0) / self.knot_spacing.max(1) as f64;
        let i = s.floor() as i64;
        let local = s - i as f64;
        let (p1, r1) = self.knot(i);
        if local == 0.0 {
            return (p1, r1);
        }
        let (p0, r0) = self.knot(i - 1);
        let (p2, r2) = self.knot(i + 1);
        let (p3, r3) = self.knot(i + 2);

        let bound = Vec3::new(self.amplitude, self.amplitude * 0.5, self.amplitude);
        let offset = catmull_rom(p0, p1, p2, p3, local).clamp(-bound, bound);
        let roll = catmull_rom(r0, r1, r2, r3, local).clamp(-self.roll_degrees, self.roll_degrees);
        (offset, roll)
    }
}

/// How the camera body moves over the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoseProgram {
    /// Trajectory over normalized time.
    Travel {
        /// Body motion.
        motion: Motion,
    },
    /// Circle around the focus point.
    Orbit {
        /// Circle radius.
        radius: f64,
        /// Height above the focus point.
        height: f64,
        /// Angle at `t = 0`, radians.
        start_angle: f64,
        /// Revolutions completed at `t = 1`.
        turns: f64,
    },
    /// Fixed base position plus jitter.
    Handheld {
        /// Base position.
        base: Vec3,
        /// Shake generator.
        jitter: HandheldJitter,
    },
}

/// Resolved camera behavior for one scene: a continuous pose function of frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraRig {
    /// Style actually used, after fallbacks.
    pub style: CameraStyle,
    /// Speed actually used, after fallbacks.
    pub speed: MovementSpeed,
    /// Look-at point.
    pub focus: Vec3,
    /// Scene length in frames.
    pub duration_frames: u64,
    /// Style field of view in degrees.
    pub fov_degrees: f64,
    /// Depth of field, when the style enables it.
    pub dof: Option<DepthOfField>,
    /// Body motion.
    pub program: PoseProgram,
}

impl CameraRig {
    /// Pose at a (possibly fractional) frame. Defined for every frame; values outside the scene
    /// clamp to its ends.
    pub fn pose_at(&self, frame: f64) -> CameraPose {
        let t = normalized_time(frame, self.duration_frames);
        let (position, roll_degrees) = match &self.program {
            PoseProgram::Travel { motion } => (motion.position_at(t), 0.0),
            PoseProgram::Orbit {
                radius,
                height,
                start_angle,
                turns,
            } => {
                let a = start_angle + TAU * turns * t;
                let offset = Vec3::new(radius * a.cos(), *height, -radius * a.sin());
                (self.focus + offset, 0.0)
            }
            PoseProgram::Handheld { base, jitter } => {
                let clamped = frame.clamp(0.0, self.duration_frames.saturating_sub(1) as f64);
                let (offset, roll) = jitter.sample(clamped);
                (*base + offset, roll)
            }
        };
        CameraPose {
            position,
            look_at: self.focus,
            up: WORLD_UP,
            fov_degrees: self.fov_degrees,
            roll_degrees,
            dof: self.dof,
        }
    }
}

/// Output of [`resolve_camera`].
#[derive(Clone, Debug, PartialEq)]
pub struct CameraResolution {
    /// Resolved rig.
    pub rig: CameraRig,
    /// Fallbacks taken while resolving.
    pub diagnostics: Vec<Diagnostic>,
}

fn static_position(focus: Vec3, m: &SceneMetrics) -> Vec3 {
    let d = 2.5 * m.max_extent;
    focus + Vec3::new(0.7 * d, 0.3 * d, 0.7 * d)
}

/// Resolve a camera request into a rig.
///
/// `target` is the tracking/look-at point; when absent the bounds center is used. `seed` drives
/// the handheld shake.
pub fn resolve_camera(
    request: &CameraRequest,
    target: Option<Vec3>,
    metrics: &SceneMetrics,
    duration_frames: u64,
    seed: u64,
    opts: &DirectorOpts,
) -> CameraResolution {
    let mut diagnostics = Vec::new();
    let mut warn = |kind: DiagnosticKind, msg: String| {
        diagnostics.push(Diagnostic::emit(Stage::Camera, kind, msg));
    };

    let mut style = CameraStyle::parse(&request.style).unwrap_or_else(|| {
        warn(
            DiagnosticKind::UnknownCameraStyle,
            format!("unknown camera style '{}', using static", request.style),
        );
        CameraStyle::Static
    });
    let speed = MovementSpeed::parse(&request.movement_speed).unwrap_or_else(|| {
        warn(
            DiagnosticKind::UnknownMovementSpeed,
            format!(
                "unknown movement speed '{}', using medium",
                request.movement_speed
            ),
        );
        MovementSpeed::Medium
    });
    if style == CameraStyle::Tracking && target.is_none() {
        warn(
            DiagnosticKind::MissingTrackingTarget,
            "tracking requested without a target point, using static on the bounds center"
                .to_owned(),
        );
        style = CameraStyle::Static;
    }

    let explicit_ease = request.easing.as_deref().map(|name| {
        Ease::from_name(name).unwrap_or_else(|| {
            warn(
                DiagnosticKind::UnknownEasing,
                format!("unknown easing '{name}', using ease_in_out"),
            );
            Ease::default()
        })
    });

    if style != CameraStyle::Dolly {
        if !request.waypoints.is_empty() {
            warn(
                DiagnosticKind::IgnoredParameter,
                format!("waypoints are ignored by the {} style", style.as_str()),
            );
        }
        if request.crane_height > 0.0 {
            warn(
                DiagnosticKind::IgnoredParameter,
                format!("crane_height is ignored by the {} style", style.as_str()),
            );
        }
    }

    let focus = target.unwrap_or(metrics.center);
    let mul = speed.multiplier();
    let mut dof = None;

    let program = match style {
        CameraStyle::Static => PoseProgram::Travel {
            motion: Motion::Hold {
                position: static_position(focus, metrics),
            },
        },
        CameraStyle::Dolly => {
            let travel = metrics.size.x.max(metrics.size.z) * mul;
            let y = 0.5 * metrics.size.y;
            let z = 2.0 * metrics.max_extent;
            let from = focus + Vec3::new(-travel / 2.0, y, z);
            let to = focus + Vec3::new(travel / 2.0, y, z);

            let waypoints = match request.waypoints.len() {
                0 => None,
                1 => {
                    warn(
                        DiagnosticKind::IgnoredParameter,
                        "a single waypoint cannot define a path, using straight dolly travel"
                            .to_owned(),
                    );
                    None
                }
                // Points were validated finite at construction.
                _ => CatmullRomPath::new(request.waypoints.clone()).ok(),
            };

            let motion = if let Some(path) = waypoints {
                if request.crane_height > 0.0 {
                    warn(
                        DiagnosticKind::IgnoredParameter,
                        "crane_height is ignored when waypoints are given".to_owned(),
                    );
                }
                Motion::Path {
                    path,
                    ease: explicit_ease.unwrap_or_default(),
                }
            } else if request.crane_height > 0.0 {
                Motion::Arc {
                    arc: BezierArc::crane(from, to, request.crane_height),
                    ease: explicit_ease.unwrap_or_default(),
                }
            } else {
                Motion::Linear {
                    from,
                    to,
                    ease: explicit_ease.unwrap_or(Ease::Linear),
                }
            };
            PoseProgram::Travel { motion }
        }
        CameraStyle::Orbit => PoseProgram::Orbit {
            radius: 1.8 * metrics.max_extent,
            height: 0.3 * metrics.size.y,
            start_angle: (-45f64).to_radians(),
            turns: mul,
        },
        CameraStyle::Handheld => PoseProgram::Handheld {
            base: static_position(focus, metrics),
            jitter: HandheldJitter {
                seed,
                knot_spacing: opts.jitter_knot_spacing.max(1),
                amplitude: (opts.jitter_amplitude * mul).abs(),
                roll_degrees: (opts.jitter_roll_degrees * mul).abs(),
            },
        },
        CameraStyle::Tracking => {
            let offset = Vec3::new(0.0, 0.5 * metrics.size.y, 2.0 * metrics.max_extent);
            dof = Some(DepthOfField {
                focus_distance: offset.length(),
                f_stop: 2.0,
            });
            PoseProgram::Travel {
                motion: Motion::Hold {
                    position: focus + offset,
                },
            }
        }
    };

    tracing::debug!(
        style = style.as_str(),
        speed = speed.as_str(),
        "camera resolved"
    );

    CameraResolution {
        rig: CameraRig {
            style,
            speed,
            focus,
            duration_frames,
            fov_degrees: style.base_fov_degrees(),
            dof,
            program,
        },
        diagnostics,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/director.rs"]
mod tests;
