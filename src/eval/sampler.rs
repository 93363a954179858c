use glam::DQuat;

use crate::{
    camera::director::{CameraPose, CameraRig},
    cuts::preset::{Framing, ShotType},
    cuts::scheduler::FramingCurve,
    foundation::core::{FrameRange, Vec3, WORLD_UP},
    scene::model::SceneMetrics,
};

/// Camera pose curve for one scene: director motion with the framing curve applied on top.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraTrack {
    /// Director output.
    pub rig: CameraRig,
    /// Framing over time.
    pub framing: FramingCurve,
    /// Scene metrics used to scale framing offsets.
    pub metrics: SceneMetrics,
}

impl CameraTrack {
    /// Final camera pose at a (possibly fractional) frame.
    pub fn pose_at(&self, frame: f64) -> CameraPose {
        let base = self.rig.pose_at(frame);
        if !self.framing.is_explicit() {
            return base;
        }
        apply_framing(
            base,
            &self.framing.sample(frame),
            self.framing.angle_at(frame),
            self.metrics.radius,
        )
    }
}

/// Apply a framing to a director pose.
///
/// The camera first swings `azimuth_offset` radians around the look-at point (about +Y). Distance
/// from the look-at point then scales relative to the medium shot, height and lateral offsets
/// move the camera in units of `scene_radius`, roll adds up and the framing FOV replaces the
/// style FOV. Depth of field refocuses on the look-at point.
pub fn apply_framing(
    base: CameraPose,
    framing: &Framing,
    azimuth_offset: f64,
    scene_radius: f64,
) -> CameraPose {
    let reference = ShotType::Medium.framing().distance_multiplier;
    let offset =
        DQuat::from_axis_angle(WORLD_UP, azimuth_offset) * (base.position - base.look_at);
    let forward = (-offset).try_normalize().unwrap_or(Vec3::NEG_Z);
    let right = forward.cross(WORLD_UP).try_normalize().unwrap_or(Vec3::X);

    let position = base.look_at
        + offset * (framing.distance_multiplier / reference)
        + WORLD_UP * (framing.height_offset * scene_radius)
        + right * (framing.lateral_offset * scene_radius);

    let dof = base.dof.map(|mut d| {
        d.focus_distance = (base.look_at - position).length();
        d
    });

    CameraPose {
        position,
        fov_degrees: framing.fov_degrees,
        roll_degrees: base.roll_degrees + framing.roll_degrees,
        dof,
        ..base
    }
}

/// One baked camera key.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraSample {
    /// Frame index.
    pub frame: u64,
    /// Pose at that frame.
    pub pose: CameraPose,
}

/// Sample `track` every `stride` frames over `range`, always including the last frame.
pub fn bake_camera(track: &CameraTrack, range: FrameRange, stride: u64) -> Vec<CameraSample> {
    if range.is_empty() {
        return Vec::new();
    }
    let stride = stride.max(1);
    let last = range.end.0 - 1;
    let mut out = Vec::with_capacity((range.len_frames() / stride + 2) as usize);
    let mut f = range.start.0;
    while f <= last {
        out.push(CameraSample {
            frame: f,
            pose: track.pose_at(f as f64),
        });
        f += stride;
    }
    if out.last().is_some_and(|s| s.frame != last) {
        out.push(CameraSample {
            frame: last,
            pose: track.pose_at(last as f64),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sampler.rs"]
mod tests;
