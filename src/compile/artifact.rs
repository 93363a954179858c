use crate::{
    camera::director::CameraPose,
    compile::fingerprint::{TimelineFingerprint, fingerprint_artifact},
    cuts::scheduler::CutMarker,
    eval::sampler::{CameraSample, CameraTrack, bake_camera},
    foundation::core::{FrameIndex, FrameRange},
    foundation::diagnostic::{Diagnostic, StageCounts},
    lighting::rig::LightRig,
    lighting::style::LightingStyle,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fully resolved timeline for one scene.
///
/// The artifact covers every frame of `frame_range`; fallbacks taken while compiling are listed in
/// `diagnostics` and never leave gaps.
pub struct TimelineArtifact {
    /// Scene identifier.
    pub scene_id: String,
    /// `[0, duration_frames)`.
    pub frame_range: FrameRange,
    /// Camera pose curve.
    pub camera: CameraTrack,
    /// One marker per accepted cut.
    pub markers: Vec<CutMarker>,
    /// Lighting style actually used.
    pub lighting_style: LightingStyle,
    /// Resolved lights, in stable order.
    pub lights: LightRig,
    /// Fallbacks taken while compiling.
    pub diagnostics: Vec<Diagnostic>,
    /// Pre-sampled camera keys, when requested at compile time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub baked: Vec<CameraSample>,
}

impl TimelineArtifact {
    /// Camera pose at `frame`, clamped into the scene.
    pub fn sample(&self, frame: FrameIndex) -> CameraPose {
        let f = self.frame_range.clamp(frame);
        self.camera.pose_at(f.0 as f64)
    }

    /// Camera keys every `stride` frames (0 is treated as 1), always including the last frame.
    pub fn bake(&self, stride: u64) -> Vec<CameraSample> {
        bake_camera(&self.camera, self.frame_range, stride)
    }

    /// Stable digest for determinism checks.
    pub fn fingerprint(&self) -> TimelineFingerprint {
        fingerprint_artifact(self)
    }

    /// Number of fallbacks taken.
    pub fn fallback_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Fallbacks per stage.
    pub fn stage_counts(&self) -> StageCounts {
        StageCounts::tally(&self.diagnostics)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/artifact.rs"]
mod tests;
