use crate::{
    compile::artifact::TimelineArtifact,
    foundation::diagnostic::StageCounts,
};

/// Per-scene line of a [`ProductionSummary`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneReport {
    /// Scene identifier.
    pub scene_id: String,
    /// Camera style used.
    pub camera_style: String,
    /// Movement speed used.
    pub movement_speed: String,
    /// Lighting style used.
    pub lighting_style: String,
    /// Frames covered.
    pub frames: u64,
    /// Accepted cuts.
    pub cuts: usize,
    /// Lights placed.
    pub lights: usize,
    /// Fallbacks taken.
    pub fallbacks: usize,
    /// Hex timeline fingerprint.
    pub fingerprint: String,
}

impl SceneReport {
    /// Summarize one artifact.
    pub fn from_artifact(a: &TimelineArtifact) -> Self {
        Self {
            scene_id: a.scene_id.clone(),
            camera_style: a.camera.rig.style.as_str().to_owned(),
            movement_speed: a.camera.rig.speed.as_str().to_owned(),
            lighting_style: a.lighting_style.as_str().to_owned(),
            frames: a.frame_range.len_frames(),
            cuts: a.markers.len(),
            lights: a.lights.len(),
            fallbacks: a.fallback_count(),
            fingerprint: a.fingerprint().to_string(),
        }
    }
}

/// Production-level counts for the reporting collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductionSummary {
    /// Scenes compiled.
    pub scenes_processed: usize,
    /// Total fallbacks across scenes.
    pub fallbacks_triggered: usize,
    /// Scenes with at least one fallback.
    pub scenes_with_fallbacks: usize,
    /// Total accepted cuts.
    pub cuts_accepted: usize,
    /// Total lights placed.
    pub lights_placed: usize,
    /// Total frames covered.
    pub frames_total: u64,
    /// Fallbacks per stage.
    pub diagnostics_by_stage: StageCounts,
    /// Per-scene lines, in input order.
    pub scenes: Vec<SceneReport>,
}

impl ProductionSummary {
    /// Aggregate compiled artifacts.
    pub fn from_artifacts<'a>(artifacts: impl IntoIterator<Item = &'a TimelineArtifact>) -> Self {
        let mut out = Self::default();
        for a in artifacts {
            out.scenes_processed += 1;
            out.fallbacks_triggered += a.fallback_count();
            if a.fallback_count() > 0 {
                out.scenes_with_fallbacks += 1;
            }
            out.cuts_accepted += a.markers.len();
            out.lights_placed += a.lights.len();
            out.frames_total += a.frame_range.len_frames();
            out.diagnostics_by_stage.merge(a.stage_counts());
            out.scenes.push(SceneReport::from_artifact(a));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/summary.rs"]
mod tests;
