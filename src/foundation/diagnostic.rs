/// Pipeline stage that recovered from an input problem.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Camera director.
    Camera,
    /// Cuts scheduler.
    Cuts,
    /// Lighting rig resolver.
    Lighting,
}

impl Stage {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Cuts => "cuts",
            Self::Lighting => "lighting",
        }
    }
}

/// Category of a recovered input problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Camera style string did not match any known style.
    UnknownCameraStyle,
    /// Movement speed string did not match any known speed.
    UnknownMovementSpeed,
    /// Easing name did not match any known curve.
    UnknownEasing,
    /// Tracking style requested without a target point.
    MissingTrackingTarget,
    /// A request parameter has no effect for the resolved style.
    IgnoredParameter,
    /// Shot type string did not match the shot table.
    UnknownShotType,
    /// Transition string did not match the transition table.
    UnknownTransition,
    /// Cut frame at or past the scene end; the cut was dropped.
    CutBeyondDuration,
    /// Negative cut frame clamped to frame 0.
    CutClampedToStart,
    /// Several cuts on one frame; only the last one was kept.
    DuplicateCutFrame,
    /// Lighting style string did not match any known style.
    UnknownLightingStyle,
    /// Lighting intensity outside the accepted range.
    IntensityClamped,
    /// Color temperature outside the accepted range.
    ColorTemperatureClamped,
}

/// Structured record of a fallback taken during compilation.
///
/// Diagnostics are informational: the artifact they are attached to is always complete.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// Stage that produced the diagnostic.
    pub stage: Stage,
    /// Problem category.
    pub kind: DiagnosticKind,
    /// Human-readable description including the substituted value.
    pub message: String,
}

impl Diagnostic {
    /// Record a diagnostic and log it at `warn` level.
    pub(crate) fn emit(stage: Stage, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(stage = stage.as_str(), ?kind, "{message}");
        Self {
            stage,
            kind,
            message,
        }
    }
}

/// Per-stage diagnostic counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageCounts {
    /// Camera diagnostics.
    pub camera: usize,
    /// Cuts diagnostics.
    pub cuts: usize,
    /// Lighting diagnostics.
    pub lighting: usize,
}

impl StageCounts {
    /// Count diagnostics by stage.
    pub fn tally<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Self {
        let mut out = Self::default();
        for d in diagnostics {
            out.bump(d.stage);
        }
        out
    }

    pub(crate) fn bump(&mut self, stage: Stage) {
        match stage {
            Stage::Camera => self.camera += 1,
            Stage::Cuts => self.cuts += 1,
            Stage::Lighting => self.lighting += 1,
        }
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: Self) {
        self.camera += other.camera;
        self.cuts += other.cuts;
        self.lighting += other.lighting;
    }

    /// Total across all stages.
    pub fn total(self) -> usize {
        self.camera + self.cuts + self.lighting
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diagnostic.rs"]
mod tests;
