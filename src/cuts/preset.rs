use crate::{animation::lerp::Lerp, foundation::core::normalize_token};

/// Camera framing applied on top of the director pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Framing {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Camera distance relative to the medium shot.
    pub distance_multiplier: f64,
    /// Roll in degrees.
    pub roll_degrees: f64,
    /// Vertical offset as a fraction of the scene radius.
    pub height_offset: f64,
    /// Sideways offset as a fraction of the scene radius.
    pub lateral_offset: f64,
}

impl Lerp for Framing {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let l = |x: f64, y: f64| <f64 as Lerp>::lerp(&x, &y, t);
        Self {
            fov_degrees: l(a.fov_degrees, b.fov_degrees),
            distance_multiplier: l(a.distance_multiplier, b.distance_multiplier),
            roll_degrees: l(a.roll_degrees, b.roll_degrees),
            height_offset: l(a.height_offset, b.height_offset),
            lateral_offset: l(a.lateral_offset, b.lateral_offset),
        }
    }
}

/// Shot size/angle from the shot table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// Establishing shot.
    Wide,
    /// Default framing.
    Medium,
    /// Tight on the subject.
    Closeup,
    /// Detail shot.
    ExtremeCloseup,
    /// Tilted horizon.
    DutchAngle,
    /// Camera below the subject.
    LowAngle,
    /// Camera above the subject.
    HighAngle,
    /// Offset to one side, past a foreground shoulder.
    OverShoulder,
}

const fn framing(
    fov_degrees: f64,
    distance_multiplier: f64,
    roll_degrees: f64,
    height_offset: f64,
    lateral_offset: f64,
) -> Framing {
    Framing {
        fov_degrees,
        distance_multiplier,
        roll_degrees,
        height_offset,
        lateral_offset,
    }
}

impl ShotType {
    /// Table order; auto cuts cycle through it.
    pub const ALL: [Self; 8] = [
        Self::Wide,
        Self::Medium,
        Self::Closeup,
        Self::ExtremeCloseup,
        Self::DutchAngle,
        Self::LowAngle,
        Self::HighAngle,
        Self::OverShoulder,
    ];

    /// Preset framing for this shot.
    pub const fn framing(self) -> Framing {
        match self {
            Self::Wide => framing(60.0, 2.5, 0.0, 0.2, 0.0),
            Self::Medium => framing(50.0, 1.5, 0.0, 0.1, 0.0),
            Self::Closeup => framing(35.0, 0.8, 0.0, 0.05, 0.0),
            Self::ExtremeCloseup => framing(25.0, 0.4, 0.0, 0.02, 0.0),
            Self::DutchAngle => framing(45.0, 1.2, 15.0, 0.15, 0.0),
            Self::LowAngle => framing(50.0, 1.8, 0.0, -0.5, 0.0),
            Self::HighAngle => framing(50.0, 1.8, 0.0, 0.8, 0.0),
            Self::OverShoulder => framing(40.0, 0.6, 0.0, 0.1, 0.3),
        }
    }

    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Medium => "medium",
            Self::Closeup => "closeup",
            Self::ExtremeCloseup => "extreme_closeup",
            Self::DutchAngle => "dutch_angle",
            Self::LowAngle => "low_angle",
            Self::HighAngle => "high_angle",
            Self::OverShoulder => "over_shoulder",
        }
    }

    /// Parse a shot name; `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = normalize_token(s);
        let shot = match norm.as_str() {
            "close_up" => Self::Closeup,
            "extreme_close_up" => Self::ExtremeCloseup,
            "dutch" => Self::DutchAngle,
            other => *Self::ALL.iter().find(|s| s.as_str() == other)?,
        };
        Some(shot)
    }
}

/// Transition into a cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Hard cut.
    Cut,
    /// 5-frame blend.
    Fast,
    /// 15-frame blend.
    Smooth,
    /// 30-frame blend.
    Slow,
}

impl Transition {
    /// Blend length in frames ending at the cut frame.
    pub const fn blend_frames(self) -> u64 {
        match self {
            Self::Cut => 0,
            Self::Fast => 5,
            Self::Smooth => 15,
            Self::Slow => 30,
        }
    }

    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Fast => "fast",
            Self::Smooth => "smooth",
            Self::Slow => "slow",
        }
    }

    /// Parse a transition name; `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_token(s).as_str() {
            "cut" => Some(Self::Cut),
            "fast" => Some(Self::Fast),
            "smooth" => Some(Self::Smooth),
            "slow" => Some(Self::Slow),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cuts/preset.rs"]
mod tests;
