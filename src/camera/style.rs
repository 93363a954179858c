use crate::foundation::core::normalize_token;

/// Camera movement style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStyle {
    /// Fixed three-quarter view.
    Static,
    /// Lateral travel, optionally through waypoints or along a crane arc.
    Dolly,
    /// Circle around the focus point.
    Orbit,
    /// Static view with smooth pseudo-random shake.
    Handheld,
    /// Fixed offset from a tracked target, with depth of field.
    Tracking,
}

impl CameraStyle {
    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dolly => "dolly",
            Self::Orbit => "orbit",
            Self::Handheld => "handheld",
            Self::Tracking => "tracking",
        }
    }

    /// Parse a style name; `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_token(s).as_str() {
            "static" => Some(Self::Static),
            "dolly" => Some(Self::Dolly),
            "orbit" => Some(Self::Orbit),
            "handheld" | "hand_held" => Some(Self::Handheld),
            "tracking" => Some(Self::Tracking),
            _ => None,
        }
    }

    /// Field of view used when the scene carries no cuts.
    pub const fn base_fov_degrees(self) -> f64 {
        match self {
            Self::Static | Self::Orbit => 50.0,
            Self::Dolly | Self::Tracking => 45.0,
            Self::Handheld => 40.0,
        }
    }
}

/// Movement speed preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementSpeed {
    /// 0.3x.
    Slow,
    /// 1x.
    Medium,
    /// 2.5x.
    Fast,
}

impl MovementSpeed {
    /// Multiplier applied to travel distance, orbit turns and shake amplitude.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Slow => 0.3,
            Self::Medium => 1.0,
            Self::Fast => 2.5,
        }
    }

    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }

    /// Parse a speed name; `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_token(s).as_str() {
            "slow" => Some(Self::Slow),
            "medium" => Some(Self::Medium),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/style.rs"]
mod tests;
