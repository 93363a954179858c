use crate::foundation::core::normalize_token;

/// Lighting rig preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingStyle {
    /// Key, fill and back light.
    ThreePoint,
    /// Hard high key plus a cool rim.
    Dramatic,
    /// Four colored practicals plus a dim ambient.
    Neon,
    /// Sun, sky and ground bounce.
    Natural,
    /// Four softboxes at cardinal offsets.
    Studio,
}

impl LightingStyle {
    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreePoint => "three_point",
            Self::Dramatic => "dramatic",
            Self::Neon => "neon",
            Self::Natural => "natural",
            Self::Studio => "studio",
        }
    }

    /// Parse a style name; `None` when unknown. `3point` and `three-point` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_token(s).as_str() {
            "three_point" | "3point" | "3_point" | "threepoint" => Some(Self::ThreePoint),
            "dramatic" => Some(Self::Dramatic),
            "neon" => Some(Self::Neon),
            "natural" => Some(Self::Natural),
            "studio" => Some(Self::Studio),
            _ => None,
        }
    }

    /// Placement distance unit as a multiple of the scene radius.
    pub const fn radius_factor(self) -> f64 {
        match self {
            Self::ThreePoint | Self::Dramatic => 2.0,
            Self::Neon => 1.5,
            Self::Natural => 3.0,
            Self::Studio => 1.8,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lighting/style.rs"]
mod tests;
