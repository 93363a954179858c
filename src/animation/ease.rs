use crate::foundation::core::normalize_token;

/// Named easing curve mapping normalized time to progress.
///
/// Every variant maps 0 to 0. Every variant except [`Ease::Bounce`] maps 1 to 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease in.
    EaseIn,
    /// Quadratic ease out.
    EaseOut,
    /// Quadratic ease in-out.
    #[default]
    EaseInOut,
    /// Cubic ease in.
    EaseInCubic,
    /// Cubic ease out.
    EaseOutCubic,
    /// Cubic ease in-out.
    EaseInOutCubic,
    /// Exponential ease in.
    EaseInExpo,
    /// Exponential ease out.
    EaseOutExpo,
    /// Bounce-out. Not guaranteed to settle exactly at 1.
    Bounce,
}

impl Ease {
    /// All variants in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Linear,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::Bounce,
    ];

    /// Evaluate the curve. `t` is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseInExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::Bounce => bounce_out(t),
        }
    }

    /// Parse a snake-case name (`-` and spaces are accepted as separators).
    ///
    /// Returns `None` for unknown names; callers fall back to [`Ease::default`].
    pub fn from_name(name: &str) -> Option<Self> {
        let e = match normalize_token(name).as_str() {
            "linear" => Self::Linear,
            "ease_in" => Self::EaseIn,
            "ease_out" => Self::EaseOut,
            "ease_in_out" => Self::EaseInOut,
            "ease_in_cubic" => Self::EaseInCubic,
            "ease_out_cubic" => Self::EaseOutCubic,
            "ease_in_out_cubic" => Self::EaseInOutCubic,
            "ease_in_expo" => Self::EaseInExpo,
            "ease_out_expo" => Self::EaseOutExpo,
            "bounce" => Self::Bounce,
            _ => return None,
        };
        Some(e)
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
