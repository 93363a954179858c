use crate::foundation::error::{CineError, CineResult};

pub use glam::DVec3 as Vec3;

/// World up axis. Scene space is right-handed and Y-up.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Absolute 0-based frame index in scene timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> CineResult<Self> {
        if start.0 > end.0 {
            return Err(CineError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range covering `[0, duration_frames)`.
    pub fn from_duration(duration_frames: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(duration_frames),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp a frame index into this range.
    ///
    /// Empty ranges clamp to `start`.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// Map a (possibly fractional) frame onto normalized scene time `[0, 1]`.
///
/// The first frame maps to 0 and the last frame (`duration - 1`) maps to 1, so motions that
/// "complete" over the scene land exactly on the final rendered frame.
pub fn normalized_time(frame: f64, duration_frames: u64) -> f64 {
    if duration_frames <= 1 {
        return 0.0;
    }
    (frame / (duration_frames - 1) as f64).clamp(0.0, 1.0)
}

/// Canonical form of a style/preset name: trimmed, lowercase, `-` and spaces folded to `_`.
pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

pub(crate) fn ensure_finite_vec(v: Vec3, field: &str) -> CineResult<()> {
    if !v.is_finite() {
        return Err(CineError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

pub(crate) fn ensure_finite(v: f64, field: &str) -> CineResult<()> {
    if !v.is_finite() {
        return Err(CineError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
