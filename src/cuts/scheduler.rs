use crate::{
    animation::ease::Ease,
    animation::lerp::Lerp,
    cuts::preset::{Framing, ShotType, Transition},
    foundation::diagnostic::{Diagnostic, DiagnosticKind, Stage},
    foundation::math::knot_rng,
};

/// Largest azimuth re-angle applied at a cut, in radians either way.
pub const CUT_ANGLE_VARIATION: f64 = 0.3;

// Separate knot stream from handheld jitter, which shares the scene seed.
const CUT_ANGLE_STREAM: u64 = 0x2f6b_c1a4_93d5_e807;

/// Requested framing change, as written in a scene request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CutEvent {
    /// Frame at which the new framing is fully reached. Negative values clamp to 0.
    pub frame: i64,
    /// Shot name from the shot table.
    #[serde(alias = "type")]
    pub shot_type: String,
    /// Transition name; defaults to `cut` for the first event and `smooth` afterwards.
    #[serde(default)]
    pub transition: Option<String>,
}

impl CutEvent {
    /// Event with the default transition.
    pub fn new(frame: i64, shot_type: impl Into<String>) -> Self {
        Self {
            frame,
            shot_type: shot_type.into(),
            transition: None,
        }
    }

    /// Set an explicit transition.
    pub fn with_transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = Some(transition.into());
        self
    }
}

/// Cut accepted by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedCut {
    /// Frame inside `[0, duration)`.
    pub frame: u64,
    /// Resolved shot.
    pub shot: ShotType,
    /// Resolved transition into this cut.
    pub transition: Transition,
    /// Camera azimuth change around the look-at point, radians, within
    /// `[-CUT_ANGLE_VARIATION, CUT_ANGLE_VARIATION)`.
    pub angle_offset: f64,
}

/// Named timeline marker at an accepted cut.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CutMarker {
    /// `CUT_{n}_{shot}` with `n` starting at 1.
    pub name: String,
    /// Marker frame.
    pub frame: u64,
}

/// Piecewise framing over the scene, blended at transitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramingCurve {
    cuts: Vec<ResolvedCut>,
}

impl FramingCurve {
    /// Framing used when a scene carries no cuts.
    pub const DEFAULT_SHOT: ShotType = ShotType::Medium;

    /// Curve from already-resolved cuts. Cuts must be sorted by strictly increasing frame.
    fn from_sorted(cuts: Vec<ResolvedCut>) -> Self {
        debug_assert!(cuts.windows(2).all(|w| w[0].frame < w[1].frame));
        Self { cuts }
    }

    /// Accepted cuts in frame order.
    pub fn cuts(&self) -> &[ResolvedCut] {
        &self.cuts
    }

    /// `true` when at least one cut was accepted.
    pub fn is_explicit(&self) -> bool {
        !self.cuts.is_empty()
    }

    /// Framing at a (possibly fractional) frame.
    ///
    /// Before the first cut the first cut's framing holds. Inside a blend window, which ends at
    /// the later cut's frame and never starts before the earlier one, framing eases in-out.
    pub fn sample(&self, frame: f64) -> Framing {
        match self.segment(frame) {
            None => Self::DEFAULT_SHOT.framing(),
            Some((cur, None)) => cur.shot.framing(),
            Some((cur, Some((next, p)))) => {
                Framing::lerp(&cur.shot.framing(), &next.shot.framing(), p)
            }
        }
    }

    /// Cut azimuth offset at a (possibly fractional) frame, blended like [`Self::sample`].
    pub fn angle_at(&self, frame: f64) -> f64 {
        match self.segment(frame) {
            None => 0.0,
            Some((cur, None)) => cur.angle_offset,
            Some((cur, Some((next, p)))) => {
                <f64 as Lerp>::lerp(&cur.angle_offset, &next.angle_offset, p)
            }
        }
    }

    // Cut in effect at `frame`, plus the next cut and eased progress inside a blend window.
    fn segment(&self, frame: f64) -> Option<(ResolvedCut, Option<(ResolvedCut, f64)>)> {
        let first = *self.cuts.first()?;
        let idx = self.cuts.partition_point(|c| (c.frame as f64) <= frame);
        if idx == 0 {
            return Some((first, None));
        }
        let cur = self.cuts[idx - 1];
        let Some(&next) = self.cuts.get(idx) else {
            return Some((cur, None));
        };

        let blend = next.transition.blend_frames();
        let end = next.frame as f64;
        let start = next.frame.saturating_sub(blend).max(cur.frame) as f64;
        if blend == 0 || frame <= start || end <= start {
            return Some((cur, None));
        }
        let p = Ease::EaseInOut.apply((frame - start) / (end - start));
        Some((cur, Some((next, p))))
    }
}

/// Output of [`resolve_cuts`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutSchedule {
    /// Framing over time.
    pub framing: FramingCurve,
    /// One marker per accepted cut.
    pub markers: Vec<CutMarker>,
    /// Fallbacks taken while resolving.
    pub diagnostics: Vec<Diagnostic>,
}

struct Pending {
    frame: u64,
    shot: ShotType,
    transition: Option<Transition>,
}

/// Resolve requested framing events into a framing curve over `[0, duration_frames)`.
///
/// `seed` draws each accepted cut's azimuth offset; the same seed and events give the same
/// angles.
#[tracing::instrument(level = "debug", skip(events), fields(events = events.len()))]
pub fn resolve_cuts(events: &[CutEvent], duration_frames: u64, seed: u64) -> CutSchedule {
    let mut diagnostics = Vec::new();
    let mut pending = Vec::with_capacity(events.len());

    for ev in events {
        let frame = if ev.frame < 0 {
            diagnostics.push(Diagnostic::emit(
                Stage::Cuts,
                DiagnosticKind::CutClampedToStart,
                format!("cut at frame {} clamped to frame 0", ev.frame),
            ));
            0
        } else {
            ev.frame as u64
        };
        if frame >= duration_frames {
            diagnostics.push(Diagnostic::emit(
                Stage::Cuts,
                DiagnosticKind::CutBeyondDuration,
                format!(
                    "cut at frame {frame} is outside the scene ({duration_frames} frames), dropped"
                ),
            ));
            continue;
        }

        let shot = ShotType::parse(&ev.shot_type).unwrap_or_else(|| {
            diagnostics.push(Diagnostic::emit(
                Stage::Cuts,
                DiagnosticKind::UnknownShotType,
                format!(
                    "unknown shot type '{}' at frame {frame}, using {}",
                    ev.shot_type,
                    FramingCurve::DEFAULT_SHOT.as_str()
                ),
            ));
            FramingCurve::DEFAULT_SHOT
        });

        let transition = ev.transition.as_deref().map(|name| {
            Transition::parse(name).unwrap_or_else(|| {
                diagnostics.push(Diagnostic::emit(
                    Stage::Cuts,
                    DiagnosticKind::UnknownTransition,
                    format!("unknown transition '{name}' at frame {frame}, using smooth"),
                ));
                Transition::Smooth
            })
        });

        pending.push(Pending {
            frame,
            shot,
            transition,
        });
    }

    // Stable: equal frames keep request order so the last one wins below.
    pending.sort_by_key(|p| p.frame);

    let mut kept: Vec<Pending> = Vec::with_capacity(pending.len());
    for p in pending {
        if let Some(last) = kept.last_mut()
            && last.frame == p.frame
        {
            diagnostics.push(Diagnostic::emit(
                Stage::Cuts,
                DiagnosticKind::DuplicateCutFrame,
                format!(
                    "several cuts at frame {}, keeping {}",
                    p.frame,
                    p.shot.as_str()
                ),
            ));
            *last = p;
            continue;
        }
        kept.push(p);
    }

    let cuts: Vec<ResolvedCut> = kept
        .into_iter()
        .enumerate()
        .map(|(i, p)| ResolvedCut {
            frame: p.frame,
            shot: p.shot,
            transition: p.transition.unwrap_or(if i == 0 {
                Transition::Cut
            } else {
                Transition::Smooth
            }),
            angle_offset: cut_angle(seed, i),
        })
        .collect();

    let markers = cuts
        .iter()
        .enumerate()
        .map(|(i, c)| CutMarker {
            name: format!("CUT_{}_{}", i + 1, c.shot.as_str()),
            frame: c.frame,
        })
        .collect();

    tracing::debug!(accepted = cuts.len(), "cuts resolved");

    CutSchedule {
        framing: FramingCurve::from_sorted(cuts),
        markers,
        diagnostics,
    }
}

fn cut_angle(seed: u64, index: usize) -> f64 {
    knot_rng(seed ^ CUT_ANGLE_STREAM, index as i64).next_signed() * CUT_ANGLE_VARIATION
}

#[cfg(test)]
#[path = "../../tests/unit/cuts/scheduler.rs"]
mod tests;
