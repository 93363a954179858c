use crate::{
    cuts::preset::{ShotType, Transition},
    cuts::scheduler::CutEvent,
    foundation::math::Rng64,
};

/// Maximum deviation, in frames, applied to each auto-cut interval when `variety` is on.
pub const AUTO_CUT_JITTER: i64 = 20;

/// Generate a deterministic cut list over `[0, duration_frames)`.
///
/// With `variety` the shots cycle through [`ShotType::ALL`] and each interval is jittered by up to
/// [`AUTO_CUT_JITTER`] frames from a generator seeded with `seed`. Without it the shots alternate
/// medium and wide at a fixed interval. The first cut is a hard cut, later ones are smooth.
pub fn generate_auto_cuts(
    duration_frames: u64,
    interval: u64,
    variety: bool,
    seed: u64,
) -> Vec<CutEvent> {
    let mut rng = Rng64::new(seed);
    let interval = interval.max(1) as i64;
    let end = duration_frames as i64;

    let mut out = Vec::new();
    let mut frame = 0i64;
    let mut i = 0usize;
    while frame < end {
        let shot = if variety {
            ShotType::ALL[i % ShotType::ALL.len()]
        } else if i % 2 == 0 {
            ShotType::Medium
        } else {
            ShotType::Wide
        };
        let transition = if i == 0 {
            Transition::Cut
        } else {
            Transition::Smooth
        };
        out.push(CutEvent::new(frame, shot.as_str()).with_transition(transition.as_str()));

        let step = if variety {
            interval + rng.next_range_i64(-AUTO_CUT_JITTER, AUTO_CUT_JITTER)
        } else {
            interval
        };
        frame += step.max(1);
        i += 1;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/cuts/auto.rs"]
mod tests;
