use xxhash_rust::xxh3::Xxh3;

use crate::{
    camera::director::CameraPose,
    compile::artifact::TimelineArtifact,
    foundation::core::Vec3,
    lighting::rig::LightDescriptor,
};

const XXH3_SEED: u64 = 0x6a3c_91e2_d4f0_57b8;

/// Stable 128-bit digest of a compiled timeline.
///
/// Covers the sampled camera pose at every frame, markers, lights and diagnostics, so two
/// artifacts that behave identically hash identically regardless of machine or thread.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for TimelineFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub(crate) fn fingerprint_artifact(a: &TimelineArtifact) -> TimelineFingerprint {
    let mut h = StableHasher::new();
    h.write_str(&a.scene_id);
    h.write_u64(a.frame_range.start.0);
    h.write_u64(a.frame_range.end.0);

    for f in a.frame_range.start.0..a.frame_range.end.0 {
        write_pose(&mut h, &a.camera.pose_at(f as f64));
    }

    h.write_u64(a.markers.len() as u64);
    for m in &a.markers {
        h.write_str(&m.name);
        h.write_u64(m.frame);
    }

    h.write_u64(a.lights.len() as u64);
    for l in &a.lights {
        write_light(&mut h, l);
    }

    h.write_u64(a.diagnostics.len() as u64);
    for d in &a.diagnostics {
        h.write_str(d.stage.as_str());
        h.write_str(&d.message);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_vec3(&mut self, v: Vec3) {
        self.write_f64(v.x);
        self.write_f64(v.y);
        self.write_f64(v.z);
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> TimelineFingerprint {
        let v = self.inner.digest128();
        TimelineFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_pose(h: &mut StableHasher, p: &CameraPose) {
    h.write_vec3(p.position);
    h.write_vec3(p.look_at);
    h.write_vec3(p.up);
    h.write_f64(p.fov_degrees);
    h.write_f64(p.roll_degrees);
    match p.dof {
        None => h.write_u8(0),
        Some(d) => {
            h.write_u8(1);
            h.write_f64(d.focus_distance);
            h.write_f64(d.f_stop);
        }
    }
}

fn write_light(h: &mut StableHasher, l: &LightDescriptor) {
    h.write_str(&l.name);
    h.write_u8(l.role as u8);
    h.write_u8(l.kind as u8);
    h.write_vec3(l.position);
    h.write_vec3(l.direction);
    match l.color_temperature_kelvin {
        None => h.write_u8(0),
        Some(k) => {
            h.write_u8(1);
            h.write_f64(k);
        }
    }
    for c in l.color_rgb {
        h.write_f64(c);
    }
    h.write_f64(l.intensity);
    h.write_f64(l.size);
    match l.spot {
        None => h.write_u8(0),
        Some(s) => {
            h.write_u8(1);
            h.write_f64(s.angle_degrees);
            h.write_f64(s.blend);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
