use smallvec::SmallVec;

use crate::{
    foundation::core::Vec3,
    foundation::diagnostic::{Diagnostic, DiagnosticKind, Stage},
    lighting::color::{KELVIN_RANGE, Rgb, fill_tint, gel, kelvin_to_rgb},
    lighting::style::LightingStyle,
    scene::model::{LightingRequest, SceneMetrics},
};

/// Accepted intensity multiplier range.
pub const INTENSITY_RANGE: (f64, f64) = (0.1, 5.0);

/// Purpose of a light within its rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightRole {
    /// Main source.
    Key,
    /// Softens key shadows.
    Fill,
    /// Separates the subject from the background.
    Back,
    /// Edge highlight.
    Rim,
    /// Overall base level.
    Ambient,
    /// Visible in-scene source, such as a neon tube.
    Practical,
}

/// Light emitter type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Parallel rays, position only sets the aim.
    Directional,
    /// Omnidirectional.
    Point,
    /// Cone, see [`SpotCone`].
    Spot,
    /// Rectangular emitter of `size`.
    Area,
}

/// Spot light cone.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpotCone {
    /// Full cone angle in degrees.
    pub angle_degrees: f64,
    /// Edge softness in `[0, 1]`.
    pub blend: f64,
}

/// One resolved light.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDescriptor {
    /// Stable name within the rig.
    pub name: String,
    /// Purpose.
    pub role: LightRole,
    /// Emitter type.
    pub kind: LightKind,
    /// World position.
    pub position: Vec3,
    /// Unit vector the light points along.
    pub direction: Vec3,
    /// Color temperature; absent for colored gels.
    pub color_temperature_kelvin: Option<f64>,
    /// Linear RGB color.
    pub color_rgb: Rgb,
    /// Power after the intensity multiplier.
    pub intensity: f64,
    /// Emitter size for area lights, 0 otherwise.
    pub size: f64,
    /// Cone for spot lights.
    pub spot: Option<SpotCone>,
}

/// Ordered list of lights; order is stable for a given request.
pub type LightRig = SmallVec<[LightDescriptor; 5]>;

#[derive(Clone, Copy, Debug)]
enum Tone {
    Scene,
    SceneFill,
    Kelvin(f64),
    Gel(Rgb),
}

#[derive(Clone, Copy, Debug)]
struct LightPreset {
    name: &'static str,
    role: LightRole,
    kind: LightKind,
    // Degrees; 0 = +Z, positive toward +X.
    azimuth: f64,
    // Horizontal and vertical placement in units of the style radius.
    reach: f64,
    height: f64,
    power: f64,
    size: f64,
    tone: Tone,
    spot: Option<SpotCone>,
}

const WIDE_SPOT: Option<SpotCone> = Some(SpotCone {
    angle_degrees: 60.0,
    blend: 0.5,
});

const HARD_SPOT: Option<SpotCone> = Some(SpotCone {
    angle_degrees: 30.0,
    blend: 0.15,
});

#[allow(clippy::too_many_arguments)]
const fn area(
    name: &'static str,
    role: LightRole,
    azimuth: f64,
    reach: f64,
    height: f64,
    power: f64,
    size: f64,
    tone: Tone,
) -> LightPreset {
    LightPreset {
        name,
        role,
        kind: LightKind::Area,
        azimuth,
        reach,
        height,
        power,
        size,
        tone,
        spot: None,
    }
}

#[allow(clippy::too_many_arguments)]
const fn spot(
    name: &'static str,
    role: LightRole,
    azimuth: f64,
    reach: f64,
    height: f64,
    power: f64,
    tone: Tone,
    cone: Option<SpotCone>,
) -> LightPreset {
    LightPreset {
        name,
        role,
        kind: LightKind::Spot,
        azimuth,
        reach,
        height,
        power,
        size: 0.0,
        tone,
        spot: cone,
    }
}

static THREE_POINT: [LightPreset; 3] = [
    area("key", LightRole::Key, 45.0, 1.0, 0.8, 1000.0, 2.0, Tone::Scene),
    area("fill", LightRole::Fill, -45.0, 0.72, 0.3, 300.0, 3.0, Tone::SceneFill),
    spot("back", LightRole::Back, 180.0, 0.8, 0.6, 500.0, Tone::Scene, WIDE_SPOT),
];

static DRAMATIC: [LightPreset; 2] = [
    spot("key", LightRole::Key, 59.0, 0.58, 1.2, 2000.0, Tone::Scene, HARD_SPOT),
    spot("rim", LightRole::Rim, -160.0, 0.85, 0.5, 800.0, Tone::Kelvin(6500.0), WIDE_SPOT),
];

static NEON: [LightPreset; 5] = [
    area("neon_cyan", LightRole::Practical, 0.0, 1.0, 0.0, 500.0, 0.5, Tone::Gel(gel::CYAN)),
    area("neon_magenta", LightRole::Practical, 90.0, 1.0, 0.2, 500.0, 0.5, Tone::Gel(gel::MAGENTA)),
    area("neon_purple", LightRole::Practical, 180.0, 1.0, 0.0, 500.0, 0.5, Tone::Gel(gel::PURPLE)),
    area("neon_pink", LightRole::Practical, 270.0, 1.0, 0.2, 500.0, 0.5, Tone::Gel(gel::PINK)),
    area("ambient", LightRole::Ambient, 0.0, 0.0, 1.0, 100.0, 5.0, Tone::Gel(gel::NEON_AMBIENT)),
];

static NATURAL: [LightPreset; 3] = [
    LightPreset {
        name: "sun",
        role: LightRole::Key,
        kind: LightKind::Directional,
        azimuth: 63.4,
        reach: 1.118,
        height: 2.0,
        power: 5.0,
        size: 0.0,
        tone: Tone::Scene,
        spot: None,
    },
    area("sky", LightRole::Ambient, 0.0, 0.0, 1.5, 200.0, 10.0, Tone::Kelvin(9000.0)),
    area("bounce", LightRole::Fill, -121.0, 0.583, 0.05, 100.0, 5.0, Tone::Kelvin(6500.0)),
];

static STUDIO: [LightPreset; 4] = [
    area("softbox_key", LightRole::Key, 0.0, 0.72, 0.6, 800.0, 3.0, Tone::Scene),
    area("softbox_side", LightRole::Fill, 90.0, 0.58, 0.4, 400.0, 2.5, Tone::Scene),
    area("softbox_back", LightRole::Back, 180.0, 0.63, 0.8, 400.0, 2.5, Tone::Scene),
    area("softbox_fill", LightRole::Fill, 270.0, 0.58, 0.4, 300.0, 4.0, Tone::Scene),
];

fn presets(style: LightingStyle) -> &'static [LightPreset] {
    match style {
        LightingStyle::ThreePoint => &THREE_POINT,
        LightingStyle::Dramatic => &DRAMATIC,
        LightingStyle::Neon => &NEON,
        LightingStyle::Natural => &NATURAL,
        LightingStyle::Studio => &STUDIO,
    }
}

/// Output of [`resolve_lighting`].
#[derive(Clone, Debug, PartialEq)]
pub struct LightingResolution {
    /// Style actually used, after fallbacks.
    pub style: LightingStyle,
    /// Resolved lights.
    pub rig: LightRig,
    /// Fallbacks taken while resolving.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a lighting request against the scene volume.
///
/// Lights are placed around the bounds center and aimed at `target` (the center when absent).
pub fn resolve_lighting(
    request: &LightingRequest,
    metrics: &SceneMetrics,
    target: Option<Vec3>,
) -> LightingResolution {
    let mut diagnostics = Vec::new();

    let style = LightingStyle::parse(&request.style).unwrap_or_else(|| {
        diagnostics.push(Diagnostic::emit(
            Stage::Lighting,
            DiagnosticKind::UnknownLightingStyle,
            format!("unknown lighting style '{}', using three_point", request.style),
        ));
        LightingStyle::ThreePoint
    });

    let (lo, hi) = INTENSITY_RANGE;
    let intensity = request.intensity.clamp(lo, hi);
    if intensity != request.intensity {
        diagnostics.push(Diagnostic::emit(
            Stage::Lighting,
            DiagnosticKind::IntensityClamped,
            format!("intensity {} clamped to {intensity}", request.intensity),
        ));
    }

    let (lo, hi) = KELVIN_RANGE;
    let kelvin = request.color_temperature.clamp(lo, hi);
    if kelvin != request.color_temperature {
        diagnostics.push(Diagnostic::emit(
            Stage::Lighting,
            DiagnosticKind::ColorTemperatureClamped,
            format!(
                "color temperature {}K clamped to {kelvin}K",
                request.color_temperature
            ),
        ));
    }

    let focus = target.unwrap_or(metrics.center);
    let unit = metrics.radius * style.radius_factor();
    let rig: LightRig = presets(style)
        .iter()
        .map(|p| {
            let az = p.azimuth.to_radians();
            let position = metrics.center
                + Vec3::new(p.reach * az.sin(), p.height, p.reach * az.cos()) * unit;
            let direction = (focus - position).try_normalize().unwrap_or(Vec3::NEG_Y);
            let (color_temperature_kelvin, color_rgb) = match p.tone {
                Tone::Scene => (Some(kelvin), kelvin_to_rgb(kelvin)),
                Tone::SceneFill => (Some(kelvin), fill_tint(kelvin_to_rgb(kelvin))),
                Tone::Kelvin(k) => (Some(k), kelvin_to_rgb(k)),
                Tone::Gel(rgb) => (None, rgb),
            };
            LightDescriptor {
                name: p.name.to_owned(),
                role: p.role,
                kind: p.kind,
                position,
                direction,
                color_temperature_kelvin,
                color_rgb,
                intensity: p.power * intensity,
                size: p.size,
                spot: p.spot,
            }
        })
        .collect();

    tracing::debug!(style = style.as_str(), lights = rig.len(), "lighting resolved");

    LightingResolution {
        style,
        rig,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lighting/rig.rs"]
mod tests;
