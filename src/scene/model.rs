use crate::{
    cuts::scheduler::CutEvent,
    foundation::core::{Vec3, ensure_finite, ensure_finite_vec},
    foundation::error::{CineError, CineResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Scene bounding volume.
pub enum Bounds {
    /// Axis-aligned box.
    Box {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
    /// Bounding sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f64,
    },
}

impl Bounds {
    /// Smallest box extent that counts as spanning an axis.
    pub const MIN_EXTENT: f64 = 1e-6;

    /// Reject non-finite, inverted or degenerate volumes.
    ///
    /// A box must span at least two axes; flat boxes (a floor plane) are accepted, points and
    /// line segments are not.
    pub fn validate(&self) -> CineResult<()> {
        match *self {
            Self::Box { min, max } => {
                ensure_finite_vec(min, "bounds.min")?;
                ensure_finite_vec(max, "bounds.max")?;
                if min.cmpgt(max).any() {
                    return Err(CineError::validation(
                        "bounds.min must be <= bounds.max on every axis",
                    ));
                }
                let spanned = (max - min)
                    .cmpgt(Vec3::splat(Self::MIN_EXTENT))
                    .bitmask()
                    .count_ones();
                if spanned < 2 {
                    return Err(CineError::validation(format!(
                        "bounds box must extend more than {} on at least two axes",
                        Self::MIN_EXTENT
                    )));
                }
            }
            Self::Sphere { center, radius } => {
                ensure_finite_vec(center, "bounds.center")?;
                ensure_finite(radius, "bounds.radius")?;
                if radius <= 0.0 {
                    return Err(CineError::validation("bounds.radius must be > 0"));
                }
            }
        }
        Ok(())
    }

    /// Derived placement metrics.
    pub fn metrics(&self) -> SceneMetrics {
        let (center, raw_size, raw_radius) = match *self {
            Self::Box { min, max } => {
                let size = max - min;
                ((min + max) * 0.5, size, size.length() * 0.5)
            }
            Self::Sphere { center, radius } => (center, Vec3::splat(radius * 2.0), radius),
        };
        let size = raw_size.max(Vec3::ONE);
        SceneMetrics {
            center,
            size,
            radius: raw_radius.max(1.0),
            max_extent: size.max_element(),
        }
    }
}

/// Placement metrics derived from [`Bounds`].
///
/// `size` is floored at 1 world unit per axis and `radius` at 1, so flat or tiny scenes still get
/// usable camera distances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneMetrics {
    /// Volume center.
    pub center: Vec3,
    /// Per-axis extent.
    pub size: Vec3,
    /// Bounding-sphere radius.
    pub radius: f64,
    /// Largest axis extent.
    pub max_extent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Request for a generated cut list.
pub struct AutoCuts {
    /// Nominal spacing between cuts in frames.
    #[serde(default = "default_auto_cut_interval")]
    pub interval: u64,
    /// Cycle through the full shot table instead of alternating wide and medium.
    #[serde(default = "default_true")]
    pub variety: bool,
}

impl Default for AutoCuts {
    fn default() -> Self {
        Self {
            interval: default_auto_cut_interval(),
            variety: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera half of a scene request.
pub struct CameraRequest {
    /// Camera style name (`static`, `dolly`, `orbit`, `handheld`, `tracking`).
    #[serde(default = "default_camera_style")]
    pub style: String,
    /// Movement speed name (`slow`, `medium`, `fast`).
    #[serde(default = "default_movement_speed")]
    pub movement_speed: String,
    /// Explicit framing events.
    #[serde(default)]
    pub cuts: Vec<CutEvent>,
    /// Dolly waypoints; two or more replace the straight dolly travel.
    #[serde(default)]
    pub waypoints: Vec<Vec3>,
    /// Dolly crane arc height; `0` disables the crane.
    #[serde(default)]
    pub crane_height: f64,
    /// Easing name for waypoint and crane travel.
    #[serde(default)]
    pub easing: Option<String>,
    /// Generate cuts when `cuts` is empty.
    #[serde(default)]
    pub auto_cuts: Option<AutoCuts>,
    /// Explicit jitter seed; defaults to a hash of the scene id.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CameraRequest {
    fn default() -> Self {
        Self {
            style: default_camera_style(),
            movement_speed: default_movement_speed(),
            cuts: Vec::new(),
            waypoints: Vec::new(),
            crane_height: 0.0,
            easing: None,
            auto_cuts: None,
            seed: None,
        }
    }
}

impl CameraRequest {
    /// Request with the given style and default parameters.
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> CineResult<()> {
        for p in &self.waypoints {
            ensure_finite_vec(*p, "camera_request.waypoints")?;
        }
        ensure_finite(self.crane_height, "camera_request.crane_height")?;
        if self.crane_height < 0.0 {
            return Err(CineError::validation(
                "camera_request.crane_height must be >= 0",
            ));
        }
        if let Some(auto) = self.auto_cuts
            && auto.interval == 0
        {
            return Err(CineError::validation(
                "camera_request.auto_cuts.interval must be > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Lighting half of a scene request.
pub struct LightingRequest {
    /// Lighting style name.
    #[serde(default = "default_lighting_style")]
    pub style: String,
    /// Power multiplier applied to every light.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Color temperature in Kelvin.
    #[serde(default = "default_color_temperature")]
    pub color_temperature: f64,
}

impl Default for LightingRequest {
    fn default() -> Self {
        Self {
            style: default_lighting_style(),
            intensity: default_intensity(),
            color_temperature: default_color_temperature(),
        }
    }
}

impl LightingRequest {
    /// Request with the given style and default parameters.
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> CineResult<()> {
        ensure_finite(self.intensity, "lighting_request.intensity")?;
        ensure_finite(self.color_temperature, "lighting_request.color_temperature")?;
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct SceneSpecDef {
    scene_id: String,
    duration_frames: u64,
    #[serde(default)]
    target_point: Option<Vec3>,
    bounds: Bounds,
    #[serde(default)]
    camera_request: CameraRequest,
    #[serde(default)]
    lighting_request: LightingRequest,
}

/// Validated, immutable per-scene request.
///
/// Construct with [`SceneSpec::new`] and the `with_*` methods, or deserialize from JSON. Both
/// paths run the same validation, so a `SceneSpec` value always compiles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SceneSpecDef", into = "SceneSpecDef")]
pub struct SceneSpec {
    scene_id: String,
    duration_frames: u64,
    target_point: Option<Vec3>,
    bounds: Bounds,
    camera_request: CameraRequest,
    lighting_request: LightingRequest,
}

impl SceneSpec {
    /// Create a scene with default camera and lighting requests.
    pub fn new(scene_id: impl Into<String>, duration_frames: u64, bounds: Bounds) -> CineResult<Self> {
        let spec = Self {
            scene_id: scene_id.into(),
            duration_frames,
            target_point: None,
            bounds,
            camera_request: CameraRequest::default(),
            lighting_request: LightingRequest::default(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Set the tracking/look-at target.
    pub fn with_target(mut self, target: Vec3) -> CineResult<Self> {
        self.target_point = Some(target);
        self.validate()?;
        Ok(self)
    }

    /// Replace the camera request.
    pub fn with_camera(mut self, camera: CameraRequest) -> CineResult<Self> {
        self.camera_request = camera;
        self.validate()?;
        Ok(self)
    }

    /// Replace the lighting request.
    pub fn with_lighting(mut self, lighting: LightingRequest) -> CineResult<Self> {
        self.lighting_request = lighting;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CineResult<()> {
        if self.scene_id.trim().is_empty() {
            return Err(CineError::validation("scene_id must be non-empty"));
        }
        if self.duration_frames == 0 {
            return Err(CineError::validation("duration_frames must be > 0"));
        }
        if let Some(t) = self.target_point {
            ensure_finite_vec(t, "target_point")?;
        }
        self.bounds.validate()?;
        self.camera_request.validate()?;
        self.lighting_request.validate()?;
        Ok(())
    }

    /// Scene identifier.
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// Scene length in frames (always > 0).
    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Optional tracking/look-at target.
    pub fn target_point(&self) -> Option<Vec3> {
        self.target_point
    }

    /// Scene bounding volume.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Camera request.
    pub fn camera_request(&self) -> &CameraRequest {
        &self.camera_request
    }

    /// Lighting request.
    pub fn lighting_request(&self) -> &LightingRequest {
        &self.lighting_request
    }
}

impl TryFrom<SceneSpecDef> for SceneSpec {
    type Error = CineError;

    fn try_from(def: SceneSpecDef) -> Result<Self, Self::Error> {
        let spec = Self {
            scene_id: def.scene_id,
            duration_frames: def.duration_frames,
            target_point: def.target_point,
            bounds: def.bounds,
            camera_request: def.camera_request,
            lighting_request: def.lighting_request,
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl From<SceneSpec> for SceneSpecDef {
    fn from(spec: SceneSpec) -> Self {
        Self {
            scene_id: spec.scene_id,
            duration_frames: spec.duration_frames,
            target_point: spec.target_point,
            bounds: spec.bounds,
            camera_request: spec.camera_request,
            lighting_request: spec.lighting_request,
        }
    }
}

/// A list of scenes compiled together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductionPlan {
    /// Scenes in production order.
    pub scenes: Vec<SceneSpec>,
}

impl ProductionPlan {
    /// Parse a plan from JSON text, validating every scene.
    pub fn from_json_str(s: &str) -> CineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

fn default_camera_style() -> String {
    "static".to_owned()
}

fn default_movement_speed() -> String {
    "medium".to_owned()
}

fn default_lighting_style() -> String {
    "three_point".to_owned()
}

fn default_intensity() -> f64 {
    1.0
}

fn default_color_temperature() -> f64 {
    5500.0
}

fn default_auto_cut_interval() -> u64 {
    120
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
