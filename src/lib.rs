//! Cinetrack is a cinematography timeline engine.
//!
//! It turns a declarative per-scene camera and lighting request (`SceneSpec`) into a fully
//! resolved, time-indexed timeline (`TimelineArtifact`) that an external 3D backend can consume:
//! camera pose and field of view for every frame, cut markers, and a light rig.
//!
//! # Pipeline overview
//!
//! 1. **Camera**: style + speed + scene volume -> continuous pose function ([`resolve_camera`])
//! 2. **Cuts**: framing events -> blended framing curve and markers ([`resolve_cuts`])
//! 3. **Lighting**: style + scene volume -> ordered light descriptors ([`resolve_lighting`])
//! 4. **Compile**: all of the above merged into one artifact ([`compile`], [`compile_batch`])
//!
//! Conventions: right-handed, Y-up, degrees for FOV and roll. Cameras look at `look_at` with
//! `up = +Y` rotated by roll.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical scene specs produce identical artifacts and fingerprints.
//! - **No IO in the library**: only the `cinetrack` binary touches files.
//! - **Fallbacks, not failures**: unknown styles and out-of-range values degrade to documented
//!   defaults and are reported as [`Diagnostic`] values.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod camera;
mod compile;
mod cuts;
mod eval;
mod foundation;
mod lighting;
mod scene;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::motion::Motion;
pub use animation::spline::{BezierArc, CatmullRomPath, catmull_rom, cubic_bezier};
pub use camera::director::{
    CameraPose, CameraResolution, CameraRig, DepthOfField, DirectorOpts, HandheldJitter,
    PoseProgram, resolve_camera,
};
pub use camera::style::{CameraStyle, MovementSpeed};
pub use compile::artifact::TimelineArtifact;
pub use compile::batch::{BatchOpts, compile_batch};
pub use compile::compiler::{CompileOpts, compile, compile_with};
pub use compile::fingerprint::TimelineFingerprint;
pub use compile::summary::{ProductionSummary, SceneReport};
pub use cuts::auto::{AUTO_CUT_JITTER, generate_auto_cuts};
pub use cuts::preset::{Framing, ShotType, Transition};
pub use cuts::scheduler::{
    CUT_ANGLE_VARIATION, CutEvent, CutMarker, CutSchedule, FramingCurve, ResolvedCut,
    resolve_cuts,
};
pub use eval::sampler::{CameraSample, CameraTrack, apply_framing, bake_camera};
pub use foundation::core::{FrameIndex, FrameRange, Vec3, WORLD_UP, normalized_time};
pub use foundation::diagnostic::{Diagnostic, DiagnosticKind, Stage, StageCounts};
pub use foundation::error::{CineError, CineResult};
pub use foundation::math::scene_seed;
pub use lighting::color::{KELVIN_RANGE, KELVIN_TABLE, Rgb, gel, kelvin_to_rgb};
pub use lighting::rig::{
    INTENSITY_RANGE, LightDescriptor, LightKind, LightRig, LightRole, LightingResolution,
    SpotCone, resolve_lighting,
};
pub use lighting::style::LightingStyle;
pub use scene::model::{
    AutoCuts, Bounds, CameraRequest, LightingRequest, ProductionPlan, SceneMetrics, SceneSpec,
};
