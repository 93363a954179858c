use crate::{
    camera::director::{DirectorOpts, resolve_camera},
    compile::artifact::TimelineArtifact,
    cuts::auto::generate_auto_cuts,
    cuts::scheduler::resolve_cuts,
    eval::sampler::CameraTrack,
    foundation::core::FrameRange,
    foundation::math::scene_seed,
    lighting::rig::resolve_lighting,
    scene::model::SceneSpec,
};

/// Options for single-scene compilation.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompileOpts {
    /// Camera director tuning.
    pub director: DirectorOpts,
    /// When set, pre-sample camera keys every this many frames into
    /// [`TimelineArtifact::baked`].
    pub bake_stride: Option<u64>,
}

/// Compile a scene with default options.
pub fn compile(spec: &SceneSpec) -> TimelineArtifact {
    compile_with(spec, &CompileOpts::default())
}

/// Compile a scene into a timeline artifact.
///
/// Never fails: every unknown or out-of-range input degrades to a documented fallback recorded in
/// the artifact's diagnostics.
#[tracing::instrument(skip(spec, opts), fields(scene = spec.scene_id()))]
pub fn compile_with(spec: &SceneSpec, opts: &CompileOpts) -> TimelineArtifact {
    let duration = spec.duration_frames();
    let metrics = spec.bounds().metrics();
    let target = spec.target_point();
    let cam_req = spec.camera_request();
    let seed = cam_req.seed.unwrap_or_else(|| scene_seed(spec.scene_id()));

    let camera = resolve_camera(cam_req, target, &metrics, duration, seed, &opts.director);

    let generated;
    let events = match cam_req.auto_cuts {
        Some(auto) if cam_req.cuts.is_empty() => {
            generated = generate_auto_cuts(duration, auto.interval, auto.variety, seed);
            &generated
        }
        _ => &cam_req.cuts,
    };
    let cuts = resolve_cuts(events, duration, seed);

    let lighting = resolve_lighting(spec.lighting_request(), &metrics, target);

    let mut diagnostics = camera.diagnostics;
    diagnostics.extend(cuts.diagnostics);
    diagnostics.extend(lighting.diagnostics);

    let mut artifact = TimelineArtifact {
        scene_id: spec.scene_id().to_owned(),
        frame_range: FrameRange::from_duration(duration),
        camera: CameraTrack {
            rig: camera.rig,
            framing: cuts.framing,
            metrics,
        },
        markers: cuts.markers,
        lighting_style: lighting.style,
        lights: lighting.rig,
        diagnostics,
        baked: Vec::new(),
    };
    if let Some(stride) = opts.bake_stride {
        artifact.baked = artifact.bake(stride);
    }

    tracing::debug!(
        frames = duration,
        cuts = artifact.markers.len(),
        lights = artifact.lights.len(),
        fallbacks = artifact.diagnostics.len(),
        "scene compiled"
    );
    artifact
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
