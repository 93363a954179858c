use super::*;
use crate::compile::compiler::compile;
use crate::cuts::scheduler::CutEvent;
use crate::foundation::core::Vec3;
use crate::scene::model::{Bounds, CameraRequest, LightingRequest, SceneSpec};

fn scene(id: &str, camera: CameraRequest, lighting: LightingRequest) -> TimelineArtifact {
    let s = SceneSpec::new(
        id,
        100,
        Bounds::Box {
            min: Vec3::ZERO,
            max: Vec3::splat(2.0),
        },
    )
    .unwrap()
    .with_camera(camera)
    .unwrap()
    .with_lighting(lighting)
    .unwrap();
    compile(&s)
}

#[test]
fn counts_aggregate_across_scenes() {
    let clean = scene(
        "clean",
        CameraRequest {
            cuts: vec![CutEvent::new(0, "wide"), CutEvent::new(50, "closeup")],
            ..CameraRequest::with_style("dolly")
        },
        LightingRequest::with_style("neon"),
    );
    let messy = scene(
        "messy",
        CameraRequest::with_style("swoop"),
        LightingRequest {
            intensity: 99.0,
            ..LightingRequest::with_style("disco")
        },
    );
    let summary = ProductionSummary::from_artifacts([&clean, &messy]);
    assert_eq!(summary.scenes_processed, 2);
    assert_eq!(summary.fallbacks_triggered, 3);
    assert_eq!(summary.scenes_with_fallbacks, 1);
    assert_eq!(summary.cuts_accepted, 2);
    assert_eq!(summary.lights_placed, 5 + 3);
    assert_eq!(summary.frames_total, 200);
    assert_eq!(summary.diagnostics_by_stage.camera, 1);
    assert_eq!(summary.diagnostics_by_stage.lighting, 2);
    assert_eq!(summary.diagnostics_by_stage.cuts, 0);

    let line = &summary.scenes[1];
    assert_eq!(line.scene_id, "messy");
    assert_eq!(line.camera_style, "static");
    assert_eq!(line.lighting_style, "three_point");
    assert_eq!(line.fallbacks, 3);
    assert_eq!(line.fingerprint, messy.fingerprint().to_string());
}

#[test]
fn empty_summary_is_default() {
    let s = ProductionSummary::from_artifacts(std::iter::empty());
    assert_eq!(s, ProductionSummary::default());
}
