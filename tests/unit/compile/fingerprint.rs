use super::*;
use crate::compile::compiler::compile;
use crate::scene::model::{Bounds, LightingRequest, SceneSpec};

fn spec() -> SceneSpec {
    SceneSpec::new(
        "fp",
        24,
        Bounds::Box {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        },
    )
    .unwrap()
}

#[test]
fn display_is_zero_padded_hex() {
    let f = TimelineFingerprint { hi: 1, lo: 0xab };
    assert_eq!(
        f.to_string(),
        "000000000000000100000000000000ab"
    );
}

#[test]
fn lights_change_the_digest() {
    let a = compile(&spec());
    let b = compile(&spec().with_lighting(LightingRequest::with_style("neon")).unwrap());
    assert_ne!(fingerprint_artifact(&a), fingerprint_artifact(&b));
    assert_eq!(fingerprint_artifact(&a), fingerprint_artifact(&compile(&spec())));
}
