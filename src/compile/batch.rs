use rayon::prelude::*;

use crate::{
    compile::artifact::TimelineArtifact,
    compile::compiler::{CompileOpts, compile_with},
    foundation::error::{CineError, CineResult},
    scene::model::SceneSpec,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Options for [`compile_batch`].
pub struct BatchOpts {
    /// Compile scenes on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count; `None` lets rayon decide. `Some(0)` is rejected.
    pub threads: Option<usize>,
    /// Per-scene options.
    pub compile: CompileOpts,
}

/// Compile many scenes. Results keep input order.
///
/// Fails only when the thread pool cannot be built.
#[tracing::instrument(skip(specs, opts), fields(scenes = specs.len(), parallel = opts.parallel))]
pub fn compile_batch(specs: &[SceneSpec], opts: &BatchOpts) -> CineResult<Vec<TimelineArtifact>> {
    if !opts.parallel {
        if opts.threads == Some(0) {
            return Err(CineError::validation("batch 'threads' must be >= 1 when set"));
        }
        return Ok(specs.iter().map(|s| compile_with(s, &opts.compile)).collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    let compile = opts.compile;
    Ok(pool.install(|| {
        specs
            .par_iter()
            .map(|s| compile_with(s, &compile))
            .collect()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> CineResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CineError::validation("batch 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CineError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/batch.rs"]
mod tests;
