use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cinetrack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile every scene of a production plan into timeline JSON files plus a report.
    Compile(CompileArgs),
    /// Print the camera pose of one scene at one frame as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input production plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `timeline_<scene>.json` and `cinematography_report.json`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Compile scenes on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,

    /// Bake camera keys every N frames into each timeline.
    #[arg(long)]
    stride: Option<u64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input production plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene identifier.
    #[arg(long)]
    scene: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    version: &'static str,
    status: &'static str,
    summary: &'a cinetrack::ProductionSummary,
    diagnostics: Vec<SceneDiagnostic<'a>>,
}

#[derive(serde::Serialize)]
struct SceneDiagnostic<'a> {
    scene_id: &'a str,
    #[serde(flatten)]
    diagnostic: &'a cinetrack::Diagnostic,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_plan_json(path: &Path) -> anyhow::Result<cinetrack::ProductionPlan> {
    let f = File::open(path).with_context(|| format!("open plan '{}'", path.display()))?;
    let r = BufReader::new(f);
    let plan: cinetrack::ProductionPlan =
        serde_json::from_reader(r).with_context(|| "parse production plan JSON")?;
    Ok(plan)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn file_stem_for(scene_id: &str) -> String {
    scene_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Output path per scene, in plan order. Fails when two scenes would share a file.
fn timeline_paths(
    out_dir: &Path,
    scenes: &[cinetrack::SceneSpec],
) -> anyhow::Result<Vec<PathBuf>> {
    let mut owners: BTreeMap<String, &str> = BTreeMap::new();
    let mut paths = Vec::with_capacity(scenes.len());
    for s in scenes {
        let stem = file_stem_for(s.scene_id());
        if let Some(prev) = owners.insert(stem.clone(), s.scene_id()) {
            anyhow::bail!(
                "scene ids '{prev}' and '{}' both write 'timeline_{stem}.json'",
                s.scene_id()
            );
        }
        paths.push(out_dir.join(format!("timeline_{stem}.json")));
    }
    Ok(paths)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let plan = read_plan_json(&args.in_path)?;
    let paths = timeline_paths(&args.out_dir, &plan.scenes)?;

    let opts = cinetrack::BatchOpts {
        parallel: args.parallel,
        threads: args.threads,
        compile: cinetrack::CompileOpts {
            bake_stride: args.stride,
            ..cinetrack::CompileOpts::default()
        },
    };
    let artifacts = cinetrack::compile_batch(&plan.scenes, &opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for (a, path) in artifacts.iter().zip(&paths) {
        write_json(path, a)?;
    }

    let summary = cinetrack::ProductionSummary::from_artifacts(&artifacts);
    let report = Report {
        version: env!("CARGO_PKG_VERSION"),
        status: if summary.fallbacks_triggered == 0 {
            "clean"
        } else {
            "degraded"
        },
        summary: &summary,
        diagnostics: artifacts
            .iter()
            .flat_map(|a| {
                a.diagnostics.iter().map(|d| SceneDiagnostic {
                    scene_id: &a.scene_id,
                    diagnostic: d,
                })
            })
            .collect(),
    };
    write_json(&args.out_dir.join("cinematography_report.json"), &report)?;
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let plan = read_plan_json(&args.in_path)?;
    let spec = plan
        .scenes
        .iter()
        .find(|s| s.scene_id() == args.scene)
        .with_context(|| format!("scene '{}' not found in plan", args.scene))?;

    let artifact = cinetrack::compile(spec);
    let pose = artifact.sample(cinetrack::FrameIndex(args.frame));
    println!("{}", serde_json::to_string_pretty(&pose)?);
    Ok(())
}
