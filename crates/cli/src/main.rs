use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest_pair::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod log_port;
mod points_io;
mod provenance;

use log_port::{pair_xy, LogPort};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair runner and point-set generator")]
struct Cmd {
    /// Log every step event (debug level)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a point set and write the result JSON (plus provenance)
    Run(RunArgs),
    /// Write a seeded random point set as CSV
    Generate {
        #[arg(long, value_enum, default_value_t = Kind::Uniform)]
        kind: Kind,
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Debug)]
struct RunArgs {
    /// CSV with `x` and `y` columns
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Draw this many random points instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, value_enum, default_value_t = Kind::Uniform)]
    kind: Kind,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Algo::Dc)]
    algo: Algo,
    #[arg(long, default_value_t = 3)]
    leaf_size: usize,
    /// Pause after every step event (animation pacing)
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// Write the step-event trace as JSON
    #[arg(long)]
    trace: Option<PathBuf>,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Uniform,
    Clustered,
    Collinear,
    Duplicates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Algo {
    /// Divide and conquer
    Dc,
    /// Exhaustive reference
    Brute,
}

impl Kind {
    fn layout(self, n: usize) -> Layout {
        match self {
            Kind::Uniform => Layout::Uniform(UniformCfg::default()),
            Kind::Clustered => Layout::Clustered(ClusterCfg::default()),
            Kind::Collinear => Layout::Collinear { vertical: true },
            Kind::Duplicates => Layout::Grid {
                cells: ((n as f64).sqrt() / 2.0).ceil().max(1.0) as u32,
            },
        }
    }
}

#[derive(Serialize)]
struct RunOutput {
    algo: Algo,
    points: usize,
    pair: Pair,
    distance: f64,
    stats: Stats,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run(args) => run(&args).map(|_| ()),
        Action::Generate { kind, n, seed, out } => generate(kind, n, seed, &out),
        Action::Report => report(),
    }
}

fn load_points(args: &RunArgs) -> Result<Vec<Point>> {
    match (&args.input, args.random) {
        (Some(path), _) => points_io::read_points_csv(path),
        (None, Some(n)) => Ok(draw_points(
            args.kind.layout(n),
            n,
            ReplayToken::new(args.seed),
        )),
        (None, None) => bail!("run needs --input <csv> or --random <n>"),
    }
}

fn run(args: &RunArgs) -> Result<Solution> {
    let points = load_points(args)?;
    tracing::info!(
        points = points.len(),
        algo = ?args.algo,
        leaf_size = args.leaf_size,
        delay_ms = args.delay_ms,
        out = %args.out.display(),
        "run"
    );

    let (solution, events) = match args.algo {
        Algo::Brute => (closest_pair_brute(&points)?, Vec::new()),
        Algo::Dc => {
            let cfg = EngineCfg {
                leaf_size: args.leaf_size,
            };
            let mut port = Paced::new(LogPort::new(), Duration::from_millis(args.delay_ms));
            let sol = closest_pair_with(&points, cfg, &mut port)?;
            (sol, port.into_inner().into_events())
        }
    };
    tracing::info!(
        pair = ?pair_xy(&solution.pair),
        distance = solution.distance,
        frames = solution.stats.frames,
        strip_comparisons = solution.stats.strip_comparisons,
        "closest_pair"
    );

    let output = RunOutput {
        algo: args.algo,
        points: points.len(),
        pair: solution.pair,
        distance: solution.distance,
        stats: solution.stats,
    };
    write_json(&args.out, &output)?;
    let mut outputs = vec![args.out.display().to_string()];
    if let Some(trace) = &args.trace {
        if args.algo == Algo::Brute {
            tracing::warn!("brute force emits no step events; trace is empty");
        }
        write_json(trace, &events)?;
        outputs.push(trace.display().to_string());
    }

    let params = serde_json::json!({
        "input": args.input.as_ref().map(|p| p.display().to_string()),
        "random": args.random,
        "kind": args.kind,
        "seed": args.seed,
        "algo": args.algo,
        "leaf_size": args.leaf_size,
        "outputs": outputs,
    });
    provenance::write_sidecar(&args.out, &params)?;
    Ok(solution)
}

fn generate(kind: Kind, n: usize, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(kind = ?kind, n, seed, out = %out.display(), "generate");
    let points = draw_points(kind.layout(n), n, ReplayToken::new(seed));
    points_io::write_points_csv(out, &points)?;
    let params = serde_json::json!({ "kind": kind, "n": n, "seed": seed });
    provenance::write_sidecar(out, &params)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": closest_pair::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    points_io::ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
