use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pairhull::geom::rand::{draw_cloud, CloudCfg, ReplayToken};
use pairhull::{build_hull, build_hull_parallel, Hull, HullCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::{read_points_csv, write_points_csv};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "pairhull")]
#[command(about = "Convex hull of a point file by brute-force pair testing")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log debug events (seed edge, closure) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the hull indices of a CSV point file (columns x,y)
    Hull(HullArgs),
    /// Write a seeded point cloud with a known hull as CSV
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct HullArgs {
    #[arg(long)]
    input: PathBuf,
    /// Also write the result as JSON (plus a provenance sidecar)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Search the seed edge on all cores
    #[arg(long)]
    parallel_seed: bool,
    /// Fail when the chain does not close instead of printing it
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct SampleArgs {
    /// Points in strict convex position
    #[arg(long, default_value_t = 12)]
    count: usize,
    /// Points strictly inside the hull
    #[arg(long, default_value_t = 0)]
    interior: usize,
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: PathBuf,
}

/// JSON shape of `hull --out`.
#[derive(Serialize)]
struct HullRecord<'a> {
    n: usize,
    order: &'a [usize],
    seed: (usize, usize),
    closed: bool,
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
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull(args) => {
            let hull = hull(&args, cmd.tag)?;
            println!("{hull}");
            Ok(())
        }
        Action::Sample(args) => sample(&args, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(args: &HullArgs, tag: Option<String>) -> Result<Hull> {
    tracing::info!(input = %args.input.display(), tag = ?tag, "hull");
    let points = read_points_csv(&args.input)?;
    let cfg = HullCfg {
        require_closed: args.strict,
    };
    let built = if args.parallel_seed {
        build_hull_parallel(&points, cfg)
    } else {
        build_hull(&points, cfg)
    };
    let hull = built
        .with_context(|| format!("computing hull of {}", args.input.display()))?;
    if !hull.is_closed() {
        tracing::warn!(len = hull.len(), "chain did not close; output may be incomplete");
    }
    if let Some(out) = &args.out {
        let record = HullRecord {
            n: points.len(),
            order: &hull.order,
            seed: hull.seed,
            closed: hull.is_closed(),
        };
        write_json(out, &serde_json::to_value(&record)?)?;
        let payload = Payload::new(serde_json::json!({
            "parallel_seed": args.parallel_seed,
            "strict": args.strict,
            "n": points.len()
        }))
        .with_input(&args.input)
        .with_tag(tag);
        write_sidecar(out, payload)?;
    }
    Ok(hull)
}

fn sample(args: &SampleArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(count = args.count, interior = args.interior, seed = args.seed, "sample");
    let cfg = CloudCfg {
        hull_count: args.count,
        interior_count: args.interior,
        radius: args.radius,
        ..CloudCfg::default()
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let cloud = draw_cloud(cfg, tok)?;
    write_points_csv(&args.out, &cloud.points)?;
    let payload = Payload::new(serde_json::json!({
        "count": args.count,
        "interior": args.interior,
        "radius": args.radius,
        "seed": args.seed,
        "index": args.index
    }))
    .with_tag(tag);
    write_sidecar(&args.out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "pairhull_version": pairhull::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json(out: &Path, value: &serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
