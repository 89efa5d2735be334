use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use floodmander::{FrontierOrder, TractGraph};

/// Flood-fill redistricting CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "floodmander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level selected by the verbosity count (RUST_LOG still overrides).
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Report size, population, and adjacency problems of a tract graph
    Inspect(InspectArgs),

    /// Grow districts over a tract graph and write the resulting plan
    Redistrict(RedistrictArgs),
}

/// Where the tract graph comes from.
#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Tract graph: a .json graph file, or a population CSV (geo_id,population)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Adjacency CSV (geo_id,neighbor), required when the graph is a CSV
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub adjacency: Option<PathBuf>,
}

impl GraphArgs {
    /// Load the tract graph in whichever format was given.
    pub fn load(&self) -> Result<TractGraph> {
        if is_json(&self.graph) {
            return TractGraph::read_json(&self.graph)
        }
        match &self.adjacency {
            Some(adjacency) => TractGraph::read_csv(&self.graph, adjacency),
            None => bail!("[cli] --adjacency is required when the graph is a CSV file"),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(clap::Args, Debug)]
pub struct RedistrictArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Output plan file (.json or .csv), defaults to "./plan.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Run configuration (JSON); flags below override its fields
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Tract to start growing from, defaults to the reference start tract
    #[arg(short, long)]
    pub start: Option<String>,

    /// Number of districts
    #[arg(short, long)]
    pub districts: Option<u32>,

    /// Population target per district
    #[arg(short, long)]
    pub target: Option<u64>,

    /// Frontier order: lifo or fifo
    #[arg(long)]
    pub order: Option<FrontierOrder>,

    /// Random seed for next-seed selection
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Whether a path names a JSON file.
pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
