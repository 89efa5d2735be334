use std::path::PathBuf;

use anyhow::{Context, Result};
use floodmander::{DEFAULT_START_TRACT, Districting, GrowConfig, TractId};

use crate::cli::is_json;

/// Start from the config file (or defaults) and apply any flag overrides.
fn resolve_config(args: &crate::cli::RedistrictArgs) -> Result<GrowConfig> {
    let mut config = match &args.config {
        Some(path) => GrowConfig::read_json(path)?,
        None => GrowConfig::default(),
    };

    if let Some(target) = args.target { config.population_target = target }
    if let Some(districts) = args.districts { config.district_count = districts }
    if let Some(order) = args.order { config.order = order }
    if args.seed.is_some() { config.seed = args.seed }

    config.validate()?;
    Ok(config)
}

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RedistrictArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from("./plan.json"));
    let start = TractId::from(args.start.as_deref().unwrap_or(DEFAULT_START_TRACT));
    let config = resolve_config(args)?;

    println!("[redistrict] loading tract graph from {}", args.graph.graph.display());
    let graph = args.graph.load()?;

    println!(
        "[redistrict] growing {} districts from tract {} with population target {}",
        config.district_count, start, config.population_target,
    );
    let mut districting = Districting::new(graph, config);
    let plan = districting.run(&start)
        .with_context(|| format!("[redistrict] partition from tract {start} failed"))?;

    for (record, deviation) in plan.districts().iter().zip(plan.deviations()) {
        println!(
            "[redistrict] district {}: population {} ({:+.2}%), {} tracts",
            record.district(), record.population(), deviation * 100.0, record.tracts().len(),
        );
    }
    println!(
        "[redistrict] assigned {} of {} tracts",
        plan.num_tracts(), districting.graph().len(),
    );

    println!("[redistrict] writing plan to {}", out_path.display());
    if is_json(&out_path) {
        plan.write_json(&out_path)?;
    } else {
        plan.write_csv(&out_path)?;
    }

    Ok(())
}
