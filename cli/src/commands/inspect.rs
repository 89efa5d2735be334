use anyhow::Result;
use log::warn;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    println!("[inspect] loading tract graph from {}", args.graph.graph.display());
    let graph = args.graph.load()?;

    let edges = graph.tracts().map(|t| t.neighbors().len()).sum::<usize>();
    println!("[inspect] {} tracts, {} adjacency entries, total population {}", graph.len(), edges, graph.total_population());

    let dangling = graph.dangling_neighbors();
    for (tract, missing) in &dangling {
        warn!("[inspect] tract {tract} lists unknown neighbor {missing}");
    }
    println!("[inspect] {} references to unknown tracts", dangling.len());

    let one_way = graph.asymmetric_edges();
    for (tract, neighbor) in &one_way {
        warn!("[inspect] tract {tract} lists {neighbor}, which does not list it back");
    }
    println!("[inspect] {} one-way adjacencies", one_way.len());

    let isolated = graph.tracts().filter(|t| t.neighbors().is_empty()).count();
    println!("[inspect] {isolated} tracts with no neighbors");

    Ok(())
}
