//! CSV reading for tract populations and adjacency lists.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

use crate::map::{Tract, TractGraph, TractId};

/// Reads a CSV file with a header row, keeping every column as a string so
/// that ids retain their leading zeros.
fn read_csv_as_strings(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Collect a string column, failing on missing values.
fn string_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<String>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] {} is missing column '{name}'", path.display()))?;
    column.str()?.into_iter().enumerate()
        .map(|(row, value)| {
            value.map(|s| s.trim().to_string())
                .ok_or_else(|| anyhow!("[io::csv::read] {} has an empty '{name}' at row {}", path.display(), row + 1))
        })
        .collect()
}

impl TractGraph {
    /// Read a tract graph from a population CSV (`geo_id,population`) and an
    /// adjacency CSV (`geo_id,neighbor`, one row per listed neighbor).
    ///
    /// Neighbor order follows row order in the adjacency file. Neighbor ids
    /// that are not in the population file are kept as given.
    pub fn read_csv(populations: &Path, adjacency: &Path) -> Result<Self> {
        let df = read_csv_as_strings(populations)?;
        let ids = string_column(&df, "geo_id", populations)?;
        let counts = string_column(&df, "population", populations)?;

        let mut tracts = ids.into_iter().zip(counts)
            .map(|(id, count)| {
                let population = count.parse::<u64>()
                    .with_context(|| format!("[io::csv::read] Invalid population '{count}' for tract {id}"))?;
                Ok(Tract::new(id, population, std::iter::empty()))
            })
            .collect::<Result<Vec<_>>>()?;

        let positions = tracts.iter().enumerate()
            .map(|(i, t)| (t.id().clone(), i))
            .collect::<ahash::AHashMap<_, _>>();

        let df = read_csv_as_strings(adjacency)?;
        let sources = string_column(&df, "geo_id", adjacency)?;
        let targets = string_column(&df, "neighbor", adjacency)?;
        for (source, target) in sources.into_iter().zip(targets) {
            let source = TractId::from(source);
            let &i = positions.get(&source)
                .ok_or_else(|| anyhow!("[io::csv::read] Adjacency lists unknown tract {source}"))?;
            tracts[i].add_neighbor(TractId::from(target));
        }

        let graph = TractGraph::new(tracts)?;
        ensure!(!graph.is_empty(), "[io::csv::read] {} contains no tracts", populations.display());
        Ok(graph)
    }
}
