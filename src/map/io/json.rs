//! JSON reading for tract graphs.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::map::{Tract, TractGraph, TractId};

/// On-disk layout: `{"tracts": [{"id": ..., "population": ..., "neighbors": [...]}]}`.
#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    tracts: Vec<TractRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TractRecord {
    id: TractId,
    population: u64,
    #[serde(default)]
    neighbors: Vec<TractId>,
}

impl TractGraph {
    /// Read a tract graph from a JSON file.
    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[io::json::read] Failed to open JSON file: {}", path.display()))?;
        let data: GraphFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[io::json::read] Failed to parse tract graph from {:?}", path))?;
        Self::from_records(data)
    }

    /// Parse a tract graph from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: GraphFile = serde_json::from_str(json)
            .context("[io::json::read] Failed to parse tract graph from string")?;
        Self::from_records(data)
    }

    /// Serialize the graph back to the JSON layout accepted by [`TractGraph::from_json_str`].
    pub fn to_json_string(&self) -> Result<String> {
        let data = GraphFile {
            tracts: self.tracts()
                .map(|t| TractRecord {
                    id: t.id().clone(),
                    population: t.population(),
                    neighbors: t.neighbors().to_vec(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&data).context("[io::json::write] Failed to serialize tract graph")
    }

    fn from_records(data: GraphFile) -> Result<Self> {
        let tracts = data.tracts.into_iter()
            .map(|r| Tract::new(r.id, r.population, r.neighbors))
            .collect();
        Ok(TractGraph::new(tracts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrowError;

    #[test]
    fn parses_tracts_with_and_without_neighbors() {
        let graph = TractGraph::from_json_str(r#"{"tracts": [
            {"id": "001", "population": 5, "neighbors": ["002"]},
            {"id": "002", "population": 7}
        ]}"#).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.neighbors_of(&TractId::new("001")).unwrap(), &[TractId::new("002")]);
        assert!(graph.neighbors_of(&TractId::new("002")).unwrap().is_empty());
    }

    #[test]
    fn duplicate_tract_surfaces_as_grow_error() {
        let err = TractGraph::from_json_str(r#"{"tracts": [
            {"id": "001", "population": 5},
            {"id": "001", "population": 6}
        ]}"#).unwrap_err();

        assert_eq!(err.downcast_ref::<GrowError>(), Some(&GrowError::DuplicateTract(TractId::new("001"))));
    }

    #[test]
    fn negative_population_is_rejected() {
        assert!(TractGraph::from_json_str(r#"{"tracts": [{"id": "001", "population": -5}]}"#).is_err());
    }

    #[test]
    fn file_and_string_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let source = TractGraph::from_json_str(r#"{"tracts": [
            {"id": "a", "population": 1, "neighbors": ["b"]},
            {"id": "b", "population": 2, "neighbors": ["a"]}
        ]}"#).unwrap();
        std::fs::write(&path, source.to_json_string().unwrap()).unwrap();

        let graph = TractGraph::read_json(&path).unwrap();
        assert_eq!(graph.ids().cloned().collect::<Vec<_>>(), vec![TractId::new("a"), TractId::new("b")]);
        assert_eq!(graph.total_population(), 3);
    }
}
