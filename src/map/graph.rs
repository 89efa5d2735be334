use ahash::AHashMap;

use crate::error::{GrowError, Result};
use super::{Tract, TractId};

/// Immutable adjacency structure over all tracts of a run.
///
/// Tracts are addressed internally by their position in construction order;
/// the position doubles as the index into the run ledger.
#[derive(Debug, Clone, Default)]
pub struct TractGraph {
    tracts: Vec<Tract>,
    index: AHashMap<TractId, usize>, // tract id -> position in `tracts`
}

impl TractGraph {
    /// Construct a graph from a list of tracts, rejecting duplicate ids.
    pub fn new(tracts: Vec<Tract>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(tracts.len());
        for (i, tract) in tracts.iter().enumerate() {
            if index.insert(tract.id().clone(), i).is_some() {
                return Err(GrowError::DuplicateTract(tract.id().clone()))
            }
        }

        Ok(Self { tracts, index })
    }

    /// Get the number of tracts in the graph.
    #[inline] pub fn len(&self) -> usize { self.tracts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.tracts.is_empty() }

    /// Iterate over all tracts in construction order.
    #[inline] pub fn tracts(&self) -> impl Iterator<Item = &Tract> + '_ { self.tracts.iter() }

    /// Iterate over all tract ids in construction order.
    #[inline] pub fn ids(&self) -> impl Iterator<Item = &TractId> + '_ { self.tracts.iter().map(Tract::id) }

    /// Get a tract by position. Panics if out of range.
    #[inline] pub(crate) fn tract(&self, node: usize) -> &Tract { &self.tracts[node] }

    /// Get the position of a tract id.
    #[inline]
    pub(crate) fn index_of(&self, id: &TractId) -> Result<usize> {
        self.index.get(id).copied().ok_or_else(|| GrowError::NotFound(id.clone()))
    }

    /// Look up a tract by id.
    pub fn lookup(&self, id: &TractId) -> Result<&Tract> {
        self.index_of(id).map(|node| &self.tracts[node])
    }

    /// Neighbor ids of a tract, in construction order.
    pub fn neighbors_of(&self, id: &TractId) -> Result<&[TractId]> {
        self.lookup(id).map(Tract::neighbors)
    }

    #[inline] pub fn contains(&self, id: &TractId) -> bool { self.index.contains_key(id) }

    /// Sum of all tract populations.
    pub fn total_population(&self) -> u64 {
        self.tracts.iter().map(Tract::population).sum()
    }

    /// Adjacency references to ids that are not in the graph, as (tract, missing neighbor).
    pub fn dangling_neighbors(&self) -> Vec<(TractId, TractId)> {
        self.tracts.iter()
            .flat_map(|t| t.neighbors().iter().map(move |n| (t.id(), n)))
            .filter(|(_, n)| !self.contains(n))
            .map(|(t, n)| (t.clone(), n.clone()))
            .collect()
    }

    /// Adjacencies listed in one direction only, as (tract, neighbor) where
    /// `neighbor` exists but does not list `tract` back.
    pub fn asymmetric_edges(&self) -> Vec<(TractId, TractId)> {
        self.tracts.iter()
            .flat_map(|t| t.neighbors().iter().map(move |n| (t, n)))
            .filter_map(|(t, n)| {
                let other = self.lookup(n).ok()?;
                (!other.neighbors().contains(t.id())).then(|| (t.id().clone(), n.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<TractId> { list.iter().map(|s| TractId::new(s)).collect() }

    fn make_test_graph() -> TractGraph {
        TractGraph::new(vec![
            Tract::new("a", 100, ids(&["b", "c"])),
            Tract::new("b", 200, ids(&["a", "c"])),
            Tract::new("c", 300, ids(&["a", "b", "d"])),
            Tract::new("d", 400, ids(&["c"])),
        ]).unwrap()
    }

    #[test]
    fn lookup_and_neighbors() {
        let graph = make_test_graph();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.lookup(&TractId::new("c")).unwrap().population(), 300);
        assert_eq!(graph.neighbors_of(&TractId::new("c")).unwrap(), ids(&["a", "b", "d"]).as_slice());
        assert_eq!(graph.index_of(&TractId::new("d")).unwrap(), 3);
        assert_eq!(graph.total_population(), 1000);
    }

    #[test]
    fn lookup_missing_is_not_found() {
        let graph = make_test_graph();
        assert_eq!(graph.lookup(&TractId::new("z")), Err(GrowError::NotFound(TractId::new("z"))));
        assert!(graph.neighbors_of(&TractId::new("z")).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = TractGraph::new(vec![
            Tract::new("a", 1, ids(&[])),
            Tract::new("a", 2, ids(&[])),
        ]);
        assert_eq!(result.unwrap_err(), GrowError::DuplicateTract(TractId::new("a")));
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = TractGraph::new(vec![]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.total_population(), 0);
    }

    #[test]
    fn inspection_finds_dangling_and_one_way_edges() {
        let graph = TractGraph::new(vec![
            Tract::new("a", 1, ids(&["b", "x"])),
            Tract::new("b", 1, ids(&[])),
        ]).unwrap();

        assert_eq!(graph.dangling_neighbors(), vec![(TractId::new("a"), TractId::new("x"))]);
        assert_eq!(graph.asymmetric_edges(), vec![(TractId::new("a"), TractId::new("b"))]);
        assert!(make_test_graph().dangling_neighbors().is_empty());
        assert!(make_test_graph().asymmetric_edges().is_empty());
    }
}
