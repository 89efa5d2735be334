use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::Result, map::{TractGraph, TractId}};
use super::Ledger;

/// Identifies a district within a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(pub u32);

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// A set of owned tracts with an incrementally maintained population.
///
/// Membership is kept in insertion order: border scans and revalidation walk
/// it front to back, so the order decides which neighbors are tried first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    id: DistrictId,
    population: u64,
    tracts: Vec<usize>, // positions in the tract graph
}

impl District {
    /// Create an empty district with population 0.
    pub fn new(id: DistrictId) -> Self {
        Self { id, population: 0, tracts: Vec::new() }
    }

    #[inline] pub fn id(&self) -> DistrictId { self.id }

    #[inline] pub fn population(&self) -> u64 { self.population }

    /// Number of member tracts.
    #[inline] pub fn len(&self) -> usize { self.tracts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.tracts.is_empty() }

    /// Member positions in insertion order.
    #[inline] pub(crate) fn members(&self) -> &[usize] { &self.tracts }

    /// Member tract ids in insertion order.
    pub fn tract_ids<'a>(&'a self, graph: &'a TractGraph) -> impl Iterator<Item = &'a TractId> + 'a {
        self.tracts.iter().map(move |&node| graph.tract(node).id())
    }

    /// Append a tract, add its population, and label it as owned by this district.
    /// The caller must already have removed it from the pool or from its previous
    /// owner. Any existing label is overwritten.
    pub(crate) fn add(&mut self, node: usize, graph: &TractGraph, ledger: &mut Ledger) {
        self.tracts.push(node);
        self.population += graph.tract(node).population();
        ledger.set_owner(node, Some(self.id));
    }

    /// Remove a member tract, subtract its population, and clear its owner label.
    /// Returns false (and changes nothing) if the tract is not a member.
    pub(crate) fn remove(&mut self, node: usize, graph: &TractGraph, ledger: &mut Ledger) -> bool {
        let Some(pos) = self.tracts.iter().position(|&t| t == node) else { return false };
        self.tracts.remove(pos);
        self.population -= graph.tract(node).population();
        ledger.set_owner(node, None);
        true
    }

    /// Distinct ids of other districts owning a neighbor of any member, in
    /// discovery order (members first to last, neighbors in adjacency order).
    pub(crate) fn adjacent_district_ids(&self, graph: &TractGraph, ledger: &Ledger) -> Result<Vec<DistrictId>> {
        let mut adjacent = Vec::new();
        for &node in &self.tracts {
            for neighbor in graph.tract(node).neighbors() {
                let owner = ledger.owner(graph.index_of(neighbor)?);
                if let Some(owner) = owner {
                    if owner != self.id && !adjacent.contains(&owner) { adjacent.push(owner) }
                }
            }
        }
        Ok(adjacent)
    }

    /// Members with at least one neighbor owned by `other`, each listed once.
    pub(crate) fn border_tracts_touching(&self, other: DistrictId, graph: &TractGraph, ledger: &Ledger) -> Result<Vec<usize>> {
        let mut border = Vec::new();
        for &node in &self.tracts {
            for neighbor in graph.tract(node).neighbors() {
                if ledger.owner(graph.index_of(neighbor)?) == Some(other) {
                    border.push(node);
                    break;
                }
            }
        }
        Ok(border)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "District {}: population {}, {} tracts", self.id, self.population, self.tracts.len())
    }
}
