use smallvec::SmallVec;

use super::TractId;

/// One indivisible geographic unit: its id, population, and adjacency list.
///
/// Ownership is not stored here; it is run state held by the
/// [`Districting`](crate::Districting) ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tract {
    id: TractId,
    population: u64,
    neighbors: SmallVec<[TractId; 8]>, // construction order, not sorted
}

impl Tract {
    pub fn new(id: impl Into<TractId>, population: u64, neighbors: impl IntoIterator<Item = TractId>) -> Self {
        Self { id: id.into(), population, neighbors: neighbors.into_iter().collect() }
    }

    #[inline] pub fn id(&self) -> &TractId { &self.id }

    #[inline] pub fn population(&self) -> u64 { self.population }

    #[inline] pub fn neighbors(&self) -> &[TractId] { &self.neighbors }

    /// Append a neighbor reference (duplicates are kept, as given).
    pub fn add_neighbor(&mut self, neighbor: TractId) { self.neighbors.push(neighbor) }
}
