use rand::Rng;

use super::{DistrictId, pool::TractPool};

/// Ownership labels for every tract plus the pool of unassigned tracts.
///
/// A tract is in the pool iff its owner is `None`, except transiently inside
/// a transfer between two districts.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    owners: Vec<Option<DistrictId>>,
    pool: TractPool,
}

impl Ledger {
    pub(crate) fn new(num_tracts: usize) -> Self {
        Self { owners: vec![None; num_tracts], pool: TractPool::new(num_tracts) }
    }

    #[inline] pub(crate) fn owner(&self, tract: usize) -> Option<DistrictId> { self.owners[tract] }

    /// Overwrite the owner label. Does not touch the pool.
    #[inline] pub(crate) fn set_owner(&mut self, tract: usize, owner: Option<DistrictId>) { self.owners[tract] = owner }

    /// Claim a tract from the pool. Only tracts claimed here may be added to a district.
    #[inline] pub(crate) fn try_take(&mut self, tract: usize) -> bool { self.pool.try_take(tract) }

    #[inline] pub(crate) fn pool(&self) -> &TractPool { &self.pool }

    #[inline] pub(crate) fn sample(&self, rng: &mut impl Rng) -> Option<usize> { self.pool.sample(rng) }

    /// Clear every owner label and return every tract to the pool.
    pub(crate) fn reset(&mut self) {
        self.owners.fill(None);
        self.pool.reset();
    }

    /// Tracts that break the pool/owner duality, as (tract, owner, in_pool).
    pub(crate) fn mismatches(&self) -> impl Iterator<Item = (usize, Option<DistrictId>, bool)> + '_ {
        self.owners.iter().enumerate()
            .map(|(t, &owner)| (t, owner, self.pool.contains(t)))
            .filter(|&(_, owner, in_pool)| owner.is_none() != in_pool)
    }
}
