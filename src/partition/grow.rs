use log::debug;

use crate::{
    error::{GrowError, Result},
    map::TractId,
    partition::{District, DistrictId, Districting, Frontier},
};

impl Districting {
    /// Grow one district by flood fill from `seed` until its population
    /// exceeds the population target.
    ///
    /// Candidates come off the frontier in the configured order; a candidate
    /// that cannot be claimed from the pool is dropped. If the frontier runs
    /// dry first, the district steals from the first adjacent district found
    /// and growth ends whatever the outcome.
    ///
    /// Returns the district (not yet registered) and a random unassigned tract
    /// to seed the next round.
    pub fn grow_district(&mut self, seed: &TractId, id: DistrictId) -> Result<(District, TractId)> {
        let target = self.population_target();
        let start = self.graph.index_of(seed)?;
        if !self.ledger.try_take(start) { return Err(GrowError::TractAlreadyOwned(seed.clone())) }

        let mut district = District::new(id);
        district.add(start, &self.graph, &mut self.ledger);

        let mut frontier = Frontier::new(self.config.order);
        frontier.extend(self.graph.tract(start).neighbors());

        while district.population() <= target {
            let Some(candidate) = frontier.pop() else {
                // Trapped: nothing left to claim around this district.
                let adjacent = self.adjacent_district_ids(&district)?;
                let Some(&victim) = adjacent.first() else {
                    return Err(GrowError::TrappedWithNoNeighbor(id))
                };
                debug!("[grow] district {id} trapped at population {}; stealing from {victim}", district.population());
                self.steal(&mut district, victim)?;
                break;
            };

            let node = self.graph.index_of(&candidate)?;
            if self.ledger.try_take(node) {
                district.add(node, &self.graph, &mut self.ledger);
                frontier.extend(self.graph.tract(node).neighbors());
            }
        }

        debug!("[grow] {district} ({} candidates left on frontier)", frontier.len());

        let next = self.sample_seed()?;
        Ok((district, next))
    }
}
