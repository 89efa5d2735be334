use log::debug;

use crate::{
    error::{GrowError, Result},
    partition::{District, DistrictId, Districting, Frontier},
};

/// Outcome of a revalidation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refill {
    /// The district's population is above the target.
    Satisfied,
    /// The frontier ran dry with the district still at or below the target.
    Exhausted,
}

/// What a steal moved, and how the victim recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StealReport {
    pub victim: DistrictId,
    /// Tracts moved directly from the victim to the stealing district.
    pub transferred: usize,
    /// Unassigned tracts claimed from the pool along the way.
    pub claimed: usize,
    pub victim_refill: Refill,
}

impl Districting {
    /// Annex tracts across the border between `stealing` and the registered
    /// district `victim`, then let the victim refill from the pool.
    ///
    /// Candidates start from the neighbors of `stealing`'s tracts that touch
    /// `victim`. A candidate owned by the victim is transferred directly; an
    /// unassigned one is claimed from the pool; anything else is dropped.
    /// Stops once `stealing` exceeds the population target or the frontier
    /// is empty; running dry here is not an error.
    pub fn steal(&mut self, stealing: &mut District, victim: DistrictId) -> Result<StealReport> {
        let target = self.population_target();
        let mut frontier = Frontier::new(self.config.order);

        let graph = &*self.graph;
        let ledger = &mut self.ledger;
        let victim_district = self.districts.iter_mut()
            .find(|d| d.id() == victim)
            .ok_or(GrowError::UnknownDistrict(victim))?;

        for node in stealing.border_tracts_touching(victim, graph, ledger)? {
            frontier.extend(graph.tract(node).neighbors());
        }

        let (mut transferred, mut claimed) = (0, 0);
        while stealing.population() <= target {
            let Some(candidate) = frontier.pop() else { break };
            let node = graph.index_of(&candidate)?;

            if ledger.owner(node) == Some(victim) {
                if !victim_district.remove(node, graph, ledger) {
                    return Err(GrowError::Inconsistent(format!("tract {candidate} is labelled {victim} but is not a member")))
                }
                stealing.add(node, graph, ledger);
                transferred += 1;
            } else if ledger.try_take(node) {
                stealing.add(node, graph, ledger);
                claimed += 1;
            } else {
                continue;
            }

            frontier.extend(graph.tract(node).neighbors());
        }

        debug!(
            "[steal] district {} took {transferred} tracts from {victim} and {claimed} from the pool (population {})",
            stealing.id(), stealing.population(),
        );

        let victim_refill = self.revalidate(victim)?;
        Ok(StealReport { victim, transferred, claimed, victim_refill })
    }

    /// Best-effort refill of a registered district from the pool.
    ///
    /// The frontier is seeded with the neighbors of every member tract, not
    /// only those on the border. Claims continue while the population is at
    /// or below the target; an empty frontier leaves the district short.
    pub fn revalidate(&mut self, id: DistrictId) -> Result<Refill> {
        let target = self.population_target();
        let mut frontier = Frontier::new(self.config.order);

        let graph = &*self.graph;
        let ledger = &mut self.ledger;
        let district = self.districts.iter_mut()
            .find(|d| d.id() == id)
            .ok_or(GrowError::UnknownDistrict(id))?;

        for &node in district.members() {
            frontier.extend(graph.tract(node).neighbors());
        }

        while district.population() <= target {
            let Some(candidate) = frontier.pop() else {
                debug!("[revalidate] district {id} stays under target at population {}", district.population());
                return Ok(Refill::Exhausted)
            };

            let node = graph.index_of(&candidate)?;
            if ledger.try_take(node) {
                district.add(node, graph, ledger);
                frontier.extend(graph.tract(node).neighbors());
            }
        }

        Ok(Refill::Satisfied)
    }
}
