use std::sync::Arc;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::GrowConfig,
    error::{GrowError, Result},
    map::{TractGraph, TractId},
    partition::{District, DistrictId, Ledger},
    plan::{DistrictRecord, Plan},
};

/// The state of one partition run: the shared tract graph, the ownership
/// ledger and pool, and the registry of finished districts.
///
/// Independent runs over the same graph each use their own `Districting`.
#[derive(Debug, Clone)]
pub struct Districting {
    pub(super) graph: Arc<TractGraph>,
    pub(super) config: GrowConfig,
    pub(super) ledger: Ledger,
    pub(super) districts: Vec<District>, // registry, in round order
    pub(super) rng: StdRng,
}

impl Districting {
    /// Create a fresh run context with every tract unassigned.
    pub fn new(graph: impl Into<Arc<TractGraph>>, config: GrowConfig) -> Self {
        let graph: Arc<TractGraph> = graph.into();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { ledger: Ledger::new(graph.len()), graph, config, districts: Vec::new(), rng }
    }

    #[inline] pub fn graph(&self) -> &TractGraph { &self.graph }

    #[inline] pub fn config(&self) -> &GrowConfig { &self.config }

    #[inline] pub fn population_target(&self) -> u64 { self.config.population_target }

    /// Districts registered so far in this run, in round order.
    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Get a registered district by id.
    pub fn district(&self, id: DistrictId) -> Result<&District> {
        self.districts.iter().find(|d| d.id() == id).ok_or(GrowError::UnknownDistrict(id))
    }

    /// Get the district currently owning a tract, if any.
    pub fn ownership_of(&self, tract: &TractId) -> Result<Option<DistrictId>> {
        Ok(self.ledger.owner(self.graph.index_of(tract)?))
    }

    /// Overwrite a tract's owner label without validation.
    /// The pool is not touched; callers are responsible for keeping both in sync.
    /// A labelled tract still in the pool can be claimed by a later round, which
    /// relabels it; [`Districting::audit`] reports the mismatch until then.
    pub fn set_ownership(&mut self, tract: &TractId, owner: Option<DistrictId>) -> Result<()> {
        let node = self.graph.index_of(tract)?;
        self.ledger.set_owner(node, owner);
        Ok(())
    }

    /// Remove a tract from the pool, returning whether it was there.
    pub fn try_take(&mut self, tract: &TractId) -> Result<bool> {
        let node = self.graph.index_of(tract)?;
        Ok(self.ledger.try_take(node))
    }

    /// Whether a tract is currently unassigned.
    pub fn is_available(&self, tract: &TractId) -> Result<bool> {
        Ok(self.ledger.pool().contains(self.graph.index_of(tract)?))
    }

    /// Number of unassigned tracts.
    #[inline] pub fn pool_len(&self) -> usize { self.ledger.pool().len() }

    #[inline] pub fn pool_is_empty(&self) -> bool { self.ledger.pool().is_empty() }

    /// Ids of unassigned tracts, in no particular order.
    pub fn pool_ids(&self) -> impl Iterator<Item = &TractId> + '_ {
        self.ledger.pool().members().iter().map(|&node| self.graph.tract(node).id())
    }

    /// Pick an unassigned tract uniformly at random to seed the next round.
    pub fn sample_seed(&mut self) -> Result<TractId> {
        let node = self.ledger.sample(&mut self.rng).ok_or(GrowError::EmptyPool)?;
        Ok(self.graph.tract(node).id().clone())
    }

    /// Other districts owning a neighbor of any tract in `district`, in discovery order.
    pub fn adjacent_district_ids(&self, district: &District) -> Result<Vec<DistrictId>> {
        district.adjacent_district_ids(&self.graph, &self.ledger)
    }

    /// Tracts of `district` with at least one neighbor owned by `other`.
    pub fn border_tracts_touching(&self, district: &District, other: DistrictId) -> Result<Vec<TractId>> {
        Ok(district.border_tracts_touching(other, &self.graph, &self.ledger)?.into_iter()
            .map(|node| self.graph.tract(node).id().clone())
            .collect())
    }

    /// Record a finished district so later rounds can steal from it.
    pub fn register(&mut self, district: District) -> Result<()> {
        if self.districts.iter().any(|d| d.id() == district.id()) {
            return Err(GrowError::Inconsistent(format!("district {} registered twice", district.id())))
        }
        self.districts.push(district);
        Ok(())
    }

    /// Build `district_count` districts by growing from `seed`, each round
    /// seeding the next from a random unassigned tract.
    ///
    /// On success the districts are returned as a [`Plan`] and the run state
    /// is reset so the context can be reused. On failure the error is returned
    /// and the state is left as it was at the point of failure.
    pub fn partition(&mut self, seed: &TractId, district_count: u32) -> Result<Plan> {
        info!(
            "[partition] growing {district_count} districts over {} tracts from {seed} (target {}, {} order)",
            self.graph.len(), self.population_target(), self.config.order,
        );

        let mut current = seed.clone();
        for i in 0..district_count {
            let (district, next) = self.grow_district(&current, DistrictId(i))?;
            debug!("[partition] round {i}: {district}; next seed {next}");
            self.register(district)?;
            debug_assert!(self.audit().is_ok(), "{:?}", self.audit());
            current = next;
        }

        info!("[partition] {} tracts remain unassigned", self.pool_len());

        let plan = self.plan();
        self.reset();
        Ok(plan)
    }

    /// [`Districting::partition`] with the configured district count.
    pub fn run(&mut self, seed: &TractId) -> Result<Plan> {
        self.partition(seed, self.config.district_count)
    }

    /// Snapshot the registered districts as plain data.
    pub fn plan(&self) -> Plan {
        let records = self.districts.iter()
            .map(|d| DistrictRecord::new(d.id(), d.population(), d.tract_ids(&self.graph).cloned().collect()))
            .collect();
        Plan::new(self.population_target(), records)
    }

    /// Unassign every tract, refill the pool, and clear the registry.
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.districts.clear();
    }

    /// Verify exclusivity, population consistency, and pool/ownership duality
    /// over the registered districts.
    pub fn audit(&self) -> Result<()> {
        let inconsistent = |msg: String| -> Result<()> { Err(GrowError::Inconsistent(msg)) };
        let mut member_of: Vec<Option<DistrictId>> = vec![None; self.graph.len()];

        for district in &self.districts {
            let mut population = 0;
            for &node in district.members() {
                let tract = self.graph.tract(node);
                if let Some(other) = member_of[node] {
                    return inconsistent(format!("tract {} is in districts {other} and {}", tract.id(), district.id()))
                }
                member_of[node] = Some(district.id());
                if self.ledger.owner(node) != Some(district.id()) {
                    return inconsistent(format!("tract {} in district {} is labelled {:?}", tract.id(), district.id(), self.ledger.owner(node)))
                }
                population += tract.population();
            }
            if population != district.population() {
                return inconsistent(format!("district {} records population {} but its tracts sum to {population}", district.id(), district.population()))
            }
        }

        if let Some((node, owner, in_pool)) = self.ledger.mismatches().next() {
            return inconsistent(format!("tract {} has owner {owner:?} but in_pool = {in_pool}", self.graph.tract(node).id()))
        }

        for (node, &member) in member_of.iter().enumerate() {
            if self.ledger.owner(node) != member {
                return inconsistent(format!("tract {} is labelled {:?} but is a member of {member:?}", self.graph.tract(node).id(), self.ledger.owner(node)))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tract;

    fn ids(list: &[&str]) -> Vec<TractId> { list.iter().map(|s| TractId::new(s)).collect() }

    fn config(target: u64) -> GrowConfig {
        GrowConfig { population_target: target, seed: Some(1), ..GrowConfig::default() }
    }

    /// a - b - c, every tract population 100.
    fn three_line() -> TractGraph {
        TractGraph::new(vec![
            Tract::new("a", 100, ids(&["b"])),
            Tract::new("b", 100, ids(&["a", "c"])),
            Tract::new("c", 100, ids(&["b"])),
        ]).unwrap()
    }

    #[test]
    fn fresh_context_is_consistent() {
        let ctx = Districting::new(three_line(), config(150));
        assert_eq!(ctx.pool_len(), 3);
        assert!(ctx.districts().is_empty());
        assert!(ctx.audit().is_ok());
    }

    #[test]
    fn ownership_roundtrip_and_unknown_ids() {
        let mut ctx = Districting::new(three_line(), config(150));
        let b = TractId::new("b");

        assert_eq!(ctx.ownership_of(&b), Ok(None));
        ctx.set_ownership(&b, Some(DistrictId(4))).unwrap();
        assert_eq!(ctx.ownership_of(&b), Ok(Some(DistrictId(4))));

        let ghost = TractId::new("ghost");
        assert_eq!(ctx.ownership_of(&ghost), Err(GrowError::NotFound(ghost.clone())));
        assert_eq!(ctx.try_take(&ghost), Err(GrowError::NotFound(ghost)));
    }

    #[test]
    fn try_take_succeeds_once() {
        let mut ctx = Districting::new(three_line(), config(150));
        let a = TractId::new("a");
        assert_eq!(ctx.try_take(&a), Ok(true));
        assert_eq!(ctx.try_take(&a), Ok(false));
        assert_eq!(ctx.is_available(&a), Ok(false));
        assert_eq!(ctx.pool_len(), 2);
    }

    #[test]
    fn sample_seed_on_empty_pool_fails() {
        let mut ctx = Districting::new(three_line(), config(150));
        for id in ids(&["a", "b", "c"]) { ctx.try_take(&id).unwrap(); }
        assert!(ctx.pool_is_empty());
        assert_eq!(ctx.sample_seed(), Err(GrowError::EmptyPool));
    }

    #[test]
    fn sample_seed_draws_from_pool() {
        let mut ctx = Districting::new(three_line(), config(150));
        ctx.try_take(&TractId::new("a")).unwrap();
        ctx.try_take(&TractId::new("c")).unwrap();
        assert_eq!(ctx.sample_seed(), Ok(TractId::new("b")));
        assert_eq!(ctx.pool_ids().cloned().collect::<Vec<_>>(), ids(&["b"]));
    }

    #[test]
    fn register_rejects_duplicate_ids() {
        let mut ctx = Districting::new(three_line(), config(150));
        ctx.register(District::new(DistrictId(0))).unwrap();
        assert!(matches!(ctx.register(District::new(DistrictId(0))), Err(GrowError::Inconsistent(_))));
        assert!(ctx.district(DistrictId(0)).is_ok());
        assert_eq!(ctx.district(DistrictId(1)), Err(GrowError::UnknownDistrict(DistrictId(1))));
    }

    #[test]
    fn audit_detects_label_without_membership() {
        let mut ctx = Districting::new(three_line(), config(150));
        let a = TractId::new("a");
        ctx.try_take(&a).unwrap();
        ctx.set_ownership(&a, Some(DistrictId(0))).unwrap();
        assert!(matches!(ctx.audit(), Err(GrowError::Inconsistent(_))));
    }

    #[test]
    fn audit_detects_pool_mismatch() {
        let mut ctx = Districting::new(three_line(), config(150));
        ctx.try_take(&TractId::new("b")).unwrap();
        assert!(matches!(ctx.audit(), Err(GrowError::Inconsistent(_))));
    }

    #[test]
    fn partition_of_line_stops_after_crossing_target() {
        let mut ctx = Districting::new(three_line(), config(150));
        let plan = ctx.partition(&TractId::new("a"), 1).unwrap();

        assert_eq!(plan.districts().len(), 1);
        let district = &plan.districts()[0];
        assert_eq!(district.population(), 200);
        assert_eq!(district.tracts(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn partition_resets_state() {
        let mut ctx = Districting::new(three_line(), config(150));
        ctx.partition(&TractId::new("a"), 1).unwrap();

        assert_eq!(ctx.pool_len(), 3);
        assert!(ctx.districts().is_empty());
        for id in ids(&["a", "b", "c"]) {
            assert_eq!(ctx.ownership_of(&id), Ok(None));
        }
        assert!(ctx.audit().is_ok());

        // A second run over the same context behaves like the first.
        let again = ctx.partition(&TractId::new("a"), 1).unwrap();
        assert_eq!(again.districts()[0].population(), 200);
    }

    #[test]
    fn partition_with_unknown_seed_fails() {
        let mut ctx = Districting::new(three_line(), config(150));
        let ghost = TractId::new("ghost");
        assert_eq!(ctx.partition(&ghost, 1), Err(GrowError::NotFound(ghost)));
    }

    #[test]
    fn run_uses_configured_count() {
        let graph = TractGraph::new(vec![
            Tract::new("a", 100, ids(&["b"])),
            Tract::new("b", 100, ids(&["a"])),
            Tract::new("c", 100, ids(&["d"])),
            Tract::new("d", 100, ids(&["c"])),
            Tract::new("e", 100, ids(&[])),
        ]).unwrap();
        let mut ctx = Districting::new(graph, GrowConfig { district_count: 1, ..config(150) });
        let plan = ctx.run(&TractId::new("a")).unwrap();
        assert_eq!(plan.districts().len(), 1);
    }
}
