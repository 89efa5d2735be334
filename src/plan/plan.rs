use serde::{Deserialize, Serialize};

use crate::{map::TractId, partition::DistrictId};

/// One finished district as plain data: its id, population, and member tracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRecord {
    district: DistrictId,
    population: u64,
    tracts: Vec<TractId>, // membership order at snapshot time
}

impl DistrictRecord {
    pub fn new(district: DistrictId, population: u64, tracts: Vec<TractId>) -> Self {
        Self { district, population, tracts }
    }

    #[inline] pub fn district(&self) -> DistrictId { self.district }

    #[inline] pub fn population(&self) -> u64 { self.population }

    #[inline] pub fn tracts(&self) -> &[TractId] { &self.tracts }

    /// Relative deviation of this district's population from `target`.
    pub fn deviation(&self, target: u64) -> f64 {
        (self.population as f64 - target as f64) / target as f64
    }
}

/// The output of a partition run, detached from any run state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    population_target: u64,
    districts: Vec<DistrictRecord>,
}

impl Plan {
    pub fn new(population_target: u64, districts: Vec<DistrictRecord>) -> Self {
        Self { population_target, districts }
    }

    #[inline] pub fn population_target(&self) -> u64 { self.population_target }

    /// Districts in the order they were grown.
    #[inline] pub fn districts(&self) -> &[DistrictRecord] { &self.districts }

    /// Get the number of districts in this plan.
    #[inline] pub fn num_districts(&self) -> usize { self.districts.len() }

    /// Total number of assigned tracts.
    pub fn num_tracts(&self) -> usize {
        self.districts.iter().map(|d| d.tracts.len()).sum()
    }

    /// Total assigned population.
    pub fn total_population(&self) -> u64 {
        self.districts.iter().map(DistrictRecord::population).sum()
    }

    /// Every assigned tract paired with its district, in district order.
    pub fn assignments(&self) -> Vec<(TractId, DistrictId)> {
        self.districts.iter()
            .flat_map(|d| d.tracts.iter().map(move |t| (t.clone(), d.district)))
            .collect()
    }

    /// Relative deviation of each district from the population target.
    /// Reported only; nothing in the engine corrects for it.
    pub fn deviations(&self) -> Vec<f64> {
        self.districts.iter().map(|d| d.deviation(self.population_target)).collect()
    }

    /// Largest absolute deviation from the target, if there are any districts.
    pub fn max_abs_deviation(&self) -> Option<f64> {
        self.deviations().into_iter().map(f64::abs).reduce(f64::max)
    }
}
