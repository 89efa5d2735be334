#![doc = "Floodmander public API"]
mod config;
mod error;
mod map;
mod partition;
mod plan;

#[doc(inline)]
pub use config::{DEFAULT_DISTRICT_COUNT, DEFAULT_POPULATION_TARGET, DEFAULT_START_TRACT, GrowConfig};

#[doc(inline)]
pub use error::{GrowError, Result};

#[doc(inline)]
pub use map::{Tract, TractGraph, TractId};

#[doc(inline)]
pub use partition::{District, DistrictId, Districting, FrontierOrder, Refill, StealReport};

#[doc(inline)]
pub use plan::{DistrictRecord, Plan};
