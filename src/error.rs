//! Error types for district construction.

use thiserror::Error;

use crate::{map::TractId, partition::DistrictId};

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GrowError>;

/// Fatal conditions raised while building districts.
///
/// None of these are retried inside the engine; they surface to the caller of
/// [`Districting::partition`](crate::Districting::partition) unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrowError {
    /// A tract id (usually a neighbor reference) is not present in the graph.
    #[error("tract {0} not found in graph")]
    NotFound(TractId),

    /// Two tracts in the input share the same id.
    #[error("tract {0} appears more than once in graph")]
    DuplicateTract(TractId),

    /// The seed of a growth round was already claimed by another district.
    #[error("starting tract {0} is already taken")]
    TractAlreadyOwned(TractId),

    /// No unassigned tract remains to seed the next round.
    #[error("no unassigned tracts remain to pick a seed from")]
    EmptyPool,

    /// A district ran out of frontier and borders no other district.
    #[error("district {0} is trapped with no neighboring district to steal from")]
    TrappedWithNoNeighbor(DistrictId),

    /// A district id was referenced that has not been registered in this run.
    #[error("district {0} is not registered in this run")]
    UnknownDistrict(DistrictId),

    /// An ownership, pool, or population invariant does not hold.
    #[error("inconsistent run state: {0}")]
    Inconsistent(String),
}
