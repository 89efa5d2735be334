mod io;
mod plan;

pub use plan::{DistrictRecord, Plan};
