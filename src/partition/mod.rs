mod district;
mod districting;
mod frontier;
mod grow;
mod ledger;
mod pool;
mod steal;

pub use district::{District, DistrictId};
pub use districting::Districting;
pub use frontier::FrontierOrder;
pub use steal::{Refill, StealReport};

pub(crate) use frontier::Frontier;
pub(crate) use ledger::Ledger;
