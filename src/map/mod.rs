mod graph;
mod io;
mod tract;
mod tract_id;

pub use graph::TractGraph;
pub use tract::Tract;
pub use tract_id::TractId;
