pub mod inspect;
pub mod redistrict;
