//! Plan serialization.

mod csv;
mod json;
