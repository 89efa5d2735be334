//! Tract graph loading from tabular and JSON sources.

mod csv;
mod json;
