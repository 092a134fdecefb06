//! Core processing building blocks: crop parameters and the bounds-checked
//! crop itself. These are internal primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
