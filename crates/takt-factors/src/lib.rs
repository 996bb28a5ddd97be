//! takt-factors: static construction-parameter reference data.
//!
//! Four independent factor tables (structural system, MEP complexity,
//! foundation type, ground condition), each item carrying a takt-duration
//! multiplier. Tables are immutable `&'static` data and safe to share
//! across concurrent callers.

pub mod catalog;

pub use catalog::{
    FactorItem, FactorTable, HIGH_COMPLEXITY_MEP_THRESHOLD, NEUTRAL_MULTIPLIER, all_tables,
    foundation_types, ground_conditions, mep_complexity, structural_systems,
};
