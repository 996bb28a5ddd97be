//! takt-core: stable foundation for taktflow.
//!
//! Contains:
//! - numeric (Real + rounding/clamping helpers)
//! - calendar (weekly working-day set + working-day arithmetic)

pub mod calendar;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use calendar::Workweek;
pub use numeric::*;
