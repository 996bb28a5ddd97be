//! takt-config: building configuration schema and normalization.
//!
//! The configuration is produced and edited by the external setup wizard;
//! the engine only reads it. Out-of-range values are clamped, never
//! rejected, because the engine feeds a live, partially filled form.

pub mod schema;
pub mod validate;

pub use schema::{BuildingConfiguration, FlowDirection};
pub use validate::normalize;
