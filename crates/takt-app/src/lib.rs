//! takt-app: shared application service layer for taktflow.
//!
//! Provides a unified interface for frontends: plan-file handling,
//! preview composition (locations + recommendation + estimate), takt
//! grid construction, and the persistence payload shapes submitted to
//! the external Setup and Locations APIs.

pub mod error;
pub mod plan;
pub mod plan_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use plan::{LATEST_VERSION, PlanDef, TaktSettingsDef, TradeDef};
pub use plan_service::{
    LocationsPayload, PlanPreview, SetupPayload, build_plan_preview, build_takt_grid,
    effective_trades, load_plan, locations_payload, plan_workweek, save_plan, setup_payload,
    validate_plan,
};
