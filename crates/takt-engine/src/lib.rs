//! takt-engine: takt recommendation and flow-line computation.
//!
//! Pure, synchronous functions over validated inputs:
//! - recommend (takt time + trade buffer from factor tables)
//! - estimate (flow-line duration: takts, working days, calendar days)
//! - grid (zone x wagon assignment grid and trade-stacking checks)
//! - trades (per-building-type default trade sequences)
//!
//! Everything here is referentially transparent and cheap enough to
//! recompute on every configuration change.

pub mod estimate;
pub mod grid;
pub mod recommend;
pub mod trades;

pub use estimate::{DurationEstimate, estimate_duration};
pub use grid::{
    Assignment, StackingConflict, Wagon, ZoneSlot, detect_trade_stacking, generate_takt_grid,
    project_end_date,
};
pub use recommend::{
    BUFFER_MAX, STANDARD_PARAMETERS_MESSAGE, TAKT_MAX_DAYS, TAKT_MIN_DAYS, TaktRecommendation,
    recommend_buffer, recommend_takt,
};
pub use trades::{TradeTemplate, default_trades, wagons_with_buffer};
