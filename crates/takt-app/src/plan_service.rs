//! Plan loading, validation, and preview composition.
//!
//! Everything derived from the plan (locations, recommendation,
//! estimate) is recomputed on every call; only the payloads returned to
//! the caller are ever persisted, and by the external APIs, not here.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use takt_config::normalize;
use takt_core::Workweek;
use takt_engine::{
    Assignment, DurationEstimate, TaktRecommendation, Wagon, ZoneSlot, estimate_duration,
    generate_takt_grid, recommend_buffer, recommend_takt,
};
use takt_lbs::{
    FlatLocationRow, LbsParams, LocationCount, Phase, base_takt_days, count_template_locations,
    find_building_template, flatten_locations, generate_location_breakdown,
};

use crate::error::{AppError, AppResult};
use crate::plan::{LATEST_VERSION, PlanDef, TradeDef};

/// Everything the wizard shows for the current configuration.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanPreview {
    /// Template display label; `None` means "no template available".
    pub building_label: Option<String>,
    pub locations: Vec<FlatLocationRow>,
    pub counts: LocationCount,
    pub recommendation: TaktRecommendation,
    pub recommended_buffer: u32,
    /// Chosen values: user override, or the recommendation.
    pub takt_time_days: u32,
    pub buffer_size: u32,
    pub trade_count: u32,
    pub estimate: DurationEstimate,
}

/// Body for the bulk create-locations endpoint. Rows are submitted in
/// order; the server resolves `parent_name` against earlier rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationsPayload {
    pub locations: Vec<FlatLocationRow>,
}

/// Body for the setup completion endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetupPayload {
    pub takt_time_days: u32,
    pub buffer_size: u32,
    pub working_days: Vec<&'static str>,
}

/// Load a plan from a YAML file.
pub fn load_plan(path: &Path) -> AppResult<PlanDef> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::PlanFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let plan: PlanDef = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Plan(format!("Failed to parse plan YAML: {}", e)))?;

    validate_plan(&plan)?;
    Ok(plan)
}

/// Save a plan to a YAML file.
pub fn save_plan(path: &Path, plan: &PlanDef) -> AppResult<()> {
    let content = serde_yaml::to_string(plan)
        .map_err(|e| AppError::Plan(format!("Failed to serialize plan: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::PlanFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate plan structure. Engine inputs are clamped rather than
/// validated; only file-level problems are errors.
pub fn validate_plan(plan: &PlanDef) -> AppResult<()> {
    if plan.version > LATEST_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported plan version: {}",
            plan.version
        )));
    }

    let mut seen = std::collections::HashSet::new();
    for trade in &plan.trades {
        if !seen.insert(trade.code.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate trade code: {}",
                trade.code
            )));
        }
    }

    Ok(())
}

/// The plan's working week (empty day list = Mon-Fri).
pub fn plan_workweek(plan: &PlanDef) -> Workweek {
    Workweek::from_names(&plan.takt.working_days)
}

/// The plan's trades, falling back to the building type's default
/// sequence when the trade-selection step has not run yet.
pub fn effective_trades(plan: &PlanDef) -> Vec<TradeDef> {
    if !plan.trades.is_empty() {
        return plan.trades.clone();
    }
    takt_engine::default_trades(&plan.building.building_type)
        .iter()
        .map(|trade| TradeDef {
            name: trade.name.to_string(),
            code: trade.code.to_string(),
            duration_days: trade.duration_days,
            crew_size: trade.crew_size,
        })
        .collect()
}

/// Compose the full preview: locations, recommendation, and duration
/// estimate for the plan as currently configured.
pub fn build_plan_preview(plan: &PlanDef) -> PlanPreview {
    let config = normalize(&plan.building);

    let forest = generate_location_breakdown(&LbsParams::from_config(&config));
    let locations = flatten_locations(&forest);
    let counts = count_template_locations(&forest);

    let recommendation = recommend_takt(&config, base_takt_days(&config.building_type));
    let recommended_buffer = recommend_buffer(&config);
    let takt_time_days = plan
        .takt
        .takt_time_days
        .unwrap_or(recommendation.recommended_days);
    let buffer_size = plan.takt.buffer_size.unwrap_or(recommended_buffer);

    // The takt train runs through the fit-out zones; shell and
    // substructure rows are spatial context, not train stations.
    let trade_count = effective_trades(plan).len() as u32;
    let estimate = estimate_duration(
        counts.finishing_zones as u32,
        trade_count,
        buffer_size,
        takt_time_days,
        plan_workweek(plan),
    );

    tracing::info!(
        rows = locations.len(),
        zones = counts.zones,
        takt_time_days,
        buffer_size,
        "built plan preview"
    );

    PlanPreview {
        building_label: find_building_template(&config.building_type)
            .map(|template| template.label.to_string()),
        locations,
        counts,
        recommendation,
        recommended_buffer,
        takt_time_days,
        buffer_size,
        trade_count,
        estimate,
    }
}

/// Bulk-create body for the Locations API.
pub fn locations_payload(preview: &PlanPreview) -> LocationsPayload {
    LocationsPayload {
        locations: preview.locations.clone(),
    }
}

/// Settings body for the setup completion endpoint.
pub fn setup_payload(plan: &PlanDef, preview: &PlanPreview) -> SetupPayload {
    SetupPayload {
        takt_time_days: preview.takt_time_days,
        buffer_size: preview.buffer_size,
        working_days: plan_workweek(plan).day_names(),
    }
}

/// Build the zone x wagon assignment grid for a plan with a start date.
pub fn build_takt_grid(plan: &PlanDef) -> AppResult<Vec<Assignment>> {
    let start_date = plan
        .takt
        .start_date
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("plan has no takt.start_date".to_string()))?;
    let start_date: NaiveDate = start_date
        .parse()
        .map_err(|e| AppError::InvalidInput(format!("bad start_date '{start_date}': {e}")))?;

    let preview = build_plan_preview(plan);
    let zones: Vec<ZoneSlot> = preview
        .locations
        .iter()
        .filter(|row| row.phase == Some(Phase::Finishing))
        .enumerate()
        .map(|(i, row)| ZoneSlot {
            name: format!("{} / {}", row.parent_name.as_deref().unwrap_or(""), row.name),
            sequence: i as u32 + 1,
        })
        .collect();

    let wagons: Vec<Wagon> = effective_trades(plan)
        .iter()
        .enumerate()
        .map(|(i, trade)| Wagon {
            name: trade.name.clone(),
            code: trade.code.clone(),
            sequence: i as u32 + 1,
            duration_days: trade.duration_days,
            buffer_after: preview.buffer_size,
        })
        .collect();

    Ok(generate_takt_grid(
        &zones,
        &wagons,
        start_date,
        preview.takt_time_days,
        plan_workweek(plan),
    ))
}
