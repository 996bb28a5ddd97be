//! Plan file schema definitions.

use serde::{Deserialize, Serialize};
use takt_config::BuildingConfiguration;

pub const LATEST_VERSION: u32 = 1;

/// A takt plan file: the building configuration plus the user's trade
/// and takt choices. Everything derived from it is recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDef {
    pub version: u32,
    pub id: String,
    pub name: String,
    pub building: BuildingConfiguration,
    /// Selected trades, in flow order. Empty = use the building type's
    /// default sequence.
    #[serde(default)]
    pub trades: Vec<TradeDef>,
    #[serde(default)]
    pub takt: TaktSettingsDef,
}

impl Default for PlanDef {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            name: "New takt plan".to_string(),
            building: BuildingConfiguration::default(),
            trades: Vec::new(),
            takt: TaktSettingsDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeDef {
    pub name: String,
    pub code: String,
    pub duration_days: u32,
    #[serde(default)]
    pub crew_size: u32,
}

/// User takt choices. `None` means "accept the recommendation".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaktSettingsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takt_time_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<u32>,
    /// Working day names ("mon".."sun"). Empty = Mon-Fri.
    #[serde(default)]
    pub working_days: Vec<String>,
    /// ISO date ("2026-03-02") the schedule starts on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_a_fresh_id_and_latest_version() {
        let a = PlanDef::default();
        let b = PlanDef::default();
        assert_eq!(a.version, LATEST_VERSION);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn minimal_yaml_round_trips() {
        let yaml = "version: 1\nid: plan-1\nname: Tower A\nbuilding:\n  building_type: office\n  floor_count: 6\n";
        let plan: PlanDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.building.building_type, "office");
        assert_eq!(plan.building.floor_count, 6);
        assert!(plan.trades.is_empty());
        assert_eq!(plan.takt.takt_time_days, None);

        let out = serde_yaml::to_string(&plan).unwrap();
        let back: PlanDef = serde_yaml::from_str(&out).unwrap();
        assert_eq!(plan, back);
    }
}
