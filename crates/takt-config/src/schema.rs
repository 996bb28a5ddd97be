//! Building configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Physical and organizational parameters of a project, as captured by the
/// setup wizard's building-configuration step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildingConfiguration {
    /// Building-type code selecting the LBS template ("residential",
    /// "office", ...). Unknown codes yield an empty breakdown downstream.
    pub building_type: String,
    /// Above-ground floors.
    pub floor_count: u32,
    /// Below-ground floors, counted from the foundation side.
    pub basement_count: u32,
    /// Fit-out zones per floor.
    pub zones_per_floor: u32,
    /// Shell & core zones per floor.
    pub structural_zones_per_floor: u32,
    /// Ground-level substructure sectors, independent of floors.
    pub substructure_zones_count: u32,
    pub typical_floor_area_sqm: f64,
    /// Factor table codes. Empty string = unset (resolves neutral).
    pub structural_system: String,
    pub mep_complexity: String,
    pub foundation_type: String,
    pub ground_condition: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ground_improvement: Vec<String>,
    pub site_condition: String,
    pub delivery_method: String,
    pub flow_direction: FlowDirection,
}

impl Default for BuildingConfiguration {
    fn default() -> Self {
        Self {
            building_type: "residential".to_string(),
            floor_count: 1,
            basement_count: 0,
            zones_per_floor: 2,
            structural_zones_per_floor: 1,
            substructure_zones_count: 2,
            typical_floor_area_sqm: 0.0,
            structural_system: String::new(),
            mep_complexity: String::new(),
            foundation_type: String::new(),
            ground_condition: String::new(),
            ground_improvement: Vec::new(),
            site_condition: String::new(),
            delivery_method: String::new(),
            flow_direction: FlowDirection::default(),
        }
    }
}

/// Direction the takt train moves through the building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    #[default]
    BottomUp,
    TopDown,
    Bidirectional,
}

impl FlowDirection {
    /// Top-down and bidirectional flows need vertical handover
    /// coordination between crews, which widens the trade buffer.
    pub fn needs_vertical_coordination(self) -> bool {
        matches!(self, Self::TopDown | Self::Bidirectional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_direction_coordination_set() {
        assert!(!FlowDirection::BottomUp.needs_vertical_coordination());
        assert!(FlowDirection::TopDown.needs_vertical_coordination());
        assert!(FlowDirection::Bidirectional.needs_vertical_coordination());
    }

    #[test]
    fn default_configuration_is_minimal_residential() {
        let config = BuildingConfiguration::default();
        assert_eq!(config.building_type, "residential");
        assert_eq!(config.floor_count, 1);
        assert_eq!(config.flow_direction, FlowDirection::BottomUp);
    }
}
