//! Building-type template registry.
//!
//! Static reference data: which building types have an LBS template and
//! what their default takt time is. Unknown types have no template and
//! generate an empty breakdown ("no template available" is a displayable
//! state, not a fault).

/// Fallback base takt for types without a registered template.
pub const DEFAULT_BASE_TAKT_DAYS: u32 = 5;

/// Overall shape of the breakdown for a building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingForm {
    /// Floors stacked vertically; zone math applies per floor.
    Vertical,
    /// Linear sections along an alignment; no floor-based zones.
    Linear,
}

#[derive(Debug, Clone, Copy)]
pub struct BuildingTemplate {
    pub building_type: &'static str,
    pub label: &'static str,
    pub form: BuildingForm,
    /// Template default takt, the recommendation engine's base value.
    pub base_takt_days: u32,
}

const BUILDING_TEMPLATES: [BuildingTemplate; 8] = [
    BuildingTemplate {
        building_type: "residential",
        label: "Residential",
        form: BuildingForm::Vertical,
        base_takt_days: 5,
    },
    BuildingTemplate {
        building_type: "office",
        label: "Office",
        form: BuildingForm::Vertical,
        base_takt_days: 4,
    },
    BuildingTemplate {
        building_type: "hotel",
        label: "Hotel",
        form: BuildingForm::Vertical,
        base_takt_days: 5,
    },
    BuildingTemplate {
        building_type: "hospital",
        label: "Hospital",
        form: BuildingForm::Vertical,
        base_takt_days: 5,
    },
    BuildingTemplate {
        building_type: "educational",
        label: "Educational",
        form: BuildingForm::Vertical,
        base_takt_days: 4,
    },
    BuildingTemplate {
        building_type: "industrial",
        label: "Industrial",
        form: BuildingForm::Vertical,
        base_takt_days: 5,
    },
    BuildingTemplate {
        building_type: "mixed_use",
        label: "Mixed use",
        form: BuildingForm::Vertical,
        base_takt_days: 5,
    },
    BuildingTemplate {
        building_type: "infrastructure",
        label: "Infrastructure",
        form: BuildingForm::Linear,
        base_takt_days: 5,
    },
];

pub fn building_templates() -> &'static [BuildingTemplate] {
    &BUILDING_TEMPLATES
}

/// Find a template by building-type code (case-insensitive, trimmed).
pub fn find_building_template(building_type: &str) -> Option<&'static BuildingTemplate> {
    let code = building_type.trim();
    BUILDING_TEMPLATES
        .iter()
        .find(|template| template.building_type.eq_ignore_ascii_case(code))
}

/// Base takt for a building type, falling back to the default.
pub fn base_takt_days(building_type: &str) -> u32 {
    find_building_template(building_type)
        .map(|template| template.base_takt_days)
        .unwrap_or(DEFAULT_BASE_TAKT_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn type_codes_are_unique() {
        let mut seen = HashSet::new();
        for template in building_templates() {
            assert!(seen.insert(template.building_type));
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert!(find_building_template(" Hospital ").is_some());
        assert!(find_building_template("spaceport").is_none());
    }

    #[test]
    fn unknown_types_fall_back_to_default_base_takt() {
        assert_eq!(base_takt_days("office"), 4);
        assert_eq!(base_takt_days("spaceport"), DEFAULT_BASE_TAKT_DAYS);
    }
}
