//! Configuration normalization.
//!
//! Numeric inputs are clamped to their documented bounds; unknown codes
//! pass through untouched and resolve to neutral multipliers downstream.

use crate::schema::BuildingConfiguration;

pub const FLOOR_COUNT_MAX: u32 = 200;
pub const BASEMENT_COUNT_MAX: u32 = 10;
pub const ZONES_PER_FLOOR_RANGE: (u32, u32) = (1, 8);
pub const STRUCTURAL_ZONES_RANGE: (u32, u32) = (1, 4);
pub const SUBSTRUCTURE_ZONES_RANGE: (u32, u32) = (2, 8);

/// Return a copy of the configuration with every numeric field clamped
/// into range. Never fails.
pub fn normalize(config: &BuildingConfiguration) -> BuildingConfiguration {
    let mut out = config.clone();
    out.floor_count = out.floor_count.min(FLOOR_COUNT_MAX);
    out.basement_count = out.basement_count.min(BASEMENT_COUNT_MAX);
    out.zones_per_floor = out
        .zones_per_floor
        .clamp(ZONES_PER_FLOOR_RANGE.0, ZONES_PER_FLOOR_RANGE.1);
    out.structural_zones_per_floor = out
        .structural_zones_per_floor
        .clamp(STRUCTURAL_ZONES_RANGE.0, STRUCTURAL_ZONES_RANGE.1);
    out.substructure_zones_count = out
        .substructure_zones_count
        .clamp(SUBSTRUCTURE_ZONES_RANGE.0, SUBSTRUCTURE_ZONES_RANGE.1);
    if !out.typical_floor_area_sqm.is_finite() || out.typical_floor_area_sqm < 0.0 {
        out.typical_floor_area_sqm = 0.0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through() {
        let config = BuildingConfiguration {
            floor_count: 12,
            basement_count: 2,
            zones_per_floor: 4,
            structural_zones_per_floor: 2,
            substructure_zones_count: 3,
            typical_floor_area_sqm: 850.0,
            ..Default::default()
        };
        assert_eq!(normalize(&config), config);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = BuildingConfiguration {
            floor_count: 1000,
            basement_count: 99,
            zones_per_floor: 0,
            structural_zones_per_floor: 9,
            substructure_zones_count: 1,
            typical_floor_area_sqm: -40.0,
            ..Default::default()
        };
        let normalized = normalize(&config);
        assert_eq!(normalized.floor_count, 200);
        assert_eq!(normalized.basement_count, 10);
        assert_eq!(normalized.zones_per_floor, 1);
        assert_eq!(normalized.structural_zones_per_floor, 4);
        assert_eq!(normalized.substructure_zones_count, 2);
        assert_eq!(normalized.typical_floor_area_sqm, 0.0);
    }

    #[test]
    fn non_finite_area_degrades_to_zero() {
        let config = BuildingConfiguration {
            typical_floor_area_sqm: f64::NAN,
            ..Default::default()
        };
        assert_eq!(normalize(&config).typical_floor_area_sqm, 0.0);
    }
}
