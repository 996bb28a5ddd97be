//! Template expansion: building configuration to location tree.

use takt_config::{BuildingConfiguration, normalize};
use takt_core::round1;

use crate::registry::{BuildingForm, find_building_template};
use crate::template::{LocationTemplateNode, LocationType, Phase};

/// Inputs for one generation call, already clamped into range.
#[derive(Debug, Clone, PartialEq)]
pub struct LbsParams {
    pub building_type: String,
    pub floor_count: u32,
    pub basement_count: u32,
    pub zones_per_floor: u32,
    pub structural_zones_per_floor: u32,
    pub substructure_zones_count: u32,
    /// 0 = unknown; zone areas are omitted.
    pub typical_floor_area_sqm: f64,
}

impl LbsParams {
    /// Extract generation parameters from a configuration, clamping
    /// every field on the way.
    pub fn from_config(config: &BuildingConfiguration) -> Self {
        let config = normalize(config);
        Self {
            building_type: config.building_type,
            floor_count: config.floor_count,
            basement_count: config.basement_count,
            zones_per_floor: config.zones_per_floor,
            structural_zones_per_floor: config.structural_zones_per_floor,
            substructure_zones_count: config.substructure_zones_count,
            typical_floor_area_sqm: config.typical_floor_area_sqm,
        }
    }
}

/// Expand the building-type template into a location forest rooted at a
/// site node. Unknown building types yield an empty forest.
pub fn generate_location_breakdown(params: &LbsParams) -> Vec<LocationTemplateNode> {
    let Some(template) = find_building_template(&params.building_type) else {
        return Vec::new();
    };

    let building = match template.form {
        BuildingForm::Vertical => vertical_building(params),
        BuildingForm::Linear => linear_building(),
    };

    vec![LocationTemplateNode::new("Site", LocationType::Site).with_children(vec![building])]
}

fn vertical_building(params: &LbsParams) -> LocationTemplateNode {
    let mut children = Vec::new();

    // Ground-level sectoring, independent of the vertical floor split.
    children.push(
        LocationTemplateNode::new("Sector", LocationType::Zone)
            .with_phase(Phase::Substructure)
            .with_repeat(params.substructure_zones_count, "Sector {n}"),
    );

    // Basements count up from the foundation side: Basement 1 is the
    // deepest level, so flatten order follows construction order.
    if params.basement_count > 0 {
        children.push(
            floor_node(params, "Basement")
                .with_repeat(params.basement_count, "Basement {n}"),
        );
    }

    if params.floor_count > 0 {
        children.push(floor_node(params, "Floor").with_repeat(params.floor_count, "Floor {n}"));
    }

    LocationTemplateNode::new("Building", LocationType::Building).with_children(children)
}

fn floor_node(params: &LbsParams, name: &str) -> LocationTemplateNode {
    let mut floor = LocationTemplateNode::new(name, LocationType::Floor).with_children(vec![
        zone_node(
            "Structural Zone",
            Phase::Structural,
            params.structural_zones_per_floor,
            params.typical_floor_area_sqm,
        ),
        zone_node(
            "Fit-out Zone",
            Phase::Finishing,
            params.zones_per_floor,
            params.typical_floor_area_sqm,
        ),
    ]);
    if params.typical_floor_area_sqm > 0.0 {
        floor = floor.with_area(params.typical_floor_area_sqm);
    }
    floor
}

fn zone_node(name: &str, phase: Phase, count: u32, floor_area_sqm: f64) -> LocationTemplateNode {
    let mut zone = LocationTemplateNode::new(name, LocationType::Zone)
        .with_phase(phase)
        .with_repeat(count, format!("{name} {{n}}"));
    if floor_area_sqm > 0.0 {
        zone = zone.with_area(round1(floor_area_sqm / f64::from(count.max(1))));
    }
    zone
}

/// Degenerate linear variant: sections along an alignment, no floor-based
/// zone math.
fn linear_building() -> LocationTemplateNode {
    LocationTemplateNode::new("Alignment", LocationType::Building)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::count_template_locations;

    fn params() -> LbsParams {
        LbsParams {
            building_type: "residential".to_string(),
            floor_count: 2,
            basement_count: 1,
            zones_per_floor: 3,
            structural_zones_per_floor: 1,
            substructure_zones_count: 2,
            typical_floor_area_sqm: 0.0,
        }
    }

    #[test]
    fn unknown_building_type_yields_empty_forest() {
        let mut p = params();
        p.building_type = "spaceport".to_string();
        assert!(generate_location_breakdown(&p).is_empty());
    }

    #[test]
    fn vertical_template_counts_match_the_zone_identity() {
        let forest = generate_location_breakdown(&params());
        let count = count_template_locations(&forest);
        // substructure + (floors + basements) * (structural + fit-out)
        assert_eq!(count.substructure_zones, 2);
        assert_eq!(count.structural_zones, 3);
        assert_eq!(count.finishing_zones, 9);
        assert_eq!(count.zones, 2 + 3 * (1 + 3));
        assert_eq!(count.floors, 3);
    }

    #[test]
    fn infrastructure_is_a_degenerate_linear_case() {
        let mut p = params();
        p.building_type = "infrastructure".to_string();
        let forest = generate_location_breakdown(&p);
        assert_eq!(forest.len(), 1);
        let count = count_template_locations(&forest);
        assert_eq!(count.zones, 0);
        assert_eq!(count.floors, 0);
    }

    #[test]
    fn zone_areas_share_the_floor_area() {
        let mut p = params();
        p.typical_floor_area_sqm = 900.0;
        let forest = generate_location_breakdown(&p);
        let building = &forest[0].children[0];
        let floor = &building.children[2]; // sectors, basements, then floors
        assert_eq!(floor.area_sqm, Some(900.0));
        let fit_out = &floor.children[1];
        assert_eq!(fit_out.area_sqm, Some(300.0));
    }

    #[test]
    fn zero_floor_building_still_carries_substructure_sectors() {
        let mut p = params();
        p.floor_count = 0;
        p.basement_count = 0;
        let forest = generate_location_breakdown(&p);
        let count = count_template_locations(&forest);
        assert_eq!(count.zones, 2);
        assert_eq!(count.floors, 0);
    }

    #[test]
    fn from_config_clamps_out_of_range_values() {
        let config = takt_config::BuildingConfiguration {
            floor_count: 999,
            zones_per_floor: 50,
            ..Default::default()
        };
        let p = LbsParams::from_config(&config);
        assert_eq!(p.floor_count, 200);
        assert_eq!(p.zones_per_floor, 8);
    }
}
