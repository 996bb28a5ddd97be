//! takt-lbs: Location Breakdown Structure generation.
//!
//! Expands a building-type template plus the building configuration into
//! an immutable, repeat-aware location tree, then flattens it into the
//! parent-before-child row list the Locations API persists. The tree is
//! built once per generation call and consumed by a single flatten pass;
//! nothing is mutated after creation.

pub mod flatten;
pub mod generate;
pub mod registry;
pub mod template;

pub use flatten::{FlatLocationRow, flatten_locations};
pub use generate::{LbsParams, generate_location_breakdown};
pub use registry::{
    BuildingForm, BuildingTemplate, DEFAULT_BASE_TAKT_DAYS, base_takt_days, building_templates,
    find_building_template,
};
pub use template::{LocationCount, LocationTemplateNode, LocationType, Phase, count_template_locations};
