//! Location template tree.

use serde::{Deserialize, Serialize};

/// Spatial level of a location node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Site,
    Building,
    Floor,
    Zone,
    Room,
    Area,
}

/// Construction phase a zone belongs to. Absent means the node is purely
/// spatial (site, building, floor).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Substructure,
    Structural,
    Finishing,
}

/// One node of the location template tree.
///
/// A node with `repeat > 1` stands for `repeat` sibling locations; each
/// instance is named by substituting the 1-based index into
/// `repeat_label`'s `{n}` placeholder and re-expands the same children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationTemplateNode {
    pub name: String,
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub repeat: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_sqm: Option<f64>,
    #[serde(default)]
    pub children: Vec<LocationTemplateNode>,
}

impl LocationTemplateNode {
    pub fn new(name: impl Into<String>, location_type: LocationType) -> Self {
        Self {
            name: name.into(),
            location_type,
            phase: None,
            repeat: 1,
            repeat_label: None,
            area_sqm: None,
            children: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Repeat this node `count` times, naming instances via `label`'s
    /// `{n}` placeholder.
    pub fn with_repeat(mut self, count: u32, label: impl Into<String>) -> Self {
        self.repeat = count.max(1);
        self.repeat_label = Some(label.into());
        self
    }

    pub fn with_area(mut self, area_sqm: f64) -> Self {
        self.area_sqm = Some(area_sqm);
        self
    }

    pub fn with_children(mut self, children: Vec<LocationTemplateNode>) -> Self {
        self.children = children;
        self
    }
}

/// Repeat-aware location counts for a template forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    /// Rows a flatten pass will emit.
    pub total: usize,
    pub floors: usize,
    pub zones: usize,
    pub substructure_zones: usize,
    pub structural_zones: usize,
    pub finishing_zones: usize,
}

/// Count the locations a flatten pass would emit, multiplying repeats
/// along each path.
pub fn count_template_locations(nodes: &[LocationTemplateNode]) -> LocationCount {
    let mut count = LocationCount::default();
    for node in nodes {
        count_node(node, 1, &mut count);
    }
    count
}

fn count_node(node: &LocationTemplateNode, path_multiplier: usize, count: &mut LocationCount) {
    let instances = path_multiplier * node.repeat.max(1) as usize;
    count.total += instances;
    match node.location_type {
        LocationType::Floor => count.floors += instances,
        LocationType::Zone => {
            count.zones += instances;
            match node.phase {
                Some(Phase::Substructure) => count.substructure_zones += instances,
                Some(Phase::Structural) => count.structural_zones += instances,
                Some(Phase::Finishing) => count.finishing_zones += instances,
                None => {}
            }
        }
        _ => {}
    }
    for child in &node.children {
        count_node(child, instances, count);
    }
}
