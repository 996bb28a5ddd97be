//! Flattening the template tree into persistable rows.
//!
//! The Locations API inserts rows in submission order and resolves
//! `parent_name` against rows it has already created, so every parent
//! must precede its children and `sort_order` must strictly increase.

use serde::{Deserialize, Serialize};

use crate::template::{LocationTemplateNode, LocationType, Phase};

/// One persistable location row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatLocationRow {
    pub name: String,
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_sqm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub sort_order: u32,
}

/// Walk the forest in pre-order, expanding repeated nodes into numbered
/// sibling rows. Each instance re-expands its children under its own name.
pub fn flatten_locations(nodes: &[LocationTemplateNode]) -> Vec<FlatLocationRow> {
    let mut rows = Vec::new();
    let mut next_sort = 0u32;
    for node in nodes {
        flatten_node(node, None, &mut next_sort, &mut rows);
    }
    rows
}

fn flatten_node(
    node: &LocationTemplateNode,
    parent_name: Option<&str>,
    next_sort: &mut u32,
    rows: &mut Vec<FlatLocationRow>,
) {
    let repeat = node.repeat.max(1);
    for index in 1..=repeat {
        let name = instance_name(node, index);
        rows.push(FlatLocationRow {
            name: name.clone(),
            location_type: node.location_type,
            parent_name: parent_name.map(str::to_string),
            area_sqm: node.area_sqm,
            phase: node.phase,
            sort_order: *next_sort,
        });
        *next_sort += 1;
        for child in &node.children {
            flatten_node(child, Some(&name), next_sort, rows);
        }
    }
}

fn instance_name(node: &LocationTemplateNode, index: u32) -> String {
    if node.repeat <= 1 {
        return node.name.clone();
    }
    match &node.repeat_label {
        Some(pattern) => pattern.replace("{n}", &index.to_string()),
        None => format!("{} {}", node.name, index),
    }
}
