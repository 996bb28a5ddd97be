//! Factor table catalogs.
//!
//! Lookups that miss (unknown or unset codes) resolve to the neutral
//! multiplier of 1.0, so a partially filled configuration never fails.

/// Multiplier applied when a factor code is unknown or unset.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// MEP multipliers above this mark the project as high-complexity for
/// buffer sizing.
pub const HIGH_COMPLEXITY_MEP_THRESHOLD: f64 = 1.2;

/// One entry in a takt adjustment factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorItem {
    pub code: &'static str,
    pub label: &'static str,
    /// Relative effect on the base takt time. Always > 0.
    pub takt_multiplier: f64,
    pub description: &'static str,
}

/// An immutable factor table keyed by item code.
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    name: &'static str,
    items: &'static [FactorItem],
}

impl FactorTable {
    /// Display name used in recommendation reasoning ("MEP: ...").
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn items(&self) -> &'static [FactorItem] {
        self.items
    }

    /// Look up an item by code (case-insensitive, whitespace-trimmed).
    pub fn get(&self, code: &str) -> Option<&'static FactorItem> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.code.eq_ignore_ascii_case(code))
    }

    /// Resolve a code to its multiplier; misses are neutral.
    pub fn multiplier(&self, code: &str) -> f64 {
        self.get(code)
            .map(|item| item.takt_multiplier)
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }
}

const STRUCTURAL_SYSTEMS: FactorTable = FactorTable {
    name: "Structure",
    items: &[
        FactorItem {
            code: "in_situ_concrete",
            label: "Cast-in-situ concrete",
            takt_multiplier: 1.2,
            description: "Formwork, pour and curing dominate the floor cycle",
        },
        FactorItem {
            code: "precast_concrete",
            label: "Precast concrete",
            takt_multiplier: 0.85,
            description: "Factory-made elements with fast crane erection",
        },
        FactorItem {
            code: "steel_frame",
            label: "Steel frame",
            takt_multiplier: 0.9,
            description: "Bolted erection with metal deck floors",
        },
        FactorItem {
            code: "mass_timber",
            label: "Mass timber",
            takt_multiplier: 0.85,
            description: "Prefabricated CLT panels, dry assembly",
        },
        FactorItem {
            code: "masonry",
            label: "Loadbearing masonry",
            takt_multiplier: 1.1,
            description: "Labour-intensive wall construction",
        },
        FactorItem {
            code: "hybrid",
            label: "Hybrid frame",
            takt_multiplier: 1.0,
            description: "Mixed systems, typical floor cycle",
        },
    ],
};

const MEP_COMPLEXITY: FactorTable = FactorTable {
    name: "MEP",
    items: &[
        FactorItem {
            code: "basic",
            label: "Basic services",
            takt_multiplier: 0.85,
            description: "Domestic-grade electrics and plumbing",
        },
        FactorItem {
            code: "standard",
            label: "Standard services",
            takt_multiplier: 1.0,
            description: "Typical commercial fit-out density",
        },
        FactorItem {
            code: "enhanced",
            label: "Enhanced services",
            takt_multiplier: 1.15,
            description: "Dense commercial services with building controls",
        },
        FactorItem {
            code: "laboratory",
            label: "Laboratory-grade",
            takt_multiplier: 1.25,
            description: "Specialist gases and controlled environments",
        },
        FactorItem {
            code: "hospital",
            label: "Hospital-grade",
            takt_multiplier: 1.35,
            description: "Medical gas, redundancy and commissioning validation",
        },
    ],
};

const FOUNDATION_TYPES: FactorTable = FactorTable {
    name: "Foundation",
    items: &[
        FactorItem {
            code: "pad",
            label: "Pad footings",
            takt_multiplier: 0.9,
            description: "Shallow isolated footings",
        },
        FactorItem {
            code: "strip",
            label: "Strip footings",
            takt_multiplier: 0.9,
            description: "Shallow continuous footings",
        },
        FactorItem {
            code: "raft",
            label: "Raft slab",
            takt_multiplier: 1.0,
            description: "Single large pour, simple sequencing",
        },
        FactorItem {
            code: "piled",
            label: "Piled foundations",
            takt_multiplier: 1.2,
            description: "Piling rigs and cap construction ahead of structure",
        },
        FactorItem {
            code: "piled_raft",
            label: "Piled raft",
            takt_multiplier: 1.3,
            description: "Combined piling and raft works",
        },
    ],
};

const GROUND_CONDITIONS: FactorTable = FactorTable {
    name: "Ground",
    items: &[
        FactorItem {
            code: "rock",
            label: "Rock",
            takt_multiplier: 1.1,
            description: "Slow excavation on a stable bearing",
        },
        FactorItem {
            code: "dense_granular",
            label: "Dense granular",
            takt_multiplier: 0.95,
            description: "Good bearing, straightforward excavation",
        },
        FactorItem {
            code: "stiff_clay",
            label: "Stiff clay",
            takt_multiplier: 1.0,
            description: "Predictable excavation and bearing",
        },
        FactorItem {
            code: "soft_clay",
            label: "Soft clay",
            takt_multiplier: 1.15,
            description: "Low bearing capacity, settlement control",
        },
        FactorItem {
            code: "made_ground",
            label: "Made ground",
            takt_multiplier: 1.2,
            description: "Uncontrolled fill, obstructions likely",
        },
        FactorItem {
            code: "high_water_table",
            label: "High water table",
            takt_multiplier: 1.3,
            description: "Dewatering required throughout substructure works",
        },
    ],
};

pub fn structural_systems() -> &'static FactorTable {
    &STRUCTURAL_SYSTEMS
}

pub fn mep_complexity() -> &'static FactorTable {
    &MEP_COMPLEXITY
}

pub fn foundation_types() -> &'static FactorTable {
    &FOUNDATION_TYPES
}

pub fn ground_conditions() -> &'static FactorTable {
    &GROUND_CONDITIONS
}

/// All four tables, in reasoning display order.
pub fn all_tables() -> [&'static FactorTable; 4] {
    [
        &STRUCTURAL_SYSTEMS,
        &MEP_COMPLEXITY,
        &FOUNDATION_TYPES,
        &GROUND_CONDITIONS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_within_each_table() {
        for table in all_tables() {
            let mut seen = HashSet::new();
            for item in table.items() {
                assert!(
                    seen.insert(item.code),
                    "duplicate code {} in {}",
                    item.code,
                    table.name()
                );
            }
        }
    }

    #[test]
    fn multipliers_are_positive_and_finite() {
        for table in all_tables() {
            for item in table.items() {
                assert!(
                    item.takt_multiplier.is_finite() && item.takt_multiplier > 0.0,
                    "{}: {} has multiplier {}",
                    table.name(),
                    item.code,
                    item.takt_multiplier
                );
            }
        }
    }

    #[test]
    fn missing_or_unset_codes_resolve_neutral() {
        assert_eq!(structural_systems().multiplier("warp_core"), NEUTRAL_MULTIPLIER);
        assert_eq!(ground_conditions().multiplier(""), NEUTRAL_MULTIPLIER);
        assert_eq!(ground_conditions().multiplier("   "), NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let item = mep_complexity().get("Hospital").expect("hospital entry");
        assert_eq!(item.label, "Hospital-grade");
        assert_eq!(item.takt_multiplier, 1.35);
    }

    #[test]
    fn only_top_tier_mep_exceeds_the_high_complexity_threshold() {
        let above: Vec<&str> = mep_complexity()
            .items()
            .iter()
            .filter(|item| item.takt_multiplier > HIGH_COMPLEXITY_MEP_THRESHOLD)
            .map(|item| item.code)
            .collect();
        assert_eq!(above, vec!["laboratory", "hospital"]);
    }
}
