//! Takt time and buffer recommendation.
//!
//! Factor multipliers compose multiplicatively into a single scalar, so
//! raising any one factor can never lower the recommendation.

use serde::{Deserialize, Serialize};
use takt_config::BuildingConfiguration;
use takt_core::{Real, round_clamp};
use takt_factors::{
    FactorTable, HIGH_COMPLEXITY_MEP_THRESHOLD, NEUTRAL_MULTIPLIER, foundation_types,
    ground_conditions, mep_complexity, structural_systems,
};

pub const TAKT_MIN_DAYS: u32 = 1;
pub const TAKT_MAX_DAYS: u32 = 14;
pub const BUFFER_MAX: u32 = 5;

/// Reasoning shown when every factor resolves neutral.
pub const STANDARD_PARAMETERS_MESSAGE: &str =
    "Standard parameters, no takt adjustments applied";

/// Recommended takt time with a safety range and human-readable reasoning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaktRecommendation {
    pub recommended_days: u32,
    pub range_low_days: u32,
    pub range_high_days: u32,
    pub reasoning: String,
}

/// The four factor lookups for a configuration, in display order.
fn resolved_factors(config: &BuildingConfiguration) -> [(&'static FactorTable, &str); 4] {
    [
        (structural_systems(), config.structural_system.as_str()),
        (mep_complexity(), config.mep_complexity.as_str()),
        (foundation_types(), config.foundation_type.as_str()),
        (ground_conditions(), config.ground_condition.as_str()),
    ]
}

/// Clamped scalar recommendation from a base takt and composite multiplier.
fn recommended_days(base_takt_days: u32, composite: Real) -> u32 {
    round_clamp(Real::from(base_takt_days) * composite, TAKT_MIN_DAYS, TAKT_MAX_DAYS)
}

/// Recommend a takt time from the configuration's factor codes and the
/// building-type template default.
pub fn recommend_takt(config: &BuildingConfiguration, base_takt_days: u32) -> TaktRecommendation {
    let factors = resolved_factors(config);
    let composite: Real = factors
        .iter()
        .map(|(table, code)| table.multiplier(code))
        .product();

    let recommended = recommended_days(base_takt_days, composite);
    let low = round_clamp(Real::from(recommended) * 0.8, TAKT_MIN_DAYS, TAKT_MAX_DAYS);
    let high = round_clamp(Real::from(recommended) * 1.2, TAKT_MIN_DAYS, TAKT_MAX_DAYS);
    // A clamp that breaks the ordering collapses the range onto the point.
    let (low, high) = if low <= recommended && recommended <= high {
        (low, high)
    } else {
        (recommended, recommended)
    };

    TaktRecommendation {
        recommended_days: recommended,
        range_low_days: low,
        range_high_days: high,
        reasoning: compose_reasoning(&factors),
    }
}

/// Recommend an inter-trade buffer: one takt period as standard, widened
/// for high MEP complexity and for flows needing vertical coordination.
pub fn recommend_buffer(config: &BuildingConfiguration) -> u32 {
    let mut buffer = 1;
    if mep_complexity().multiplier(&config.mep_complexity) > HIGH_COMPLEXITY_MEP_THRESHOLD {
        buffer += 1;
    }
    if config.flow_direction.needs_vertical_coordination() {
        buffer += 1;
    }
    buffer.min(BUFFER_MAX)
}

/// List every non-neutral factor as "<Table>: <Label> <signed-pct>%".
fn compose_reasoning(factors: &[(&'static FactorTable, &str)]) -> String {
    let parts: Vec<String> = factors
        .iter()
        .filter_map(|(table, code)| {
            let item = table.get(code)?;
            if item.takt_multiplier == NEUTRAL_MULTIPLIER {
                return None;
            }
            let pct = ((item.takt_multiplier - NEUTRAL_MULTIPLIER) * 100.0).round() as i64;
            Some(format!("{}: {} {:+}%", table.name(), item.label, pct))
        })
        .collect();

    if parts.is_empty() {
        STANDARD_PARAMETERS_MESSAGE.to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takt_config::FlowDirection;

    fn neutral_config() -> BuildingConfiguration {
        BuildingConfiguration::default()
    }

    #[test]
    fn neutral_factors_keep_the_base_takt() {
        let rec = recommend_takt(&neutral_config(), 5);
        assert_eq!(rec.recommended_days, 5);
        assert_eq!(rec.range_low_days, 4);
        assert_eq!(rec.range_high_days, 6);
        assert_eq!(rec.reasoning, STANDARD_PARAMETERS_MESSAGE);
    }

    #[test]
    fn hospital_grade_mep_lengthens_the_takt() {
        let config = BuildingConfiguration {
            mep_complexity: "hospital".to_string(),
            ..Default::default()
        };
        let rec = recommend_takt(&config, 5);
        // 5 * 1.35 = 6.75 -> 7
        assert_eq!(rec.recommended_days, 7);
        assert_eq!(rec.reasoning, "MEP: Hospital-grade +35%");
    }

    #[test]
    fn reasoning_lists_every_non_neutral_factor() {
        let config = BuildingConfiguration {
            structural_system: "precast_concrete".to_string(),
            mep_complexity: "hospital".to_string(),
            ground_condition: "stiff_clay".to_string(), // neutral, omitted
            ..Default::default()
        };
        let rec = recommend_takt(&config, 5);
        assert_eq!(
            rec.reasoning,
            "Structure: Precast concrete -15%; MEP: Hospital-grade +35%"
        );
    }

    #[test]
    fn unknown_codes_resolve_neutral() {
        let config = BuildingConfiguration {
            structural_system: "unobtainium".to_string(),
            ..Default::default()
        };
        let rec = recommend_takt(&config, 5);
        assert_eq!(rec.recommended_days, 5);
        assert_eq!(rec.reasoning, STANDARD_PARAMETERS_MESSAGE);
    }

    #[test]
    fn recommendation_stays_inside_bounds_for_extreme_stacks() {
        let heavy = BuildingConfiguration {
            structural_system: "in_situ_concrete".to_string(),
            mep_complexity: "hospital".to_string(),
            foundation_type: "piled_raft".to_string(),
            ground_condition: "high_water_table".to_string(),
            ..Default::default()
        };
        let rec = recommend_takt(&heavy, 14);
        assert_eq!(rec.recommended_days, TAKT_MAX_DAYS);
        assert!(rec.range_low_days <= rec.recommended_days);
        assert!(rec.recommended_days <= rec.range_high_days);
        assert!(rec.range_high_days <= TAKT_MAX_DAYS);

        let light = BuildingConfiguration {
            structural_system: "precast_concrete".to_string(),
            mep_complexity: "basic".to_string(),
            foundation_type: "pad".to_string(),
            ground_condition: "dense_granular".to_string(),
            ..Default::default()
        };
        let rec = recommend_takt(&light, 1);
        assert_eq!(rec.recommended_days, TAKT_MIN_DAYS);
        assert!(rec.range_low_days >= TAKT_MIN_DAYS);
    }

    #[test]
    fn buffer_widens_for_mep_and_flow_coordination() {
        assert_eq!(recommend_buffer(&neutral_config()), 1);

        let hospital = BuildingConfiguration {
            mep_complexity: "hospital".to_string(),
            ..Default::default()
        };
        assert_eq!(recommend_buffer(&hospital), 2);

        let top_down_hospital = BuildingConfiguration {
            mep_complexity: "hospital".to_string(),
            flow_direction: FlowDirection::TopDown,
            ..Default::default()
        };
        assert_eq!(recommend_buffer(&top_down_hospital), 3);

        // enhanced (1.15) sits below the high-complexity threshold
        let enhanced = BuildingConfiguration {
            mep_complexity: "enhanced".to_string(),
            ..Default::default()
        };
        assert_eq!(recommend_buffer(&enhanced), 1);
    }
}
