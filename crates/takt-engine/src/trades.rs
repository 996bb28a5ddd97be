//! Default trade sequences per building type.
//!
//! Used when the wizard's trade-selection step has not run yet: they
//! supply a realistic wagon list and trade count for previews. Unknown
//! building types fall back to the residential sequence.

use crate::grid::Wagon;

/// One trade in a building type's default takt train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeTemplate {
    pub name: &'static str,
    pub code: &'static str,
    /// Crew working days per zone.
    pub duration_days: u32,
    pub crew_size: u32,
}

const fn trade(name: &'static str, code: &'static str, duration_days: u32, crew_size: u32) -> TradeTemplate {
    TradeTemplate {
        name,
        code,
        duration_days,
        crew_size,
    }
}

const RESIDENTIAL_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 5, 8),
    trade("MEP Rough-in", "MEP1", 3, 5),
    trade("Drywall Framing", "DWF", 3, 5),
    trade("Drywall Boarding", "DWB", 3, 4),
    trade("MEP Fix", "MEP2", 3, 5),
    trade("Tiling (Wet Areas)", "TILE", 3, 4),
    trade("Joinery & Doors", "JOIN", 3, 4),
    trade("Painting", "PAINT", 3, 4),
    trade("Flooring", "FLR", 2, 3),
    trade("MEP Trim", "MEP3", 2, 4),
    trade("Final Fix & Snag", "SNAG", 2, 5),
];

const OFFICE_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 4, 8),
    trade("MEP Rough-in", "MEP1", 4, 6),
    trade("Raised Floor Frame", "RFF", 2, 4),
    trade("Drywall / Partitions", "DW", 3, 5),
    trade("MEP Fix", "MEP2", 3, 5),
    trade("Ceiling Grid", "CEIL", 2, 4),
    trade("Painting", "PAINT", 2, 4),
    trade("Flooring / Carpet", "FLR", 2, 3),
    trade("MEP Trim & Lights", "MEP3", 2, 4),
    trade("Final Fix & Snag", "SNAG", 2, 5),
];

const HOTEL_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 5, 8),
    trade("MEP Rough-in", "MEP1", 4, 6),
    trade("Drywall Framing", "DWF", 3, 5),
    trade("Drywall Boarding", "DWB", 3, 4),
    trade("MEP Fix", "MEP2", 3, 5),
    trade("Tiling", "TILE", 4, 4),
    trade("Joinery & Doors", "JOIN", 3, 4),
    trade("Painting", "PAINT", 3, 4),
    trade("MEP Trim", "MEP3", 2, 4),
    trade("Flooring", "FLR", 2, 3),
    trade("Final Fix & Snag", "SNAG", 3, 6),
];

const HOSPITAL_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 5, 10),
    trade("MEP Rough-in", "MEP1", 5, 8),
    trade("Medical Gas Rough-in", "MGAS", 3, 4),
    trade("Drywall Framing", "DWF", 3, 6),
    trade("Drywall Boarding", "DWB", 3, 5),
    trade("MEP Fix", "MEP2", 4, 6),
    trade("Medical Gas Fix", "MGAS2", 2, 3),
    trade("Tiling & Epoxy", "TILE", 4, 5),
    trade("Joinery & Doors", "JOIN", 3, 4),
    trade("Painting", "PAINT", 3, 4),
    trade("MEP Trim", "MEP3", 3, 5),
    trade("Flooring", "FLR", 3, 4),
    trade("Final Fix & Commissioning", "COMM", 4, 8),
];

const EDUCATIONAL_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 4, 8),
    trade("MEP Rough-in", "MEP1", 4, 6),
    trade("Drywall / Partitions", "DW", 3, 5),
    trade("MEP Fix", "MEP2", 3, 5),
    trade("Ceiling & Acoustics", "CEIL", 3, 4),
    trade("Painting", "PAINT", 2, 4),
    trade("Flooring", "FLR", 2, 3),
    trade("Joinery & Fixtures", "JOIN", 2, 4),
    trade("MEP Trim", "MEP3", 2, 4),
    trade("Final Fix & Snag", "SNAG", 2, 5),
];

const INDUSTRIAL_TRADES: &[TradeTemplate] = &[
    trade("Structure / Steel", "STR", 5, 10),
    trade("MEP Rough-in", "MEP1", 4, 6),
    trade("Cladding / Envelope", "CLAD", 4, 6),
    trade("Heavy MEP Install", "HMEP", 5, 8),
    trade("Fire Protection", "FIRE", 3, 4),
    trade("Flooring / Slab Finish", "FLR", 3, 5),
    trade("Painting / Coating", "PAINT", 2, 4),
    trade("MEP Trim & Commission", "MEP3", 3, 5),
    trade("Final Fix & Snag", "SNAG", 3, 6),
];

const MIXED_USE_TRADES: &[TradeTemplate] = &[
    trade("Structure / Frame", "STR", 5, 10),
    trade("MEP Rough-in", "MEP1", 4, 7),
    trade("Drywall Framing", "DWF", 3, 5),
    trade("Drywall Boarding", "DWB", 3, 5),
    trade("MEP Fix", "MEP2", 3, 6),
    trade("Tiling", "TILE", 3, 4),
    trade("Joinery & Doors", "JOIN", 3, 4),
    trade("Painting", "PAINT", 3, 4),
    trade("Flooring", "FLR", 2, 3),
    trade("MEP Trim", "MEP3", 2, 4),
    trade("Final Fix & Snag", "SNAG", 3, 6),
];

/// Default trade sequence for a building type.
pub fn default_trades(building_type: &str) -> &'static [TradeTemplate] {
    match building_type.trim().to_ascii_lowercase().as_str() {
        "office" => OFFICE_TRADES,
        "hotel" => HOTEL_TRADES,
        "hospital" => HOSPITAL_TRADES,
        "educational" => EDUCATIONAL_TRADES,
        "industrial" => INDUSTRIAL_TRADES,
        "mixed_use" => MIXED_USE_TRADES,
        _ => RESIDENTIAL_TRADES,
    }
}

/// Turn a trade sequence into wagons with a uniform inter-trade buffer.
pub fn wagons_with_buffer(trades: &[TradeTemplate], buffer_size: u32) -> Vec<Wagon> {
    trades
        .iter()
        .enumerate()
        .map(|(i, trade)| Wagon {
            name: trade.name.to_string(),
            code: trade.code.to_string(),
            sequence: i as u32 + 1,
            duration_days: trade.duration_days,
            buffer_after: buffer_size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_within_each_sequence() {
        for building_type in [
            "residential",
            "office",
            "hotel",
            "hospital",
            "educational",
            "industrial",
            "mixed_use",
        ] {
            let mut seen = HashSet::new();
            for trade in default_trades(building_type) {
                assert!(seen.insert(trade.code), "{building_type}: {}", trade.code);
            }
        }
    }

    #[test]
    fn unknown_types_fall_back_to_residential() {
        assert_eq!(default_trades("spaceport"), RESIDENTIAL_TRADES);
        assert_eq!(default_trades("infrastructure"), RESIDENTIAL_TRADES);
    }

    #[test]
    fn hospitals_run_the_longest_train() {
        assert!(default_trades("hospital").len() > default_trades("office").len());
    }

    #[test]
    fn wagons_inherit_sequence_and_buffer() {
        let wagons = wagons_with_buffer(default_trades("office"), 2);
        assert_eq!(wagons.len(), 10);
        assert_eq!(wagons[0].sequence, 1);
        assert_eq!(wagons[9].sequence, 10);
        assert!(wagons.iter().all(|w| w.buffer_after == 2));
    }
}
