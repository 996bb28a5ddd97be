//! Takt assignment grid and trade-stacking checks.
//!
//! For zone `z` (1-based) and wagon `w` (1-based):
//! `period = z + (w - 1) + cumulative buffers before w`, and each period
//! spans one takt time of working days from the project start.

use std::collections::HashMap;

use chrono::NaiveDate;
use takt_core::Workweek;

/// One zone in flow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSlot {
    pub name: String,
    /// 1-based position in the takt train's route.
    pub sequence: u32,
}

/// One trade's work package moving through all zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wagon {
    pub name: String,
    pub code: String,
    /// 1-based position in the trade sequence.
    pub sequence: u32,
    /// Crew working days inside one zone.
    pub duration_days: u32,
    /// Buffer takt periods inserted after this wagon.
    pub buffer_after: u32,
}

/// One wagon's planned visit to one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub zone: String,
    pub wagon: String,
    /// 1-based takt period.
    pub period: u32,
    pub planned_start: NaiveDate,
    pub planned_end: NaiveDate,
}

/// Two wagons active in the same zone with overlapping date ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackingConflict {
    pub zone: String,
    pub wagon_a: String,
    pub wagon_b: String,
    pub period_a: u32,
    pub period_b: u32,
    pub overlap_start: NaiveDate,
    pub overlap_end: NaiveDate,
}

/// Generate the full zone x wagon assignment grid.
pub fn generate_takt_grid(
    zones: &[ZoneSlot],
    wagons: &[Wagon],
    start_date: NaiveDate,
    takt_time_days: u32,
    workweek: Workweek,
) -> Vec<Assignment> {
    let mut sorted_zones: Vec<&ZoneSlot> = zones.iter().collect();
    sorted_zones.sort_by_key(|zone| zone.sequence);
    let mut sorted_wagons: Vec<&Wagon> = wagons.iter().collect();
    sorted_wagons.sort_by_key(|wagon| wagon.sequence);

    // Cumulative buffer periods ahead of each wagon.
    let mut buffer_offsets = Vec::with_capacity(sorted_wagons.len());
    let mut acc = 0u32;
    for i in 0..sorted_wagons.len() {
        if i > 0 {
            acc += sorted_wagons[i - 1].buffer_after;
        }
        buffer_offsets.push(acc);
    }

    let mut assignments = Vec::with_capacity(sorted_zones.len() * sorted_wagons.len());
    for zone in &sorted_zones {
        for (i, wagon) in sorted_wagons.iter().enumerate() {
            let period = zone.sequence + i as u32 + buffer_offsets[i];
            let day_offset = (period - 1) * takt_time_days;
            let planned_start = workweek.add_working_days(start_date, day_offset);
            let planned_end =
                workweek.add_working_days(planned_start, wagon.duration_days.saturating_sub(1));
            assignments.push(Assignment {
                zone: zone.name.clone(),
                wagon: wagon.code.clone(),
                period,
                planned_start,
                planned_end,
            });
        }
    }
    assignments
}

/// Scan a grid for trade stacking: distinct wagons occupying one zone
/// over overlapping date ranges.
pub fn detect_trade_stacking(assignments: &[Assignment]) -> Vec<StackingConflict> {
    let mut by_zone: HashMap<&str, Vec<&Assignment>> = HashMap::new();
    for assignment in assignments {
        by_zone.entry(&assignment.zone).or_default().push(assignment);
    }

    let mut conflicts = Vec::new();
    let mut zones: Vec<&str> = by_zone.keys().copied().collect();
    zones.sort_unstable();
    for zone in zones {
        let zone_assignments = &by_zone[zone];
        for (i, a) in zone_assignments.iter().enumerate() {
            for b in &zone_assignments[i + 1..] {
                if a.planned_start <= b.planned_end && b.planned_start <= a.planned_end {
                    conflicts.push(StackingConflict {
                        zone: zone.to_string(),
                        wagon_a: a.wagon.clone(),
                        wagon_b: b.wagon.clone(),
                        period_a: a.period,
                        period_b: b.period,
                        overlap_start: a.planned_start.max(b.planned_start),
                        overlap_end: a.planned_end.min(b.planned_end),
                    });
                }
            }
        }
    }
    conflicts
}

/// Last working day of a schedule that spans `total_takts` periods.
pub fn project_end_date(
    start_date: NaiveDate,
    total_takts: u32,
    takt_time_days: u32,
    workweek: Workweek,
) -> NaiveDate {
    let total_working_days = total_takts * takt_time_days;
    if total_working_days == 0 {
        return start_date;
    }
    workweek.add_working_days(start_date, total_working_days - 1)
}
