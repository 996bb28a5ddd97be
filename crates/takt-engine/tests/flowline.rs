//! Integration tests: the assignment grid and the duration estimate
//! describe the same flow line.

use chrono::NaiveDate;
use takt_core::Workweek;
use takt_engine::{
    ZoneSlot, default_trades, detect_trade_stacking, estimate_duration, generate_takt_grid,
    project_end_date, wagons_with_buffer,
};

fn zones(n: u32) -> Vec<ZoneSlot> {
    (1..=n)
        .map(|i| ZoneSlot {
            name: format!("Zone {i}"),
            sequence: i,
        })
        .collect()
}

#[test]
fn grid_and_estimate_agree_on_total_takts() {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let workweek = Workweek::default();

    for buffer in 0..=2u32 {
        let trades = default_trades("office");
        let wagons = wagons_with_buffer(trades, buffer);
        let zone_count = 8u32;

        let grid = generate_takt_grid(&zones(zone_count), &wagons, start, 5, workweek);
        let last_period = grid.iter().map(|a| a.period).max().unwrap();

        let estimate =
            estimate_duration(zone_count, wagons.len() as u32, buffer, 5, workweek);
        assert_eq!(last_period, estimate.total_takts, "buffer={buffer}");
    }
}

#[test]
fn end_date_covers_the_whole_grid() {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let workweek = Workweek::default();
    let wagons = wagons_with_buffer(default_trades("residential"), 1);

    let grid = generate_takt_grid(&zones(6), &wagons, start, 4, workweek);
    let estimate = estimate_duration(6, wagons.len() as u32, 1, 4, workweek);
    let end = project_end_date(start, estimate.total_takts, 4, workweek);

    // Every assignment starts inside the schedule envelope.
    assert!(grid.iter().all(|a| a.planned_start <= end));
}

#[test]
fn takt_conformant_durations_produce_a_clean_grid() {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let workweek = Workweek::default();

    // Force every trade to fit its takt exactly: no stacking possible.
    let mut wagons = wagons_with_buffer(default_trades("office"), 0);
    for wagon in &mut wagons {
        wagon.duration_days = 5;
    }

    let grid = generate_takt_grid(&zones(10), &wagons, start, 5, workweek);
    assert!(detect_trade_stacking(&grid).is_empty());
}
