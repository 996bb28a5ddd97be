//! Flow-line duration estimation.
//!
//! Trades traverse zones as a pipelined flow line: the first trade needs
//! one takt period per zone, and each following trade starts one period
//! plus the buffer after the previous trade's start. Total elapsed
//! periods:
//!
//! `zones + trades - 1 + (trades - 1) * buffer`

use serde::{Deserialize, Serialize};
use takt_core::Workweek;

use crate::recommend::{BUFFER_MAX, TAKT_MAX_DAYS, TAKT_MIN_DAYS};

/// Computed flow-line duration. All-zero when zone or trade count is
/// zero, which callers must read as "not yet estimable".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationEstimate {
    pub zone_count: u32,
    pub trade_count: u32,
    pub buffer_size: u32,
    pub takt_time_days: u32,
    pub total_takts: u32,
    pub total_working_days: u32,
    pub calendar_days: u32,
}

impl DurationEstimate {
    /// Distinguishes "insufficient data" from a real zero-day schedule.
    pub fn is_estimable(&self) -> bool {
        self.zone_count > 0 && self.trade_count > 0
    }
}

/// Estimate the flow-line duration for a trade sequence moving through
/// `zone_count` zones. Out-of-range buffer and takt inputs are clamped.
pub fn estimate_duration(
    zone_count: u32,
    trade_count: u32,
    buffer_size: u32,
    takt_time_days: u32,
    workweek: Workweek,
) -> DurationEstimate {
    let buffer_size = buffer_size.min(BUFFER_MAX);
    let takt_time_days = takt_time_days.clamp(TAKT_MIN_DAYS, TAKT_MAX_DAYS);

    if zone_count == 0 || trade_count == 0 {
        return DurationEstimate {
            zone_count,
            trade_count,
            buffer_size,
            takt_time_days,
            total_takts: 0,
            total_working_days: 0,
            calendar_days: 0,
        };
    }

    let total_takts = zone_count + trade_count - 1 + (trade_count - 1) * buffer_size;
    let total_working_days = total_takts * takt_time_days;
    let calendar_days = workweek.calendar_days(total_working_days);

    DurationEstimate {
        zone_count,
        trade_count,
        buffer_size,
        takt_time_days,
        total_takts,
        total_working_days,
        calendar_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_zones_five_trades_with_buffer() {
        let estimate = estimate_duration(12, 5, 1, 5, Workweek::default());
        assert_eq!(estimate.total_takts, 20);
        assert_eq!(estimate.total_working_days, 100);
        assert_eq!(estimate.calendar_days, 140);
        assert!(estimate.is_estimable());
    }

    #[test]
    fn a_single_trade_never_sees_buffers() {
        for buffer in 0..=5 {
            let estimate = estimate_duration(9, 1, buffer, 5, Workweek::default());
            assert_eq!(estimate.total_takts, 9);
        }
    }

    #[test]
    fn zero_buffer_is_pure_pipelining() {
        let estimate = estimate_duration(12, 5, 0, 5, Workweek::default());
        assert_eq!(estimate.total_takts, 16);
    }

    #[test]
    fn zero_zones_or_trades_is_not_estimable() {
        for (zones, trades) in [(0, 5), (12, 0), (0, 0)] {
            let estimate = estimate_duration(zones, trades, 1, 5, Workweek::default());
            assert_eq!(estimate.total_takts, 0);
            assert_eq!(estimate.total_working_days, 0);
            assert_eq!(estimate.calendar_days, 0);
            assert!(!estimate.is_estimable());
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let estimate = estimate_duration(10, 3, 99, 99, Workweek::default());
        assert_eq!(estimate.buffer_size, 5);
        assert_eq!(estimate.takt_time_days, 14);
        assert_eq!(estimate.total_takts, 10 + 3 - 1 + 2 * 5);
    }

    #[test]
    fn seven_day_week_needs_no_calendar_stretch() {
        let full_week =
            Workweek::from_names(&["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
        let estimate = estimate_duration(4, 2, 0, 2, full_week);
        assert_eq!(estimate.total_working_days, 10);
        assert_eq!(estimate.calendar_days, 10);
    }
}
