//! Weekly working-day calendar.
//!
//! The engine supports a fixed weekly working-day set only; there is no
//! holiday or exception handling. Working-day arithmetic walks real dates
//! so weekend spans come out right for any workweek shape.

use chrono::{Datelike, NaiveDate, Weekday};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Immutable set of working weekdays, stored as a bitmask
/// (bit 0 = Monday .. bit 6 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Workweek {
    mask: u8,
}

impl Default for Workweek {
    /// Monday through Friday.
    fn default() -> Self {
        Self::from_weekdays(&[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }
}

impl Workweek {
    /// Build a workweek from explicit weekdays. An empty set degrades to
    /// the default Mon-Fri week; a workweek is never empty.
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mut mask = 0u8;
        for day in days {
            mask |= 1 << day.num_days_from_monday();
        }
        if mask == 0 {
            return Self::default();
        }
        Self { mask }
    }

    /// Build a workweek from day names ("mon", "tuesday", ...).
    /// Unrecognized names are ignored; an empty result degrades to Mon-Fri.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let days: Vec<Weekday> = names
            .iter()
            .filter_map(|name| name.as_ref().trim().parse::<Weekday>().ok())
            .collect();
        Self::from_weekdays(&days)
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.mask & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_working_date(self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Number of working days per week, always in 1..=7.
    pub fn working_days_per_week(self) -> u32 {
        u32::from(self.mask.count_ones())
    }

    /// Short lowercase names of the working days, Monday first.
    pub fn day_names(self) -> Vec<&'static str> {
        const NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
        ALL_WEEKDAYS
            .iter()
            .enumerate()
            .filter(|(_, day)| self.contains(**day))
            .map(|(i, _)| NAMES[i])
            .collect()
    }

    /// Add `days` working days to `start`, skipping non-working dates.
    /// `days == 0` returns `start` unchanged.
    pub fn add_working_days(self, start: NaiveDate, days: u32) -> NaiveDate {
        let mut current = start;
        let mut added = 0;
        while added < days {
            // saturate at the calendar boundary instead of panicking
            let Some(next) = current.succ_opt() else {
                return current;
            };
            current = next;
            if self.is_working_date(current) {
                added += 1;
            }
        }
        current
    }

    /// Convert working days to elapsed calendar days:
    /// `ceil(working_days / working_days_per_week * 7)`.
    pub fn calendar_days(self, working_days: u32) -> u32 {
        (working_days * 7).div_ceil(self.working_days_per_week())
    }
}
