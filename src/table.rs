use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::prayer::Prayer;

/// The six times of one calendar day. A slot is `None` when the source row
/// had no usable value for that label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayEntry {
    times: [Option<NaiveTime>; 6],
}

impl DayEntry {
    pub fn new(times: [Option<NaiveTime>; 6]) -> Self {
        Self { times }
    }

    pub fn time(&self, prayer: Prayer) -> Option<NaiveTime> {
        self.times[prayer.index()]
    }

    pub fn set(&mut self, prayer: Prayer, time: Option<NaiveTime>) {
        self.times[prayer.index()] = time;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<NaiveTime>)> + '_ {
        Prayer::ALL.iter().map(|&prayer| (prayer, self.time(prayer)))
    }

    pub fn is_complete(&self) -> bool {
        self.times.iter().all(Option::is_some)
    }
}

/// Annual schedule keyed by (month, day). The year is never consulted, so
/// one table serves every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    months: [[Option<DayEntry>; 31]; 12],
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self {
            months: [[None; 31]; 12],
        }
    }
}

impl CalendarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the table untouched for keys outside
    /// month 1..=12 / day 1..=31.
    pub fn insert(&mut self, month: u32, day: u32, entry: DayEntry) -> bool {
        match slot_index(month, day) {
            Some((m, d)) => {
                self.months[m][d] = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn day(&self, month: u32, day: u32) -> Option<&DayEntry> {
        let (m, d) = slot_index(month, day)?;
        self.months[m][d].as_ref()
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.day(date.month(), date.day())
    }

    pub fn time_on(&self, date: NaiveDate, prayer: Prayer) -> Option<NaiveTime> {
        self.entry_for(date)?.time(prayer)
    }

    pub fn len(&self) -> usize {
        self.months.iter().flatten().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn slot_index(month: u32, day: u32) -> Option<(usize, usize)> {
    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((month as usize - 1, day as usize - 1))
    } else {
        None
    }
}

/// Parses an `H:MM` / `HH:MM` 24-hour cell. Anything else, including an
/// empty cell or `nan`, yields `None`.
pub fn parse_time_of_day(cell: &str) -> Option<NaiveTime> {
    let (hours, minutes) = cell.trim().split_once(':')?;
    if hours.is_empty() || minutes.len() != 2 {
        return None;
    }
    if !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}
