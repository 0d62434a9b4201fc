use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::{prayer::Prayer, table::CalendarTable};

/// One concrete firing of a prayer on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub prayer: Prayer,
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub previous: Option<Occurrence>,
    pub next: Option<Occurrence>,
}

impl Occurrence {
    pub fn new(prayer: Prayer, at: NaiveDateTime) -> Self {
        Self { prayer, at }
    }

    /// The occurrence of the following label: same date, or the next date
    /// after the last prayer of the day.
    pub fn successor(&self, table: &CalendarTable) -> Option<Occurrence> {
        let (prayer, wraps) = self.prayer.successor();
        let date = if wraps {
            self.at.date().checked_add_days(Days::new(1))?
        } else {
            self.at.date()
        };
        at_table_time(table, date, prayer).map(|at| Occurrence::new(prayer, at))
    }
}

fn at_table_time(table: &CalendarTable, date: NaiveDate, prayer: Prayer) -> Option<NaiveDateTime> {
    table.time_on(date, prayer).map(|time| date.and_time(time))
}

fn next_occurrence(table: &CalendarTable, prayer: Prayer, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let today = now.date();
    let same_day = at_table_time(table, today, prayer);
    if let Some(at) = same_day.filter(|at| *at > now) {
        return Some(at);
    }

    if let Some(at) = today
        .checked_add_days(Days::new(1))
        .and_then(|tomorrow| at_table_time(table, tomorrow, prayer))
    {
        return Some(at);
    }

    // gap in the table: reuse today's time on the following date
    same_day?.checked_add_days(Days::new(1))
}

fn prev_occurrence(table: &CalendarTable, prayer: Prayer, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let today = now.date();
    let same_day = at_table_time(table, today, prayer);
    if let Some(at) = same_day.filter(|at| *at <= now) {
        return Some(at);
    }

    if let Some(at) = today
        .checked_sub_days(Days::new(1))
        .and_then(|yesterday| at_table_time(table, yesterday, prayer))
    {
        return Some(at);
    }

    same_day?.checked_sub_days(Days::new(1))
}

/// Finds the most recent occurrence at or before `now` and the soonest one
/// strictly after it. Either side is `None` when the table has no data
/// around `now`.
pub fn resolve(table: &CalendarTable, now: NaiveDateTime) -> Resolution {
    let mut resolution = Resolution::default();

    for prayer in Prayer::ALL {
        if let Some(at) = next_occurrence(table, prayer, now) {
            if at > now && resolution.next.map_or(true, |n| at < n.at) {
                resolution.next = Some(Occurrence::new(prayer, at));
            }
        }

        if let Some(at) = prev_occurrence(table, prayer, now) {
            if at <= now && resolution.previous.map_or(true, |p| at > p.at) {
                resolution.previous = Some(Occurrence::new(prayer, at));
            }
        }
    }

    if resolution.next.is_none() {
        resolution.next = now
            .date()
            .checked_add_days(Days::new(1))
            .and_then(|tomorrow| at_table_time(table, tomorrow, Prayer::Fajr))
            .map(|at| Occurrence::new(Prayer::Fajr, at));
    }

    log::trace!("Resolved {now}: {resolution:?}");
    resolution
}
