use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    prayer::Language,
    resolver::{Occurrence, Resolution},
};

pub const DEFAULT_THRESHOLD_SECS: i64 = 1200;
pub const IDLE_TEXT: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Within the threshold after the previous prayer.
    AfterPrevious,
    /// Within the threshold before the next prayer.
    BeforeNext,
    Neutral,
}

impl Proximity {
    pub fn classify(since_previous: TimeDelta, until_next: TimeDelta, threshold: TimeDelta) -> Self {
        if since_previous >= TimeDelta::zero() && since_previous <= threshold {
            Proximity::AfterPrevious
        } else if until_next > TimeDelta::zero() && until_next <= threshold {
            Proximity::BeforeNext
        } else {
            Proximity::Neutral
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Proximity::AfterPrevious => "#00cc00",
            Proximity::BeforeNext => "#ff0000",
            Proximity::Neutral => "#808080",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Proximity::AfterPrevious => "after previous",
            Proximity::BeforeNext => "before next",
            Proximity::Neutral => "neutral",
        }
    }
}

/// What the display needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub previous: Occurrence,
    pub next: Occurrence,
    pub since_previous: TimeDelta,
    pub until_next: TimeDelta,
    pub proximity: Proximity,
    now: NaiveDateTime,
}

impl Countdown {
    /// `None` means the idle state: the table could not place `now` between
    /// two prayers.
    pub fn new(resolution: &Resolution, now: NaiveDateTime, threshold: TimeDelta) -> Option<Self> {
        let (previous, next) = (resolution.previous?, resolution.next?);
        let since_previous = now - previous.at;
        let until_next = next.at - now;

        Some(Self {
            previous,
            next,
            since_previous,
            until_next,
            proximity: Proximity::classify(since_previous, until_next, threshold),
            now,
        })
    }

    /// Remaining time as zero-padded `HH:MM`, rounded down.
    pub fn remaining(&self) -> String {
        let secs = self.until_next.num_seconds().max(0);
        format!("{:02}:{:02}", secs / 3600, (secs % 3600) / 60)
    }

    pub fn is_tomorrow(&self) -> bool {
        self.next.at.date() != self.now.date()
    }

    pub fn headline(&self, language: Language) -> String {
        let mut label = self.next.prayer.name(language).to_string();
        if self.is_tomorrow() {
            label.push_str(language.tomorrow_suffix());
        }
        label
    }
}
