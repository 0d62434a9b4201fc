use std::{io, process::Command, thread};

use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    prayer::{Language, Prayer},
    resolver::{Occurrence, Resolution},
};

/// Runs an external command (for example an athan player) once per prayer
/// occurrence, with the lowercase prayer name as its only argument.
///
/// Sunrise never fires. Occurrences already seen are remembered in memory
/// only, so a restart inside the firing window fires again.
#[derive(Debug, Clone)]
pub struct PrayerTrigger {
    command: String,
    window: TimeDelta,
    seen: Option<Occurrence>,
}

impl PrayerTrigger {
    /// `window` is how late after the prayer time a poll may still fire it;
    /// it never drops below one minute.
    pub fn new(command: impl Into<String>, window: TimeDelta) -> Self {
        Self {
            command: command.into(),
            window: window.max(TimeDelta::minutes(1)),
            seen: None,
        }
    }

    /// Decides whether the latest passed prayer should fire now.
    pub fn due(&mut self, resolution: &Resolution, now: NaiveDateTime) -> Option<Occurrence> {
        let current = resolution.previous?;
        if self.seen == Some(current) {
            return None;
        }
        self.seen = Some(current);

        if current.prayer == Prayer::Sunrise || now - current.at >= self.window {
            log::debug!("Not firing for {current:?} at {now}");
            return None;
        }
        Some(current)
    }

    /// Starts the command without waiting for it; its exit status is logged
    /// from a helper thread.
    pub fn fire(&self, occurrence: &Occurrence) -> io::Result<()> {
        let label = occurrence.prayer.name(Language::English).to_lowercase();
        log::info!("Triggering {label} for {}", occurrence.at);

        let mut child = Command::new(&self.command).arg(&label).spawn()?;
        let command = self.command.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if status.success() => log::info!("Executed {command} {label}"),
            Ok(status) => log::error!("{command} {label} failed: {status}"),
            Err(e) => log::error!("{command} {label} could not be awaited: {e}"),
        });
        Ok(())
    }

    pub fn poll(&mut self, resolution: &Resolution, now: NaiveDateTime) {
        if let Some(occurrence) = self.due(resolution, now) {
            if let Err(e) = self.fire(&occurrence) {
                log::error!("Could not start {}: {e}", self.command);
            }
        }
    }
}
