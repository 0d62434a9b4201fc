// Tests for deciding when the prayer command fires.

use adhan_countdown::{Occurrence, Prayer, PrayerTrigger, Resolution};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn after(prayer: Prayer, time: NaiveDateTime) -> Resolution {
    Resolution {
        previous: Some(Occurrence::new(prayer, time)),
        next: None,
    }
}

fn trigger() -> PrayerTrigger {
    PrayerTrigger::new("/bin/true", TimeDelta::seconds(1))
}

#[test]
fn test_fires_once_when_prayer_time_arrives() {
    let mut t = trigger();
    let maghrib = after(Prayer::Maghrib, at(18, 20, 0));

    assert_eq!(
        t.due(&maghrib, at(18, 20, 0)),
        Some(Occurrence::new(Prayer::Maghrib, at(18, 20, 0)))
    );
    // later ticks for the same occurrence stay quiet
    assert_eq!(t.due(&maghrib, at(18, 20, 1)), None);
    assert_eq!(t.due(&maghrib, at(18, 20, 30)), None);
}

#[test]
fn test_each_new_occurrence_fires() {
    let mut t = trigger();
    assert!(t.due(&after(Prayer::Asr, at(15, 45, 0)), at(15, 45, 0)).is_some());
    assert!(t.due(&after(Prayer::Maghrib, at(18, 20, 0)), at(18, 20, 2)).is_some());
}

#[test]
fn test_sunrise_never_fires() {
    let mut t = trigger();
    assert_eq!(t.due(&after(Prayer::Sunrise, at(6, 30, 0)), at(6, 30, 0)), None);
}

#[test]
fn test_starting_long_after_a_prayer_does_not_fire() {
    let mut t = trigger();
    let dhuhr = after(Prayer::Dhuhr, at(12, 15, 0));
    assert_eq!(t.due(&dhuhr, at(13, 0, 0)), None);
    assert_eq!(t.due(&dhuhr, at(13, 0, 1)), None);
}

#[test]
fn test_window_is_at_least_one_minute() {
    let mut t = trigger();
    assert!(t.due(&after(Prayer::Isha, at(19, 50, 0)), at(19, 50, 59)).is_some());

    let mut t = trigger();
    assert_eq!(t.due(&after(Prayer::Isha, at(19, 50, 0)), at(19, 51, 0)), None);
}

#[test]
fn test_wider_window_covers_slow_polling() {
    let mut t = PrayerTrigger::new("/bin/true", TimeDelta::minutes(5));
    assert!(t.due(&after(Prayer::Fajr, at(5, 0, 0)), at(5, 4, 0)).is_some());
}

#[test]
fn test_unknown_previous_prayer_does_not_fire() {
    let mut t = trigger();
    assert_eq!(t.due(&Resolution::default(), at(12, 0, 0)), None);
}

#[test]
fn test_missing_command_reports_an_error() {
    let t = PrayerTrigger::new("/nonexistent/play_athan.sh", TimeDelta::minutes(1));
    let occurrence = Occurrence::new(Prayer::Fajr, at(5, 0, 0));
    assert!(t.fire(&occurrence).is_err());
}
