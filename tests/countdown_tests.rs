// Tests for the countdown state shown to the user: remaining time,
// proximity colouring and the "tomorrow" marker.

use adhan_countdown::{
    countdown::DEFAULT_THRESHOLD_SECS, resolve, CalendarTable, Countdown, DayEntry, Language,
    Occurrence, Prayer, Proximity, Resolution,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, d)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn threshold() -> TimeDelta {
    TimeDelta::seconds(DEFAULT_THRESHOLD_SECS)
}

fn table() -> CalendarTable {
    let day = DayEntry::new([
        NaiveTime::from_hms_opt(5, 0, 0),
        NaiveTime::from_hms_opt(6, 30, 0),
        NaiveTime::from_hms_opt(12, 15, 0),
        NaiveTime::from_hms_opt(15, 45, 0),
        NaiveTime::from_hms_opt(18, 20, 0),
        NaiveTime::from_hms_opt(19, 50, 0),
    ]);
    let mut table = CalendarTable::new();
    for d in 1..=3 {
        table.insert(5, d, day);
    }
    table
}

fn countdown_at(now: NaiveDateTime) -> Countdown {
    Countdown::new(&resolve(&table(), now), now, threshold()).expect("complete table")
}

#[test]
fn test_proximity_boundaries() {
    let t = threshold();
    let big = TimeDelta::hours(3);

    assert_eq!(Proximity::classify(TimeDelta::zero(), big, t), Proximity::AfterPrevious);
    assert_eq!(Proximity::classify(t, big, t), Proximity::AfterPrevious);
    assert_eq!(Proximity::classify(t + TimeDelta::seconds(1), big, t), Proximity::Neutral);
    assert_eq!(Proximity::classify(big, t, t), Proximity::BeforeNext);
    assert_eq!(Proximity::classify(big, t + TimeDelta::seconds(1), t), Proximity::Neutral);
    // both windows overlap: the previous prayer wins
    assert_eq!(
        Proximity::classify(TimeDelta::minutes(5), TimeDelta::minutes(5), t),
        Proximity::AfterPrevious
    );
}

#[test]
fn test_proximity_colors() {
    assert_eq!(Proximity::AfterPrevious.color(), "#00cc00");
    assert_eq!(Proximity::BeforeNext.color(), "#ff0000");
    assert_eq!(Proximity::Neutral.color(), "#808080");
}

#[test]
fn test_shortly_after_a_prayer() {
    let c = countdown_at(at(2, 18, 30, 0));
    assert_eq!(c.previous.prayer, Prayer::Maghrib);
    assert_eq!(c.since_previous, TimeDelta::minutes(10));
    assert_eq!(c.proximity, Proximity::AfterPrevious);
    assert_eq!(c.remaining(), "01:20");
}

#[test]
fn test_shortly_before_a_prayer() {
    let c = countdown_at(at(2, 15, 30, 0));
    assert_eq!(c.next.prayer, Prayer::Asr);
    assert_eq!(c.proximity, Proximity::BeforeNext);
    assert_eq!(c.remaining(), "00:15");
    assert!(!c.is_tomorrow());
    assert_eq!(c.headline(Language::English), "Asr");
}

#[test]
fn test_remaining_rounds_down() {
    // 3h 14m 59s to Dhuhr
    let c = countdown_at(at(2, 9, 0, 1));
    assert_eq!(c.proximity, Proximity::Neutral);
    assert_eq!(c.remaining(), "03:14");
}

#[test]
fn test_next_prayer_tomorrow_is_marked() {
    let c = countdown_at(at(2, 21, 0, 0));
    assert_eq!(c.next.prayer, Prayer::Fajr);
    assert!(c.is_tomorrow());
    assert_eq!(c.remaining(), "08:00");
    assert_eq!(c.headline(Language::English), "Fajr (tomorrow)");
    assert_eq!(c.headline(Language::Arabic), "الفجر (غداً)");
}

#[test]
fn test_after_midnight_fajr_is_today() {
    let c = countdown_at(at(2, 0, 30, 0));
    assert_eq!(c.previous.prayer, Prayer::Isha);
    assert!(!c.is_tomorrow());
    assert_eq!(c.headline(Language::Arabic), "الفجر");
}

#[test]
fn test_incomplete_resolution_is_idle() {
    let now = at(2, 12, 0, 0);
    let only_next = Resolution {
        previous: None,
        next: Some(Occurrence::new(Prayer::Dhuhr, at(2, 12, 15, 0))),
    };
    assert_eq!(Countdown::new(&only_next, now, threshold()), None);
    assert_eq!(Countdown::new(&Resolution::default(), now, threshold()), None);
}
