pub mod countdown;
pub mod loader;
pub mod prayer;
pub mod resolver;
pub mod settings;
pub mod table;
pub mod trigger;

pub use countdown::{Countdown, Proximity};
pub use prayer::{Language, Prayer};
pub use resolver::{resolve, Occurrence, Resolution};
pub use table::{CalendarTable, DayEntry};
pub use trigger::PrayerTrigger;
