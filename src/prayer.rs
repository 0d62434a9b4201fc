use std::fmt;

/// The six daily time slots, in the order they occur during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The label that follows this one. `wraps` is true when the follower
    /// falls on the next calendar date.
    pub fn successor(self) -> (Prayer, bool) {
        match self {
            Prayer::Fajr => (Prayer::Sunrise, false),
            Prayer::Sunrise => (Prayer::Dhuhr, false),
            Prayer::Dhuhr => (Prayer::Asr, false),
            Prayer::Asr => (Prayer::Maghrib, false),
            Prayer::Maghrib => (Prayer::Isha, false),
            Prayer::Isha => (Prayer::Fajr, true),
        }
    }

    pub fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Prayer::Fajr => "Fajr",
                Prayer::Sunrise => "Sunrise",
                Prayer::Dhuhr => "Dhuhr",
                Prayer::Asr => "Asr",
                Prayer::Maghrib => "Maghrib",
                Prayer::Isha => "Isha",
            },
            Language::Arabic => match self {
                Prayer::Fajr => "الفجر",
                Prayer::Sunrise => "الشروق",
                Prayer::Dhuhr => "الظهر",
                Prayer::Asr => "العصر",
                Prayer::Maghrib => "المغرب",
                Prayer::Isha => "العشاء",
            },
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

impl Language {
    pub fn tomorrow_suffix(self) -> &'static str {
        match self {
            Language::English => " (tomorrow)",
            Language::Arabic => " (غداً)",
        }
    }
}
