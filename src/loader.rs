use std::{fmt, fs::File, io, path::Path};

use crate::{
    prayer::Prayer,
    table::{parse_time_of_day, CalendarTable, DayEntry},
};

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub line: Option<u64>,
}

impl LoadError {
    pub fn new(kind: LoadErrorKind, line: Option<u64>) -> Self {
        Self { kind, line }
    }
}

#[derive(Debug)]
pub enum LoadErrorKind {
    Io(io::Error),
    Csv(csv::Error),
    /// The source parsed but no row carried a usable (month, day) key.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::Io(e) => write!(f, "failed to read prayer table: {e}")?,
            // csv errors already carry their position
            LoadErrorKind::Csv(e) => return write!(f, "malformed prayer table: {e}"),
            LoadErrorKind::Empty => write!(f, "prayer table has no usable rows")?,
        }
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            LoadErrorKind::Io(e) => Some(e),
            LoadErrorKind::Csv(e) => Some(e),
            LoadErrorKind::Empty => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        let line = match e.kind() {
            csv::ErrorKind::Utf8 { pos: Some(pos), .. }
            | csv::ErrorKind::UnequalLengths { pos: Some(pos), .. }
            | csv::ErrorKind::Deserialize { pos: Some(pos), .. } => Some(pos.line()),
            _ => None,
        };
        Self::new(LoadErrorKind::Csv(e), line)
    }
}

// month, day, then one column per prayer
const MONTH_COLUMN: usize = 0;
const DAY_COLUMN: usize = 1;
const FIRST_TIME_COLUMN: usize = 2;

impl CalendarTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading prayer table from {}", path.display());
        let file = File::open(path).map_err(|e| LoadError::new(LoadErrorKind::Io(e), None))?;
        Self::from_reader(file)
    }

    /// Reads a header row followed by `month,day,fajr,sunrise,dhuhr,asr,maghrib,isha`
    /// records. Bad keys skip the row; bad time cells leave that label absent.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = CalendarTable::new();
        for record in reader.byte_records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let Some((month, day)) = parse_key(&record) else {
                log::warn!("Skipping line {line}: no valid month/day in {record:?}");
                continue;
            };

            let mut entry = DayEntry::default();
            for prayer in Prayer::ALL {
                let cell = record.get(FIRST_TIME_COLUMN + prayer.index()).unwrap_or_default();
                let time = std::str::from_utf8(cell).ok().and_then(parse_time_of_day);
                if time.is_none() {
                    log::debug!(
                        "Line {line}: {prayer} missing or malformed ({:?})",
                        String::from_utf8_lossy(cell)
                    );
                }
                entry.set(prayer, time);
            }

            if table.day(month, day).is_some() {
                log::warn!("Line {line}: duplicate entry for {month}-{day} replaces the earlier one");
            }
            if !table.insert(month, day, entry) {
                log::warn!("Skipping line {line}: {month}-{day} is not a calendar day");
            }
        }

        if table.is_empty() {
            return Err(LoadError::new(LoadErrorKind::Empty, None));
        }

        log::info!("Loaded {} days", table.len());
        Ok(table)
    }
}

fn parse_key(record: &csv::ByteRecord) -> Option<(u32, u32)> {
    let field = |column: usize| -> Option<u32> {
        std::str::from_utf8(record.get(column)?).ok()?.parse().ok()
    };
    Some((field(MONTH_COLUMN)?, field(DAY_COLUMN)?))
}
