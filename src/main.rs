use std::{
    cmp::max,
    io::{self, Write as _},
    path::PathBuf,
    thread,
    time::Duration,
};

use adhan_countdown::{
    countdown::IDLE_TEXT, resolve, settings::Settings, CalendarTable, Countdown, Language,
    PrayerTrigger, Proximity, Resolution,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use clap::Parser as _;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

/// Countdown to the next prayer from a yearly prayer-time table.
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about)]
struct Cli {
    /// CSV table: month,day,fajr,sunrise,dhuhr,asr,maghrib,isha
    #[arg(global = true, long)]
    table: Option<PathBuf>,
    /// Settings file (TOML). Defaults to the platform config directory.
    #[arg(global = true, long)]
    config: Option<PathBuf>,
    /// Seconds around a prayer that count as "near" it.
    #[arg(global = true, long)]
    threshold: Option<i64>,
    /// Show labels in Arabic.
    #[arg(global = true, long)]
    arabic: bool,
    #[arg(global = true, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
    #[arg(global = true, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Print the countdown once.
    Now {
        /// Resolve against this local time instead of the clock.
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Redraw the countdown on every tick.
    Watch {
        /// Run `<cmd> <prayer>` when a prayer time arrives (Sunrise excluded).
        #[arg(long, value_name = "CMD")]
        on_prayer: Option<String>,
    },
    /// List the six times of a date.
    Day {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        max(LevelFilter::Debug, cli.log_level)
    } else {
        cli.log_level
    };

    let mut config = simplelog::ConfigBuilder::new();
    config.set_time_level(LevelFilter::Off);
    config.set_thread_level(LevelFilter::Off);
    config.set_target_level(LevelFilter::Off);
    config.set_location_level(if cli.debug {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    });

    TermLogger::init(level, config.build(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn render(resolution: &Resolution, now: NaiveDateTime, settings: &Settings) -> String {
    match Countdown::new(resolution, now, settings.threshold()) {
        Some(countdown) => format!(
            "{}  {}  [{} {}]",
            countdown.headline(settings.language),
            countdown.remaining(),
            countdown.proximity.describe(),
            countdown.proximity.color(),
        ),
        None => format!(
            "{IDLE_TEXT}  [{} {}]",
            Proximity::Neutral.describe(),
            Proximity::Neutral.color()
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    log::debug!("Parsed arguments: {cli:?}");

    let mut settings = Settings::load(cli.config.clone()).context("failed to load settings")?;
    if let Some(table) = cli.table.clone() {
        settings.table = Some(table);
    }
    if let Some(threshold) = cli.threshold {
        settings.threshold_secs = threshold;
    }
    if cli.arabic {
        settings.language = Language::Arabic;
    }
    settings.validate()?;

    let path = settings
        .table
        .clone()
        .context("no prayer table given; pass --table or set `table` in the settings file")?;
    let table = CalendarTable::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    match cli.command.unwrap_or(Command::Now { at: None }) {
        Command::Now { at } => {
            let now = at.unwrap_or_else(|| Local::now().naive_local());
            println!("{}", render(&resolve(&table, now), now, &settings));
        }
        Command::Watch { on_prayer } => {
            let interval = max(settings.interval_secs, 1);
            let tick = Duration::from_secs(interval);
            let mut trigger = on_prayer.or_else(|| settings.on_prayer.clone()).map(|cmd| {
                let window = i64::try_from(interval)
                    .ok()
                    .and_then(TimeDelta::try_seconds)
                    .unwrap_or(TimeDelta::MAX);
                PrayerTrigger::new(cmd, window)
            });
            let mut stdout = io::stdout();
            loop {
                let now = Local::now().naive_local();
                let resolution = resolve(&table, now);
                if let Some(trigger) = trigger.as_mut() {
                    trigger.poll(&resolution, now);
                }
                let line = render(&resolution, now, &settings);
                write!(stdout, "\r{line:<48}")?;
                stdout.flush()?;
                thread::sleep(tick);
            }
        }
        Command::Day { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let Some(entry) = table.entry_for(date) else {
                println!("{date}: no entry");
                return Ok(());
            };
            println!("{date}");
            for (prayer, time) in entry.iter() {
                let time = time.map_or_else(|| IDLE_TEXT.to_string(), |t| t.format("%H:%M").to_string());
                println!("  {:<10} {time}", prayer.name(settings.language));
            }
        }
    }

    Ok(())
}
