use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use tour_standings::constants::dates::NEUTRAL_HOUR_UTC;
use tour_standings::error::AppError;
use tour_standings::standings::parse_date;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Seasonal tour standings
///
/// Reads a tour snapshot (stops, teams, result rows) exported as JSON and prints
/// the official standings and the stop currently featured as "coming up soon".
///
/// Standings are ordered by total points, then stops played, then average
/// placement, then placement at the tie-break stop (by default the most
/// recent concluded stop).
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Tour snapshot in JSON format. Overrides `data_file` from the config.
    #[arg(long = "data", short = 'f', value_name = "FILE")]
    pub data: Option<String>,

    /// Print the ranked standings table.
    #[arg(long = "standings", short = 's', help_heading = "Output")]
    pub standings: bool,

    /// Print the stop featured in the promotional window.
    #[arg(long = "promo", short = 'p', help_heading = "Output")]
    pub promo: bool,

    /// Emit JSON instead of plain text.
    #[arg(long = "json", help_heading = "Output")]
    pub json: bool,

    /// Stop whose placements break remaining ties.
    /// Defaults to the most recent concluded stop.
    #[arg(long = "tiebreak-stop", value_name = "STOP_ID", help_heading = "Standings")]
    pub tiebreak_stop: Option<i64>,

    /// Reference instant for the promotional window: RFC 3339, YYYY-MM-DD
    /// (noon UTC) or an Italian date such as "Sabato 11 Luglio 2026".
    /// Defaults to the current time.
    #[arg(long = "now", value_name = "DATE", help_heading = "Promotion")]
    pub now: Option<String>,

    /// Parse an Italian prose date, print the resulting instant and exit.
    #[arg(long = "parse-date", value_name = "TEXT", help_heading = "Dates")]
    pub parse_date: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// With no explicit output selection both sections are printed.
    pub fn show_standings(&self) -> bool {
        self.standings || !self.promo
    }

    pub fn show_promo(&self) -> bool {
        self.promo || !self.standings
    }
}

/// Parses the `--now` value.
///
/// Accepts RFC 3339, a bare `YYYY-MM-DD` (anchored at noon UTC like prose
/// dates) or an Italian prose date.
pub fn parse_reference_instant(text: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(NEUTRAL_HOUR_UTC, 0, 0)
    {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    parse_date(trimmed).ok_or_else(|| {
        AppError::datetime_parse_error(format!(
            "'{trimmed}' is not RFC 3339, YYYY-MM-DD or an Italian date"
        ))
    })
}
