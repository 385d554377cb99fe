//! Plain-text renderings of engine output for the command line.

use chrono::{DateTime, Datelike, Utc, Weekday};

use super::date_parser::ITALIAN_MONTHS;
use super::models::Stop;
use super::ranking::StandingRow;

fn italian_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunedì",
        Weekday::Tue => "Martedì",
        Weekday::Wed => "Mercoledì",
        Weekday::Thu => "Giovedì",
        Weekday::Fri => "Venerdì",
        Weekday::Sat => "Sabato",
        Weekday::Sun => "Domenica",
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats the UTC calendar day of `instant` as "Sabato 11 Luglio 2026".
///
/// The output parses back to the same day with `parse_date`.
pub fn format_italian_date(instant: DateTime<Utc>) -> String {
    let date = instant.date_naive();
    format!(
        "{} {} {} {}",
        italian_weekday(date.weekday()),
        date.day(),
        capitalise(ITALIAN_MONTHS[date.month0() as usize]),
        date.year()
    )
}

/// Fixed-width standings table, one team per line.
pub fn format_standings(rows: &[StandingRow]) -> String {
    let name_width = rows
        .iter()
        .map(|row| row.squadra.nome.chars().count())
        .max()
        .unwrap_or(0)
        .max("Squadra".len());

    let mut out = format!(
        "{:>3}  {:<name_width$}  {:>6}  {:>6}  {:>6}\n",
        "Pos", "Squadra", "Punti", "Tappe", "Media"
    );
    for row in rows {
        let average = row
            .squadra
            .average_placement()
            .map(|avg| format!("{avg:.2}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>6}  {:>6}  {:>6}\n",
            row.posizione,
            row.squadra.nome,
            row.squadra.punti_totali,
            row.squadra.tappe_giocate,
            average
        ));
    }
    out
}

/// One-line description of the promoted stop, or the empty-state text.
pub fn format_promoted_stop(stop: Option<&Stop>) -> String {
    match stop {
        Some(stop) => {
            let mut line = format!("In evidenza: {} - {}", stop.nome, stop.data);
            if let Some(luogo) = &stop.luogo {
                line.push_str(&format!(" ({luogo})"));
            }
            line
        }
        None => "Nessuna tappa in evidenza".to_string(),
    }
}
