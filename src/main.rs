// src/main.rs
mod cli;
mod logging;

use chrono::Utc;
use clap::Parser;
use cli::{Args, parse_reference_instant};
use serde_json::json;
use tour_standings::config::Config;
use tour_standings::error::AppError;
use tour_standings::standings::{
    StopId, TourSnapshot, aggregate_teams, format_italian_date, format_promoted_stop,
    format_standings, latest_concluded_stop, parse_date, select_promoted_stop, standings_table,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = Config::load().await;
    let (log_file_path, _guard) = logging::setup_logging(&args, config.as_ref().ok()).await?;
    info!("Logs are being written to: {log_file_path}");

    // Runs before the config error check: a broken config file must not block it.
    if let Some(text) = &args.parse_date {
        print_parsed_date(text, args.json)?;
        return Ok(());
    }

    let config = config?;

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let data_path = args
        .data
        .clone()
        .or(config.data_file.clone())
        .ok_or_else(|| {
            AppError::config_error("No tour data file given, use --data or set data_file in config")
        })?;

    info!("Loading tour snapshot from {data_path}");
    let content = tokio::fs::read_to_string(&data_path).await?;
    let snapshot = TourSnapshot::from_json(&content)?;
    info!(
        "Loaded {} stops, {} teams, {} results",
        snapshot.tappe.len(),
        snapshot.squadre.len(),
        snapshot.risultati.len()
    );

    let mut output = serde_json::Map::new();

    if args.show_standings() {
        let tiebreak_stop = resolve_tiebreak_stop(&snapshot, args.tiebreak_stop)?;
        let teams = aggregate_teams(&snapshot.squadre, &snapshot.risultati);
        let table = standings_table(&teams, tiebreak_stop);

        if args.json {
            output.insert("classifica".to_string(), serde_json::to_value(&table)?);
        } else {
            match tiebreak_stop.and_then(|id| snapshot.stop(id)) {
                Some(stop) => println!("Classifica (spareggio: {})\n", stop.nome),
                None => println!("Classifica\n"),
            }
            print!("{}", format_standings(&table));
            println!();
        }
    }

    if args.show_promo() {
        let now = match &args.now {
            Some(text) => parse_reference_instant(text)?,
            None => Utc::now(),
        };
        let promoted = select_promoted_stop(&snapshot.tappe, now);

        if args.json {
            output.insert("in_evidenza".to_string(), serde_json::to_value(promoted)?);
        } else {
            println!("{}", format_promoted_stop(promoted));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn resolve_tiebreak_stop(
    snapshot: &TourSnapshot,
    requested: Option<StopId>,
) -> Result<Option<StopId>, AppError> {
    match requested {
        Some(stop_id) => {
            if snapshot.stop(stop_id).is_none() {
                return Err(AppError::stop_not_found(stop_id));
            }
            Ok(Some(stop_id))
        }
        None => {
            let latest = latest_concluded_stop(&snapshot.tappe);
            if latest.is_none() {
                warn!("No concluded stop with a readable date, ranking without tie-break stop");
            }
            Ok(latest)
        }
    }
}

fn print_parsed_date(text: &str, as_json: bool) -> Result<(), AppError> {
    let parsed = parse_date(text);
    if as_json {
        let value = json!({
            "input": text,
            "instant": parsed.map(|instant| instant.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match parsed {
        Some(instant) => println!("{} ({})", format_italian_date(instant), instant.to_rfc3339()),
        None => println!("Data non disponibile"),
    }
    Ok(())
}
