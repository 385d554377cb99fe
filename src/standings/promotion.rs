//! Picks the stop to feature as "coming up soon".

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::date_parser::parse_date;
use super::models::{Stop, StopId};
use crate::constants::promotion::WINDOW_DAYS;

/// Whether `instant` falls in `[now, now + 7 days]`, both ends inclusive.
pub fn is_within_promotion_window(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let window_end = now + Duration::days(WINDOW_DAYS);
    instant >= now && instant <= window_end
}

/// Returns the first confirmed stop, in list order, whose date falls in the
/// promotional window starting at `now`.
///
/// Selection is positional, not by earliest date: with two eligible stops
/// the one listed first wins even if the other happens sooner. Stops with
/// an unparseable date are never promoted.
pub fn select_promoted_stop(stops: &[Stop], now: DateTime<Utc>) -> Option<&Stop> {
    let selected = stops.iter().find(|stop| {
        if !stop.stato.is_promotable() {
            return false;
        }
        match parse_date(&stop.data) {
            Some(date) => is_within_promotion_window(date, now),
            None => {
                debug!(
                    "Stop {} skipped for promotion, unparseable date '{}'",
                    stop.id, stop.data
                );
                false
            }
        }
    });

    match selected {
        Some(stop) => info!("Promoting stop {} ({})", stop.id, stop.nome),
        None => debug!("No stop to promote at {now}"),
    }
    selected
}

/// The most recent concluded stop, used as the default standings tie-break.
///
/// Stops with unparseable dates are ignored. On equal dates the stop listed
/// later wins.
pub fn latest_concluded_stop(stops: &[Stop]) -> Option<StopId> {
    stops
        .iter()
        .filter(|stop| stop.stato.is_concluded())
        .filter_map(|stop| parse_date(&stop.data).map(|date| (date, stop.id)))
        .max_by_key(|(date, _)| *date)
        .map(|(_, id)| id)
}
