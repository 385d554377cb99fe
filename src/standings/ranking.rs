//! Official standings order for the tour.
//!
//! Keys, each only breaking ties left by the previous one:
//! 1. total points, descending
//! 2. stops played, descending
//! 3. average placement, ascending (teams without results last)
//! 4. placement at the tie-break stop, ascending (teams that skipped it last)
//!
//! Teams equal on every key keep their input order.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::models::{StopId, TeamAggregate};

fn compare_points(a: &TeamAggregate, b: &TeamAggregate) -> Ordering {
    b.punti_totali.cmp(&a.punti_totali)
}

fn compare_stops_played(a: &TeamAggregate, b: &TeamAggregate) -> Ordering {
    b.tappe_giocate.cmp(&a.tappe_giocate)
}

// Averages are compared as fractions (sum_a / n_a vs sum_b / n_b) by
// cross-multiplying, so equal averages tie exactly.
fn compare_average_placement(a: &TeamAggregate, b: &TeamAggregate) -> Ordering {
    match (placement_totals(a), placement_totals(b)) {
        (Some((sum_a, n_a)), Some((sum_b, n_b))) => (sum_a * n_b).cmp(&(sum_b * n_a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn placement_totals(team: &TeamAggregate) -> Option<(u128, u128)> {
    if team.risultati.is_empty() {
        return None;
    }
    let sum: u128 = team.risultati.iter().map(|r| u128::from(r.posizione)).sum();
    Some((sum, team.risultati.len() as u128))
}

fn compare_tiebreak_stop(a: &TeamAggregate, b: &TeamAggregate, stop_id: StopId) -> Ordering {
    match (a.placement_at(stop_id), b.placement_at(stop_id)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Full comparison used for the standings. `Less` means `a` ranks higher.
pub fn compare_teams(
    a: &TeamAggregate,
    b: &TeamAggregate,
    tiebreak_stop: Option<StopId>,
) -> Ordering {
    compare_points(a, b)
        .then_with(|| compare_stops_played(a, b))
        .then_with(|| compare_average_placement(a, b))
        .then_with(|| match tiebreak_stop {
            Some(stop_id) => compare_tiebreak_stop(a, b, stop_id),
            None => Ordering::Equal,
        })
}

/// Returns the teams in official standings order. The input is left untouched.
pub fn rank(teams: &[TeamAggregate], tiebreak_stop: Option<StopId>) -> Vec<TeamAggregate> {
    let mut ranked = teams.to_vec();
    // sort_by is stable, fully tied teams keep their relative order
    ranked.sort_by(|a, b| compare_teams(a, b, tiebreak_stop));
    debug!(
        "Ranked {} teams (tie-break stop: {:?})",
        ranked.len(),
        tiebreak_stop
    );
    ranked
}

/// One line of the standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    /// 1-based, sequential
    pub posizione: usize,
    pub squadra: TeamAggregate,
}

/// Ranks the teams and numbers them 1..=n.
pub fn standings_table(
    teams: &[TeamAggregate],
    tiebreak_stop: Option<StopId>,
) -> Vec<StandingRow> {
    rank(teams, tiebreak_stop)
        .into_iter()
        .enumerate()
        .map(|(index, squadra)| StandingRow {
            posizione: index + 1,
            squadra,
        })
        .collect()
}
