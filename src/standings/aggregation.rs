use std::collections::HashMap;

use tracing::warn;

use super::models::{ResultRow, Team, TeamAggregate, TeamId};

/// Groups raw result rows into one aggregate per team.
///
/// Output follows the order of `teams`; each team's results keep row order.
/// Rows for unknown teams are dropped. Point totals saturate at the `i64`
/// bounds instead of overflowing.
pub fn aggregate_teams(teams: &[Team], rows: &[ResultRow]) -> Vec<TeamAggregate> {
    let mut aggregates: Vec<TeamAggregate> = teams
        .iter()
        .map(|team| TeamAggregate {
            id: team.id,
            nome: team.nome.clone(),
            punti_totali: 0,
            tappe_giocate: 0,
            risultati: Vec::new(),
        })
        .collect();

    let index_by_id: HashMap<TeamId, usize> = aggregates
        .iter()
        .enumerate()
        .map(|(index, aggregate)| (aggregate.id, index))
        .collect();

    for row in rows {
        let Some(&index) = index_by_id.get(&row.squadra_id) else {
            warn!(
                "Result at stop {} references unknown team {}, skipping",
                row.tappa_id, row.squadra_id
            );
            continue;
        };
        let aggregate = &mut aggregates[index];
        aggregate.punti_totali = match aggregate.punti_totali.checked_add(row.punti) {
            Some(total) => total,
            None => {
                warn!(
                    "Points total for team {} overflows at stop {}, clamping",
                    row.squadra_id, row.tappa_id
                );
                aggregate.punti_totali.saturating_add(row.punti)
            }
        };
        aggregate.tappe_giocate += 1;
        aggregate.risultati.push((*row).into());
    }

    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(squadra_id: TeamId, tappa_id: i64, posizione: u32, punti: i64) -> ResultRow {
        ResultRow {
            squadra_id,
            tappa_id,
            posizione,
            punti,
        }
    }

    #[test]
    fn test_sums_points_and_counts_stops() {
        let teams = vec![
            Team { id: 1, nome: "Onda Lunga".to_string() },
            Team { id: 2, nome: "Muro Basso".to_string() },
        ];
        let rows = vec![row(1, 10, 1, 100), row(2, 10, 2, 80), row(1, 11, 3, 60)];

        let aggregates = aggregate_teams(&teams, &rows);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].punti_totali, 160);
        assert_eq!(aggregates[0].tappe_giocate, 2);
        assert_eq!(
            aggregates[0].risultati.iter().map(|r| r.tappa_id).collect::<Vec<_>>(),
            vec![10, 11]
        );
        assert_eq!(aggregates[1].punti_totali, 80);
        assert_eq!(aggregates[1].tappe_giocate, 1);
    }

    #[test]
    fn test_team_without_rows_is_kept() {
        let teams = vec![Team { id: 5, nome: "Appena Iscritti".to_string() }];
        let aggregates = aggregate_teams(&teams, &[]);
        assert_eq!(aggregates[0].punti_totali, 0);
        assert_eq!(aggregates[0].tappe_giocate, 0);
        assert!(aggregates[0].risultati.is_empty());
    }

    #[test]
    fn test_unknown_team_rows_are_skipped() {
        let teams = vec![Team { id: 1, nome: "Onda Lunga".to_string() }];
        let aggregates = aggregate_teams(&teams, &[row(99, 10, 1, 100), row(1, 10, 2, 80)]);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].punti_totali, 80);
    }

    #[test]
    fn test_points_total_saturates_instead_of_overflowing() {
        let teams = vec![
            Team { id: 1, nome: "Onda Lunga".to_string() },
            Team { id: 2, nome: "Muro Basso".to_string() },
        ];
        let rows = vec![
            row(1, 10, 1, i64::MAX),
            row(1, 11, 1, i64::MAX),
            row(2, 10, 2, i64::MIN),
            row(2, 11, 2, -1),
        ];

        let aggregates = aggregate_teams(&teams, &rows);
        assert_eq!(aggregates[0].punti_totali, i64::MAX);
        assert_eq!(aggregates[0].tappe_giocate, 2);
        assert_eq!(aggregates[0].risultati.len(), 2);
        assert_eq!(aggregates[1].punti_totali, i64::MIN);
    }
}
