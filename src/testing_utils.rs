use crate::standings::models::{
    ResultRow, Stop, StopId, StopResult, StopStatus, Team, TeamAggregate, TeamId, TourSnapshot,
};
use std::collections::BTreeMap;

/// Test utilities for creating mock tour data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a stop named "Tappa {id}" with the given prose date and state
    pub fn create_stop(id: StopId, data: &str, stato: StopStatus) -> Stop {
        Stop {
            id,
            slug: format!("tappa-{id}"),
            nome: format!("Tappa {id}"),
            data: data.to_string(),
            stato,
            luogo: None,
            orario: None,
            organizzatore: None,
            extra: BTreeMap::new(),
        }
    }

    /// Creates a team aggregate from `(tappa_id, posizione, punti)` triples,
    /// with totals computed from them
    pub fn create_team(id: TeamId, nome: &str, results: &[(StopId, u32, i64)]) -> TeamAggregate {
        let risultati: Vec<StopResult> = results
            .iter()
            .map(|&(tappa_id, posizione, punti)| StopResult {
                tappa_id,
                posizione,
                punti,
            })
            .collect();
        TeamAggregate {
            id,
            nome: nome.to_string(),
            punti_totali: risultati.iter().map(|r| r.punti).sum(),
            tappe_giocate: risultati.len() as u32,
            risultati,
        }
    }

    /// Creates a raw result row
    pub fn create_result_row(
        squadra_id: TeamId,
        tappa_id: StopId,
        posizione: u32,
        punti: i64,
    ) -> ResultRow {
        ResultRow {
            squadra_id,
            tappa_id,
            posizione,
            punti,
        }
    }

    /// A small season: three concluded stops, one confirmed and one pending
    /// upcoming stop, four teams.
    pub fn create_season_snapshot() -> TourSnapshot {
        let tappe = vec![
            Self::create_stop(1, "Sabato 6 Giugno 2026", StopStatus::Conclusa),
            Self::create_stop(2, "Sabato 20 Giugno 2026", StopStatus::Conclusa),
            Self::create_stop(3, "Sabato 4 Luglio 2026", StopStatus::Conclusa),
            Self::create_stop(4, "Sabato 11 Luglio 2026", StopStatus::Pending),
            Self::create_stop(5, "Domenica 12 Luglio 2026", StopStatus::Confermata),
        ];
        let squadre = vec![
            Team { id: 10, nome: "Onda Lunga".to_string() },
            Team { id: 20, nome: "Muro Basso".to_string() },
            Team { id: 30, nome: "Sabbia Mobile".to_string() },
            Team { id: 40, nome: "Appena Iscritti".to_string() },
        ];
        let risultati = vec![
            Self::create_result_row(10, 1, 1, 100),
            Self::create_result_row(20, 1, 2, 80),
            Self::create_result_row(30, 1, 3, 60),
            Self::create_result_row(20, 2, 1, 100),
            Self::create_result_row(10, 2, 3, 60),
            Self::create_result_row(30, 2, 2, 80),
            Self::create_result_row(30, 3, 1, 100),
            Self::create_result_row(10, 3, 2, 80),
            Self::create_result_row(20, 3, 3, 60),
        ];
        TourSnapshot {
            tappe,
            squadre,
            risultati,
        }
    }
}
