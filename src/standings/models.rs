use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

pub type StopId = i64;
pub type TeamId = i64;

/// Lifecycle state of a stop. The wire strings are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    Pending,
    Confermata,
    InCorso,
    InAttesaRisultati,
    Conclusa,
}

impl StopStatus {
    pub const ALL: [StopStatus; 5] = [
        StopStatus::Pending,
        StopStatus::Confermata,
        StopStatus::InCorso,
        StopStatus::InAttesaRisultati,
        StopStatus::Conclusa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StopStatus::Pending => "pending",
            StopStatus::Confermata => "confermata",
            StopStatus::InCorso => "in_corso",
            StopStatus::InAttesaRisultati => "in_attesa_risultati",
            StopStatus::Conclusa => "conclusa",
        }
    }

    /// Only confirmed stops can be featured as upcoming.
    pub fn is_promotable(&self) -> bool {
        matches!(self, StopStatus::Confermata)
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self, StopStatus::Conclusa)
    }
}

impl fmt::Display for StopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StopStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::data_validation(format!("unknown stop status '{s}'")))
    }
}

/// A leg of the tour.
///
/// `data` is free Italian prose ("Sabato 11 Luglio 2026") and may not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    #[serde(default)]
    pub slug: String,
    pub nome: String,
    pub data: String,
    pub stato: StopStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luogo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizzatore: Option<String>,
    /// Any other descriptive fields, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One team's outcome at one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopResult {
    pub tappa_id: StopId,
    /// 1-based placement, 1 is best
    pub posizione: u32,
    pub punti: i64,
}

/// Per-team totals handed to the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    pub id: TeamId,
    pub nome: String,
    pub punti_totali: i64,
    pub tappe_giocate: u32,
    #[serde(default)]
    pub risultati: Vec<StopResult>,
}

impl TeamAggregate {
    /// Mean placement over the team's own results, `None` without results.
    pub fn average_placement(&self) -> Option<f64> {
        if self.risultati.is_empty() {
            return None;
        }
        let sum: u64 = self.risultati.iter().map(|r| u64::from(r.posizione)).sum();
        Some(sum as f64 / self.risultati.len() as f64)
    }

    /// Placement at the given stop, if the team played it.
    pub fn placement_at(&self, stop_id: StopId) -> Option<u32> {
        self.risultati
            .iter()
            .find(|r| r.tappa_id == stop_id)
            .map(|r| r.posizione)
    }
}

/// Team identity as stored by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub nome: String,
}

/// A raw result row, not yet grouped by team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub squadra_id: TeamId,
    pub tappa_id: StopId,
    pub posizione: u32,
    pub punti: i64,
}

impl From<ResultRow> for StopResult {
    fn from(row: ResultRow) -> Self {
        StopResult {
            tappa_id: row.tappa_id,
            posizione: row.posizione,
            punti: row.punti,
        }
    }
}

/// Everything the binary needs for one run, as exported by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourSnapshot {
    #[serde(default)]
    pub tappe: Vec<Stop>,
    #[serde(default)]
    pub squadre: Vec<Team>,
    #[serde(default)]
    pub risultati: Vec<ResultRow>,
}

impl TourSnapshot {
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let snapshot: TourSnapshot = serde_json::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks id uniqueness and placement range.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut stop_ids = HashSet::new();
        for stop in &self.tappe {
            if !stop_ids.insert(stop.id) {
                return Err(AppError::data_validation(format!(
                    "duplicate stop id {}",
                    stop.id
                )));
            }
        }

        let mut team_ids = HashSet::new();
        for team in &self.squadre {
            if !team_ids.insert(team.id) {
                return Err(AppError::data_validation(format!(
                    "duplicate team id {}",
                    team.id
                )));
            }
        }

        if let Some(row) = self.risultati.iter().find(|r| r.posizione == 0) {
            return Err(AppError::data_validation(format!(
                "result for team {} at stop {} has placement 0",
                row.squadra_id, row.tappa_id
            )));
        }

        Ok(())
    }

    pub fn stop(&self, stop_id: StopId) -> Option<&Stop> {
        self.tappe.iter().find(|s| s.id == stop_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_status_wire_strings() {
        for status in StopStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<StopStatus>().unwrap(), status);
        }
        assert_eq!(
            serde_json::from_str::<StopStatus>("\"in_attesa_risultati\"").unwrap(),
            StopStatus::InAttesaRisultati
        );
    }

    #[test]
    fn test_unknown_stop_status_is_rejected() {
        assert!("annullata".parse::<StopStatus>().is_err());
        assert!(serde_json::from_str::<StopStatus>("\"Confermata\"").is_err());
    }

    #[test]
    fn test_only_confirmed_is_promotable() {
        let promotable: Vec<_> = StopStatus::ALL
            .into_iter()
            .filter(StopStatus::is_promotable)
            .collect();
        assert_eq!(promotable, vec![StopStatus::Confermata]);
    }

    #[test]
    fn test_stop_keeps_unknown_fields() {
        let json = r#"{
            "id": 3,
            "slug": "lignano",
            "nome": "Tappa di Lignano",
            "data": "Sabato 11 Luglio 2026",
            "stato": "confermata",
            "luogo": "Lignano Sabbiadoro",
            "locandina_url": "https://example.com/poster.png"
        }"#;
        let stop: Stop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.luogo.as_deref(), Some("Lignano Sabbiadoro"));
        assert_eq!(stop.orario, None);
        assert_eq!(
            stop.extra.get("locandina_url"),
            Some(&serde_json::Value::String("https://example.com/poster.png".to_string()))
        );

        let back = serde_json::to_value(&stop).unwrap();
        assert_eq!(back["locandina_url"], "https://example.com/poster.png");
    }

    #[test]
    fn test_average_placement() {
        let team = TeamAggregate {
            id: 1,
            nome: "Sabbia Mobile".to_string(),
            punti_totali: 100,
            tappe_giocate: 2,
            risultati: vec![
                StopResult { tappa_id: 1, posizione: 1, punti: 60 },
                StopResult { tappa_id: 2, posizione: 2, punti: 40 },
            ],
        };
        assert_eq!(team.average_placement(), Some(1.5));
        assert_eq!(team.placement_at(2), Some(2));
        assert_eq!(team.placement_at(9), None);
    }

    #[test]
    fn test_average_placement_without_results() {
        let team = TeamAggregate {
            id: 1,
            nome: "Nuovi Arrivi".to_string(),
            punti_totali: 0,
            tappe_giocate: 0,
            risultati: vec![],
        };
        assert_eq!(team.average_placement(), None);
    }

    #[test]
    fn test_snapshot_rejects_duplicates_and_zero_placement() {
        let mut snapshot = TourSnapshot {
            squadre: vec![
                Team { id: 1, nome: "A".to_string() },
                Team { id: 1, nome: "B".to_string() },
            ],
            ..Default::default()
        };
        assert!(matches!(snapshot.validate(), Err(AppError::DataValidation(_))));

        snapshot.squadre.pop();
        snapshot.risultati.push(ResultRow {
            squadra_id: 1,
            tappa_id: 1,
            posizione: 0,
            punti: 10,
        });
        assert!(matches!(snapshot.validate(), Err(AppError::DataValidation(_))));
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "tappe": [{"id": 1, "nome": "Tappa 1", "data": "4 Luglio 2026", "stato": "conclusa"}],
            "squadre": [{"id": 10, "nome": "Rete Alta"}],
            "risultati": [{"squadra_id": 10, "tappa_id": 1, "posizione": 2, "punti": 80}]
        }"#;
        let snapshot = TourSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.tappe.len(), 1);
        assert_eq!(snapshot.stop(1).map(|s| s.stato), Some(StopStatus::Conclusa));
        assert!(snapshot.stop(2).is_none());
        assert_eq!(snapshot.risultati[0].posizione, 2);
    }
}
