//! Standings & scheduling engine.
//!
//! Pure functions over in-memory snapshots: no I/O, no shared state. Every
//! call works on its own inputs and may run in parallel with any other.

pub mod aggregation;
pub mod date_parser;
pub mod formatting;
pub mod models;
pub mod promotion;
pub mod ranking;

pub use aggregation::aggregate_teams;
pub use date_parser::{month_number, parse_date};
pub use formatting::{format_italian_date, format_promoted_stop, format_standings};
pub use models::{
    ResultRow, Stop, StopId, StopResult, StopStatus, Team, TeamAggregate, TeamId, TourSnapshot,
};
pub use promotion::{is_within_promotion_window, latest_concluded_stop, select_promoted_stop};
pub use ranking::{StandingRow, compare_teams, rank, standings_table};
