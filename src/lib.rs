//! Seasonal Tour Standings Library
//!
//! This library provides the standings and scheduling engine of a seasonal
//! sports tour: Italian prose date parsing, the official tie-break ranking
//! and selection of the upcoming stop to feature.
//!
//! # Examples
//!
//! ```rust
//! use tour_standings::standings::{aggregate_teams, parse_date, rank, select_promoted_stop};
//! use tour_standings::testing_utils::TestDataBuilder;
//!
//! let snapshot = TestDataBuilder::create_season_snapshot();
//!
//! let teams = aggregate_teams(&snapshot.squadre, &snapshot.risultati);
//! let standings = rank(&teams, Some(3));
//! assert_eq!(standings[0].nome, "Sabbia Mobile");
//!
//! let now = parse_date("Venerdì 10 Luglio 2026").unwrap();
//! let promoted = select_promoted_stop(&snapshot.tappe, now);
//! assert_eq!(promoted.map(|stop| stop.id), Some(5));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod standings;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use standings::{
    Stop, StopStatus, TeamAggregate, TourSnapshot, parse_date, rank, select_promoted_stop,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
