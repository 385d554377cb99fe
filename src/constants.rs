//! Application-wide constants
//!
//! Product rules that must be uniform across every caller live here and are
//! deliberately not exposed through the config file.

/// Promotion window rules
pub mod promotion {
    /// Length of the forward-looking promotional window, in days
    pub const WINDOW_DAYS: i64 = 7;
}

/// Date parsing rules
pub mod dates {
    /// UTC hour a parsed calendar day is anchored to.
    /// Noon keeps the calendar day stable in every timezone from UTC-11 to UTC+11.
    pub const NEUTRAL_HOUR_UTC: u32 = 12;
}

/// Default file names inside the config directory
pub mod files {
    pub const APP_DIR: &str = "tour_standings";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE: &str = "tour_standings.log";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the tour snapshot path
    pub const DATA_FILE: &str = "TOUR_STANDINGS_DATA_FILE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "TOUR_STANDINGS_LOG_FILE";
}
