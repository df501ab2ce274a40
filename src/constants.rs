//! Application-wide constants
//!
//! Points values, defaults and environment variable names live here so the
//! standings engine, the config layer and the CLI agree on them.

/// Match type that feeds the regular league table
pub const DEFAULT_MATCH_TYPE: &str = "League";

/// File name used for the rolling log when no custom path is configured
pub const LOG_FILE_NAME: &str = "league_standings.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "league_standings";

/// Points awarded per match outcome
pub mod points {
    pub const WIN: u32 = 3;
    pub const DRAW: u32 = 1;
    pub const LOSS: u32 = 0;
}

/// Environment variable names
pub mod env_vars {
    /// Overrides the configured default match type
    pub const MATCH_TYPE: &str = "STANDINGS_MATCH_TYPE";

    /// Overrides the configured output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "STANDINGS_OUTPUT_FORMAT";

    /// Overrides the configured log file path
    pub const LOG_FILE: &str = "STANDINGS_LOG_FILE";
}

/// Column widths for the text table
pub mod render {
    /// Width of the position column
    pub const POSITION_WIDTH: usize = 3;

    /// Team names longer than this are truncated
    pub const TEAM_NAME_WIDTH: usize = 24;

    /// Width of each numeric column
    pub const STAT_WIDTH: usize = 4;
}
