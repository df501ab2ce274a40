//! Youth soccer league standings
//!
//! This library turns the match records of a league into ranked division
//! tables. The standings engine is pure: callers load matches from wherever
//! they keep them and get a [`LeagueTable`] back.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_standings::loader::load_matches;
//! use league_standings::render::render_text;
//! use league_standings::standings::compute_standings;
//! use league_standings::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let matches = load_matches("matches.json").await?;
//!
//!     let table = compute_standings(&matches, 3, "League");
//!
//!     print!("{}", render_text(&table, "DIVISION 3 - LEAGUE", None));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod render;
pub mod standings;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use constants::DEFAULT_MATCH_TYPE;
pub use error::AppError;
pub use models::{LeagueTable, MatchRecord, MatchStatus, TableRow, TeamRef, TeamStanding};
pub use standings::{
    StandingsCriteria, compute_division_tables, compute_standings, compute_standings_with,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
