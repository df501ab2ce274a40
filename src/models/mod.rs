pub mod match_record;
pub mod standing;

pub use match_record::{FinalScore, MatchRecord, MatchStatus, TeamRef};
pub use standing::{LeagueTable, TableRow, TeamStanding};
