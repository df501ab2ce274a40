use crate::constants::DEFAULT_MATCH_TYPE;
use crate::models::{MatchRecord, MatchStatus, TeamRef};
use chrono::NaiveDate;

/// Test utilities for creating match records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Stable id derived from the team name so fixtures stay readable
    pub fn team_id(name: &str) -> i64 {
        name.bytes()
            .fold(17i64, |acc, b| acc.wrapping_mul(31).wrapping_add(i64::from(b)))
    }

    pub fn team(name: &str, division_id: i64) -> TeamRef {
        TeamRef::new(Self::team_id(name), name, Some(division_id))
    }

    /// Creates a completed league match where both teams play in `division_id`
    pub fn completed_match(
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
        division_id: i64,
    ) -> MatchRecord {
        MatchRecord {
            id: None,
            home_team: Some(Self::team(home_team, division_id)),
            away_team: Some(Self::team(away_team, division_id)),
            home_score: Some(home_score),
            away_score: Some(away_score),
            match_status: MatchStatus::Completed,
            match_type: DEFAULT_MATCH_TYPE.to_string(),
            season_id: None,
            age_group_id: None,
            division_id: Some(division_id),
            match_date: NaiveDate::from_ymd_opt(2024, 9, 14),
        }
    }

    /// Creates a league fixture that has not been played yet
    pub fn scheduled_match(home_team: &str, away_team: &str, division_id: i64) -> MatchRecord {
        MatchRecord {
            home_score: None,
            away_score: None,
            match_status: MatchStatus::Scheduled,
            ..Self::completed_match(home_team, away_team, 0, 0, division_id)
        }
    }

    /// Creates a completed friendly between two teams of the same division
    pub fn friendly_match(
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
        division_id: i64,
    ) -> MatchRecord {
        MatchRecord {
            match_type: "Friendly".to_string(),
            ..Self::completed_match(home_team, away_team, home_score, away_score, division_id)
        }
    }

    /// Creates a completed 1-0 league match whose teams sit in different
    /// divisions, tagged with `match_division_id`
    pub fn cross_division_match(
        home_team: &str,
        home_division_id: i64,
        away_team: &str,
        away_division_id: i64,
        match_division_id: i64,
    ) -> MatchRecord {
        MatchRecord {
            home_team: Some(Self::team(home_team, home_division_id)),
            away_team: Some(Self::team(away_team, away_division_id)),
            ..Self::completed_match(home_team, away_team, 1, 0, match_division_id)
        }
    }

    /// Creates a single round robin in one division. Home side wins when its
    /// index is lower, every third pairing is drawn.
    pub fn round_robin(teams: &[&str], division_id: i64) -> Vec<MatchRecord> {
        let mut matches = Vec::new();
        for (i, home) in teams.iter().enumerate() {
            for (j, away) in teams.iter().enumerate().skip(i + 1) {
                let (home_score, away_score) = if (i + j) % 3 == 0 { (1, 1) } else { (2, 0) };
                let mut record =
                    Self::completed_match(home, away, home_score, away_score, division_id);
                record.id = Some((matches.len() + 1) as i64);
                matches.push(record);
            }
        }
        matches
    }
}
