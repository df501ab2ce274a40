use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One side of a fixture as exported by the persistence layer.
///
/// `division_id` is the team's own assignment, which can disagree with the
/// division tag on the match itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub division_id: Option<i64>,
}

impl TeamRef {
    pub fn new(id: i64, name: impl Into<String>, division_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            division_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Tbd,
    Live,
    Completed,
    Cancelled,
    Postponed,
    /// Any status string the exporter sends that we do not recognise.
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Tbd => "tbd",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
            MatchStatus::Postponed => "postponed",
            MatchStatus::Unknown => "unknown",
        }
    }
}

/// A single fixture. Scores are `None` until the match has been played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub home_team: Option<TeamRef>,
    #[serde(default)]
    pub away_team: Option<TeamRef>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub match_status: MatchStatus,
    pub match_type: String,
    #[serde(default)]
    pub season_id: Option<i64>,
    #[serde(default)]
    pub age_group_id: Option<i64>,
    #[serde(default)]
    pub division_id: Option<i64>,
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
}

/// Both participants and the final score of a match, borrowed from a record
/// that has all of them.
#[derive(Debug, Clone, Copy)]
pub struct FinalScore<'a> {
    pub home: &'a TeamRef,
    pub away: &'a TeamRef,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    /// Returns both teams and both scores, or `None` if any of them is missing.
    pub fn final_score(&self) -> Option<FinalScore<'_>> {
        Some(FinalScore {
            home: self.home_team.as_ref()?,
            away: self.away_team.as_ref()?,
            home_goals: self.home_score?,
            away_goals: self.away_score?,
        })
    }

    pub fn home_division(&self) -> Option<i64> {
        self.home_team.as_ref().and_then(|t| t.division_id)
    }

    pub fn away_division(&self) -> Option<i64> {
        self.away_team.as_ref().and_then(|t| t.division_id)
    }

    /// Short label for log lines, e.g. `Rovers vs United`.
    pub fn describe(&self) -> String {
        let name = |team: &Option<TeamRef>| {
            team.as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        };
        format!("{} vs {}", name(&self.home_team), name(&self.away_team))
    }
}
