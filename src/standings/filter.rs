//! Match selection for a single league table.
//!
//! Each predicate looks at one match in isolation, so they can be applied in
//! any order and tested on their own. [`filter_matches`] is their conjunction.

use crate::constants::DEFAULT_MATCH_TYPE;
use crate::models::{MatchRecord, MatchStatus};
use tracing::debug;

/// Which table is being requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsCriteria {
    pub division_id: i64,
    pub match_type: String,
    pub season_id: Option<i64>,
    pub age_group_id: Option<i64>,
}

impl StandingsCriteria {
    pub fn new(division_id: i64) -> Self {
        Self {
            division_id,
            match_type: DEFAULT_MATCH_TYPE.to_string(),
            season_id: None,
            age_group_id: None,
        }
    }

    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = match_type.into();
        self
    }

    pub fn with_season(mut self, season_id: i64) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn with_age_group(mut self, age_group_id: i64) -> Self {
        self.age_group_id = Some(age_group_id);
        self
    }

    /// True when the match passes every filter for this table.
    pub fn accepts(&self, record: &MatchRecord) -> bool {
        is_completed(record)
            && matches_type(record, &self.match_type)
            && is_same_division(record, self.division_id)
            && matches_season(record, self.season_id)
            && matches_age_group(record, self.age_group_id)
    }
}

/// A match counts only once it is marked completed and carries both teams and
/// both scores. Scores on a live or postponed match are ignored.
pub fn is_completed(record: &MatchRecord) -> bool {
    record.match_status == MatchStatus::Completed && record.final_score().is_some()
}

pub fn matches_type(record: &MatchRecord, match_type: &str) -> bool {
    record.match_type == match_type
}

/// Both teams must belong to `division_id`. The match's own division tag is
/// not consulted.
pub fn is_same_division(record: &MatchRecord, division_id: i64) -> bool {
    record.home_division() == Some(division_id) && record.away_division() == Some(division_id)
}

pub fn matches_season(record: &MatchRecord, season_id: Option<i64>) -> bool {
    season_id.is_none_or(|id| record.season_id == Some(id))
}

pub fn matches_age_group(record: &MatchRecord, age_group_id: Option<i64>) -> bool {
    age_group_id.is_none_or(|id| record.age_group_id == Some(id))
}

/// Returns the matches that count toward the requested table, in input order.
pub fn filter_matches<'a>(
    matches: &'a [MatchRecord],
    criteria: &StandingsCriteria,
) -> Vec<&'a MatchRecord> {
    let selected: Vec<&MatchRecord> = matches.iter().filter(|m| criteria.accepts(m)).collect();

    debug!(
        "Selected {} of {} matches for division {} ({})",
        selected.len(),
        matches.len(),
        criteria.division_id,
        criteria.match_type
    );

    selected
}
