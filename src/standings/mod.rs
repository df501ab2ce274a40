//! Standings engine: filter → aggregate → rank.
//!
//! Everything here is a pure function of the match slice it is given. Callers
//! fetch the matches, call [`compute_standings`], and serialize the result;
//! tables are never cached or updated incrementally.
//!
//! ```rust
//! use league_standings::models::{MatchRecord, MatchStatus, TeamRef};
//! use league_standings::standings::compute_standings;
//!
//! let record = MatchRecord {
//!     id: Some(1),
//!     home_team: Some(TeamRef::new(1, "Rovers", Some(3))),
//!     away_team: Some(TeamRef::new(2, "United", Some(3))),
//!     home_score: Some(2),
//!     away_score: Some(1),
//!     match_status: MatchStatus::Completed,
//!     match_type: "League".to_string(),
//!     season_id: None,
//!     age_group_id: None,
//!     division_id: Some(3),
//!     match_date: None,
//! };
//!
//! let table = compute_standings(&[record], 3, "League");
//! assert_eq!(table.leader().map(|s| s.team.as_str()), Some("Rovers"));
//! ```

pub mod aggregator;
pub mod filter;
pub mod ranker;

pub use aggregator::{Outcome, Standings, aggregate};
pub use filter::{
    StandingsCriteria, filter_matches, is_completed, is_same_division, matches_age_group,
    matches_season, matches_type,
};
pub use ranker::{compare_standings, rank};

use crate::models::{LeagueTable, MatchRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Ranked table for one division and match type.
pub fn compute_standings(
    matches: &[MatchRecord],
    division_id: i64,
    match_type: &str,
) -> LeagueTable {
    compute_standings_with(
        matches,
        &StandingsCriteria::new(division_id).with_match_type(match_type),
    )
}

/// Ranked table for arbitrary criteria, including season and age-group scope.
pub fn compute_standings_with(matches: &[MatchRecord], criteria: &StandingsCriteria) -> LeagueTable {
    let selected = filter_matches(matches, criteria);
    rank(aggregate(selected))
}

/// Date of the most recent match that counts toward the table, if any
/// counted match carries a date.
pub fn latest_result_date(
    matches: &[MatchRecord],
    criteria: &StandingsCriteria,
) -> Option<NaiveDate> {
    matches
        .iter()
        .filter(|m| criteria.accepts(m))
        .filter_map(|m| m.match_date)
        .max()
}

/// One table per division that has at least one counted match.
///
/// A division appears only if some completed match of `match_type` has both
/// teams assigned to it.
pub fn compute_division_tables(
    matches: &[MatchRecord],
    match_type: &str,
) -> BTreeMap<i64, LeagueTable> {
    let divisions: BTreeSet<i64> = matches
        .iter()
        .filter(|m| is_completed(m) && matches_type(m, match_type))
        .filter_map(|m| match (m.home_division(), m.away_division()) {
            (Some(home), Some(away)) if home == away => Some(home),
            _ => None,
        })
        .collect();

    tracing::debug!(
        "Computing {} division tables for match type {}",
        divisions.len(),
        match_type
    );

    divisions
        .into_iter()
        .map(|division_id| {
            (
                division_id,
                compute_standings(matches, division_id, match_type),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MATCH_TYPE;
    use crate::models::MatchStatus;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_single_home_win() {
        let matches = vec![TestDataBuilder::completed_match("Home", "Away", 2, 1, 1)];
        let table = compute_standings(&matches, 1, DEFAULT_MATCH_TYPE);

        assert_eq!(table.len(), 2);
        let first = &table.rows()[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.standing.team, "Home");
        assert_eq!(
            (
                first.standing.played,
                first.standing.wins,
                first.standing.draws,
                first.standing.losses
            ),
            (1, 1, 0, 0)
        );
        assert_eq!(
            (
                first.standing.goals_for,
                first.standing.goals_against,
                first.standing.goal_difference,
                first.standing.points
            ),
            (2, 1, 1, 3)
        );

        let second = &table.rows()[1];
        assert_eq!(second.position, 2);
        assert_eq!(second.standing.team, "Away");
        assert_eq!(
            (
                second.standing.played,
                second.standing.wins,
                second.standing.draws,
                second.standing.losses
            ),
            (1, 0, 0, 1)
        );
        assert_eq!(
            (
                second.standing.goals_for,
                second.standing.goals_against,
                second.standing.goal_difference,
                second.standing.points
            ),
            (1, 2, -1, 0)
        );
    }

    #[test]
    fn test_scheduled_match_gives_empty_table() {
        let mut record = TestDataBuilder::completed_match("Home", "Away", 2, 1, 1);
        record.match_status = MatchStatus::Scheduled;

        let table = compute_standings(&[record], 1, DEFAULT_MATCH_TYPE);
        assert!(table.is_empty());
    }

    #[test]
    fn test_draw_falls_through_every_tie_break() {
        let matches = vec![TestDataBuilder::completed_match("A", "B", 1, 1, 1)];
        let table = compute_standings(&matches, 1, DEFAULT_MATCH_TYPE);

        for row in table.iter() {
            assert_eq!(row.standing.played, 1);
            assert_eq!(row.standing.draws, 1);
            assert_eq!(row.standing.points, 1);
            assert_eq!(row.standing.goal_difference, 0);
            assert_eq!(row.standing.goals_for, 1);
        }
        assert_eq!(table.position_of("A"), Some(1));
        assert_eq!(table.position_of("B"), Some(2));
        assert_eq!(table, compute_standings(&matches, 1, DEFAULT_MATCH_TYPE));
    }

    #[test]
    fn test_mis_tagged_cross_division_match_is_excluded_everywhere() {
        let matches = vec![TestDataBuilder::cross_division_match("Home", 1, "Away", 7, 7)];

        assert!(compute_standings(&matches, 1, DEFAULT_MATCH_TYPE).is_empty());
        assert!(compute_standings(&matches, 7, DEFAULT_MATCH_TYPE).is_empty());
        assert!(compute_division_tables(&matches, DEFAULT_MATCH_TYPE).is_empty());
    }

    #[test]
    fn test_round_robin_leader_and_goal_difference_tie_break() {
        // Leader beats both; Second and Third draw each other, Second lost by less.
        let matches = vec![
            TestDataBuilder::completed_match("Leader", "Second", 1, 0, 1),
            TestDataBuilder::completed_match("Third", "Leader", 0, 3, 1),
            TestDataBuilder::completed_match("Second", "Third", 2, 2, 1),
        ];
        let table = compute_standings(&matches, 1, DEFAULT_MATCH_TYPE);

        assert_eq!(table.position_of("Leader"), Some(1));
        assert_eq!(table.position_of("Second"), Some(2));
        assert_eq!(table.position_of("Third"), Some(3));

        let second = table.get("Second").unwrap();
        let third = table.get("Third").unwrap();
        assert_eq!(second.points, third.points);
        assert!(second.goal_difference > third.goal_difference);
        assert_eq!(table.leader().unwrap().points, 6);
    }

    #[test]
    fn test_friendlies_do_not_count_toward_league() {
        let matches = vec![
            TestDataBuilder::completed_match("A", "B", 1, 0, 1),
            TestDataBuilder::friendly_match("B", "A", 5, 0, 1),
        ];

        let league = compute_standings(&matches, 1, DEFAULT_MATCH_TYPE);
        assert_eq!(league.leader().unwrap().team, "A");
        assert_eq!(league.get("B").unwrap().played, 1);

        let friendly = compute_standings(&matches, 1, "Friendly");
        assert_eq!(friendly.leader().unwrap().team, "B");
        assert_eq!(friendly.get("A").unwrap().played, 1);
    }

    #[test]
    fn test_season_scope() {
        let mut old = TestDataBuilder::completed_match("A", "B", 1, 0, 1);
        old.season_id = Some(2023);
        let mut current = TestDataBuilder::completed_match("B", "A", 2, 0, 1);
        current.season_id = Some(2024);

        let criteria = StandingsCriteria::new(1).with_season(2024);
        let table = compute_standings_with(&[old, current], &criteria);

        assert_eq!(table.leader().unwrap().team, "B");
        assert_eq!(table.get("A").unwrap().played, 1);
    }

    #[test]
    fn test_latest_result_date_ignores_uncounted_matches() {
        let mut early = TestDataBuilder::completed_match("A", "B", 1, 0, 1);
        early.match_date = NaiveDate::from_ymd_opt(2024, 9, 1);
        let mut late = TestDataBuilder::completed_match("B", "A", 1, 0, 1);
        late.match_date = NaiveDate::from_ymd_opt(2024, 9, 8);
        let mut friendly = TestDataBuilder::friendly_match("A", "B", 0, 0, 1);
        friendly.match_date = NaiveDate::from_ymd_opt(2024, 9, 20);
        let mut upcoming = TestDataBuilder::scheduled_match("A", "B", 1);
        upcoming.match_date = NaiveDate::from_ymd_opt(2024, 10, 1);

        let matches = vec![late, early, friendly, upcoming];
        assert_eq!(
            latest_result_date(&matches, &StandingsCriteria::new(1)),
            NaiveDate::from_ymd_opt(2024, 9, 8)
        );
        assert_eq!(latest_result_date(&matches, &StandingsCriteria::new(2)), None);
    }

    #[test]
    fn test_division_tables_cover_each_division() {
        let matches = vec![
            TestDataBuilder::completed_match("A", "B", 1, 0, 1),
            TestDataBuilder::completed_match("C", "D", 0, 2, 2),
            TestDataBuilder::cross_division_match("A", 1, "C", 2, 1),
            TestDataBuilder::scheduled_match("E", "F", 3),
        ];

        let tables = compute_division_tables(&matches, DEFAULT_MATCH_TYPE);

        assert_eq!(tables.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tables[&1].leader().unwrap().team, "A");
        assert_eq!(tables[&2].leader().unwrap().team, "D");
        assert_eq!(tables[&1].get("A").unwrap().played, 1);
    }
}
