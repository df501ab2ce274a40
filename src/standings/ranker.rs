use super::aggregator::Standings;
use crate::models::{LeagueTable, TableRow, TeamStanding};
use std::cmp::Ordering;

/// Orders two standings best-first by points, then goal difference, then
/// goals scored.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.ranking_key().cmp(&a.ranking_key())
}

/// Sorts the aggregated standings into a positioned table.
///
/// Teams level on all three keys keep their order of first appearance and
/// still get distinct, sequential positions.
pub fn rank(standings: Standings) -> LeagueTable {
    let mut entries = standings.into_vec();
    // sort_by is stable
    entries.sort_by(compare_standings);

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(index, standing)| TableRow {
            position: index + 1,
            standing,
        })
        .collect();

    LeagueTable::new(rows)
}
