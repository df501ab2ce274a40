//! Folds filtered matches into per-team totals.

use crate::constants::points;
use crate::models::{MatchRecord, TeamRef, TeamStanding};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Result of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Outcome for the side that scored `own` against `opponent`.
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => points::WIN,
            Outcome::Draw => points::DRAW,
            Outcome::Loss => points::LOSS,
        }
    }
}

impl TeamStanding {
    fn record(&mut self, scored: u32, conceded: u32) {
        let outcome = Outcome::from_scores(scored, conceded);
        self.played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = self.points.saturating_add(outcome.points());
    }
}

/// Team name to standing, iterated in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    entries: Vec<TeamStanding>,
    index: HashMap<String, usize>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, team: &TeamRef) -> &mut TeamStanding {
        let slot = match self.index.get(&team.name) {
            Some(&slot) => slot,
            None => {
                self.entries.push(TeamStanding::new(team.name.clone(), team.id));
                self.index.insert(team.name.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot]
    }

    pub fn get(&self, team: &str) -> Option<&TeamStanding> {
        self.index.get(team).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamStanding> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<TeamStanding> {
        self.entries
    }
}

/// Builds per-team totals from matches that already passed the filter.
///
/// No deduplication happens here. A record without both teams and both
/// scores is skipped.
pub fn aggregate<'a, I>(matches: I) -> Standings
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut standings = Standings::new();
    let mut counted = 0usize;

    for record in matches {
        let Some(score) = record.final_score() else {
            warn!(
                "Skipping match {:?} ({}) without both teams and scores",
                record.id,
                record.describe()
            );
            continue;
        };

        standings
            .entry(score.home)
            .record(score.home_goals, score.away_goals);
        standings
            .entry(score.away)
            .record(score.away_goals, score.home_goals);
        counted += 1;
    }

    debug!(
        "Aggregated {} matches into {} team standings",
        counted,
        standings.len()
    );

    standings
}
