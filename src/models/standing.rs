use serde::{Deserialize, Serialize};

/// Running totals for one team within a single table computation.
///
/// `goal_difference` and `points` are derived and kept in step with the
/// counters by the aggregator; nothing outside this crate mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub team_id: i64,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>, team_id: i64) -> Self {
        Self {
            team: team.into(),
            team_id,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Sort key used by the ranker, highest first.
    pub fn ranking_key(&self) -> (u32, i64, u32) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub position: usize,
    #[serde(flatten)]
    pub standing: TeamStanding,
}

/// Ranked league table. Serializes as a plain JSON array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueTable {
    rows: Vec<TableRow>,
}

impl LeagueTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn leader(&self) -> Option<&TeamStanding> {
        self.rows.first().map(|row| &row.standing)
    }

    pub fn position_of(&self, team: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.standing.team == team)
            .map(|row| row.position)
    }

    pub fn get(&self, team: &str) -> Option<&TeamStanding> {
        self.rows
            .iter()
            .find(|row| row.standing.team == team)
            .map(|row| &row.standing)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }
}

impl IntoIterator for LeagueTable {
    type Item = TableRow;
    type IntoIter = std::vec::IntoIter<TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
