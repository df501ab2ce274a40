//! Table output for the command line.
//!
//! Text output is a fixed-width table; JSON output is the same array the API
//! layer sends to clients.

use crate::constants::render::{POSITION_WIDTH, STAT_WIDTH, TEAM_NAME_WIDTH};
use crate::error::AppError;
use crate::models::LeagueTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config_error(format!(
                "Unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

/// Formats goal difference with an explicit sign for positive values
pub fn format_goal_difference(goal_difference: i64) -> String {
    if goal_difference > 0 {
        format!("+{goal_difference}")
    } else {
        goal_difference.to_string()
    }
}

fn fit_team_name(name: &str) -> String {
    if name.chars().count() <= TEAM_NAME_WIDTH {
        name.to_string()
    } else {
        name.chars().take(TEAM_NAME_WIDTH).collect()
    }
}

/// Renders the table as fixed-width text.
///
/// # Arguments
/// * `table` - Ranked table to print
/// * `title` - Heading line, e.g. "DIVISION 3 - LEAGUE"
/// * `last_result` - Date of the most recent counted match, if known
pub fn render_text(table: &LeagueTable, title: &str, last_result: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    if table.is_empty() {
        out.push_str("No completed matches yet\n");
        return out;
    }

    out.push_str(&format!(
        "{:>pw$} {:<tw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}\n",
        "Pos",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        pw = POSITION_WIDTH,
        tw = TEAM_NAME_WIDTH,
        sw = STAT_WIDTH,
    ));

    for row in table.iter() {
        let s = &row.standing;
        out.push_str(&format!(
            "{:>pw$} {:<tw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>sw$}\n",
            row.position,
            fit_team_name(&s.team),
            s.played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            format_goal_difference(s.goal_difference),
            s.points,
            pw = POSITION_WIDTH,
            tw = TEAM_NAME_WIDTH,
            sw = STAT_WIDTH,
        ));
    }

    if let Some(date) = last_result {
        out.push_str(&format!("Last result: {}\n", date.format("%Y-%m-%d")));
    }

    out
}

pub fn render_json(table: &LeagueTable) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(table)?)
}
