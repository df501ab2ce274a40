//! Reads match snapshots exported by the persistence layer.
//!
//! The snapshot is a JSON array of [`MatchRecord`] objects. A top-level object
//! with a `matches` array is accepted too, since that is how the API wraps
//! list responses.

use crate::error::AppError;
use crate::models::MatchRecord;
use serde_json::Value;
use tokio::fs;
use tracing::{info, warn};

/// Parses a snapshot from a JSON string. `source` names the input in errors.
///
/// Rows that do not deserialize into a [`MatchRecord`] are logged and
/// skipped; the rest of the snapshot is still returned.
pub fn parse_matches(content: &str, source: &str) -> Result<Vec<MatchRecord>, AppError> {
    let value: Value = serde_json::from_str(content)?;

    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut object) => match object.remove("matches") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(AppError::match_data_error(
                    source,
                    "expected a JSON array of matches or an object with a 'matches' array",
                ));
            }
        },
        _ => {
            return Err(AppError::match_data_error(
                source,
                "expected a JSON array of matches or an object with a 'matches' array",
            ));
        }
    };

    let total = rows.len();
    let matches: Vec<MatchRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<MatchRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed match record #{index} in {source}: {e}");
                None
            }
        })
        .collect();

    if matches.len() < total {
        warn!(
            "{} of {total} match records in {source} could not be read",
            total - matches.len()
        );
    }

    let missing_teams = matches
        .iter()
        .filter(|m| m.home_team.is_none() || m.away_team.is_none())
        .count();
    if missing_teams > 0 {
        warn!("{missing_teams} match records in {source} are missing a team and will not count");
    }

    Ok(matches)
}

/// Loads a snapshot file from disk.
pub async fn load_matches(path: &str) -> Result<Vec<MatchRecord>, AppError> {
    let content = fs::read_to_string(path).await?;
    let matches = parse_matches(&content, path)?;
    info!("Loaded {} match records from {path}", matches.len());
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchStatus;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"[
        {
            "id": 1,
            "home_team": {"id": 10, "name": "Rovers", "division_id": 2},
            "away_team": {"id": 11, "name": "United", "division_id": 2},
            "home_score": 1,
            "away_score": 0,
            "match_status": "completed",
            "match_type": "League"
        },
        {
            "id": 2,
            "home_team": {"id": 11, "name": "United", "division_id": 2},
            "away_team": {"id": 10, "name": "Rovers", "division_id": 2},
            "home_score": null,
            "away_score": null,
            "match_status": "scheduled",
            "match_type": "League"
        }
    ]"#;

    #[test]
    fn test_parse_array_snapshot() {
        let matches = parse_matches(SNAPSHOT, "inline").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_status, MatchStatus::Completed);
        assert_eq!(matches[1].home_score, None);
    }

    #[test]
    fn test_parse_wrapped_snapshot() {
        let wrapped = format!(r#"{{"matches": {SNAPSHOT}}}"#);
        let matches = parse_matches(&wrapped, "inline").unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_matches("[]", "inline").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_match_data_error() {
        let err = parse_matches(r#"{"teams": []}"#, "export.json").unwrap_err();
        assert!(matches!(err, AppError::MatchData { .. }));
        assert!(err.to_string().contains("export.json"));
    }

    #[test]
    fn test_wrapped_non_array_is_match_data_error() {
        let err = parse_matches(r#"{"matches": {"id": 1}}"#, "inline").unwrap_err();
        assert!(matches!(err, AppError::MatchData { .. }));
    }

    #[test]
    fn test_record_missing_match_type_is_skipped() {
        let matches = parse_matches(r#"[{"match_status": "completed"}]"#, "inline").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_malformed_rows_do_not_drop_valid_ones() {
        let content = r#"[
            {"home_team": {"id": 1, "name": "A", "division_id": 1},
             "away_team": {"id": 2, "name": "B", "division_id": 1},
             "home_score": 2, "away_score": 0,
             "match_status": "completed", "match_type": "League"},
            {"home_team": {"name": "C", "division_id": 1},
             "away_team": {"id": 4, "name": "D", "division_id": 1},
             "match_status": "scheduled", "match_type": "League"},
            {"home_team": {"id": 1, "name": "A", "division_id": 1},
             "away_team": {"id": 2, "name": "B", "division_id": 1},
             "home_score": 0, "away_score": 1, "match_status": "completed"}
        ]"#;

        let matches = parse_matches(content, "inline").unwrap();
        assert_eq!(matches.len(), 1);

        let table = crate::standings::compute_standings(&matches, 1, "League");
        assert_eq!(table.len(), 2);
        assert_eq!(table.leader().unwrap().team, "A");
        assert_eq!(table.get("A").unwrap().points, 3);
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = parse_matches("[{", "inline").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn test_load_matches_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("matches.json");
        tokio::fs::write(&path, SNAPSHOT).await.unwrap();

        let matches = load_matches(&path.to_string_lossy()).await.unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn test_load_matches_missing_file() {
        let err = load_matches("/nonexistent/matches.json").await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
