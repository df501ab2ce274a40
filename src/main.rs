// src/main.rs
use clap::Parser;
use league_standings::cli::{Args, is_config_operation};
use league_standings::config::Config;
use league_standings::error::AppError;
use league_standings::loader::load_matches;
use league_standings::logging::setup_logging;
use league_standings::models::{LeagueTable, MatchRecord};
use league_standings::render::{OutputFormat, render_json, render_text};
use league_standings::standings::{
    StandingsCriteria, compute_division_tables, compute_standings_with, latest_result_date,
    matches_age_group, matches_season,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        return handle_config_operation(&args).await;
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let input = args
        .input
        .as_deref()
        .ok_or_else(|| AppError::invalid_arguments("--input is required"))?;

    if args.division.is_none() && !args.all_divisions {
        return Err(AppError::invalid_arguments(
            "Either --division or --all-divisions is required",
        ));
    }

    let matches = load_matches(input).await?;
    let match_type = args
        .match_type
        .clone()
        .unwrap_or_else(|| config.default_match_type.clone());
    let format = args.format.unwrap_or(config.output_format);

    let output = match args.division {
        Some(division_id) => {
            let mut criteria = StandingsCriteria::new(division_id).with_match_type(&match_type);
            criteria.season_id = args.season;
            criteria.age_group_id = args.age_group;
            single_division_output(&matches, &criteria, format)?
        }
        None => all_divisions_output(&matches, &args, &match_type, format)?,
    };

    print!("{output}");
    Ok(())
}

fn table_title(criteria: &StandingsCriteria) -> String {
    let mut title = format!(
        "DIVISION {} - {}",
        criteria.division_id,
        criteria.match_type.to_uppercase()
    );
    if let Some(season) = criteria.season_id {
        title.push_str(&format!(" - SEASON {season}"));
    }
    title
}

fn single_division_output(
    matches: &[MatchRecord],
    criteria: &StandingsCriteria,
    format: OutputFormat,
) -> Result<String, AppError> {
    let table = compute_standings_with(matches, criteria);
    tracing::info!(
        "Division {} table has {} teams",
        criteria.division_id,
        table.len()
    );

    match format {
        OutputFormat::Text => Ok(render_text(
            &table,
            &table_title(criteria),
            latest_result_date(matches, criteria),
        )),
        OutputFormat::Json => Ok(format!("{}\n", render_json(&table)?)),
    }
}

fn all_divisions_output(
    matches: &[MatchRecord],
    args: &Args,
    match_type: &str,
    format: OutputFormat,
) -> Result<String, AppError> {
    let scoped: Vec<MatchRecord> = matches
        .iter()
        .filter(|m| matches_season(m, args.season) && matches_age_group(m, args.age_group))
        .cloned()
        .collect();
    let tables = compute_division_tables(&scoped, match_type);
    tracing::info!("Computed tables for {} divisions", tables.len());

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&tables)?)),
        OutputFormat::Text => {
            if tables.is_empty() {
                return Ok("No completed matches yet\n".to_string());
            }
            let sections: Vec<String> = tables
                .iter()
                .map(|(division_id, table): (&i64, &LeagueTable)| {
                    let mut criteria =
                        StandingsCriteria::new(*division_id).with_match_type(match_type);
                    criteria.season_id = args.season;
                    render_text(
                        table,
                        &table_title(&criteria),
                        latest_result_date(&scoped, &criteria),
                    )
                })
                .collect();
            Ok(sections.join("\n"))
        }
    }
}

async fn handle_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return Config::display().await;
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(match_type) = &args.set_match_type {
        config.default_match_type = match_type.clone();
    }

    if let Some(format) = args.set_output_format {
        config.output_format = format;
    }

    if let Some(log_path) = &args.set_log_file {
        config.log_file_path = Some(log_path.clone());
    } else if args.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
