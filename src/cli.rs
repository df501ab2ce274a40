use crate::render::OutputFormat;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only reads or edits the config file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.set_match_type.is_some()
        || args.set_output_format.is_some()
        || args.set_log_file.is_some()
        || args.clear_log_file
}

/// League standings
///
/// Computes ranked division tables from a match snapshot exported by the
/// league database. Only completed matches between two teams of the requested
/// division count; friendlies and tournaments are left out unless their match
/// type is requested explicitly.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// JSON file with the match records to rank
    #[arg(short, long, value_name = "FILE", required_unless_present_any = ["list_config", "set_match_type", "set_output_format", "set_log_file", "clear_log_file"])]
    pub input: Option<String>,

    /// Division to build the table for
    #[arg(short, long, help_heading = "Table")]
    pub division: Option<i64>,

    /// Build a table for every division found in the input
    #[arg(short = 'a', long, conflicts_with = "division", help_heading = "Table")]
    pub all_divisions: bool,

    /// Match type to count (defaults to the configured type, normally "League")
    #[arg(short = 't', long, help_heading = "Table")]
    pub match_type: Option<String>,

    /// Only count matches from this season
    #[arg(long, help_heading = "Table")]
    pub season: Option<i64>,

    /// Only count matches from this age group
    #[arg(long, help_heading = "Table")]
    pub age_group: Option<i64>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, help_heading = "Display Options")]
    pub format: Option<OutputFormat>,

    /// Set the default match type in config
    #[arg(long, help_heading = "Configuration", value_name = "MATCH_TYPE")]
    pub set_match_type: Option<String>,

    /// Set the default output format in config
    #[arg(long, value_enum, help_heading = "Configuration", value_name = "FORMAT")]
    pub set_output_format: Option<OutputFormat>,

    /// Set a persistent custom log file location
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub set_log_file: Option<String>,

    /// Clear the custom log file path and use the default location
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr
    #[arg(long, help_heading = "Debug")]
    pub debug: bool,

    /// Custom log file path for this run
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
