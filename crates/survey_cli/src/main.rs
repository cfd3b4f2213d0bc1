//! Survey command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from `SURVEY_*` variables and flags.
//! - Dispatch submit/report/seed requests and print user-facing messages.

mod api;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use survey_core::{init_logging, RawSubmission, SurveyConfig, TagMatchMode};

/// Collects survey responses and reports aggregate statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides SURVEY_DB_PATH)
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides SURVEY_LOG_LEVEL)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides SURVEY_LOG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Food tag matching: substring|exact (overrides SURVEY_TAG_MATCH)
    #[arg(long, global = true, value_name = "MODE")]
    tag_match: Option<TagMatchMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store one survey response
    Submit {
        /// Form field as key=value; repeat `food=` for several choices
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Whole payload as a JSON object
        #[arg(long, conflicts_with = "fields")]
        json: Option<String>,
    },
    /// Print the aggregate report
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store the canned sample response
    Seed,
    /// Print core health and version
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("Warning: file logging disabled: {err}");
        }
    }

    match cli.command {
        Command::Submit { fields, json } => {
            let response = match json {
                Some(payload) => api::submit_json(&config, &payload),
                None => api::submit(&config, &RawSubmission::from_pairs(fields)),
            };
            finish(response.ok, &response.message)
        }
        Command::Report { json } => {
            let response = api::report(&config);
            match (&response.report, json) {
                (Some(report), true) => match serde_json::to_string_pretty(report) {
                    Ok(text) => finish(true, &text),
                    Err(err) => finish(false, &format!("Report unavailable: {err}")),
                },
                _ => finish(response.ok, &response.message),
            }
        }
        Command::Seed => {
            let response = api::seed(&config);
            finish(response.ok, &response.message)
        }
        Command::Ping => {
            println!("survey_core ping={}", survey_core::ping());
            println!("survey_core version={}", survey_core::core_version());
            ExitCode::SUCCESS
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<SurveyConfig, String> {
    let mut config = SurveyConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(mode) = cli.tag_match {
        config.tag_match = mode;
    }
    Ok(config)
}

fn finish(ok: bool, message: &str) -> ExitCode {
    if ok {
        println!("{message}");
        ExitCode::SUCCESS
    } else {
        eprintln!("{message}");
        ExitCode::FAILURE
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
