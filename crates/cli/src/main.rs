// basinreport CLI - per-subbasin asset summary reports from GIS extracts

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use basinreport_engine::model::KindStatus;
use basinreport_engine::{Catalog, ReportConfig, SummaryError};

use exit_codes::{
    EXIT_REPORT_INVALID_CONFIG, EXIT_REPORT_PARTIAL, EXIT_REPORT_RUNTIME, EXIT_SUCCESS, EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "basinreport")]
#[command(about = "Per-subbasin sewer asset summary reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all four asset pipelines and write one report per asset type
    #[command(after_help = "\
Examples:
  basinreport run report.toml
  basinreport run report.toml --json
  basinreport run --input-dir export --output-dir output")]
    Run {
        /// Path to a TOML config file (alternative to the directory flags)
        config: Option<PathBuf>,

        /// Directory holding the four asset extracts
        #[arg(long, conflicts_with = "config")]
        input_dir: Option<PathBuf>,

        /// Directory to write reports into (created if missing)
        #[arg(long, conflicts_with = "config")]
        output_dir: Option<PathBuf>,

        /// Print the machine-readable run report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Validate a config file without running
    #[command(after_help = "\
Examples:
  basinreport validate report.toml")]
    Validate {
        /// Path to the TOML config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            input_dir,
            output_dir,
            json,
        } => cmd_run(config, input_dir, output_dir, json),
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_REPORT_RUNTIME, message: msg.into(), hint: None }
    }

    fn config(err: SummaryError) -> Self {
        Self {
            code: EXIT_REPORT_INVALID_CONFIG,
            message: err.to_string(),
            hint: None,
        }
    }
}

fn load_config(
    config_path: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<ReportConfig, CliError> {
    match (config_path, input_dir, output_dir) {
        (Some(path), _, _) => {
            let config_str = std::fs::read_to_string(&path)
                .map_err(|e| CliError::runtime(format!("cannot read {}: {e}", path.display())))?;
            ReportConfig::from_toml(&config_str).map_err(CliError::config)
        }
        (None, Some(input), Some(output)) => {
            ReportConfig::new(input, output).map_err(CliError::config)
        }
        (None, _, _) => Err(CliError::usage(
            "either a config file or both --input-dir and --output-dir are required",
        )),
    }
}

fn cmd_run(
    config_path: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path, input_dir, output_dir)?;
    let catalog = Catalog::fixed();

    let report = basinreport_engine::run(&config, &catalog)
        .map_err(|e| CliError::runtime(e.to_string()))?;

    // Human summary to stderr
    for outcome in &report.kinds {
        match &outcome.status {
            KindStatus::Ok(summary) => {
                eprintln!(
                    "  {}: {} row(s), {} kept, {} subbasin(s), wrote {}",
                    outcome.kind,
                    summary.rows_read,
                    summary.rows_kept,
                    summary.groups,
                    summary.output_file,
                );
                if !summary.dropped_keys.is_empty() {
                    eprintln!(
                        "warning: {}: dropped {} subbasin id(s) not in catalog: {}",
                        outcome.kind,
                        summary.dropped_keys.len(),
                        summary.dropped_keys.join(", "),
                    );
                }
            }
            KindStatus::Error { message } => {
                eprintln!("  {}: error — {message}", outcome.kind);
            }
        }
    }

    if json {
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    if report.all_ok() {
        Ok(())
    } else {
        Err(CliError {
            code: EXIT_REPORT_PARTIAL,
            message: "one or more asset kinds failed".into(),
            hint: None,
        })
    }
}

fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::runtime(format!("cannot read {}: {e}", config_path.display())))?;

    let config = ReportConfig::from_toml(&config_str).map_err(CliError::config)?;
    eprintln!(
        "valid: reports from {} to {}",
        config.input_dir.display(),
        config.output_dir.display(),
    );
    Ok(())
}
