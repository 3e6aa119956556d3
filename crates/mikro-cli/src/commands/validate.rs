//! Validate command - check a single micro-account number.

use std::io::BufRead;
use std::process::ExitCode;

use clap::Args;
use console::style;
use tracing::{debug, info};

use mikro_core::models::config::ReportFormat;
use mikro_core::{MicroAccountValidator, TraceLog, TracingTrace, ValidationReport};

use super::load_config;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Account number; groups may be passed as separate arguments (reads stdin if omitted)
    account: Vec<String>,

    /// Output format (default from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Include the diagnostic trace in the output
    #[arg(long)]
    trace: bool,

    /// Print the account number without spaces
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Text => OutputFormat::Text,
        }
    }
}

pub fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<ExitCode> {
    let config = load_config(config_path)?;

    let raw = if args.account.is_empty() {
        read_stdin_line()?
    } else {
        args.account.join(" ")
    };

    let validator = MicroAccountValidator::new();
    let collect_trace = args.trace || config.validation.collect_trace;

    let (result, trace) = if collect_trace {
        let mut log = TraceLog::new();
        let result = validator.validate_with_trace(&raw, &mut log);
        (result, log.into_lines())
    } else {
        (validator.validate_with_trace(&raw, &mut TracingTrace), Vec::new())
    };

    let mut report = ValidationReport::from_result(&result).with_trace(trace);
    if args.compact || !config.output.group_digits {
        report = report.compact();
    }

    match &result {
        Ok(account) => info!("Accepted micro-account for {}", account.identifier()),
        Err(rejection) => info!("Rejected micro-account: {}", rejection.code()),
    }

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => {
            console::set_colors_enabled(config.output.color && console::colors_enabled());
            format_text(&report)
        }
    };

    println!("{}", output);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_stdin_line() -> anyhow::Result<String> {
    debug!("Reading account number from stdin");

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn format_text(report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    if report.valid {
        lines.push(format!("{} {}", style("✓").green(), report.message));
        if let Some(kind) = report.identifier_type {
            lines.push(format!("  Typ identyfikatora: {}", kind));
        }
        if let Some(number) = &report.identifier_number {
            lines.push(format!("  Numer: {}", number));
        }
        if let Some(account) = &report.account {
            lines.push(format!("  Rachunek: {}", account));
        }
    } else {
        lines.push(format!("{} {}", style("✗").red(), report.message));
    }

    if !report.trace.is_empty() {
        lines.push(String::new());
        lines.push(style("Log:").dim().to_string());
        for line in &report.trace {
            lines.push(format!("  {}", line));
        }
    }

    lines.join("\n")
}
