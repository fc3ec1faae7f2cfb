use clap::{Parser, ValueEnum};
use flowjobs::prelude::*;
use log::{LevelFilter, info};
use std::fs;

/// Output format for the job plan.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Log verbosity, mapped onto `log::LevelFilter`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Turns a flow diagram into an ordered list of transfer jobs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow diagram JSON file
    #[arg(default_value = "ReactFlowObject.json")]
    diagram_path: String,

    /// How to print the resulting plan
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also list the buckets (diagram nodes)
    #[arg(short, long)]
    buckets: bool,

    /// Also summarize jobs per source bucket
    #[arg(short, long)]
    groups: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .init();

    info!("Loading diagram from: {}", cli.diagram_path);
    let diagram_json = fs::read_to_string(&cli.diagram_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read diagram file '{}': {}",
            cli.diagram_path, e
        ))
    });

    // The parser already logged why the document was rejected.
    let Some(plan) = DiagramParser::new().parse_and_create_jobs(&diagram_json) else {
        std::process::exit(1);
    };
    info!(
        "Parsed {} bucket(s) and {} job(s)",
        plan.buckets.len(),
        plan.jobs.len()
    );

    match cli.format {
        OutputFormat::Text => {
            println!();
            println!("{}", JobReport::format_plan(&plan, cli.buckets, cli.groups));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode plan: {}", e)));
            println!("{}", json);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
