/// Version injected at compile time via NBAUDIT_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("NBAUDIT_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nbaudit::aws::AwsConnector;
use nbaudit::config::Config;
use nbaudit::report::Reporter;
use nbaudit::resource::{enumerate_notebook_instances, enumerate_studio_apps, studio_region};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Inventory SageMaker notebook instances and Studio apps
#[derive(Parser, Debug)]
#[command(name = "nbaudit", version = VERSION, about, long_about = None)]
struct Args {
    /// AWS region to scan first
    #[arg(short, long)]
    region: Option<String>,

    /// Override the SageMaker endpoint URL
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print all records as JSON after the report
    #[arg(long)]
    json: bool,

    /// Remember the scanned region in the config file
    #[arg(long)]
    save_region: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(
    level: LogLevel,
    log_file: Option<&Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let Some(log_path) = log_file else {
        tracing_subscriber::fmt()
            .with_max_level(tracing_level)
            .with_writer(std::io::stderr.with_max_level(tracing_level))
            .with_target(false)
            .init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level, args.log_file.as_deref())?;
    tracing::info!("nbaudit {} started", VERSION);

    let mut config = Config::load();
    let region = config.effective_region(args.region.as_deref());

    if args.save_region {
        match Config::config_path() {
            Some(path) => {
                if let Err(e) = config.set_region(&region, &path) {
                    tracing::warn!("Failed to save region to {:?}: {}", path, e);
                }
            }
            None => tracing::warn!("No config directory; region not saved"),
        }
    }

    let mut connector = AwsConnector::default();
    if let Some(url) = config.effective_endpoint(args.endpoint_url.as_deref()) {
        tracing::info!("Using endpoint override {}", url);
        connector = connector.with_endpoint_url(url);
    }

    let mut reporter = Reporter::stdout();

    reporter.line("### SageMaker Notebook Instances ###");
    let notebooks = enumerate_notebook_instances(&connector, &region, &mut reporter).await;

    // Studio apps are scanned in the region the first notebook lives in
    let apps_region = studio_region(&notebooks, &region);

    reporter.line("");
    reporter.line("### SageMaker Studio Notebooks ###");
    let apps = enumerate_studio_apps(&connector, &apps_region, &mut reporter).await;

    if args.json {
        let summary = serde_json::json!({
            "notebookInstances": notebooks.records(),
            "studioApps": apps.records(),
        });
        reporter.line(&serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
