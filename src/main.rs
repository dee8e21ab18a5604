//! Entry point for the housing rater.
//!
//! Loads the housing CSV named by `HOUSING_DATA_PATH`, prints the height-band
//! counts and the address with the least residential area per occupant.

use anyhow::{Context, Result};
use housing_rater::analyzers::analyzer::analyze;
use housing_rater::config::AppConfig;
use housing_rater::output::{print_json, render_report};
use housing_rater::parser::load_records;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = AppConfig::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("housing_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    info!(data_path = %config.data_path.display(), "Starting housing analysis");

    let records = load_records(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let summary = analyze(&records).context("ranking records by area per occupant")?;

    print_json(&summary)?;
    print!("{}", render_report(&summary)?);

    Ok(())
}
