use anyhow::{Context, Result};
use happiness_report::config::ReportConfig;
use happiness_report::ReportSession;
use std::path::Path;

use super::output::{summarize, write_chart_spec, write_report};

/// Load the inputs named by `config` into a session.
pub fn load_session(config: &ReportConfig) -> Result<ReportSession> {
    ReportSession::load(config).context("Failed to load report data")
}

/// Render one report for the configured selection.
pub fn run_render(config: &ReportConfig, chart_spec: Option<&Path>, version: &str) -> Result<()> {
    let start_time = std::time::Instant::now();
    let session = load_session(config)?;

    let selection = config
        .selection(session.dataset(), session.descriptions())
        .context("Failed to resolve selection")?;
    log::info!(
        "Rendering {} {} (compare: {:?}, metric: {})",
        selection.country,
        selection.year,
        selection.comparisons,
        selection.metric
    );

    let view = session
        .handle_selection(&selection)
        .context("Failed to build report view")?;
    write_report(&view, version, &config.output_file)?;
    if let Some(path) = chart_spec {
        write_chart_spec(&view.chart, path)?;
    }

    eprintln!("{}", summarize(&view));
    log::info!("Report rendered in {:?}", start_time.elapsed());
    Ok(())
}
