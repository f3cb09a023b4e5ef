use anyhow::{Context, Result};
use happiness_report::chart::ChartSpec;
use happiness_report::view::ReportView;
use std::path::Path;

use crate::util::write_bytes_to_file;

/// Write the chart specification as pretty JSON.
pub fn write_chart_spec<P: AsRef<Path>>(spec: &ChartSpec, output_path: P) -> Result<()> {
    let path = output_path.as_ref();
    let bytes = serde_json::to_vec_pretty(spec).context("Failed to serialize chart spec")?;
    write_bytes_to_file(path, &bytes)
        .with_context(|| format!("Failed to write chart spec: {:?}", path))?;
    log::info!("Chart spec written to {}", path.display());
    Ok(())
}

/// Render `view` and write the HTML report.
pub fn write_report<P: AsRef<Path>>(view: &ReportView<'_>, version: &str, output_path: P) -> Result<()> {
    let path = output_path.as_ref();
    view.to_report(version)
        .save_to_file(path)
        .with_context(|| format!("Failed to write report: {:?}", path))
}

/// One-line summary of a view for the terminal.
pub fn summarize(view: &ReportView<'_>) -> String {
    match &view.cards {
        Ok(cards) => {
            let parts: Vec<String> = cards
                .iter()
                .map(|c| format!("{} {} ({})", c.metric, c.value_label(), c.delta_label()))
                .collect();
            format!("{}: {}", view.heading(), parts.join(", "))
        }
        Err(e) => format!("{}: {}", view.heading(), e),
    }
}
