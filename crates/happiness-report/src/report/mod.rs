//! Reporting and plotting helpers.
//!
//! This module assembles self-contained HTML reports from `maud` markup and
//! Plotly plots. Plots are small helper functions converting chart
//! specifications into `plotly::Plot`.
pub mod plots;
pub mod report;
pub mod tables;

pub use report::{Report, ReportSection};
