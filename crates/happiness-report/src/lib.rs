//! happiness-report: interactive report builder for World Happiness Report data.
//!
//! This crate loads the happiness dataset and its column-description table,
//! filters rows for a user selection, computes year-over-year metric deltas
//! and builds a line-chart specification. The [`view`] module ties these
//! together behind a single event handler that turns a [`Selection`] into a
//! fresh [`view::ReportView`], which renders to a self-contained HTML report.
pub mod chart;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod filter;
pub mod io;
pub mod metrics;
pub mod report;
pub mod selection;
pub mod view;

pub use data_handling::{ColumnDescriptions, Dataset, ReportRow};
pub use error::ReportError;
pub use selection::Selection;
pub use view::{ReportSession, ReportView};
