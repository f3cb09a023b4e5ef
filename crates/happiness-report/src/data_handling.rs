//! In-memory dataset and column-description table.
use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// One country's metrics for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub country: String,
    pub year: i32,
    /// Metric values in [`Dataset::metric_names`] order. `None` for empty cells.
    pub metrics: Vec<Option<f64>>,
    /// Raw text of non-metric columns in [`Dataset::attribute_names`] order.
    pub attributes: Vec<String>,
}

/// The loaded happiness table. Read-only for the session.
#[derive(Debug, Clone)]
pub struct Dataset {
    metric_names: Vec<String>,
    attribute_names: Vec<String>,
    rows: Vec<ReportRow>,
    metric_index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(metric_names: Vec<String>, attribute_names: Vec<String>, rows: Vec<ReportRow>) -> Self {
        let metric_index = metric_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            metric_names,
            attribute_names,
            rows,
            metric_index,
        }
    }

    pub fn metric_names(&self) -> &[String] {
        &self.metric_names
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn metric_index(&self, metric: &str) -> Option<usize> {
        self.metric_index.get(metric).copied()
    }

    /// Value of `metric` in `row`, `None` when the column is unknown or the cell is empty.
    pub fn value(&self, row: &ReportRow, metric: &str) -> Option<f64> {
        self.metric_index(metric)
            .and_then(|idx| row.metrics.get(idx).copied().flatten())
    }

    /// Distinct years, sorted ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct countries in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.as_str())
            .collect()
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.rows.iter().any(|r| r.year == year)
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.rows.iter().any(|r| r.country == country)
    }

    pub fn find_row(&self, country: &str, year: i32) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|r| r.year == year && r.country == country)
    }
}

/// Metric column name to description, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnDescriptions {
    entries: Vec<(String, String)>,
}

impl ColumnDescriptions {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Metric names in description-table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn describe(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, d)| d.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.describe(column).is_some()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
