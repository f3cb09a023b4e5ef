//! World Happiness Report CSV reader.
use std::collections::HashSet;
use std::path::Path;

use csv::StringRecord;

use crate::data_handling::{ColumnDescriptions, Dataset, ReportRow};
use crate::error::ReportError;

use super::read_column_descriptions;

/// Configuration for reading the happiness CSV.
#[derive(Debug, Clone)]
pub struct HappinessReaderConfig {
    /// Column holding the country name.
    pub country_column: String,
    /// Column holding the integer year.
    pub year_column: String,
    /// Metric columns to load (in order). Every listed column must exist and be numeric.
    /// When `None`, any other column whose non-empty cells all parse as numbers is a metric
    /// and the remaining columns are kept as text attributes.
    pub metric_columns: Option<Vec<String>>,
}

impl Default for HappinessReaderConfig {
    fn default() -> Self {
        Self {
            country_column: "Country Name".to_string(),
            year_column: "Year".to_string(),
            metric_columns: None,
        }
    }
}

/// Read the happiness CSV, auto-detecting metric columns.
pub fn read_happiness_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, ReportError> {
    read_happiness_csv_with_config(path, &HappinessReaderConfig::default())
}

/// Load the column descriptions and the dataset they describe.
///
/// The described columns become the dataset's metric columns, so a described
/// column that is absent or non-numeric fails the load.
pub fn load_report_inputs<P: AsRef<Path>, Q: AsRef<Path>>(
    data_path: P,
    descriptions_path: Q,
) -> Result<(Dataset, ColumnDescriptions), ReportError> {
    let descriptions = read_column_descriptions(descriptions_path)?;
    let config = HappinessReaderConfig {
        metric_columns: Some(descriptions.columns().map(str::to_string).collect()),
        ..HappinessReaderConfig::default()
    };
    let dataset = read_happiness_csv_with_config(data_path, &config)?;
    Ok((dataset, descriptions))
}

/// Read the happiness CSV using a custom configuration.
pub fn read_happiness_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &HappinessReaderConfig,
) -> Result<Dataset, ReportError> {
    let path = path.as_ref();
    let load_err = |reason: String| ReportError::DataLoad {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| load_err(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| load_err(format!("failed to read header row: {}", e)))?
        .clone();

    let country_idx = require_column(&headers, &config.country_column, path)?;
    let year_idx = require_column(&headers, &config.year_column, path)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| load_err(format!("failed to read row {}: {}", row_idx + 1, e)))?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(load_err("no data rows found".to_string()));
    }

    let metric_indices = match &config.metric_columns {
        Some(columns) => columns
            .iter()
            .map(|name| require_column(&headers, name, path))
            .collect::<Result<Vec<_>, _>>()?,
        None => (0..headers.len())
            .filter(|&idx| idx != country_idx && idx != year_idx)
            .filter(|&idx| records.iter().all(|r| parse_metric(r.get(idx).unwrap_or_default()).is_ok()))
            .collect(),
    };
    let attribute_indices: Vec<usize> = (0..headers.len())
        .filter(|idx| *idx != country_idx && *idx != year_idx && !metric_indices.contains(idx))
        .collect();

    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(records.len());
    for (row_idx, record) in records.iter().enumerate() {
        let row_no = row_idx + 1;
        let country = record.get(country_idx).unwrap_or_default().trim().to_string();
        if country.is_empty() {
            return Err(malformed(path, row_no, &headers[country_idx], ""));
        }

        let raw_year = record.get(year_idx).unwrap_or_default().trim();
        let year = raw_year
            .parse::<i32>()
            .map_err(|_| malformed(path, row_no, &headers[year_idx], raw_year))?;

        if !seen.insert((country.clone(), year)) {
            return Err(ReportError::DuplicateRow {
                path: path.to_path_buf(),
                country,
                year,
            });
        }

        let mut metrics = Vec::with_capacity(metric_indices.len());
        for &idx in &metric_indices {
            let raw = record.get(idx).unwrap_or_default();
            let value = parse_metric(raw).map_err(|_| malformed(path, row_no, &headers[idx], raw))?;
            metrics.push(value);
        }

        let attributes = attribute_indices
            .iter()
            .map(|&idx| record.get(idx).unwrap_or_default().to_string())
            .collect();

        rows.push(ReportRow {
            country,
            year,
            metrics,
            attributes,
        });
    }

    let metric_names: Vec<String> = metric_indices.iter().map(|&i| headers[i].to_string()).collect();
    let attribute_names: Vec<String> = attribute_indices.iter().map(|&i| headers[i].to_string()).collect();

    log::info!(
        "Loaded {} rows with {} metric columns from {}",
        rows.len(),
        metric_names.len(),
        path.display()
    );
    log::trace!("Metric columns: {:?}; attribute columns: {:?}", metric_names, attribute_names);

    Ok(Dataset::new(metric_names, attribute_names, rows))
}

fn require_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, ReportError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ReportError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Empty cells and `NaN` are missing values; anything else must be a number.
fn parse_metric(raw: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed.parse::<f64>()?;
    Ok(if value.is_nan() { None } else { Some(value) })
}

fn malformed(path: &Path, row: usize, column: &str, value: &str) -> ReportError {
    ReportError::MalformedValue {
        path: path.to_path_buf(),
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_metric;

    #[test]
    fn parse_metric_treats_blank_and_nan_as_missing() {
        assert_eq!(parse_metric("").unwrap(), None);
        assert_eq!(parse_metric("  ").unwrap(), None);
        assert_eq!(parse_metric("NaN").unwrap(), None);
        assert_eq!(parse_metric(" 7.5 ").unwrap(), Some(7.5));
        assert!(parse_metric("n/a").is_err());
    }
}
