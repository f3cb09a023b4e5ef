use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading inputs or building a report view.
///
/// `MissingPriorYear`, `MissingValue` and `EmptySelection` are recoverable:
/// the view degrades to a per-card or empty-state message. Everything else
/// blocks rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    DataLoad {
        path: PathBuf,
        reason: String,
    },
    MissingColumn {
        path: PathBuf,
        column: String,
    },
    MalformedValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
    DuplicateRow {
        path: PathBuf,
        country: String,
        year: i32,
    },
    UnknownYear(i32),
    UnknownCountry(String),
    UnknownMetric(String),
    MissingPriorYear {
        country: String,
        year: i32,
        metric: String,
    },
    MissingValue {
        country: String,
        year: i32,
        metric: String,
    },
    EmptySelection {
        country: String,
        year: i32,
    },
}

impl ReportError {
    /// True for errors the view renders around instead of failing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReportError::MissingPriorYear { .. }
                | ReportError::MissingValue { .. }
                | ReportError::EmptySelection { .. }
        )
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::DataLoad { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
            ReportError::MissingColumn { path, column } => {
                write!(f, "Missing column '{}' in {}", column, path.display())
            }
            ReportError::MalformedValue {
                path,
                row,
                column,
                value,
            } => write!(
                f,
                "Invalid value '{}' for column '{}' at row {} of {}",
                value,
                column,
                row,
                path.display()
            ),
            ReportError::DuplicateRow {
                path,
                country,
                year,
            } => write!(
                f,
                "Duplicate row for {} in {} of {}",
                country,
                year,
                path.display()
            ),
            ReportError::UnknownYear(year) => write!(f, "Year {} is not present in the data", year),
            ReportError::UnknownCountry(country) => {
                write!(f, "Country '{}' is not present in the data", country)
            }
            ReportError::UnknownMetric(metric) => write!(f, "Unknown metric column '{}'", metric),
            ReportError::MissingPriorYear {
                country,
                year,
                metric,
            } => write!(f, "No prior-year data for {} in {} ({})", country, year, metric),
            ReportError::MissingValue {
                country,
                year,
                metric,
            } => write!(f, "No value for {} in {} ({})", country, year, metric),
            ReportError::EmptySelection { country, year } => {
                write!(f, "No data for {} in {}", country, year)
            }
        }
    }
}

impl Error for ReportError {}
