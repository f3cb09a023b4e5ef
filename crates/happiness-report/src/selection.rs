//! The user's current year / country / comparison choice.
use serde::{Deserialize, Serialize};

use crate::data_handling::{ColumnDescriptions, Dataset};
use crate::error::ReportError;

/// Position of the default year among the sorted distinct years.
pub const DEFAULT_YEAR_INDEX: usize = 16;
/// Position of the default country among countries in first-seen order.
pub const DEFAULT_COUNTRY_INDEX: usize = 142;
/// Countries preselected for comparison, when present in the data.
pub const DEFAULT_COMPARISONS: [&str; 3] = ["United States", "Germany", "Japan"];

/// An immutable snapshot of the report controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: i32,
    pub country: String,
    pub comparisons: Vec<String>,
    /// Metric shown in the line chart.
    pub metric: String,
}

impl Selection {
    pub fn new(year: i32, country: impl Into<String>, comparisons: Vec<String>, metric: impl Into<String>) -> Self {
        Self {
            year,
            country: country.into(),
            comparisons: dedup_preserving_order(comparisons),
            metric: metric.into(),
        }
    }

    /// The selection the report opens with for this dataset.
    ///
    /// Positional defaults fall back to the last available entry when the
    /// dataset is too small to have them.
    pub fn defaults(dataset: &Dataset, descriptions: &ColumnDescriptions) -> Result<Self, ReportError> {
        let years = dataset.years();
        let year = match years.get(DEFAULT_YEAR_INDEX).or_else(|| years.last()) {
            Some(&year) => year,
            None => {
                return Err(ReportError::EmptySelection {
                    country: String::new(),
                    year: 0,
                })
            }
        };
        if years.len() <= DEFAULT_YEAR_INDEX {
            log::warn!("Only {} distinct years available, defaulting to {}", years.len(), year);
        }

        let countries = dataset.countries();
        let country = match countries.get(DEFAULT_COUNTRY_INDEX).or_else(|| countries.last()) {
            Some(country) => country.to_string(),
            None => return Err(ReportError::UnknownCountry(String::new())),
        };
        if countries.len() <= DEFAULT_COUNTRY_INDEX {
            log::warn!(
                "Only {} countries available, defaulting to {}",
                countries.len(),
                country
            );
        }

        let comparisons = DEFAULT_COMPARISONS
            .iter()
            .filter(|c| dataset.has_country(c))
            .map(|c| c.to_string())
            .collect();

        let metric = descriptions
            .first()
            .ok_or_else(|| ReportError::UnknownMetric(String::new()))?
            .to_string();

        Ok(Self::new(year, country, comparisons, metric))
    }

    pub fn with_year(&self, year: i32) -> Self {
        Self {
            year,
            ..self.clone()
        }
    }

    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self.clone()
        }
    }

    pub fn with_comparisons(&self, comparisons: Vec<String>) -> Self {
        Self {
            comparisons: dedup_preserving_order(comparisons),
            ..self.clone()
        }
    }

    pub fn with_metric(&self, metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            ..self.clone()
        }
    }

    /// The primary country followed by the comparisons, without repeats.
    pub fn countries(&self) -> Vec<&str> {
        let mut out = vec![self.country.as_str()];
        for c in &self.comparisons {
            if !out.contains(&c.as_str()) {
                out.push(c.as_str());
            }
        }
        out
    }

    /// Check every control against the options the dataset offers.
    pub fn validate(&self, dataset: &Dataset, descriptions: &ColumnDescriptions) -> Result<(), ReportError> {
        if !dataset.has_year(self.year) {
            return Err(ReportError::UnknownYear(self.year));
        }
        for country in self.countries() {
            if !dataset.has_country(country) {
                return Err(ReportError::UnknownCountry(country.to_string()));
            }
        }
        if !descriptions.contains(&self.metric) {
            return Err(ReportError::UnknownMetric(self.metric.clone()));
        }
        Ok(())
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
