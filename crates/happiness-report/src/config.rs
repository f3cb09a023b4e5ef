use serde::{Deserialize, Serialize};

use crate::data_handling::{ColumnDescriptions, Dataset};
use crate::error::ReportError;
use crate::selection::Selection;

/// Central configuration for building a report.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub data_path: String,
    pub descriptions_path: String,
    pub output_file: String,
    pub title: String,

    /// Initial controls. Unset values use the dataset's defaults.
    pub year: Option<i32>,
    pub country: Option<String>,
    pub comparisons: Option<Vec<String>>,
    pub metric: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: String::from("data/World_Happiness_Report.csv"),
            descriptions_path: String::from("data/column_descs.csv"),
            output_file: String::from("happiness_report.html"),
            title: String::from("World Happiness Report"),
            year: None,
            country: None,
            comparisons: None,
            metric: None,
        }
    }
}

impl ReportConfig {
    /// The configured selection, falling back to [`Selection::defaults`] per control.
    pub fn selection(&self, dataset: &Dataset, descriptions: &ColumnDescriptions) -> Result<Selection, ReportError> {
        let mut selection = Selection::defaults(dataset, descriptions)?;
        if let Some(year) = self.year {
            selection = selection.with_year(year);
        }
        if let Some(country) = &self.country {
            selection = selection.with_country(country.as_str());
        }
        if let Some(comparisons) = &self.comparisons {
            selection = selection.with_comparisons(comparisons.clone());
        }
        if let Some(metric) = &self.metric {
            selection = selection.with_metric(metric.as_str());
        }
        Ok(selection)
    }
}
