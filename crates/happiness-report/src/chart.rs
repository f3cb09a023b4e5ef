//! Declarative line-chart specification for one metric over the filtered view.
use serde::Serialize;

use crate::error::ReportError;
use crate::filter::FilteredView;

/// How an axis interprets its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Discrete categories in ascending label order; spacing carries no meaning.
    Nominal,
    Quantitative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub field: String,
    pub scale: AxisScale,
    /// Whether the axis range is forced to include zero.
    pub zero: bool,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub country: String,
    /// `(year, value)` pairs sorted by year. Years with an empty cell are skipped.
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    /// Line mark with a point at every observation.
    pub point_markers: bool,
    pub x: AxisSpec,
    pub y: AxisSpec,
    /// Field that splits the data into one series per value.
    pub color: String,
    pub tooltip: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Distinct x categories across all series, ascending.
    pub fn categories(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|(y, _)| *y))
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Chart `metric` per country over the years in `view`.
pub fn build_chart(view: &FilteredView<'_>, metric: &str) -> Result<ChartSpec, ReportError> {
    let dataset = view.dataset();
    if dataset.metric_index(metric).is_none() {
        return Err(ReportError::UnknownMetric(metric.to_string()));
    }

    let series = view
        .countries()
        .into_iter()
        .map(|country| {
            let mut points: Vec<(i32, f64)> = view
                .history(country)
                .into_iter()
                .filter_map(|row| dataset.value(row, metric).map(|v| (row.year, v)))
                .collect();
            points.sort_by_key(|(year, _)| *year);
            Series {
                country: country.to_string(),
                points,
            }
        })
        .collect();

    Ok(ChartSpec {
        title: metric.to_string(),
        point_markers: true,
        x: AxisSpec {
            field: "Year".to_string(),
            scale: AxisScale::Nominal,
            zero: false,
        },
        y: AxisSpec {
            field: metric.to_string(),
            scale: AxisScale::Quantitative,
            zero: false,
        },
        color: "Country Name".to_string(),
        tooltip: vec![metric.to_string(), "Year".to_string()],
        series,
    })
}
