//! Year-over-year metric cards.
use serde::Serialize;

use crate::data_handling::ColumnDescriptions;
use crate::error::ReportError;
use crate::filter::FilteredView;

/// Number of display columns cards are spread across.
pub const CARD_COLUMNS: usize = 4;

/// Round up to two decimals: `ceil(x * 100) / 100`.
///
/// This is a ceiling, not round-to-nearest, so negative values move toward zero
/// (`round2(-1.231) == -1.23`). Values in `(-0.01, 0)` round to `0.0`, never `-0.0`.
pub fn round2(x: f64) -> f64 {
    let rounded = (x * 100.0).ceil() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// One metric's value for the selected year and its change since the prior year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub metric: String,
    /// Display column, `index % CARD_COLUMNS` in description-table order.
    pub slot: usize,
    /// `round2` of the selected year's value; `None` when the cell is empty.
    pub value: Option<f64>,
    #[serde(serialize_with = "serialize_delta")]
    pub delta: Result<f64, ReportError>,
}

impl MetricCard {
    pub fn delta_label(&self) -> String {
        match &self.delta {
            Ok(d) if *d > 0.0 => format!("+{:.2}", d),
            Ok(d) => format!("{:.2}", d),
            Err(ReportError::MissingPriorYear { .. }) => "no prior-year data".to_string(),
            Err(_) => "no data".to_string(),
        }
    }

    pub fn value_label(&self) -> String {
        self.value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "n/a".to_string())
    }
}

fn serialize_delta<S: serde::Serializer>(delta: &Result<f64, ReportError>, s: S) -> Result<S::Ok, S::Error> {
    match delta {
        Ok(d) => s.serialize_some(d),
        Err(_) => s.serialize_none(),
    }
}

/// Build one card per described metric for `(country, year)`.
///
/// Fails with [`ReportError::EmptySelection`] when the view has no row for the
/// selected country and year. A missing prior-year row only affects the cards:
/// each gets a [`ReportError::MissingPriorYear`] delta.
pub fn compute_deltas(
    view: &FilteredView<'_>,
    descriptions: &ColumnDescriptions,
    year: i32,
    country: &str,
) -> Result<Vec<MetricCard>, ReportError> {
    let current = view.find(country, year).ok_or_else(|| ReportError::EmptySelection {
        country: country.to_string(),
        year,
    })?;
    let prior_year = year.checked_sub(1);
    let previous = prior_year.and_then(|prior| view.find(country, prior));
    if previous.is_none() {
        log::warn!("No row before {} for {}; deltas unavailable", year, country);
    }

    let dataset = view.dataset();
    let cards = descriptions
        .columns()
        .enumerate()
        .map(|(index, metric)| {
            let current_value = dataset.value(current, metric);
            let previous_value = previous.and_then(|row| dataset.value(row, metric));
            let delta = match (current_value, previous_value) {
                (None, _) => Err(ReportError::MissingValue {
                    country: country.to_string(),
                    year,
                    metric: metric.to_string(),
                }),
                (Some(_), None) => Err(ReportError::MissingPriorYear {
                    country: country.to_string(),
                    year: prior_year.unwrap_or(year),
                    metric: metric.to_string(),
                }),
                (Some(cur), Some(prev)) => Ok(round2(cur - prev)),
            };
            if let Err(e) = &delta {
                log::debug!("{}", e);
            }
            MetricCard {
                metric: metric.to_string(),
                slot: index % CARD_COLUMNS,
                value: current_value.map(round2),
                delta,
            }
        })
        .collect();

    Ok(cards)
}

/// Group cards into their display columns, keeping card order within each.
pub fn card_columns(cards: &[MetricCard]) -> [Vec<&MetricCard>; CARD_COLUMNS] {
    let mut columns: [Vec<&MetricCard>; CARD_COLUMNS] = Default::default();
    for card in cards {
        columns[card.slot % CARD_COLUMNS].push(card);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_ceiling_based() {
        assert_eq!(round2(1.234), 1.24);
        assert_eq!(round2(1.230), 1.23);
        assert_eq!(round2(-1.231), -1.23);
        assert_eq!(round2(7.632), 7.64);
    }

    #[test]
    fn delta_label_signs() {
        let mut card = MetricCard {
            metric: "Score".to_string(),
            slot: 0,
            value: Some(7.64),
            delta: Ok(0.17),
        };
        assert_eq!(card.delta_label(), "+0.17");
        card.delta = Ok(-0.05);
        assert_eq!(card.delta_label(), "-0.05");
        card.delta = Err(ReportError::MissingPriorYear {
            country: "Finland".to_string(),
            year: 2017,
            metric: "Score".to_string(),
        });
        assert_eq!(card.delta_label(), "no prior-year data");
    }
}
