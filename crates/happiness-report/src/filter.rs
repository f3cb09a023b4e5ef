//! Row filtering for the current selection.
use std::collections::HashSet;

use crate::data_handling::{Dataset, ReportRow};
use crate::selection::Selection;

/// Rows for the selected countries up to and including the selected year.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    rows: Vec<&'a ReportRow>,
}

/// Keep rows whose country is the primary country or a comparison and whose
/// year is at most the selected year. Rows keep their dataset order.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    filter_rows(dataset, selection.year, &selection.country, &selection.comparisons)
}

/// [`filter`] on raw controls.
pub fn filter_rows<'a>(
    dataset: &'a Dataset,
    year: i32,
    country: &str,
    comparisons: &[String],
) -> FilteredView<'a> {
    let wanted: HashSet<&str> = std::iter::once(country)
        .chain(comparisons.iter().map(String::as_str))
        .collect();
    let rows: Vec<&ReportRow> = dataset
        .rows()
        .iter()
        .filter(|r| r.year <= year && wanted.contains(r.country.as_str()))
        .collect();
    log::trace!(
        "Filtered {} of {} rows for {} countries up to {}",
        rows.len(),
        dataset.len(),
        wanted.len(),
        year
    );
    FilteredView { dataset, rows }
}

impl<'a> FilteredView<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn rows(&self) -> &[&'a ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, country: &str, year: i32) -> Option<&'a ReportRow> {
        self.rows
            .iter()
            .copied()
            .find(|r| r.year == year && r.country == country)
    }

    /// Rows for exactly `(country, year)`.
    pub fn selected_rows(&self, country: &str, year: i32) -> Vec<&'a ReportRow> {
        self.rows
            .iter()
            .copied()
            .filter(|r| r.year == year && r.country == country)
            .collect()
    }

    /// Every row of `country` within the view.
    pub fn history(&self, country: &str) -> Vec<&'a ReportRow> {
        self.rows
            .iter()
            .copied()
            .filter(|r| r.country == country)
            .collect()
    }

    /// Countries present in the view, in first-seen order.
    pub fn countries(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .copied()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.as_str())
            .collect()
    }
}
