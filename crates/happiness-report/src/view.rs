//! Selection event handling and report view assembly.
use std::path::Path;

use maud::html;

use crate::chart::{build_chart, ChartSpec};
use crate::config::ReportConfig;
use crate::data_handling::{ColumnDescriptions, Dataset, ReportRow};
use crate::error::ReportError;
use crate::filter::filter;
use crate::io::load_report_inputs;
use crate::metrics::{card_columns, compute_deltas, MetricCard};
use crate::report::plots::plot_metric_lines;
use crate::report::tables::rows_table;
use crate::report::{Report, ReportSection};
use crate::selection::Selection;

const INTRO: &str = "The World Happiness Report is a publication of the Sustainable Development Solutions Network, \
powered by the Gallup World Poll data. The World Happiness Report reflects a worldwide demand for more \
attention to happiness and well-being as criteria for government policy. It reviews the state of happiness \
in the world today and shows how the science of happiness explains personal and national variations in happiness.";

/// The loaded inputs for one session. Every selection change goes through
/// [`ReportSession::handle_selection`], which rebuilds the view from scratch.
#[derive(Debug, Clone)]
pub struct ReportSession {
    title: String,
    dataset: Dataset,
    descriptions: ColumnDescriptions,
}

impl ReportSession {
    pub fn new(title: &str, dataset: Dataset, descriptions: ColumnDescriptions) -> Self {
        Self {
            title: title.to_string(),
            dataset,
            descriptions,
        }
    }

    /// Load the dataset and descriptions named by `config`.
    pub fn load(config: &ReportConfig) -> Result<Self, ReportError> {
        let (dataset, descriptions) = load_report_inputs(
            Path::new(&config.data_path),
            Path::new(&config.descriptions_path),
        )?;
        Ok(Self::new(&config.title, dataset, descriptions))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn descriptions(&self) -> &ColumnDescriptions {
        &self.descriptions
    }

    pub fn default_selection(&self) -> Result<Selection, ReportError> {
        Selection::defaults(&self.dataset, &self.descriptions)
    }

    /// Build a fresh view for `selection`.
    ///
    /// Unknown years, countries or metrics fail. A selection with no row for
    /// the primary country and year yields a view with an empty state instead
    /// of metric cards.
    pub fn handle_selection(&self, selection: &Selection) -> Result<ReportView<'_>, ReportError> {
        selection.validate(&self.dataset, &self.descriptions)?;
        log::trace!("Handling selection {:?}", selection);

        let view = filter(&self.dataset, selection);
        let cards = match compute_deltas(&view, &self.descriptions, selection.year, &selection.country) {
            Ok(cards) => Ok(cards),
            Err(e) if e.is_recoverable() => {
                log::warn!("{}", e);
                Err(e)
            }
            Err(e) => return Err(e),
        };
        let chart = build_chart(&view, &selection.metric)?;
        let metric_description = self
            .descriptions
            .describe(&selection.metric)
            .ok_or_else(|| ReportError::UnknownMetric(selection.metric.clone()))?
            .to_string();

        Ok(ReportView {
            title: self.title.clone(),
            selection: selection.clone(),
            dataset: &self.dataset,
            selected_rows: view.selected_rows(&selection.country, selection.year),
            history: view.history(&selection.country),
            cards,
            metric_description,
            chart,
        })
    }
}

/// Everything one render of the report shows.
#[derive(Debug, Clone)]
pub struct ReportView<'a> {
    pub title: String,
    pub selection: Selection,
    dataset: &'a Dataset,
    pub selected_rows: Vec<&'a ReportRow>,
    pub history: Vec<&'a ReportRow>,
    /// Metric cards, or the recoverable error that replaced them.
    pub cards: Result<Vec<MetricCard>, ReportError>,
    pub metric_description: String,
    pub chart: ChartSpec,
}

impl<'a> ReportView<'a> {
    pub fn heading(&self) -> String {
        format!("Report for {} of {}", self.selection.country, self.selection.year)
    }

    pub fn empty_state(&self) -> Option<String> {
        self.cards.as_ref().err().map(|e| e.to_string())
    }

    pub fn to_report(&self, version: &str) -> Report {
        let mut report = Report::new(&self.title, version, None, &self.title);

        /* Section 1: Overview */
        {
            let mut overview = ReportSection::new("Overview");
            overview.add_content(html! { p { (INTRO) } });
            report.add_section(overview);
        }

        /* Section 2: Full report */
        {
            let all_rows: Vec<&ReportRow> = self.dataset.rows().iter().collect();
            let mut full = ReportSection::new("View full happiness report").collapsible();
            full.add_content(rows_table(self.dataset, &all_rows));
            report.add_section(full);
        }

        /* Section 3: Selected year */
        {
            let mut selected = ReportSection::new(&self.heading());
            if self.selected_rows.is_empty() {
                selected.add_content(html! {
                    div class="empty-state" {
                        "No data for " (self.selection.country) " in " (self.selection.year) "."
                    }
                });
            } else {
                selected.add_content(rows_table(self.dataset, &self.selected_rows));
            }
            report.add_section(selected);
        }

        /* Section 4: Past years */
        {
            let mut past = ReportSection::new("View report of past years").collapsible();
            past.add_content(rows_table(self.dataset, &self.history));
            report.add_section(past);
        }

        /* Section 5: Metric cards */
        {
            let mut metrics = ReportSection::new("Metrics for selected year compared to previous year");
            match &self.cards {
                Ok(cards) => {
                    let columns = card_columns(cards);
                    metrics.add_content(html! {
                        div class="metric-grid" {
                            @for column in &columns {
                                div class="metric-column" {
                                    @for card in column {
                                        div class="metric-card" {
                                            div class="metric-label" { (card.metric) }
                                            div class="metric-value" { (card.value_label()) }
                                            div class=(delta_class(card)) { (card.delta_label()) }
                                        }
                                    }
                                }
                            }
                        }
                    });
                }
                Err(e) => {
                    metrics.add_content(html! { div class="empty-state" { (e.to_string()) } });
                }
            }
            report.add_section(metrics);
        }

        /* Section 6: Line chart */
        {
            let mut chart = ReportSection::new("Line charts for past years");
            chart.add_content(html! {
                p { strong { "Column: " } (self.selection.metric) }
                p class="caption" { (self.metric_description) }
            });
            chart.add_plot(plot_metric_lines(&self.chart));
            report.add_section(chart);
        }

        report
    }
}

fn delta_class(card: &MetricCard) -> &'static str {
    match card.delta {
        Ok(d) if d > 0.0 => "delta-up",
        Ok(d) if d < 0.0 => "delta-down",
        _ => "delta-none",
    }
}
