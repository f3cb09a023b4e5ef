//! Integration tests for the selection event handler and HTML report.

use std::io::Write;

use happiness_report::config::ReportConfig;
use happiness_report::{ReportError, ReportSession, Selection};

const DATA: &str = "\
Country Name,Regional Indicator,Year,Life Ladder,Generosity
Finland,Western Europe,2017,7.469,-0.01
Finland,Western Europe,2018,7.632,0.02
Germany,Western Europe,2017,7.0,0.09
Germany,Western Europe,2018,7.1,0.1
Japan,East Asia,2018,5.9,-0.2
Japan,East Asia,2020,5.8,-0.1
";

const DESCS: &str = "Life Ladder;Subjective well-being\nGenerosity;Donations residual\n";

fn session_with_config() -> (tempfile::TempDir, ReportConfig, ReportSession) {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.csv");
    let descs = dir.path().join("descs.csv");
    std::fs::File::create(&data).unwrap().write_all(DATA.as_bytes()).unwrap();
    std::fs::File::create(&descs).unwrap().write_all(DESCS.as_bytes()).unwrap();
    let config = ReportConfig {
        data_path: data.to_string_lossy().into_owned(),
        descriptions_path: descs.to_string_lossy().into_owned(),
        output_file: dir.path().join("report.html").to_string_lossy().into_owned(),
        ..ReportConfig::default()
    };
    let session = ReportSession::load(&config).unwrap();
    (dir, config, session)
}

#[test]
fn handle_selection_builds_full_view() {
    let (_dir, _config, session) = session_with_config();
    let selection = Selection::new(2018, "Finland", vec!["Germany".to_string()], "Life Ladder");
    let view = session.handle_selection(&selection).unwrap();

    assert_eq!(view.heading(), "Report for Finland of 2018");
    assert_eq!(view.selected_rows.len(), 1);
    assert_eq!(view.history.len(), 2);
    assert_eq!(view.metric_description, "Subjective well-being");
    assert_eq!(view.chart.series.len(), 2);

    let cards = view.cards.as_ref().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].value, Some(7.64));
    assert_eq!(cards[0].delta, Ok(0.17));
    assert_eq!(cards[1].slot, 1);
    assert!(view.empty_state().is_none());
}

#[test]
fn empty_selection_renders_empty_state() {
    let (_dir, _config, session) = session_with_config();
    // Japan has no 2017 row, but 2017 exists in the data.
    let selection = Selection::new(2017, "Japan", vec![], "Generosity");
    let view = session.handle_selection(&selection).unwrap();

    assert!(view.selected_rows.is_empty());
    assert!(matches!(view.cards, Err(ReportError::EmptySelection { .. })));
    assert_eq!(view.empty_state().unwrap(), "No data for Japan in 2017");

    let html = view.to_report("0.1.0").to_html();
    assert!(html.contains("No data for Japan in 2017"));
}

#[test]
fn missing_prior_year_keeps_page_rendering() {
    let (_dir, _config, session) = session_with_config();
    let selection = Selection::new(2020, "Japan", vec![], "Life Ladder");
    let view = session.handle_selection(&selection).unwrap();
    let cards = view.cards.as_ref().unwrap();
    assert!(cards
        .iter()
        .all(|c| matches!(c.delta, Err(ReportError::MissingPriorYear { year: 2019, .. }))));

    let html = view.to_report("0.1.0").to_html();
    assert!(html.contains("no prior-year data"));
}

#[test]
fn unknown_selection_blocks_rendering() {
    let (_dir, _config, session) = session_with_config();
    let selection = Selection::new(2018, "Atlantis", vec![], "Life Ladder");
    assert_eq!(
        session.handle_selection(&selection).unwrap_err(),
        ReportError::UnknownCountry("Atlantis".to_string())
    );
}

#[test]
fn config_overrides_defaults() {
    let (_dir, mut config, session) = session_with_config();
    let defaults = config.selection(session.dataset(), session.descriptions()).unwrap();
    assert_eq!(defaults.year, 2020);
    assert_eq!(defaults.country, "Japan");
    assert_eq!(defaults.comparisons, vec!["Germany".to_string(), "Japan".to_string()]);

    config.year = Some(2018);
    config.country = Some("Finland".to_string());
    config.metric = Some("Generosity".to_string());
    let selection = config.selection(session.dataset(), session.descriptions()).unwrap();
    assert_eq!(selection.year, 2018);
    assert_eq!(selection.country, "Finland");
    assert_eq!(selection.metric, "Generosity");
}

#[test]
fn report_html_contains_every_section() {
    let (_dir, config, session) = session_with_config();
    let selection = Selection::new(2018, "Finland", vec!["Japan".to_string()], "Generosity");
    let view = session.handle_selection(&selection).unwrap();
    let report = view.to_report("0.1.0");

    let titles: Vec<&str> = report.sections().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Overview",
            "View full happiness report",
            "Report for Finland of 2018",
            "View report of past years",
            "Metrics for selected year compared to previous year",
            "Line charts for past years",
        ]
    );

    report.save_to_file(&config.output_file).unwrap();
    let html = std::fs::read_to_string(&config.output_file).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<details>"));
    assert!(html.contains("Donations residual"));
    assert!(html.contains("plotly"));
}
