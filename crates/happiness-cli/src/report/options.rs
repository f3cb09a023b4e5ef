use happiness_report::ReportSession;
use std::fmt::Write;

/// The choices each report control offers, one section per control.
pub fn format_options(session: &ReportSession) -> String {
    let dataset = session.dataset();
    let mut out = String::new();

    let years: Vec<String> = dataset.years().iter().map(|y| y.to_string()).collect();
    let _ = writeln!(out, "Years ({}):", years.len());
    let _ = writeln!(out, "  {}", years.join(", "));

    let countries = dataset.countries();
    let _ = writeln!(out, "Countries ({}):", countries.len());
    for country in countries {
        let _ = writeln!(out, "  {}", country);
    }

    let _ = writeln!(out, "Metrics ({}):", session.descriptions().len());
    for metric in session.descriptions().columns() {
        let description = session.descriptions().describe(metric).unwrap_or_default();
        let _ = writeln!(out, "  {}: {}", metric, description);
    }
    out
}
