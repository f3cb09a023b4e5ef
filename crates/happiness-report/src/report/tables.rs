//! HTML tables over dataset rows.
use maud::{html, Markup};

use crate::data_handling::{Dataset, ReportRow};

/// Render `rows` with the country and year first, then text attributes, then metrics.
pub fn rows_table(dataset: &Dataset, rows: &[&ReportRow]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Country Name" }
                    th { "Year" }
                    @for name in dataset.attribute_names() { th { (name) } }
                    @for name in dataset.metric_names() { th { (name) } }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.country) }
                        td { (row.year) }
                        @for attr in &row.attributes { td { (attr) } }
                        @for value in &row.metrics { td { (format_cell(*value)) } }
                    }
                }
            }
        }
    }
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_headers_and_blank_cells() {
        let rows = vec![ReportRow {
            country: "Finland".to_string(),
            year: 2018,
            metrics: vec![Some(7.632), None, Some(0.00012)],
            attributes: vec!["Western Europe".to_string()],
        }];
        let dataset = Dataset::new(
            vec![
                "Life Ladder".to_string(),
                "Generosity".to_string(),
                "Perceptions Of Corruption".to_string(),
            ],
            vec!["Regional Indicator".to_string()],
            rows,
        );
        let refs: Vec<&ReportRow> = dataset.rows().iter().collect();
        let html = rows_table(&dataset, &refs).into_string();
        assert!(html.contains("<th>Regional Indicator</th>"));
        assert!(html.contains("<td>7.632</td>"));
        assert!(html.contains("<td></td>"));
        assert!(html.contains("<td>0.00012</td>"));
    }
}
