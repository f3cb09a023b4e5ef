use plotly::common::Mode;
use plotly::layout::{Axis, AxisType, CategoryOrder, Layout, RangeMode};
use plotly::{Plot, Scatter};

use crate::chart::{AxisScale, AxisSpec, ChartSpec};

/// Plot one line per country for a metric chart specification.
///
/// Years are placed on a category axis, so gaps between years are not
/// drawn to scale, and the value axis is fitted to the data instead of
/// starting at zero.
pub fn plot_metric_lines(spec: &ChartSpec) -> Plot {
    let mode = if spec.point_markers {
        Mode::LinesMarkers
    } else {
        Mode::Lines
    };

    let mut plot = Plot::new();
    for series in &spec.series {
        let x: Vec<String> = series.points.iter().map(|(year, _)| year.to_string()).collect();
        let y: Vec<f64> = series.points.iter().map(|(_, value)| *value).collect();
        let hover = format!(
            "<b>{}</b><br>{}: %{{y}}<br>{}: %{{x}}<extra></extra>",
            series.country, spec.y.field, spec.x.field
        );
        plot.add_trace(
            Scatter::new(x, y)
                .name(series.country.as_str())
                .mode(mode.clone())
                .hover_template(hover.as_str()),
        );
    }

    let categories: Vec<String> = spec.categories().iter().map(|year| year.to_string()).collect();
    plot.set_layout(
        Layout::new()
            .title(spec.title.as_str())
            .x_axis(axis(&spec.x, &categories))
            .y_axis(axis(&spec.y, &categories)),
    );

    plot
}

/// Nominal axes list `categories` in the given order.
fn axis(spec: &AxisSpec, categories: &[String]) -> Axis {
    let axis = Axis::new().title(spec.field.as_str());
    let axis = match spec.scale {
        AxisScale::Nominal => axis
            .type_(AxisType::Category)
            .category_order(CategoryOrder::Array)
            .category_array(categories.to_vec()),
        AxisScale::Quantitative => axis.type_(AxisType::Linear),
    };
    if spec.zero {
        axis.range_mode(RangeMode::ToZero)
    } else {
        axis.range_mode(RangeMode::Normal)
    }
}
