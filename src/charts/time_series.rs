use crate::analyzer::TransposedView;
use crate::charts::check_order;
use crate::error::Result;
use crate::model::{ChartKind, ChartSpec, Point, Series, StyleOptions};

/// One line per entity across every bucket
pub fn make_time_series_spec<S: AsRef<str>>(
    view: &TransposedView,
    order: &[S],
    title: &str,
) -> Result<ChartSpec> {
    check_order(view, order)?;

    Ok(ChartSpec {
        kind: ChartKind::Line,
        title: title.to_string(),
        x_label: "Month".to_string(),
        y_label: "Visits".to_string(),
        series: entity_series(view, order),
        style: StyleOptions::time_series(),
    })
}

/// Raw `(bucket, count)` series per entity, shared with the stacked chart
pub(crate) fn entity_series<S: AsRef<str>>(view: &TransposedView, order: &[S]) -> Vec<Series> {
    order
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let points = view
                .series(name)
                .into_iter()
                .flatten()
                .map(|(bucket, count)| Point::new(bucket, count))
                .collect();
            Series {
                name: name.to_string(),
                points,
            }
        })
        .collect()
}
