use crate::analyzer::TransposedView;
use crate::charts::check_order;
use crate::charts::time_series::entity_series;
use crate::error::Result;
use crate::model::{ChartKind, ChartSpec, StyleOptions};

/// Time series stacked in the given order.
///
/// Each point's `base` is the running sum of the series listed before it at
/// the same bucket, so the first series sits on zero.
pub fn make_stacked_area_spec<S: AsRef<str>>(
    view: &TransposedView,
    order: &[S],
    title: &str,
) -> Result<ChartSpec> {
    check_order(view, order)?;

    let mut series = entity_series(view, order);
    let mut running = vec![0u64; view.bucket_count()];
    for s in &mut series {
        for (point, base) in s.points.iter_mut().zip(running.iter_mut()) {
            point.base = Some(*base);
            *base = base.saturating_add(point.y);
        }
    }

    Ok(ChartSpec {
        kind: ChartKind::StackedArea,
        title: title.to_string(),
        x_label: "Month".to_string(),
        y_label: "Visits".to_string(),
        series,
        style: StyleOptions::stacked_area(),
    })
}
