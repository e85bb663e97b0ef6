use crate::analyzer::TransposedView;
use crate::charts::{check_order, totals, TOTALS_SERIES};
use crate::error::Result;
use crate::model::{ChartKind, ChartSpec, Point, Series, StyleOptions};

/// One bar per entity holding its total over every bucket
pub fn make_bar_spec<S: AsRef<str>>(
    view: &TransposedView,
    order: &[S],
    title: &str,
) -> Result<ChartSpec> {
    check_order(view, order)?;

    let points = totals(view, order)?
        .into_iter()
        .map(|(name, total)| Point::new(name, total))
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Bar,
        title: title.to_string(),
        x_label: "Websites".to_string(),
        y_label: "Total Visits".to_string(),
        series: vec![Series {
            name: TOTALS_SERIES.to_string(),
            points,
        }],
        style: StyleOptions::bar(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::transpose;
    use crate::charts::fixtures::scenario;
    use crate::model::build_dataset;

    #[test]
    fn test_scenario_totals() {
        let (view, order) = scenario();
        let spec = make_bar_spec(&view, &order, "Totals").unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(
            spec.series[0].points,
            vec![Point::new("B", 35), Point::new("A", 30)]
        );
    }

    #[test]
    fn test_bars_equal_dataset_totals() {
        let dataset = build_dataset();
        let view = transpose(&dataset).unwrap();
        let spec = make_bar_spec(&view, &dataset.names(), "Totals").unwrap();
        let points = &spec.series[0].points;
        assert_eq!(points.len(), dataset.len());
        for (point, entity) in points.iter().zip(dataset.entities()) {
            assert_eq!(point.x, entity.name);
            assert_eq!(point.y, entity.total);
        }
    }
}
