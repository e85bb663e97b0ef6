use crate::analyzer::TransposedView;
use crate::charts::{check_order, totals, TOTALS_SERIES};
use crate::error::Result;
use crate::model::{ChartKind, ChartSpec, Point, Series, StyleOptions};

/// Share of the combined total held by each entity.
///
/// Entities with a zero total keep a zero-size slice. When every total is
/// zero all shares are zero.
pub fn make_pie_spec<S: AsRef<str>>(
    view: &TransposedView,
    order: &[S],
    title: &str,
) -> Result<ChartSpec> {
    check_order(view, order)?;

    let totals = totals(view, order)?;
    // Summed as f64 so shares stay normalized for any u64 totals
    let sum: f64 = totals.iter().map(|(_, total)| *total as f64).sum();

    let points = totals
        .into_iter()
        .map(|(name, total)| {
            let share = if sum == 0.0 { 0.0 } else { total as f64 / sum };
            Point {
                share: Some(share),
                ..Point::new(name, total)
            }
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Pie,
        title: title.to_string(),
        x_label: String::new(),
        y_label: String::new(),
        series: vec![Series {
            name: TOTALS_SERIES.to_string(),
            points,
        }],
        style: StyleOptions::pie(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::transpose;
    use crate::charts::fixtures::scenario;
    use crate::model::{build_dataset, Dataset};

    #[test]
    fn test_scenario_shares() {
        let (view, order) = scenario();
        let spec = make_pie_spec(&view, &order, "Share").unwrap();
        let points = &spec.series[0].points;
        assert_eq!(points[0].x, "B");
        assert_eq!(points[0].y, 35);
        assert!((points[0].share.unwrap() - 35.0 / 65.0).abs() < 1e-12);
        assert_eq!(points[1].x, "A");
        assert!((points[1].share.unwrap() - 30.0 / 65.0).abs() < 1e-12);
    }

    #[test]
    fn test_shares_sum_to_one() {
        let dataset = build_dataset();
        let view = transpose(&dataset).unwrap();
        let spec = make_pie_spec(&view, &dataset.names(), "Share").unwrap();
        let sum: f64 = spec.series[0].points.iter().filter_map(|p| p.share).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let dataset = Dataset::from_rows(
            ["Jan"],
            vec![("a", vec![u64::MAX]), ("b", vec![u64::MAX])],
        );
        let view = transpose(&dataset).unwrap();
        let spec = make_pie_spec(&view, &dataset.names(), "Share").unwrap();
        assert!(spec.series[0].points.iter().all(|p| p.share == Some(0.5)));
    }

    #[test]
    fn test_zero_totals_are_kept() {
        let dataset = Dataset::from_rows(
            ["Jan"],
            vec![("busy", vec![4]), ("idle", vec![0])],
        );
        let view = transpose(&dataset).unwrap();
        let spec = make_pie_spec(&view, &dataset.names(), "Share").unwrap();
        let idle = &spec.series[0].points[1];
        assert_eq!(idle.x, "idle");
        assert_eq!(idle.share, Some(0.0));

        let all_zero = Dataset::from_rows(["Jan"], vec![("a", vec![0]), ("b", vec![0])]);
        let view = transpose(&all_zero).unwrap();
        let spec = make_pie_spec(&view, &all_zero.names(), "Share").unwrap();
        assert!(spec.series[0].points.iter().all(|p| p.share == Some(0.0)));
    }
}
