//! Chart specification builders.
//!
//! Each builder is a pure function of a [`TransposedView`], an entity order
//! and a title. They share no state and can be evaluated in any order.

pub mod time_series;
pub mod bar;
pub mod pie;
pub mod stacked_area;

use std::collections::HashSet;

pub use time_series::make_time_series_spec;
pub use bar::make_bar_spec;
pub use pie::make_pie_spec;
pub use stacked_area::make_stacked_area_spec;

use crate::analyzer::TransposedView;
use crate::error::{Result, ValidationError};
use crate::model::{ChartKind, ChartSpec};

pub const LINE_TITLE: &str = "Monthly Visits Trend";
pub const BAR_TITLE: &str = "Total Visits per Website";
pub const PIE_TITLE: &str = "Traffic Distribution Among Websites";
pub const STACKED_AREA_TITLE: &str = "Cumulative Traffic Over Time";

/// Name of the single series emitted by aggregate charts
pub const TOTALS_SERIES: &str = "Total Visits";

/// Check the shared preconditions of every builder
fn check_order<S: AsRef<str>>(view: &TransposedView, order: &[S]) -> Result<()> {
    if view.is_empty() {
        return Err(ValidationError::NoBuckets.into());
    }
    if order.is_empty() {
        return Err(ValidationError::EmptyOrder.into());
    }
    let mut seen = HashSet::with_capacity(order.len());
    for name in order {
        let name = name.as_ref();
        if !view.contains(name) {
            return Err(ValidationError::UnknownEntity(name.to_string()).into());
        }
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateEntity(name.to_string()).into());
        }
    }
    Ok(())
}

/// Per-entity sums over every bucket, in the given order
fn totals<'a, S: AsRef<str>>(view: &TransposedView, order: &'a [S]) -> Result<Vec<(&'a str, u64)>> {
    order
        .iter()
        .map(|name| -> Result<(&'a str, u64)> {
            let name = name.as_ref();
            let total = view
                .total(name)
                .ok_or_else(|| ValidationError::UnknownEntity(name.to_string()))?;
            Ok((name, total))
        })
        .collect()
}

/// Build one chart of the given kind
pub fn make_spec<S: AsRef<str>>(
    kind: ChartKind,
    view: &TransposedView,
    order: &[S],
    title: &str,
) -> Result<ChartSpec> {
    match kind {
        ChartKind::Line => make_time_series_spec(view, order, title),
        ChartKind::Bar => make_bar_spec(view, order, title),
        ChartKind::Pie => make_pie_spec(view, order, title),
        ChartKind::StackedArea => make_stacked_area_spec(view, order, title),
    }
}

/// Title used for a chart kind on the dashboard
pub fn default_title(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => LINE_TITLE,
        ChartKind::Bar => BAR_TITLE,
        ChartKind::Pie => PIE_TITLE,
        ChartKind::StackedArea => STACKED_AREA_TITLE,
    }
}

/// Build all four dashboard charts with their default titles
pub fn build_all_specs<S: AsRef<str>>(view: &TransposedView, order: &[S]) -> Result<Vec<ChartSpec>> {
    ChartKind::ALL
        .iter()
        .map(|&kind| make_spec(kind, view, order, default_title(kind)))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::analyzer::{transpose, TransposedView};
    use crate::model::Dataset;

    /// A: [10, 20], B: [30, 5] over Jan, Feb
    pub fn scenario() -> (TransposedView, Vec<String>) {
        let dataset = Dataset::from_rows(
            ["Jan", "Feb"],
            vec![("A", vec![10, 20]), ("B", vec![30, 5])],
        );
        let view = transpose(&dataset).unwrap();
        (view, dataset.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::transpose;
    use crate::model::build_dataset;

    #[test]
    fn test_unknown_entity_rejected_by_every_builder() {
        let (view, _) = fixtures::scenario();
        for kind in ChartKind::ALL {
            let err = make_spec(kind, &view, &["B", "Z"], "t").unwrap_err();
            assert_eq!(
                err.as_validation(),
                Some(&ValidationError::UnknownEntity("Z".to_string()))
            );
        }
    }

    #[test]
    fn test_totals_reject_unknown_entity() {
        let (view, _) = fixtures::scenario();
        assert_eq!(totals(&view, &["B", "A"]).unwrap(), vec![("B", 35), ("A", 30)]);
        assert_eq!(
            totals(&view, &["Z"]).unwrap_err().as_validation(),
            Some(&ValidationError::UnknownEntity("Z".to_string()))
        );
    }

    #[test]
    fn test_empty_and_repeated_order_rejected() {
        let (view, _) = fixtures::scenario();
        let empty: [&str; 0] = [];
        for kind in ChartKind::ALL {
            assert_eq!(
                make_spec(kind, &view, &empty, "t").unwrap_err().as_validation(),
                Some(&ValidationError::EmptyOrder)
            );
            assert_eq!(
                make_spec(kind, &view, &["A", "A"], "t").unwrap_err().as_validation(),
                Some(&ValidationError::DuplicateEntity("A".to_string()))
            );
        }
    }

    #[test]
    fn test_build_all_specs_kinds_and_titles() {
        let dataset = build_dataset();
        let view = transpose(&dataset).unwrap();
        let specs = build_all_specs(&view, &dataset.names()).unwrap();
        let kinds: Vec<_> = specs.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
        assert_eq!(specs[0].title, LINE_TITLE);
        assert_eq!(specs[3].title, STACKED_AREA_TITLE);
    }

    #[test]
    fn test_builders_are_idempotent() {
        let (view, order) = fixtures::scenario();
        for kind in ChartKind::ALL {
            let first = make_spec(kind, &view, &order, "t").unwrap();
            let second = make_spec(kind, &view, &order, "t").unwrap();
            assert_eq!(first, second);
        }
    }
}
