use serde::Serialize;

use crate::charts::{BAR_TITLE, LINE_TITLE, PIE_TITLE, STACKED_AREA_TITLE};
use crate::model::{ChartKind, ChartSpec, Dataset};

pub const PAGE_TITLE: &str = "Website Analytics";
pub const PAGE_ICON: &str = "📊";
pub const DASHBOARD_HEADING: &str = "Website Analytics Dashboard";

/// Root payload embedded into the dashboard page
#[derive(Debug, Serialize)]
pub struct VizData {
    pub page_title: String,
    pub page_icon: String,
    pub heading: String,
    pub summary: VizSummary,
    pub tabs: Vec<VizTab>,
}

#[derive(Debug, Serialize)]
pub struct VizSummary {
    pub entity_count: usize,
    pub buckets: Vec<String>,
    pub grand_total: u64,
}

impl VizSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            entity_count: dataset.len(),
            buckets: dataset.buckets().to_vec(),
            grand_total: dataset.grand_total(),
        }
    }
}

/// One dashboard tab holding a single chart
#[derive(Debug, Serialize)]
pub struct VizTab {
    pub id: String,
    pub label: String,
    pub header: String,
    pub spec: ChartSpec,
}

impl VizTab {
    pub fn from_spec(spec: ChartSpec) -> Self {
        let (label, header) = tab_text(spec.kind);
        Self {
            id: format!("tab-{}", spec.kind.as_str()),
            label: label.to_string(),
            header: header.to_string(),
            spec,
        }
    }
}

/// Tab label and section header for a chart kind
fn tab_text(kind: ChartKind) -> (&'static str, &'static str) {
    match kind {
        ChartKind::Line => ("Monthly Visits Trend", LINE_TITLE),
        ChartKind::Bar => ("Total Visits", BAR_TITLE),
        ChartKind::Pie => ("Traffic Distribution", PIE_TITLE),
        ChartKind::StackedArea => ("Cumulative Traffic", STACKED_AREA_TITLE),
    }
}

impl VizData {
    pub fn new(dataset: &Dataset, specs: Vec<ChartSpec>) -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
            page_icon: PAGE_ICON.to_string(),
            heading: DASHBOARD_HEADING.to_string(),
            summary: VizSummary::from_dataset(dataset),
            tabs: specs.into_iter().map(VizTab::from_spec).collect(),
        }
    }
}
