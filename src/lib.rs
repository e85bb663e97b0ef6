pub mod error;
pub mod model;
pub mod analyzer;
pub mod charts;
pub mod visualization;
pub mod dump;

use std::path::Path;

use crate::analyzer::{transpose, TransposedView};
use crate::charts::{default_title, make_spec};
use crate::error::Result;
use crate::model::{build_dataset, ChartKind, ChartSpec, Dataset, StyleOverrides};
use crate::visualization::{generate_html, VizData};

/// Website traffic dashboard built from an immutable dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    styles: StyleOverrides,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Dashboard over the built-in website visits dataset
    pub fn new() -> Self {
        Self::from_dataset(build_dataset())
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            styles: StyleOverrides::default(),
        }
    }

    /// Replace chart styles for the kinds present in `styles`
    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Bucket-major view of the dataset, recomputed on every call
    pub fn transposed(&self) -> Result<TransposedView> {
        transpose(&self.dataset)
    }

    /// Build one chart over every entity in dataset order
    pub fn chart_spec(&self, kind: ChartKind) -> Result<ChartSpec> {
        let view = self.transposed()?;
        self.styled_spec(kind, &view)
    }

    /// Build all four charts in tab order
    pub fn chart_specs(&self) -> Result<Vec<ChartSpec>> {
        let view = self.transposed()?;
        ChartKind::ALL
            .iter()
            .map(|&kind| self.styled_spec(kind, &view))
            .collect()
    }

    fn styled_spec(&self, kind: ChartKind, view: &TransposedView) -> Result<ChartSpec> {
        let spec = make_spec(kind, view, view.entities(), default_title(kind))?;
        Ok(match self.styles.for_kind(kind) {
            Some(patch) => {
                let style = patch.apply(spec.style.clone());
                spec.with_style(style)
            }
            None => spec,
        })
    }

    /// Generate the payload consumed by the dashboard page
    pub fn generate_viz_data(&self) -> Result<VizData> {
        Ok(VizData::new(&self.dataset, self.chart_specs()?))
    }

    /// Generate HTML dashboard file
    pub fn generate_visualization<P: AsRef<Path>>(&self, output_path: P) -> Result<()> {
        let viz_data = self.generate_viz_data()?;
        generate_html(&viz_data, output_path.as_ref())
    }
}

/// Print dataset summary
pub fn print_dashboard_info(dashboard: &Dashboard, show_months: bool) {
    let dataset = dashboard.dataset();
    let grand_total = dataset.grand_total();

    println!("Website Traffic Information");
    println!("===========================");
    println!("Websites: {}", dataset.len());
    println!("Months: {}", dataset.buckets().join(", "));
    println!("Total visits: {}", grand_total);
    println!();

    let width = dataset
        .entities()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);

    for (rank, entity) in dataset.entities().iter().enumerate() {
        let share = if grand_total == 0 {
            0.0
        } else {
            entity.total as f64 * 100.0 / grand_total as f64
        };
        println!(
            "  {:>2}. {:<width$}  {:>8}  {:>5.1}%",
            rank + 1,
            entity.name,
            entity.total,
            share,
            width = width
        );
        if show_months {
            let counts: Vec<String> = entity.counts.iter().map(|c| c.to_string()).collect();
            println!("      {}", counts.join(" "));
        }
    }
}
