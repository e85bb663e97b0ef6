//! Human-readable text dump of the dataset and the chart specs built from it.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analyzer::TransposedView;
use crate::error::Result;
use crate::model::{ChartKind, ChartSpec, Dataset};
use crate::Dashboard;

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

/// Options for controlling what gets dumped
#[derive(Debug, Default)]
pub struct DumpOptions {
    /// Specific charts to dump. If None, dumps all four.
    pub charts: Option<Vec<ChartKind>>,
    /// Skip the bucket-major table
    pub no_transposed: bool,
}

/// Dump dashboard information to a file
pub fn dump_to_file(dashboard: &Dashboard, output_path: &Path, options: &DumpOptions) -> Result<()> {
    let content = dump_to_string(dashboard, options)?;
    let mut file = File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Dump dashboard information to a string
pub fn dump_to_string(dashboard: &Dashboard, options: &DumpOptions) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Website Traffic Dump")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    dump_dataset(&mut out, dashboard.dataset())?;

    let view = dashboard.transposed()?;
    if !options.no_transposed {
        writeln!(out)?;
        dump_transposed(&mut out, &view)?;
    }

    let specs = dashboard.chart_specs()?;
    for spec in &specs {
        if let Some(filter) = &options.charts {
            if !filter.contains(&spec.kind) {
                continue;
            }
        }
        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "CHART: {} ({})", spec.title, spec.kind.as_str())?;
        writeln!(out, "{}", RULE)?;
        dump_chart(&mut out, spec)?;
    }

    Ok(out)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(0).max(6)
}

fn dump_dataset(out: &mut String, dataset: &Dataset) -> Result<()> {
    writeln!(out, "DATASET ({} entities, sorted by total)", dataset.len())?;
    writeln!(out, "{}", THIN_RULE)?;

    let width = name_width(dataset.entities().iter().map(|e| e.name.as_str()));
    write!(out, "{:<width$}", "Entity", width = width)?;
    for bucket in dataset.buckets() {
        write!(out, " {:>6}", bucket)?;
    }
    writeln!(out, " {:>8}", "Total")?;

    for entity in dataset.entities() {
        write!(out, "{:<width$}", entity.name, width = width)?;
        for count in &entity.counts {
            write!(out, " {:>6}", count)?;
        }
        writeln!(out, " {:>8}", entity.total)?;
    }

    writeln!(out)?;
    writeln!(out, "Grand total: {}", dataset.grand_total())?;
    Ok(())
}

fn dump_transposed(out: &mut String, view: &TransposedView) -> Result<()> {
    writeln!(out, "TRANSPOSED VIEW ({} buckets)", view.bucket_count())?;
    writeln!(out, "{}", THIN_RULE)?;

    let width = view.buckets().map(str::len).max().unwrap_or(0).max(6);
    for column in view.columns() {
        write!(out, "{:<width$}", column.bucket, width = width)?;
        let cells: Vec<String> = view
            .entities()
            .iter()
            .zip(&column.counts)
            .map(|(name, count)| format!("{}={}", name, count))
            .collect();
        writeln!(out, "  {}", cells.join(", "))?;
    }
    Ok(())
}

fn dump_chart(out: &mut String, spec: &ChartSpec) -> Result<()> {
    writeln!(out)?;
    if !spec.x_label.is_empty() || !spec.y_label.is_empty() {
        writeln!(out, "X axis:        {}", spec.x_label)?;
        writeln!(out, "Y axis:        {}", spec.y_label)?;
    }
    writeln!(out, "Series:        {}", spec.series.len())?;
    writeln!(out, "Points:        {}", spec.point_count())?;

    for series in &spec.series {
        writeln!(out)?;
        writeln!(out, "  {}", series.name)?;
        let width = name_width(series.points.iter().map(|p| p.x.as_str()));
        for point in &series.points {
            write!(out, "    {:<width$} {:>8}", point.x, point.y, width = width)?;
            if let Some(share) = point.share {
                write!(out, "  {:>6.2}%", share * 100.0)?;
            }
            if let Some(base) = point.base {
                write!(out, "  [{} .. {}]", base, point.top())?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
