use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use traffic_viz::model::{ChartKind, StyleOverrides};
use traffic_viz::{dump, print_dashboard_info, Dashboard};

#[derive(Parser)]
#[command(name = "traffic-viz")]
#[command(author, version, about = "Website traffic dashboard generator")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the HTML dashboard with all four charts
    Viz {
        /// Output HTML file path
        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,

        /// JSON file with per-chart style replacements
        #[arg(long, value_name = "FILE")]
        style: Option<PathBuf>,
    },

    /// Print chart specifications as JSON
    Spec {
        /// Only print the chart of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// JSON file with per-chart style replacements
        #[arg(long, value_name = "FILE")]
        style: Option<PathBuf>,
    },

    /// Display the dataset summary
    Info {
        /// Show per-month counts
        #[arg(short, long)]
        months: bool,
    },

    /// Dump dataset and chart specs to a human-readable text file
    Dump {
        /// Output text file path
        #[arg(short, long, default_value = "dashboard.dump.txt")]
        output: PathBuf,

        /// Dump specific chart(s) - can be specified multiple times
        #[arg(short, long, value_enum)]
        chart: Option<Vec<KindArg>>,

        /// Omit the transposed table
        #[arg(long)]
        no_transposed: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Line,
    Bar,
    Pie,
    StackedArea,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => ChartKind::Line,
            KindArg::Bar => ChartKind::Bar,
            KindArg::Pie => ChartKind::Pie,
            KindArg::StackedArea => ChartKind::StackedArea,
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dashboard(style: Option<&PathBuf>) -> Result<Dashboard> {
    let dashboard = Dashboard::new();
    let Some(path) = style else {
        return Ok(dashboard);
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style file {}", path.display()))?;
    let styles: StyleOverrides = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid style file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded style overrides");
    Ok(dashboard.with_styles(styles))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Viz { output, style } => {
            let dashboard = load_dashboard(style.as_ref())?;
            dashboard
                .generate_visualization(&output)
                .context("Failed to generate dashboard")?;

            println!("Dashboard generated: {}", output.display());
        }

        Commands::Spec { kind, pretty, style } => {
            let dashboard = load_dashboard(style.as_ref())?;
            let specs = match kind {
                Some(kind) => vec![dashboard.chart_spec(kind.into())?],
                None => dashboard.chart_specs()?,
            };

            let json = if pretty {
                serde_json::to_string_pretty(&specs)?
            } else {
                serde_json::to_string(&specs)?
            };
            println!("{}", json);
        }

        Commands::Info { months } => {
            let dashboard = Dashboard::new();
            print_dashboard_info(&dashboard, months);
        }

        Commands::Dump { output, chart, no_transposed } => {
            let dashboard = Dashboard::new();

            let options = dump::DumpOptions {
                charts: chart.map(|kinds| kinds.into_iter().map(ChartKind::from).collect()),
                no_transposed,
            };

            dump::dump_to_file(&dashboard, &output, &options)?;

            println!("Dump written to: {}", output.display());
        }
    }

    Ok(())
}
