use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, CellAlignment, Table};
use configuration::{CliOverrides, Config, LoggingSettings, load_config};
use core_types::{ChartKind, ViewVariant};
use dashboard::{Dashboard, DashboardFrame};
use datasets::load_datasets;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The main entry point for the Pulse dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; it only seeds PULSE_* overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = load_config(&cli.overrides.config)
        .with_context(|| format!("Failed to load {}", cli.overrides.config.display()))?;
    cli.overrides.apply(&mut config);

    let _guard = init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded.");

    let dashboard = build_dashboard(&config)?;

    match cli.command {
        Commands::Periods => handle_periods(&dashboard),
        Commands::Show(args) => handle_show(&dashboard, args),
        Commands::Serve(args) => {
            let addr = args.addr.unwrap_or(config.server.addr);
            web_server::run_server(addr, dashboard).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Quarterly payments dashboard over state, district and device CSV data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: CliOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the years and quarters available for selection.
    Periods,
    /// Render one dashboard frame to the terminal.
    Show(ShowArgs),
    /// Serve the dashboard as a JSON API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ShowArgs {
    /// Year to show. Defaults to the earliest available year.
    #[arg(long)]
    year: Option<i32>,

    /// Quarter to show (1-4). Defaults to the earliest available quarter.
    #[arg(long)]
    quarter: Option<u8>,

    /// Which chart to render. Defaults to the configured view.
    #[arg(long, value_enum)]
    view: Option<ViewVariant>,

    /// Print the frame as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind, overriding `server.addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Startup
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level`.
///
/// When `logging.directory` is set, a daily rolling file gets the same events;
/// the returned guard must live until exit so buffered lines are flushed.
fn init_tracing(settings: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("Invalid log level")?;

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pulse.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn build_dashboard(config: &Config) -> anyhow::Result<Dashboard> {
    let datasets = load_datasets(&config.datasets).context("Failed to load datasets")?;
    Ok(Dashboard::new(
        Arc::new(datasets),
        config.dashboard.clone(),
    ))
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_periods(dashboard: &Dashboard) -> anyhow::Result<()> {
    let vocabulary = dashboard.vocabulary();
    if vocabulary.is_empty() {
        println!("No periods available: the transaction dataset is empty.");
        return Ok(());
    }

    let join = |items: Vec<String>| items.join(", ");
    let mut table = Table::new();
    table.set_header(vec!["Selector", "Values"]);
    table.add_row(vec![
        "Year".to_string(),
        join(vocabulary.years.iter().map(i32::to_string).collect()),
    ]);
    table.add_row(vec![
        "Quarter".to_string(),
        join(vocabulary.quarters.iter().map(|q| format!("Q{q}")).collect()),
    ]);
    println!("{table}");
    Ok(())
}

fn handle_show(dashboard: &Dashboard, args: ShowArgs) -> anyhow::Result<()> {
    let selection = dashboard.select(args.year, args.quarter, args.view)?;
    let frame = dashboard.render(&selection)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    print_frame(&frame);
    Ok(())
}

// ==============================================================================
// Terminal Rendering
// ==============================================================================

const BAR_WIDTH: u32 = 40;

fn print_frame(frame: &DashboardFrame) {
    println!("\n=== {} ===", frame.page.title);
    println!("{}", frame.page.caption);
    println!("\n--- {} | {} ---", frame.selection.period, frame.selection.view);

    let mut cards = Table::new();
    cards.set_header(frame.cards.iter().map(|c| c.label.as_str()));
    cards.add_row(
        frame
            .cards
            .iter()
            .map(|c| Cell::new(&c.value).set_alignment(CellAlignment::Right)),
    );
    println!("{cards}");

    let chart = &frame.chart;
    println!("\n{}", chart.heading);
    if chart.points.is_empty() {
        println!("(no data for this period)");
    } else {
        let max = chart
            .points
            .iter()
            .map(|p| p.value)
            .max()
            .unwrap_or(Decimal::ZERO);

        let mut table = Table::new();
        table.set_header(vec![
            chart.category_label.as_str(),
            chart.value_label.as_str(),
            "",
        ]);
        // A horizontal bar chart draws its first category at the bottom, so the
        // terminal listing reads top-down from the last point.
        let mut points: Vec<_> = chart.points.iter().collect();
        if chart.kind == ChartKind::HorizontalBar {
            points.reverse();
        }
        for point in points {
            table.add_row(vec![
                Cell::new(&point.label),
                Cell::new(&point.display).set_alignment(CellAlignment::Right),
                Cell::new(bar(point.value, max)),
            ]);
        }
        println!("{table}");
    }

    for warning in &frame.warnings {
        println!("warning: {warning}");
    }

    if let Some(footer) = &frame.page.footer {
        println!("\n{footer}");
    }
}

fn bar(value: Decimal, max: Decimal) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let width = (value / max * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0);
    "█".repeat(width)
}
