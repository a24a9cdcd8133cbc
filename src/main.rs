//! CLI entry point for the benchmark plotter.
//!
//! Reads an encode/decode benchmark log, averages the timings for each file
//! size and shows them as a line chart.

use anyhow::{Context, Result};
use bench_plot::{
    aggregate::average_by_size,
    output::{print_pretty, to_json},
    parser::parse_log,
    render::{ChartSink, ChartStyle, DEFAULT_TITLE, FileExporter, WindowViewer, render},
};
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bench_plot")]
#[command(about = "Plot average encode/decode times from a benchmark log", long_about = None)]
struct Cli {
    /// Benchmark log to read
    #[arg(value_name = "LOG", default_value = "log.txt")]
    log: PathBuf,

    /// Write the chart to a .png or .svg file instead of opening a window
    #[arg(short, long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Chart title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Print the averaged records to stdout as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bench_plot.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bench_plot.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let records = parse_log(&cli.log)?;
    info!(log = %cli.log.display(), runs = records.len(), "Log parsed");
    if records.is_empty() {
        warn!("No benchmark runs found in log");
    }

    let averaged = average_by_size(&records);
    info!(sizes = averaged.len(), "Timings averaged");
    print_pretty(&averaged);

    if cli.json {
        println!("{}", to_json(&averaged)?);
    }

    let style = ChartStyle {
        title: cli.title,
        width: cli.width,
        height: cli.height,
    };
    let sink: Box<dyn ChartSink> = match cli.save {
        Some(path) => Box::new(FileExporter::new(path)),
        None => Box::new(WindowViewer),
    };

    render(sink.as_ref(), &averaged, &style).context("failed to render chart")?;

    Ok(())
}
