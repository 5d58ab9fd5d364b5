mod load;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueHint};
use tracing_subscriber::EnvFilter;
use tracklane_protocol::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "tracklane",
    version,
    about = "Render gantt, line, stacked-area and event charts on a shared time axis"
)]
struct Args {
    /// Gantt data: JSON chart definitions or `label,start,end[,column[,extendTo]]` CSV
    #[arg(short = 'g', long = "gantt-data", num_args = 1.., value_hint = ValueHint::FilePath)]
    gantt: Vec<PathBuf>,

    /// Numeric CSV tables drawn as line charts
    #[arg(short = 'l', long = "line-data", num_args = 1.., value_hint = ValueHint::FilePath)]
    line: Vec<PathBuf>,

    /// Numeric CSV tables drawn as stacked area charts
    #[arg(short = 'a', long = "stacked-area-data", num_args = 1.., value_hint = ValueHint::FilePath)]
    area: Vec<PathBuf>,

    /// Event data: JSON chart definitions or `date,brief` CSV
    #[arg(short = 'e', long = "event-data", num_args = 1.., value_hint = ValueHint::FilePath)]
    events: Vec<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "out.svg", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Figure width in pixels (overrides the config file)
    #[arg(long)]
    width: Option<f64>,

    /// Figure height in pixels (overrides the config file)
    #[arg(long)]
    height: Option<f64>,

    /// JSON render config
    #[arg(long, env = "TRACKLANE_CONFIG", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Use the dark palette
    #[arg(long, action = ArgAction::SetTrue)]
    dark: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn has_inputs(&self) -> bool {
        !(self.gantt.is_empty()
            && self.line.is_empty()
            && self.area.is_empty()
            && self.events.is_empty())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if !args.has_inputs() {
        bail!("you must specify at least one input file");
    }

    let mut config = match &args.config {
        Some(path) => load::config(path)?,
        None => Default::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.dark {
        config.theme = Theme::Dark;
    }
    config.validate()?;

    let figure = load::figure(&args.gantt, &args.line, &args.area, &args.events)?;
    let svg = figure.to_svg(&config);
    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        output = %args.output.display(),
        panels = figure.panels().len(),
        "figure written"
    );
    Ok(())
}
