use crate::config::{LayoutConfig, parse_instant, read_config};
use crate::ir::parse_records;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "itl", version, about = "Lay out incident records on a timeline axis")]
pub struct Args {
    /// Records JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Current moment as RFC 3339 or YYYY-MM-DD. Defaults to the system clock.
    #[arg(long = "now")]
    pub now: Option<String>,

    /// Collision distance on the percent axis
    #[arg(long = "threshold", allow_negative_numbers = true)]
    pub threshold: Option<f32>,

    /// Highest stack level before markers share the top slot
    #[arg(long = "maxStackLevel", allow_negative_numbers = true)]
    pub max_stack_level: Option<i32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = resolve_config(&args)?;

    let now = resolve_now(args.now.as_deref())?;
    let input = read_input(args.input.as_deref(), io::stdin())?;
    let records = parse_records(&input)?;
    info!(records = records.len(), %now, "laying out records");

    let layout = compute_layout(&records, now, &config)?;
    write_layout_dump(args.output.as_deref(), &layout)?;
    Ok(())
}

/// Config file merged over the defaults, then command-line overrides, then a
/// single validation of the result.
pub fn resolve_config(args: &Args) -> Result<LayoutConfig> {
    let mut config = read_config(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    if let Some(threshold) = args.threshold {
        config.proximity_threshold = threshold;
    }
    if let Some(max_stack_level) = args.max_stack_level {
        config.max_stack_level = max_stack_level;
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(value) => Ok(parse_instant(value)?),
        None => Ok(Utc::now()),
    }
}

/// Reads the records payload from `path`, or from `stdin` when the path is
/// absent or `-`.
pub fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).context("failed to read stdin")?;
    Ok(buf)
}
