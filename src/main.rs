use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use sumbench::config::{self, Settings};
use sumbench::display;
use sumbench::logging;
use sumbench::runner;
use sumbench::types::{BenchParams, OutputFormat, TimingMode};

#[derive(Parser)]
#[command(
    name = "sumbench",
    version,
    about = "Time repeated summation of a sequence of consecutive integers"
)]
struct Cli {
    /// Number of elements in the sequence
    size: Option<usize>,

    /// Number of timed repetitions
    iterations: Option<usize>,

    /// How the average is computed: mean of all repetitions, or last / iterations
    #[arg(long)]
    timing: Option<TimingMode>,

    /// Output format for the report
    #[arg(long, default_value = "default")]
    format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long)]
    json: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let file = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&file, cli.size, cli.iterations, cli.timing);

    let params = BenchParams::new(settings.size, settings.iterations)?;
    let report = runner::run_benchmark(&params, settings.timing)?;

    let output = if cli.json {
        format!("{}\n", display::format_json(&report))
    } else {
        match cli.format {
            OutputFormat::Json => format!("{}\n", display::format_json(&report)),
            OutputFormat::Default => display::format_report(&report),
        }
    };

    print!("{}", output);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
