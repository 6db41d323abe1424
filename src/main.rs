//! Lanternfish population runner (default binary).
//!
//! Reads comma-separated initial ages from a file or stdin, simulates the
//! population, and prints the total at every checkpoint (by default day 80 and
//! day 256, one per line).

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use lanternfish::config::SimConfig;
use lanternfish::core::{run_checkpoints, BucketCounter, Checkpoint};
use lanternfish::input::read_ages;
use lanternfish::logging;
use lanternfish::report::{ErrorReport, RunReport};
use lanternfish::types::RotationStrategy;

#[derive(Parser)]
#[command(
    name = "lanternfish",
    version,
    about = "Simulate an age-bucketed population and report totals at checkpoints"
)]
struct Cli {
    /// Input file with comma-separated ages (defaults to stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Last simulated day.
    #[arg(short, long)]
    days: Option<u32>,
    /// Day to report; repeatable. The last day is always reported.
    #[arg(short = 'c', long = "checkpoint")]
    checkpoints: Vec<u32>,
    /// Number of age buckets.
    #[arg(short, long)]
    buckets: Option<usize>,
    /// Rotation strategy: shift-copy or three-reversal.
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Option<RotationStrategy>,
    /// Also run the other strategy and fail if any checkpoint differs.
    #[arg(long)]
    verify: bool,
    /// Print a JSON report instead of one total per line.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, mut config: SimConfig) -> SimConfig {
        if let Some(days) = self.days {
            config.days = days;
        }
        if !self.checkpoints.is_empty() {
            config.checkpoints = self.checkpoints.clone();
        }
        if let Some(buckets) = self.buckets {
            config.buckets = buckets;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        config
    }
}

fn parse_strategy(s: &str) -> Result<RotationStrategy, String> {
    RotationStrategy::from_str(s)
        .ok_or_else(|| format!("unknown strategy {:?} (expected shift-copy or three-reversal)", s))
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        if cli.json {
            let report = ErrorReport::from_error(&err);
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{:#}", err),
            }
        } else {
            eprintln!("{:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply(SimConfig::from_env());
    info!(
        days = config.days,
        buckets = config.buckets,
        strategy = config.strategy.as_str(),
        checkpoints = ?config.checkpoints,
        "configuration"
    );

    let ages = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            read_ages(BufReader::new(file))?
        }
        None => read_ages(io::stdin().lock())?,
    };
    debug!(count = ages.len(), "read initial ages");

    let counter = BucketCounter::new(config.buckets, ages.iter().copied())
        .context("build initial population")?;
    let initial = counter.total();
    debug!(
        buckets = counter.buckets(),
        reset = counter.reset_index(),
        initial,
        "initial population"
    );

    let checkpoints = simulate(&counter, config.strategy, &config);

    if cli.verify {
        for other in RotationStrategy::ALL {
            if other == config.strategy {
                continue;
            }
            let again = simulate(&counter, other, &config);
            if again != checkpoints {
                bail!(
                    "strategies disagree: {} gave {:?}, {} gave {:?}",
                    config.strategy.as_str(),
                    checkpoints,
                    other.as_str(),
                    again
                );
            }
            info!(strategy = other.as_str(), "verified");
        }
    }

    let report = RunReport::new(config.strategy, counter.buckets(), initial, &checkpoints);
    if cli.json {
        println!("{}", report.to_json().context("serialize report")?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn simulate(
    counter: &BucketCounter,
    strategy: RotationStrategy,
    config: &SimConfig,
) -> Vec<Checkpoint> {
    let mut counter = counter.clone();
    let checkpoints = run_checkpoints(&mut counter, strategy, config.days, &config.checkpoints);
    for c in &checkpoints {
        debug!(strategy = strategy.as_str(), day = c.day, total = c.total, "checkpoint");
    }
    checkpoints
}
