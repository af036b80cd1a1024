use std::hint::black_box;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info};

use crate::display;
use crate::errors::SumbenchError;
use crate::sequence::{build_sequence, sum_sequence};
use crate::types::{BenchParams, BenchReport, TimingMode};

/// Builds the sequence once, then sums it `iterations` times, timing each pass
/// against the monotonic clock.
pub fn run_benchmark(
    params: &BenchParams,
    timing: TimingMode,
) -> Result<BenchReport, SumbenchError> {
    let started_at = Utc::now();
    let seq = build_sequence(params.size())?;

    info!(
        size = params.size(),
        iterations = params.iterations(),
        ?timing,
        "starting benchmark"
    );

    let mut final_sum: i64 = 0;
    let mut last_duration = Duration::ZERO;
    let mut total_duration = Duration::ZERO;

    for repetition in 0..params.iterations() {
        let start = Instant::now();
        let sum = black_box(sum_sequence(black_box(&seq)));
        let elapsed = start.elapsed();

        final_sum = sum;
        last_duration = elapsed;
        total_duration += elapsed;

        debug!(repetition, sum, ?elapsed, "repetition done");
    }

    let report = BenchReport {
        size: params.size(),
        iterations: params.iterations(),
        final_sum,
        last_duration,
        total_duration,
        timing,
        started_at,
    };

    info!(
        final_sum,
        average_secs = report.average_secs(),
        "benchmark finished"
    );

    Ok(report)
}

/// Runs the benchmark with the default timing mode and prints the
/// four-line report to stdout.
pub fn run(size: usize, iterations: usize) -> anyhow::Result<()> {
    let params = BenchParams::new(size, iterations)?;
    let report = run_benchmark(&params, TimingMode::default())?;
    print!("{}", display::format_report(&report));
    Ok(())
}
