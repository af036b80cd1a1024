use std::time::Duration;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::types::{BenchReport, TimingMode};

/// Fractional seconds for a duration.
pub fn format_seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

fn label(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |s| s.dimmed())
        .to_string()
}

/// Four-line human-readable report.
pub fn format_report(report: &BenchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", label("Array Size:"), report.size));
    out.push_str(&format!("{} {}\n", label("Iterations:"), report.iterations));
    out.push_str(&format!("{} {}\n", label("Final Sum:"), report.final_sum));

    let average = format!("{}", report.average_secs());
    out.push_str(&format!(
        "{} {} seconds\n",
        label("Average Time:"),
        average.if_supports_color(Stream::Stdout, |s| s.yellow())
    ));

    out
}

#[derive(Serialize)]
struct JsonReport {
    size: usize,
    iterations: usize,
    final_sum: i64,
    average_time_secs: f64,
    total_time_secs: f64,
    last_time_secs: f64,
    timing: TimingMode,
    started_at: String,
}

pub fn format_json(report: &BenchReport) -> String {
    let json = JsonReport {
        size: report.size,
        iterations: report.iterations,
        final_sum: report.final_sum,
        average_time_secs: report.average_secs(),
        total_time_secs: format_seconds(report.total_duration),
        last_time_secs: format_seconds(report.last_duration),
        timing: report.timing,
        started_at: report.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };

    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
}
