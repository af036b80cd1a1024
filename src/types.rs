use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::SumbenchError;
use crate::sequence::MAX_SIZE;

/// How the reported average is derived from per-repetition timings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Sum of every repetition's duration divided by the iteration count.
    #[default]
    Mean,
    /// Duration of the final repetition divided by the iteration count.
    /// Only useful for comparing against numbers recorded with last-pass timing.
    Last,
}

/// Validated benchmark inputs. Construct with [`BenchParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    size: usize,
    iterations: usize,
}

impl BenchParams {
    pub fn new(size: usize, iterations: usize) -> Result<Self, SumbenchError> {
        if iterations == 0 {
            return Err(SumbenchError::ZeroIterations);
        }
        if size > MAX_SIZE {
            return Err(SumbenchError::SizeTooLarge {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self { size, iterations })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Outcome of one benchmark invocation.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub size: usize,
    pub iterations: usize,
    /// Sum computed by the last repetition.
    pub final_sum: i64,
    pub last_duration: Duration,
    pub total_duration: Duration,
    pub timing: TimingMode,
    pub started_at: DateTime<Utc>,
}

impl BenchReport {
    /// Average seconds per repetition under the report's timing mode.
    pub fn average_secs(&self) -> f64 {
        let numerator = match self.timing {
            TimingMode::Mean => self.total_duration,
            TimingMode::Last => self.last_duration,
        };
        numerator.as_secs_f64() / self.iterations as f64
    }
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Default,
    Json,
}
