//! # Success rate statistics
//! Runs several independent searches on the same board and reports how many
//! trials each one needed.

use std::time::{Duration, Instant};

use crate::board::BoardSize;

use super::{SearchConfig, SearchOutcome, TourError};

/// Builder pattern to configure a batch of searches.
pub struct StatsConfig {
    pub runs: u32,
    pub search: SearchConfig,
    pub seed: Option<u64>,

    pub bench: bool,
    pub verbose: bool,
}
impl StatsConfig {
    /// A batch of `runs` searches using the given search configuration.
    pub fn new(runs: u32, search: SearchConfig) -> Self {
        Self {
            runs,
            search,
            seed: None,
            bench: false,
            verbose: false,
        }
    }

    /// Seeds the batch. Each run gets its own seed derived from this one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Measures the time each run takes.
    pub fn benchmark(mut self, value: bool) -> Self {
        self.bench = value;
        self
    }

    /// Prints a line for every run.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Runs the batch on a board of the given size, printing a summary.
    pub fn go(&self, size: BoardSize) -> Result<Statistics, TourError> {
        let mut statistics = Statistics::default();

        for run in 0..self.runs {
            let mut config = self.search.clone();
            if let Some(seed) = self.seed {
                // Keep worker seeds of different runs apart.
                config = config.with_seed(seed.wrapping_add((run as u64) << 32));
            }

            let start = Instant::now();
            let outcome = config.run(size)?;
            let elapsed = start.elapsed();

            if self.verbose {
                match &outcome {
                    SearchOutcome::Found { trials, .. } => {
                        println!("run {run}: tour after {trials} trials")
                    }
                    SearchOutcome::Exhausted { trials } => {
                        println!("run {run}: no tour after {trials} trials")
                    }
                }
                if self.bench {
                    println!("\ttook {}", human_readable_time(elapsed.as_secs_f64()));
                }
            }
            statistics.record(&outcome, elapsed);
        }

        println!("{size} board: {statistics}");
        if self.bench {
            println!(
                "\ttook {} ({})",
                human_readable_time(statistics.elapsed.as_secs_f64()),
                human_readable_tps(statistics.total_trials as f64 / statistics.elapsed.as_secs_f64())
            );
        }
        Ok(statistics)
    }
}

/// Aggregated results of a batch of searches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Trials used by each successful run.
    pub successes: Vec<u64>,
    /// Runs that ran out of trials.
    pub failures: u32,
    /// Trials run over the whole batch, failed runs included.
    pub total_trials: u64,
    pub elapsed: Duration,
}
impl Statistics {
    fn record(&mut self, outcome: &SearchOutcome, elapsed: Duration) {
        match outcome {
            SearchOutcome::Found { trials, .. } => self.successes.push(*trials),
            SearchOutcome::Exhausted { .. } => self.failures += 1,
        }
        self.total_trials += outcome.trials();
        self.elapsed += elapsed;
    }

    /// Tours found per trial run, over the whole batch.
    pub fn overall_rate(&self) -> f64 {
        if self.total_trials == 0 {
            0.
        } else {
            self.successes.len() as f64 / self.total_trials as f64
        }
    }

    /// Mean of the success rates of the successful runs.
    pub fn mean_rate(&self) -> Option<f64> {
        if self.successes.is_empty() {
            None
        } else {
            let sum: f64 = self.successes.iter().map(|&t| 1. / t as f64).sum();
            Some(sum / self.successes.len() as f64)
        }
    }
}
impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tours, {} failures, {} trials, overall rate {:.5}",
            self.successes.len(),
            self.failures,
            self.total_trials,
            self.overall_rate()
        )?;
        if let Some(mean) = self.mean_rate() {
            write!(f, ", mean rate {mean:.5}")?
        }
        Ok(())
    }
}

pub fn human_readable_time(secs: f64) -> String {
    if secs < 0.000_001 {
        format!("{:.3}ns", secs * 1_000_000_000.)
    } else if secs < 0.001 {
        format!("{:.3}μs", secs * 1_000_000.)
    } else if secs < 1. {
        format!("{:.3}ms", secs * 1_000.)
    } else {
        format!("{secs:.3}s")
    }
}

fn human_readable_tps(tps: f64) -> String {
    if tps > 1_000_000. {
        format!("{:.3}M trials/s", tps / 1_000_000.)
    } else if tps > 1_000. {
        format!("{:.3}K trials/s", tps / 1_000.)
    } else {
        format!("{tps:.3} trials/s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_successes_and_failures() {
        let size = BoardSize::new(6, 6).unwrap();
        let statistics = StatsConfig::new(
            3,
            SearchConfig::new().with_workers(1).with_max_trials(10_000),
        )
        .with_seed(17)
        .go(size)
        .unwrap();
        assert_eq!(statistics.successes.len() as u32 + statistics.failures, 3);
        assert!(statistics.total_trials >= statistics.successes.iter().sum::<u64>());
    }

    #[test]
    fn rates() {
        let statistics = Statistics {
            successes: vec![2, 4],
            failures: 1,
            total_trials: 16,
            elapsed: Duration::ZERO,
        };
        assert_eq!(statistics.overall_rate(), 0.125);
        assert_eq!(statistics.mean_rate(), Some(0.375));
        assert_eq!(Statistics::default().mean_rate(), None);
    }

    #[test]
    fn infeasible_board_is_an_error() {
        let size = BoardSize::new(5, 5).unwrap();
        let result = StatsConfig::new(2, SearchConfig::new().with_workers(1)).go(size);
        assert_eq!(result, Err(TourError::NoClosedTour(size)));
    }

    #[test]
    fn time_units() {
        assert_eq!(human_readable_time(2.5), "2.500s");
        assert_eq!(human_readable_time(0.25), "250.000ms");
        assert_eq!(human_readable_time(0.000_5), "500.000μs");
    }
}
