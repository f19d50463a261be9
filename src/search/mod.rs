//! # Tour search
//! Runs independent relaxation trials, each from a fresh random activation,
//! until one of them yields a closed knight's tour.
//!
//! The move graph and its adjacency index are built once per board and shared
//! read-only between worker threads; each worker owns its activation, states
//! and random source.

use std::{
    num::NonZeroU64,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    thread::JoinHandle,
};

use thiserror::Error;
use worker::TrialWorker;

use crate::{
    board::{BoardSize, Tour},
    network::{AdjacencyIndex, MoveGraph},
};

pub mod degree;
pub mod extract;
pub mod relaxation;
#[cfg(feature = "stats")]
pub mod stats;
pub mod worker;

/// Errors preventing a search from ever succeeding.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum TourError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },
    #[error("No knight move fits on a {0} board")]
    DegenerateBoard(BoardSize),
    #[error("No closed knight's tour exists on a {0} board")]
    NoClosedTour(BoardSize),
    #[error("No tour found within {0} trials")]
    Exhausted(u64),
}

/// Reciprocal of the number of trials used to find a tour.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SuccessRate {
    trials: NonZeroU64,
}
impl SuccessRate {
    /// The success rate of a search that used `trials` trials.
    ///
    /// Fails if no trial was run.
    pub fn new(trials: u64) -> Option<Self> {
        NonZeroU64::new(trials).map(|trials| Self { trials })
    }

    /// Number of trials, i.e. the denominator of the rate.
    #[inline(always)]
    pub fn trials(self) -> u64 {
        self.trials.get()
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        1. / self.trials.get() as f64
    }
}
impl std::fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "1/{}", self.trials)
    }
}

/// Result of a bounded search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A tour was found after running `trials` trials in total.
    Found { tour: Tour, trials: u64 },
    /// The trial budget ran out, or the search was stopped, first.
    Exhausted { trials: u64 },
}
impl SearchOutcome {
    /// Total number of trials run.
    pub fn trials(&self) -> u64 {
        match self {
            Self::Found { trials, .. } | Self::Exhausted { trials } => *trials,
        }
    }

    /// The tour found, if any.
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Self::Found { tour, .. } => Some(tour),
            Self::Exhausted { .. } => None,
        }
    }

    /// The success rate, if a tour was found.
    pub fn success_rate(&self) -> Option<SuccessRate> {
        match self {
            Self::Found { trials, .. } => SuccessRate::new(*trials),
            Self::Exhausted { .. } => None,
        }
    }

    /// Converts the outcome into the tour and its success rate.
    pub fn into_result(self) -> Result<(Tour, SuccessRate), TourError> {
        match self {
            Self::Found { tour, trials } => SuccessRate::new(trials)
                .map(|rate| (tour, rate))
                .ok_or(TourError::Exhausted(trials)),
            Self::Exhausted { trials } => Err(TourError::Exhausted(trials)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    max_trials: u64,
    max_iterations: u8,
    workers: u32,
    seed: Option<u64>,
}
impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_trials: u64::MAX,
            max_iterations: relaxation::DEFAULT_MAX_ITERATIONS,
            workers: num_cpus::get_physical() as u32,
            seed: None,
        }
    }
}
impl SearchConfig {
    /// Creates a new search configuration with no trial limit, 40 updates per
    /// trial and as many workers as there are available physical CPU cores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of trials the search may run before giving up.
    pub fn with_max_trials(mut self, trials: u64) -> Self {
        self.max_trials = trials;
        self
    }

    /// Sets the number of relaxation updates allowed per trial.
    pub fn with_max_iterations(mut self, iterations: u8) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the number of worker threads that the search should use.
    ///
    /// With more than one worker, which worker finds the tour first (and thus
    /// the exact trial count) depends on scheduling, even when seeded.
    pub fn with_workers(mut self, workers: u32) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Seeds the search. Worker `i` draws from a generator seeded with
    /// `seed + i`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of worker threads.
    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Builds the network of a board, rejecting boards on which no closed tour
    /// can ever be found.
    pub fn prepare(size: BoardSize) -> Result<(MoveGraph, AdjacencyIndex), TourError> {
        let graph = MoveGraph::build(size);
        if graph.is_empty() {
            return Err(TourError::DegenerateBoard(size));
        }
        if !size.admits_closed_tour() {
            return Err(TourError::NoClosedTour(size));
        }
        let adjacency = AdjacencyIndex::build(&graph);
        Ok((graph, adjacency))
    }

    /// Starts a search on a board of the given size.
    pub fn go(&self, size: BoardSize) -> Result<SearchHandle, TourError> {
        let (graph, adjacency) = Self::prepare(size)?;
        log::info!(
            "Searching {size} board: {} neurons, {} workers, {} trials max",
            graph.len(),
            self.workers,
            self.max_trials
        );

        let graph = Arc::new(graph);
        let adjacency = Arc::new(adjacency);
        let trials = Arc::new(AtomicU64::new(0));
        let should_stop = Arc::new(AtomicBool::new(false));
        let workers = (0u32..self.workers)
            .map(|id| {
                let mut worker = TrialWorker::init(
                    id,
                    graph.clone(),
                    adjacency.clone(),
                    trials.clone(),
                    should_stop.clone(),
                )
                .with_max_iterations(self.max_iterations)
                .with_max_trials(self.max_trials);
                if let Some(seed) = self.seed {
                    worker = worker.with_seed(seed.wrapping_add(id as u64));
                }
                std::thread::spawn(move || worker.search())
            })
            .collect();

        Ok(SearchHandle {
            should_stop,
            trials,
            workers,
        })
    }

    /// Runs a search to completion on a board of the given size.
    pub fn run(&self, size: BoardSize) -> Result<SearchOutcome, TourError> {
        Ok(self.go(size)?.wait())
    }
}

/// Handle to an ongoing search.
pub struct SearchHandle {
    should_stop: Arc<AtomicBool>,
    trials: Arc<AtomicU64>,
    workers: Vec<JoinHandle<Option<Tour>>>,
}
impl SearchHandle {
    /// Number of trials started so far.
    pub fn trials(&self) -> u64 {
        self.trials.load(Ordering::Relaxed)
    }

    /// Checks if every worker has returned.
    pub fn is_finished(&self) -> bool {
        self.workers.iter().all(|w| w.is_finished())
    }

    /// Stops the search after the trials currently running, and collects its
    /// outcome.
    pub fn stop(self) -> SearchOutcome {
        self.should_stop.store(true, Ordering::Relaxed);
        self.wait()
    }

    /// Waits for the search to finish.
    pub fn wait(mut self) -> SearchOutcome {
        let mut found = None;
        for worker in std::mem::take(&mut self.workers) {
            let tour = worker
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            if found.is_none() {
                found = tour
            }
        }

        let trials = self.trials.load(Ordering::SeqCst);
        match found {
            Some(tour) => {
                log::info!("Tour found after {trials} trials");
                SearchOutcome::Found { tour, trials }
            }
            None => {
                log::info!("No tour found after {trials} trials");
                SearchOutcome::Exhausted { trials }
            }
        }
    }
}

impl Drop for SearchHandle {
    /// Dropping the handle stops the workers without waiting for them.
    fn drop(&mut self) {
        self.should_stop.store(true, Ordering::Relaxed);
    }
}

/// Finds a closed knight's tour on a `width` by `height` board, running trials
/// one after the other until one succeeds.
///
/// Returns the tour along with the success rate, the reciprocal of the number
/// of trials used. Boards on which no closed tour exists are rejected up front
/// instead of being searched forever.
pub fn knights_tour(width: u16, height: u16) -> Result<(Tour, SuccessRate), TourError> {
    let size = BoardSize::new(width, height).ok_or(TourError::ZeroDimension { width, height })?;
    SearchConfig::new().with_workers(1).run(size)?.into_result()
}
