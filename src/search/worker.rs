//! # Trial worker thread.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::Tour,
    network::{AdjacencyIndex, MoveGraph},
};

use super::{
    extract::{extract_cycle, ExtractionFailure},
    relaxation::{Convergence, Relaxation, DEFAULT_MAX_ITERATIONS},
};

/// How a single trial ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The relaxation produced a closed tour.
    Tour(Tour),
    /// The relaxation never produced a 2-regular activation.
    NonConvergence(Convergence),
    /// The activation was 2-regular but not a single closed tour.
    Extraction(ExtractionFailure),
}

/// Runs trials from fresh random activations until one produces a tour, the
/// shared trial budget runs out or another worker asks to stop.
pub struct TrialWorker {
    pub id: u32,
    graph: Arc<MoveGraph>,
    adjacency: Arc<AdjacencyIndex>,
    rng: SmallRng,

    // Search budget
    max_iterations: u8,
    max_trials: u64,
    trials: Arc<AtomicU64>,
    should_stop: Arc<AtomicBool>,
}
impl TrialWorker {
    /// Creates a new [`TrialWorker`] with no trial limit and an entropy seeded
    /// random source.
    pub fn init(
        id: u32,
        graph: Arc<MoveGraph>,
        adjacency: Arc<AdjacencyIndex>,
        trials: Arc<AtomicU64>,
        should_stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            id,
            graph,
            adjacency,
            rng: SmallRng::from_entropy(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_trials: u64::MAX,
            trials,
            should_stop,
        }
    }

    /// Seeds the random source drawing initial activations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Sets the number of relaxation updates allowed per trial.
    pub fn with_max_iterations(mut self, iterations: u8) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the total number of trials all workers sharing this worker's
    /// counter may run.
    pub fn with_max_trials(mut self, trials: u64) -> Self {
        self.max_trials = trials;
        self
    }

    /// Runs trials until a tour is found or the budget is spent.
    pub fn search(mut self) -> Option<Tour> {
        while !self.should_stop.load(Ordering::Relaxed) {
            let trial = self.claim_trial()?;
            match self.run_trial() {
                TrialOutcome::Tour(tour) => {
                    self.should_stop.store(true, Ordering::Relaxed);
                    log::info!("Worker {} found a tour on trial {trial}", self.id);
                    return Some(tour);
                }
                TrialOutcome::NonConvergence(convergence) => {
                    log::debug!("Worker {} trial {trial}: {convergence:?}", self.id)
                }
                TrialOutcome::Extraction(failure) => {
                    log::debug!("Worker {} trial {trial}: {failure}", self.id)
                }
            }
        }
        None
    }

    /// Reserves one trial from the shared budget, returning its 1-based number.
    fn claim_trial(&self) -> Option<u64> {
        self.trials
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                (t < self.max_trials).then_some(t + 1)
            })
            .ok()
            .map(|t| t + 1)
    }

    /// Runs a single trial: random activation, relaxation and, if the
    /// relaxation reaches a 2-regular activation, cycle extraction.
    pub fn run_trial(&mut self) -> TrialOutcome {
        let mut relaxation = Relaxation::random(self.graph.len(), &mut self.rng);
        match relaxation.relax(&self.graph, &self.adjacency, self.max_iterations) {
            Convergence::TwoRegular { .. } => {
                match extract_cycle(&self.graph, relaxation.activation()) {
                    Ok(tour) => TrialOutcome::Tour(tour),
                    Err(failure) => TrialOutcome::Extraction(failure),
                }
            }
            convergence => TrialOutcome::NonConvergence(convergence),
        }
    }
}
