//! # Discrete relaxation
//! Drives the activation of the neurons towards a 2-regular selection of moves.
//!
//! Each iteration, every neuron `k` updates its state with
//! `U[k] += BIAS - (active neighbours of k) - V[k]`. A neuron whose state falls
//! below zero is switched off, one whose state rises above [`UPPER_THRESHOLD`]
//! is switched on, and the rest keep their activation. There is no guarantee of
//! convergence: a run may oscillate or settle on an unusable activation.

use rand::Rng;

use crate::network::{AdjacencyIndex, MoveGraph, NeuronSet};

use super::degree::is_two_regular;

/// Constant drive added to every neuron each iteration.
pub const BIAS: i32 = 3;
/// States strictly above this value switch the neuron on.
pub const UPPER_THRESHOLD: i32 = 3;
/// States strictly below this value switch the neuron off.
pub const LOWER_THRESHOLD: i32 = 0;
/// Iteration cap of a single trial.
pub const DEFAULT_MAX_ITERATIONS: u8 = 40;

/// Result of a single update.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Step {
    /// At least one state changed.
    Changed,
    /// No state changed, so no further update can change anything.
    FixedPoint,
}

/// How a relaxation run ended.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Convergence {
    /// The activation became 2-regular after the given number of updates.
    TwoRegular { iterations: u8 },
    /// The states stopped changing without the activation being 2-regular.
    FixedPoint { iterations: u8 },
    /// The iteration cap was reached.
    Exhausted,
}

/// Activation and state of every neuron during one trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relaxation {
    activation: NeuronSet,
    state: Vec<i32>,
    next_state: Vec<i32>,
    iterations: u8,
}
impl Relaxation {
    /// Starts from a given activation, with every state at zero.
    pub fn from_activation(activation: NeuronSet) -> Self {
        let len = activation.len();
        Self {
            activation,
            state: vec![0; len],
            next_state: vec![0; len],
            iterations: 0,
        }
    }

    /// Starts from an activation where each neuron is independently on with
    /// probability one half.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::from_activation(NeuronSet::from_bits((0..len).map(|_| rng.gen::<bool>())))
    }

    /// The neurons currently switched on.
    #[inline(always)]
    pub fn activation(&self) -> &NeuronSet {
        &self.activation
    }

    /// The current state of every neuron.
    #[inline(always)]
    pub fn state(&self) -> &[i32] {
        &self.state
    }

    /// Number of updates applied so far.
    #[inline(always)]
    pub fn iterations(&self) -> u8 {
        self.iterations
    }

    /// Applies one synchronous update to every neuron.
    ///
    /// All new states are computed from the current activation before any
    /// threshold is applied. A fixed point leaves the relaxation untouched.
    pub fn step(&mut self, adjacency: &AdjacencyIndex) -> Step {
        for (id, next) in self.next_state.iter_mut().enumerate() {
            let neighbours = adjacency.active_neighbours(id, &self.activation) as i32;
            let own = self.activation.contains(id) as i32;
            *next = self.state[id] + BIAS - neighbours - own;
        }

        if self.next_state == self.state {
            return Step::FixedPoint;
        }

        for (id, &next) in self.next_state.iter().enumerate() {
            if next < LOWER_THRESHOLD {
                self.activation.remove(id)
            } else if next > UPPER_THRESHOLD {
                self.activation.insert(id)
            }
        }
        std::mem::swap(&mut self.state, &mut self.next_state);
        self.iterations += 1;
        Step::Changed
    }

    /// Updates until the activation is 2-regular, a fixed point is reached or
    /// `max_iterations` updates have been applied.
    pub fn relax(
        &mut self,
        graph: &MoveGraph,
        adjacency: &AdjacencyIndex,
        max_iterations: u8,
    ) -> Convergence {
        while self.iterations < max_iterations {
            if self.step(adjacency) == Step::FixedPoint {
                return Convergence::FixedPoint {
                    iterations: self.iterations,
                };
            }
            log::trace!(
                "Iteration {}: {} active neurons",
                self.iterations,
                self.activation.cardinality()
            );
            if is_two_regular(graph, &self.activation) {
                return Convergence::TwoRegular {
                    iterations: self.iterations,
                };
            }
        }
        Convergence::Exhausted
    }
}
