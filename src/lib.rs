//! # Knightnet
//! A knight's tour solver based on a discrete, Hopfield-style neural relaxation
//! rather than backtracking.
//!
//! Every legal knight move on the board is a neuron. Neurons are switched on and
//! off by a local update rule until the active ones form a 2-regular graph, which
//! is then walked to check that it is a single closed tour. Trials that fail are
//! thrown away and restarted from a fresh random activation.
//!
//! It is usable as both a library and a standalone binary.

pub mod board;
pub mod network;
pub mod search;

#[cfg(test)]
mod tests;
