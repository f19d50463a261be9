//! # Neuron model
//! Every legal knight move of the board is a neuron. This module builds the set
//! of neurons of a board and the adjacency between them; both are shared
//! read-only by every trial run on that board.

pub mod adjacency;
pub mod bitset;
pub mod graph;
pub mod neuron;

pub use adjacency::AdjacencyIndex;
pub use bitset::NeuronSet;
pub use graph::MoveGraph;
pub use neuron::{Neuron, NeuronId};
