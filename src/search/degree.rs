//! Degree checks on the active part of the move graph.

use crate::network::{MoveGraph, NeuronSet};

/// Checks whether the active neurons form a 2-regular graph, i.e. every square
/// touched by an active neuron is touched by exactly two of them.
///
/// An activation with no active neuron is trivially 2-regular; it is up to the
/// cycle extraction to reject it.
pub fn is_two_regular(graph: &MoveGraph, activation: &NeuronSet) -> bool {
    let size = graph.size();
    let mut degrees = vec![0u8; size.square_count()];

    for id in activation {
        for end in graph.neuron(id).ends() {
            let degree = &mut degrees[end.index(size)];
            *degree += 1;
            if *degree > 2 {
                return false;
            }
        }
    }

    degrees.iter().all(|&d| d == 0 || d == 2)
}
