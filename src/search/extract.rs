//! # Cycle extraction
//! Walks a 2-regular activation from the origin square to turn it into a tour.

use thiserror::Error;

use crate::{
    board::{Square, Tour},
    network::{MoveGraph, NeuronSet},
};

/// Reasons a 2-regular activation is not a single closed tour.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum ExtractionFailure {
    #[error("No unused active move leaves {square} after {visited} squares")]
    DeadEnd { square: Square, visited: usize },
    #[error("Walk closed after {visited} squares with {remaining} active moves left")]
    DisjointCycles { visited: usize, remaining: usize },
    #[error("Walk ended on {end} instead of the origin")]
    Unclosed { end: Square },
    #[error("Walk covered {visited} squares out of {total}")]
    IncompleteCover { visited: usize, total: usize },
}

/// Walks the active moves starting from the origin square, always taking the
/// lowest numbered unused move, until every active move has been used.
///
/// The walk only succeeds if it comes back to the origin having visited every
/// square of the board exactly once. The same activation always yields the same
/// tour.
pub fn extract_cycle(graph: &MoveGraph, activation: &NeuronSet) -> Result<Tour, ExtractionFailure> {
    let size = graph.size();
    let mut remaining = activation.clone();
    let mut remaining_count = remaining.cardinality();
    let mut visited = vec![false; size.square_count()];
    let mut path = Vec::with_capacity(size.square_count());
    let mut current = Square::ORIGIN;

    while remaining_count > 0 {
        let seen = &mut visited[current.index(size)];
        if *seen {
            return Err(ExtractionFailure::DisjointCycles {
                visited: path.len(),
                remaining: remaining_count,
            });
        }
        *seen = true;
        path.push(current);

        let Some(&id) = graph
            .incident(current)
            .iter()
            .find(|&&id| remaining.contains(id))
        else {
            return Err(ExtractionFailure::DeadEnd {
                square: current,
                visited: path.len(),
            });
        };
        remaining.remove(id);
        remaining_count -= 1;

        let [a, b] = graph.neuron(id).ends();
        current = if a == current { b } else { a };
    }

    if path.len() != size.square_count() {
        return Err(ExtractionFailure::IncompleteCover {
            visited: path.len(),
            total: size.square_count(),
        });
    }
    if current != Square::ORIGIN {
        return Err(ExtractionFailure::Unclosed { end: current });
    }

    Tour::from_path(size, &path).ok_or(ExtractionFailure::IncompleteCover {
        visited: path.len(),
        total: size.square_count(),
    })
}
