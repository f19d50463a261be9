//! # Move graph
//! Enumerates the knight moves of a board once, giving each its neuron id.

use crate::board::{BoardSize, Square};

use super::{
    bitset::NeuronSet,
    neuron::{Neuron, NeuronId},
};

/// Neurons incident to a single square. A knight has at most eight moves.
pub type IncidentList = heapless::Vec<NeuronId, 8>;

/// Every legal knight move of a board, each listed once regardless of
/// direction.
///
/// Built once per board size and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveGraph {
    size: BoardSize,
    neurons: Vec<Neuron>,
    // Indexed by row-major square index.
    incident: Vec<IncidentList>,
}
impl MoveGraph {
    /// Enumerates all knight moves of a board.
    ///
    /// Squares are visited column by column; a move is recorded the first time
    /// one of its endpoints is reached, so its reverse is never added again.
    pub fn build(size: BoardSize) -> Self {
        let mut neurons = vec![];
        let mut incident = vec![IncidentList::new(); size.square_count()];

        for square in size.squares() {
            for target in square.knight_jumps(size) {
                // The target was already visited, and the move recorded from there.
                if target < square {
                    continue;
                }
                let Some(neuron) = Neuron::new(square, target) else {
                    continue;
                };
                let id = neurons.len();
                neurons.push(neuron);
                for end in neuron.ends() {
                    // Each square has at most eight jumps, so this cannot overflow.
                    let _ = incident[end.index(size)].push(id);
                }
            }
        }

        log::debug!("Built move graph for {size} board: {} neurons", neurons.len());
        Self {
            size,
            neurons,
            incident,
        }
    }

    /// Dimensions of the board.
    #[inline(always)]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of neurons.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Checks if the board admits no knight move at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Returns the neuron with a given id.
    ///
    /// # Panics
    /// If the id is out of bounds.
    #[inline(always)]
    pub fn neuron(&self, id: NeuronId) -> Neuron {
        self.neurons[id]
    }

    /// All neurons, indexed by id.
    #[inline(always)]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Ids of the neurons touching a square, in increasing order.
    #[inline]
    pub fn incident(&self, square: Square) -> &[NeuronId] {
        if self.size.contains(square) {
            &self.incident[square.index(self.size)]
        } else {
            &[]
        }
    }

    /// Finds the neuron joining two squares, in either direction.
    pub fn find(&self, a: Square, b: Square) -> Option<NeuronId> {
        self.incident(a)
            .iter()
            .copied()
            .find(|&id| self.neurons[id].other_end(a) == Some(b))
    }

    /// Activation selecting exactly the moves of a closed path, including the
    /// move from the last square back to the first.
    ///
    /// Fails if two consecutive squares are not joined by a knight move.
    pub fn activation_of_cycle(&self, path: &[Square]) -> Option<NeuronSet> {
        let mut activation = NeuronSet::empty(self.len());
        for (i, &from) in path.iter().enumerate() {
            let to = path[(i + 1) % path.len()];
            activation.insert(self.find(from, to)?);
        }
        Some(activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(width: u16, height: u16) -> MoveGraph {
        MoveGraph::build(BoardSize::new(width, height).unwrap())
    }

    #[test]
    fn neuron_count_matches_knight_move_count() {
        for (width, height, moves) in [
            (1, 1, 0),
            (2, 2, 0),
            (2, 3, 2),
            (3, 3, 8),
            (3, 4, 14),
            (4, 4, 24),
            (5, 5, 48),
            (6, 6, 80),
            (8, 8, 168),
            (3, 10, 50),
        ] {
            assert_eq!(graph(width, height).len(), moves, "{width}x{height}");
        }
    }

    #[test]
    fn no_duplicates_or_self_loops() {
        let graph = graph(8, 8);
        for (id, neuron) in graph.neurons().iter().enumerate() {
            let [a, b] = neuron.ends();
            assert_ne!(a, b);
            assert!(a.is_knight_jump(b));
            assert_eq!(graph.find(a, b), Some(id));
            assert_eq!(graph.find(b, a), Some(id));
        }
    }

    #[test]
    fn rebuilding_is_stable() {
        assert_eq!(graph(6, 5), graph(6, 5));
    }

    #[test]
    fn incidence_matches_jumps() {
        let graph = graph(6, 6);
        for square in graph.size().squares() {
            assert_eq!(
                graph.incident(square).len(),
                square.knight_jumps(graph.size()).len()
            );
        }
        assert!(graph.incident(Square::new(6, 6)).is_empty());
    }
}
