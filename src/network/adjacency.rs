//! # Adjacency index
//! For every neuron, the set of neurons sharing one of its squares.

use super::{bitset::NeuronSet, graph::MoveGraph, neuron::NeuronId};

/// Adjacency masks of every neuron of a [`MoveGraph`].
///
/// Two neurons are adjacent when either endpoint of one is an endpoint of the
/// other. A neuron is never adjacent to itself. The index is immutable once
/// built, so it can be shared between worker threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyIndex {
    masks: Vec<NeuronSet>,
}
impl AdjacencyIndex {
    /// Builds the adjacency masks of a move graph.
    pub fn build(graph: &MoveGraph) -> Self {
        let masks = graph
            .neurons()
            .iter()
            .enumerate()
            .map(|(id, neuron)| {
                let mut mask = NeuronSet::empty(graph.len());
                for end in neuron.ends() {
                    for &other in graph.incident(end) {
                        mask.insert(other)
                    }
                }
                mask.remove(id);
                mask
            })
            .collect();

        Self { masks }
    }

    /// Number of neurons covered by the index.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// The adjacency mask of a neuron.
    ///
    /// # Panics
    /// If the id is out of bounds.
    #[inline(always)]
    pub fn mask(&self, id: NeuronId) -> &NeuronSet {
        &self.masks[id]
    }

    /// Checks if two neurons share a square.
    #[inline]
    pub fn is_adjacent(&self, a: NeuronId, b: NeuronId) -> bool {
        self.masks.get(a).is_some_and(|mask| mask.contains(b))
    }

    /// Number of active neurons adjacent to a given neuron.
    #[inline]
    pub fn active_neighbours(&self, id: NeuronId, activation: &NeuronSet) -> usize {
        self.masks[id].intersection_cardinality(activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn index(width: u16, height: u16) -> (MoveGraph, AdjacencyIndex) {
        let graph = MoveGraph::build(BoardSize::new(width, height).unwrap());
        let index = AdjacencyIndex::build(&graph);
        (graph, index)
    }

    #[test]
    fn symmetric_and_irreflexive() {
        let (graph, index) = index(6, 6);
        assert_eq!(index.len(), graph.len());
        for a in 0..graph.len() {
            assert!(!index.is_adjacent(a, a));
            for b in 0..graph.len() {
                assert_eq!(index.is_adjacent(a, b), index.is_adjacent(b, a));
            }
        }
    }

    #[test]
    fn matches_shared_squares() {
        let (graph, index) = index(5, 7);
        for a in 0..graph.len() {
            for b in 0..graph.len() {
                let shares = a != b && graph.neuron(a).shares_square(graph.neuron(b));
                assert_eq!(index.is_adjacent(a, b), shares);
            }
        }
    }

    #[test]
    fn degree_is_sum_of_endpoint_degrees() {
        let (graph, index) = index(8, 8);
        for (id, neuron) in graph.neurons().iter().enumerate() {
            let [a, b] = neuron.ends();
            let expected = graph.incident(a).len() + graph.incident(b).len() - 2;
            assert_eq!(index.mask(id).cardinality(), expected);
        }
    }

    #[test]
    fn empty_board() {
        let (_, index) = index(2, 2);
        assert!(index.is_empty());
    }
}
