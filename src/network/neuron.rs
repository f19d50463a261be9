use crate::board::Square;

/// Index of a neuron within its [`MoveGraph`](super::graph::MoveGraph).
pub type NeuronId = usize;

/// An undirected knight move between two distinct squares.
///
/// The move is stored in the direction it was first discovered in, but
/// otherwise behaves as an unordered pair.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Neuron {
    first: Square,
    second: Square,
}
impl Neuron {
    /// A neuron joining two squares.
    ///
    /// Fails if the squares are not a knight's jump apart.
    #[inline]
    pub fn new(first: Square, second: Square) -> Option<Self> {
        first
            .is_knight_jump(second)
            .then_some(Self { first, second })
    }

    /// Both endpoints of the move.
    #[inline(always)]
    pub fn ends(self) -> [Square; 2] {
        [self.first, self.second]
    }

    /// Checks if the move starts or ends on a given square.
    #[inline(always)]
    pub fn touches(self, square: Square) -> bool {
        self.first == square || self.second == square
    }

    /// Returns the endpoint opposite to `square`, if the move touches it.
    #[inline]
    pub fn other_end(self, square: Square) -> Option<Square> {
        if self.first == square {
            Some(self.second)
        } else if self.second == square {
            Some(self.first)
        } else {
            None
        }
    }

    /// Checks if two moves share at least one endpoint.
    #[inline]
    pub fn shares_square(self, other: Self) -> bool {
        other.touches(self.first) || other.touches(self.second)
    }
}
impl std::fmt::Display for Neuron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_knight_jumps_are_neurons() {
        assert!(Neuron::new(Square::new(0, 0), Square::new(1, 2)).is_some());
        assert!(Neuron::new(Square::new(0, 0), Square::new(1, 1)).is_none());
        assert!(Neuron::new(Square::new(3, 3), Square::new(3, 3)).is_none());
    }

    #[test]
    fn other_end() {
        let neuron = Neuron::new(Square::new(0, 0), Square::new(2, 1)).unwrap();
        assert_eq!(neuron.other_end(Square::new(0, 0)), Some(Square::new(2, 1)));
        assert_eq!(neuron.other_end(Square::new(2, 1)), Some(Square::new(0, 0)));
        assert_eq!(neuron.other_end(Square::new(1, 2)), None);
    }
}
