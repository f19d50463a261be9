//! # Tour grid
//! The result of a successful search: every square of the board labelled with
//! the step at which the knight visits it.

use super::square::{BoardSize, Square};

/// A closed knight's tour, stored as the visitation index of every square.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::board::codec::RawTour")
)]
pub struct Tour {
    size: BoardSize,
    // Row-major visitation indices.
    order: Vec<u32>,
}
impl Tour {
    /// Builds a tour grid from the sequence of squares visited.
    ///
    /// Fails if the sequence leaves the board, visits a square twice or does not
    /// cover the whole board. Whether consecutive squares are a knight's jump
    /// apart is checked separately by [`Tour::is_closed_knights_tour`].
    pub fn from_path(size: BoardSize, path: &[Square]) -> Option<Self> {
        if path.len() != size.square_count() {
            return None;
        }

        let mut order = vec![u32::MAX; size.square_count()];
        for (step, &square) in path.iter().enumerate() {
            if !size.contains(square) {
                return None;
            }
            let cell = &mut order[square.index(size)];
            if *cell != u32::MAX {
                return None;
            }
            *cell = step as u32;
        }

        Some(Self { size, order })
    }

    /// Builds a tour grid from row-major visitation indices.
    ///
    /// Fails if there is not exactly one index per square or if an index
    /// appears twice or is out of range.
    pub fn from_order(size: BoardSize, order: Vec<u32>) -> Option<Self> {
        if order.len() != size.square_count() {
            return None;
        }
        let mut seen = vec![false; order.len()];
        for &step in &order {
            match seen.get_mut(step as usize) {
                Some(seen) if !*seen => *seen = true,
                _ => return None,
            }
        }
        Some(Self { size, order })
    }

    /// Dimensions of the toured board.
    #[inline(always)]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Visitation index of a square, if it lies on the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<u32> {
        self.size
            .contains(square)
            .then(|| self.order[square.index(self.size)])
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.order.chunks(self.size.width() as usize)
    }

    /// The squares in the order they are visited.
    pub fn path(&self) -> Vec<Square> {
        let mut path = vec![Square::ORIGIN; self.order.len()];
        for (index, &step) in self.order.iter().enumerate() {
            if let (Some(slot), Some(square)) =
                (path.get_mut(step as usize), self.size.square_at(index))
            {
                *slot = square;
            }
        }
        path
    }

    /// Checks that the grid holds every index from `0` to `width * height - 1`
    /// exactly once and that consecutive steps, including the last one back to
    /// the first, are knight jumps.
    pub fn is_closed_knights_tour(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &step in &self.order {
            match seen.get_mut(step as usize) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }

        let path = self.path();
        path.len() > 1
            && path
                .iter()
                .zip(path.iter().cycle().skip(1))
                .all(|(&from, &to)| from.is_knight_jump(to))
    }
}
impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.order.len().saturating_sub(1).to_string().len();
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|step| format!("{step:>digits$}")).collect();
            writeln!(f, "{}", cells.join(" "))?
        }
        Ok(())
    }
}
