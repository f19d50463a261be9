//! Squares and dimensions of a rectangular board, and the knight jumps between
//! squares.

/// List of squares reachable with a single knight jump.
pub type JumpList = heapless::Vec<Square, 8>;

/// The eight knight jumps as `(column, row)` offsets.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Dimensions of a rectangular board. Both sides are at least one square long.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::board::codec::RawBoardSize")
)]
pub struct BoardSize {
    width: u16,
    height: u16,
}
impl BoardSize {
    /// A board of the given dimensions.
    ///
    /// Fails if either dimension is zero.
    #[inline]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Number of columns.
    #[inline(always)]
    pub const fn width(self) -> u16 {
        self.width
    }

    /// Number of rows.
    #[inline(always)]
    pub const fn height(self) -> u16 {
        self.height
    }

    /// Total number of squares on the board.
    #[inline(always)]
    pub const fn square_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if a square lies on the board.
    #[inline(always)]
    pub const fn contains(self, square: Square) -> bool {
        square.col < self.width && square.row < self.height
    }

    /// The square with a given row-major index, if it lies on the board.
    #[inline]
    pub fn square_at(self, index: usize) -> Option<Square> {
        if index < self.square_count() {
            let width = self.width as usize;
            Some(Square::new((index % width) as u16, (index / width) as u16))
        } else {
            None
        }
    }

    /// Iterates over all squares, column by column.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.width).flat_map(move |col| (0..self.height).map(move |row| Square::new(col, row)))
    }

    /// Checks whether a closed knight's tour can exist on a board of this size.
    ///
    /// By Schwenk's theorem, with `m <= n` the sides of the board, there is no
    /// closed tour when both are odd, when `m` is 1, 2 or 4, or when `m` is 3 and
    /// `n` is 4, 6 or 8.
    pub fn admits_closed_tour(self) -> bool {
        let (m, n) = if self.width <= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };

        let both_odd = m % 2 == 1 && n % 2 == 1;
        let too_narrow = matches!(m, 1 | 2 | 4);
        let three_wide = m == 3 && matches!(n, 4 | 6 | 8);
        !(both_odd || too_narrow || three_wide)
    }
}
impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A square of the board, addressed by column and row starting from zero.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub col: u16,
    pub row: u16,
}
impl Square {
    /// The corner square where every tour starts.
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    #[inline(always)]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Row-major index of this square on a board of the given size.
    #[inline(always)]
    pub const fn index(self, size: BoardSize) -> usize {
        self.row as usize * size.width as usize + self.col as usize
    }

    /// Moves the square by a given offset, staying on the board.
    #[inline]
    pub fn jump(self, (dc, dr): (i8, i8), size: BoardSize) -> Option<Self> {
        let col = self.col.checked_add_signed(dc as i16)?;
        let row = self.row.checked_add_signed(dr as i16)?;
        let target = Self::new(col, row);
        size.contains(target).then_some(target)
    }

    /// All squares a knight standing here could jump to.
    pub fn knight_jumps(self, size: BoardSize) -> JumpList {
        let mut jumps = JumpList::new();
        for delta in KNIGHT_JUMPS {
            if let Some(target) = self.jump(delta, size) {
                // At most eight jumps, so the list cannot overflow.
                let _ = jumps.push(target);
            }
        }
        jumps
    }

    /// Checks if two squares are a knight's jump apart.
    #[inline]
    pub fn is_knight_jump(self, other: Self) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        (dc == 1 && dr == 2) || (dc == 2 && dr == 1)
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
