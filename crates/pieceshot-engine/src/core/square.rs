use serde::{Deserialize, Serialize};

use super::vec3::Vec3;

/// Vertical offset of every square's 3D location above the board origin.
pub const SQUARE_Y_OFFSET: f32 = -0.0054;

/// Largest supported side length of a board.
pub const MAX_BOARD_SIDE: u8 = 16;

/// Capacity of fixed-size square and placement buffers.
pub const MAX_SQUARES: usize = MAX_BOARD_SIDE as usize * MAX_BOARD_SIDE as usize;

/// Board dimensions in squares.
///
/// The default is the 8×8 chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u8,
    pub height: u8,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CHESS
    }
}

impl BoardSize {
    pub const CHESS: Self = Self {
        width: 8,
        height: 8,
    };

    #[must_use]
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both sides are within `1..=MAX_BOARD_SIDE`.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.width >= 1
            && self.width <= MAX_BOARD_SIDE
            && self.height >= 1
            && self.height <= MAX_BOARD_SIDE
    }

    /// Total number of squares (`width * height`).
    #[must_use]
    pub const fn num_squares(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub const fn contains(&self, square: Square) -> bool {
        square.file < self.width && square.rank < self.height
    }

    /// Returns the square at `(width / 2, height / 2)`.
    #[must_use]
    pub const fn center(&self) -> Square {
        Square::new(self.width / 2, self.height / 2)
    }

    /// Returns the linearized index `rank * width + file`.
    #[must_use]
    pub const fn linear_index(&self, square: Square) -> usize {
        square.rank as usize * self.width as usize + square.file as usize
    }

    /// Iterates over every square in row-major `(rank, file)` order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        let Self { width, height } = *self;
        (0..height).flat_map(move |rank| (0..width).map(move |file| Square::new(file, rank)))
    }
}

/// A board square given by file (column) and rank (row), both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Returns the board-local 3D location of the square.
    ///
    /// Files run along x, ranks along z, and every square sits at
    /// [`SQUARE_Y_OFFSET`].
    #[must_use]
    pub fn location(&self) -> Vec3 {
        Vec3::new(f32::from(self.file), SQUARE_Y_OFFSET, f32::from(self.rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_are_row_major() {
        let size = BoardSize::new(3, 2);
        let squares: Vec<_> = size.squares().collect();
        assert_eq!(
            squares,
            [
                Square::new(0, 0),
                Square::new(1, 0),
                Square::new(2, 0),
                Square::new(0, 1),
                Square::new(1, 1),
                Square::new(2, 1),
            ]
        );
        for (i, square) in squares.iter().enumerate() {
            assert_eq!(size.linear_index(*square), i);
        }
    }

    #[test]
    fn test_linear_index() {
        let size = BoardSize::CHESS;
        assert_eq!(size.linear_index(Square::new(3, 2)), 19);
        assert_eq!(size.linear_index(Square::new(7, 7)), 63);
    }

    #[test]
    fn test_center_and_bounds() {
        let size = BoardSize::CHESS;
        assert_eq!(size.center(), Square::new(4, 4));
        assert!(size.contains(Square::new(7, 0)));
        assert!(!size.contains(Square::new(8, 0)));
        assert!(size.is_supported());
        assert!(!BoardSize::new(0, 8).is_supported());
        assert!(!BoardSize::new(8, 17).is_supported());
    }

    #[test]
    fn test_location() {
        let location = Square::new(2, 5).location();
        assert_eq!(location, Vec3::new(2.0, SQUARE_Y_OFFSET, 5.0));
    }
}
