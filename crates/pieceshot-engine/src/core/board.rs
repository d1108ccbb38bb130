use arrayvec::ArrayVec;

use super::{
    piece::{Color, PieceKind, Placement},
    square::{MAX_SQUARES, Square},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("square ({}, {}) is already occupied", square.file, square.rank)]
pub struct SquareOccupiedError {
    pub square: Square,
}

/// Index of a placement within a [`BoardState`].
///
/// Handles are invalidated by [`BoardState::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementHandle(usize);

/// The pieces placed on the board during one pass.
///
/// Placements are kept in insertion order. No two placements share a square.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{BoardState, Color, PieceKind, Square};
///
/// let mut board = BoardState::new();
/// let handle = board
///     .place(PieceKind::Pawn, Color::White, Square::new(3, 2))
///     .unwrap();
///
/// assert_eq!(board.get(handle).unwrap().kind(), PieceKind::Pawn);
/// assert!(board.place(PieceKind::Rook, Color::Black, Square::new(3, 2)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    placements: ArrayVec<Placement, MAX_SQUARES>,
}

impl BoardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all placements.
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Places a piece on `square`.
    ///
    /// Fails if another piece already occupies the square.
    ///
    /// # Panics
    ///
    /// Panics if the board already holds [`MAX_SQUARES`] placements.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PlacementHandle, SquareOccupiedError> {
        if self.is_occupied(square) {
            return Err(SquareOccupiedError { square });
        }
        let handle = PlacementHandle(self.placements.len());
        self.placements.push(Placement::new(kind, color, square));
        Ok(handle)
    }

    #[must_use]
    pub fn get(&self, handle: PlacementHandle) -> Option<&Placement> {
        self.placements.get(handle.0)
    }

    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.placements.iter().any(|p| p.square() == square)
    }

    /// Returns all placements in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
