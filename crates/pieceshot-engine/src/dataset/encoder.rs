use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, BoardState, Color, Placement};

use super::Record;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(
    "{} {} placement maps to row {row}, but the record has {num_rows} rows",
    placement.color(),
    placement.kind()
)]
pub struct EncodeError {
    pub placement: Placement,
    pub row: usize,
    pub num_rows: usize,
}

/// Row layout of an encoded [`Record`].
///
/// Both schemes place white pieces at the row of their kind ordinal. They
/// differ in where black pieces go.
///
/// Parses case-insensitively from `"narrow"` or `"full"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum EncodingScheme {
    /// Two rows; black pieces are shifted down by one row.
    ///
    /// Only distinguishes white and black pawns: any other kind maps past the
    /// second row and is rejected.
    #[default]
    Narrow,
    /// `2 * K` rows; black pieces are shifted down by `K`, the kind count.
    Full,
}

/// Converts board states into fixed-size records.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{
///     BoardSize, BoardState, Color, PieceKind, Square,
///     dataset::{Encoder, EncodingScheme},
/// };
///
/// let mut board = BoardState::new();
/// board.place(PieceKind::Pawn, Color::White, Square::new(3, 2)).unwrap();
///
/// let encoder = Encoder::new(EncodingScheme::Narrow, BoardSize::CHESS, 6);
/// let record = encoder.encode(&board).unwrap();
/// assert_eq!(record.get(0, 19), Some(1));
/// assert_eq!(record.count_ones(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    scheme: EncodingScheme,
    board_size: BoardSize,
    piece_kinds: usize,
}

impl Encoder {
    #[must_use]
    pub fn new(scheme: EncodingScheme, board_size: BoardSize, piece_kinds: usize) -> Self {
        Self {
            scheme,
            board_size,
            piece_kinds,
        }
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        match self.scheme {
            EncodingScheme::Narrow => 2,
            EncodingScheme::Full => 2 * self.piece_kinds,
        }
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.board_size.num_squares()
    }

    #[must_use]
    pub fn row_index(&self, placement: &Placement) -> usize {
        let offset = match (placement.color(), self.scheme) {
            (Color::White, _) => 0,
            (Color::Black, EncodingScheme::Narrow) => 1,
            (Color::Black, EncodingScheme::Full) => self.piece_kinds,
        };
        placement.kind().ordinal() + offset
    }

    /// Encodes every placement of `board` as a 1 cell.
    ///
    /// Placements writing the same cell overwrite each other.
    pub fn encode(&self, board: &BoardState) -> Result<Record, EncodeError> {
        let mut record = Record::zeros(self.num_rows(), self.num_columns());
        for placement in board.snapshot() {
            let row = self.row_index(placement);
            let column = self.board_size.linear_index(placement.square());
            if !record.mark(row, column) {
                return Err(EncodeError {
                    placement: *placement,
                    row,
                    num_rows: record.num_rows(),
                });
            }
        }
        Ok(record)
    }
}
