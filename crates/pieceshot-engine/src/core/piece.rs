use std::fmt;

use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds, in declaration order.
///
/// The ordinal of each kind is part of the dataset format: it selects the
/// record row a placement is written to and the position of the kind in the
/// capture sequence.
///
/// # Example
///
/// ```
/// use pieceshot_engine::PieceKind;
///
/// assert_eq!(PieceKind::Rook.ordinal(), 3);
/// assert_eq!(PieceKind::Rook.to_string(), "rook");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Number of piece kinds (6).
    pub const LEN: usize = 6;

    /// All piece kinds in ordinal order.
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the lowercase name used in capture names (`"pawn"`, `"knight"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of colors (2).
    pub const LEN: usize = 2;

    /// All colors in ordinal order.
    pub const ALL: [Color; Self::LEN] = [Color::White, Color::Black];

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single piece bound to a square.
///
/// Placements are immutable; a board is changed by clearing it and placing
/// pieces again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Placement {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i);
        }
        assert_eq!(Color::White.ordinal(), 0);
        assert_eq!(Color::Black.ordinal(), 1);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = PieceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["pawn", "knight", "bishop", "rook", "queen", "king"]
        );
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&PieceKind::Queen).unwrap(),
            "\"queen\""
        );
        let color: Color = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(color, Color::White);
    }
}
