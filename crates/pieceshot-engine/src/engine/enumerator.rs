use crate::core::{Color, PieceKind};

/// Returns every `(Color, PieceKind)` pair in capture order.
///
/// Colors form the outer loop and piece kinds the inner loop, both in
/// declaration order. Dataset image numbering depends on this order.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{Color, PieceKind, engine::all_combinations};
///
/// let combinations: Vec<_> = all_combinations().collect();
/// assert_eq!(combinations.len(), 12);
/// assert_eq!(combinations[0], (Color::White, PieceKind::Pawn));
/// assert_eq!(combinations[6], (Color::Black, PieceKind::Pawn));
/// ```
pub fn all_combinations() -> impl Iterator<Item = (Color, PieceKind)> + Clone {
    combinations(PieceKind::LEN)
}

/// Like [`all_combinations`], but limited to the first `piece_kinds` kinds.
pub fn combinations(piece_kinds: usize) -> impl Iterator<Item = (Color, PieceKind)> + Clone {
    Color::ALL.into_iter().flat_map(move |color| {
        PieceKind::ALL
            .into_iter()
            .take(piece_kinds)
            .map(move |kind| (color, kind))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_combinations_order() {
        let combinations: Vec<_> = all_combinations().collect();
        assert_eq!(combinations.len(), Color::LEN * PieceKind::LEN);

        let expected: Vec<_> = [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| {
                [
                    PieceKind::Pawn,
                    PieceKind::Knight,
                    PieceKind::Bishop,
                    PieceKind::Rook,
                    PieceKind::Queen,
                    PieceKind::King,
                ]
                .map(|kind| (color, kind))
            })
            .collect();
        assert_eq!(combinations, expected);
        assert_eq!(combinations[5], (Color::White, PieceKind::King));
        assert_eq!(combinations[11], (Color::Black, PieceKind::King));
    }

    #[test]
    fn test_limited_combinations() {
        let combinations: Vec<_> = combinations(2).collect();
        assert_eq!(
            combinations,
            [
                (Color::White, PieceKind::Pawn),
                (Color::White, PieceKind::Knight),
                (Color::Black, PieceKind::Pawn),
                (Color::Black, PieceKind::Knight),
            ]
        );
    }
}
