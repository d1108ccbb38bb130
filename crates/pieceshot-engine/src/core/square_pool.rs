use std::fmt;

use arrayvec::ArrayVec;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::square::{BoardSize, MAX_SQUARES, Square};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no free squares left in the pool")]
pub struct EmptyPoolError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("square ({}, {}) is not available in the pool", square.file, square.rank)]
pub struct SquareUnavailableError {
    pub square: Square,
}

/// Seed for deterministic square sampling.
///
/// A 128-bit seed for the pool's random number generator. Two pools created
/// with the same seed and board size draw the same sequence of squares, which
/// keeps generated datasets reproducible.
///
/// Serialized as a 32-character hex string.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{BoardSeed, BoardSize, SquarePool};
/// use rand::Rng as _;
///
/// let seed: BoardSeed = rand::rng().random();
/// let mut pool1 = SquarePool::with_seed(BoardSize::CHESS, seed);
/// let mut pool2 = SquarePool::with_seed(BoardSize::CHESS, seed);
///
/// assert_eq!(pool1.draw().unwrap(), pool2.draw().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSeed([u8; 16]);

impl BoardSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl std::str::FromStr for BoardSeed {
    type Err = String;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        if hex_str.len() != 32 {
            return Err(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            ));
        }
        let num =
            u128::from_str_radix(hex_str, 16).map_err(|e| format!("invalid hex: {hex_str} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for BoardSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BoardSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<BoardSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BoardSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        BoardSeed(seed)
    }
}

/// The set of currently unoccupied squares of a board.
///
/// Squares are drawn without replacement, so two draws within the same pass
/// never return the same square. [`Self::reset`] refills the pool in
/// row-major `(rank, file)` order.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{BoardSize, Square, SquarePool};
///
/// let mut pool = SquarePool::new(BoardSize::new(2, 2));
/// assert_eq!(pool.draw_first().unwrap(), Square::new(0, 0));
/// assert_eq!(pool.len(), 3);
///
/// pool.reset();
/// assert_eq!(pool.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SquarePool {
    size: BoardSize,
    rng: Pcg32,
    squares: ArrayVec<Square, MAX_SQUARES>,
}

impl SquarePool {
    /// Creates a full pool with a random seed.
    ///
    /// For reproducible sampling, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self::with_seed(size, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic draws.
    ///
    /// # Panics
    ///
    /// Panics if `size` has more than [`MAX_SQUARES`] squares.
    #[must_use]
    pub fn with_seed(size: BoardSize, seed: BoardSeed) -> Self {
        assert!(
            size.num_squares() <= MAX_SQUARES,
            "board size {}x{} exceeds the square capacity",
            size.width,
            size.height
        );
        let mut this = Self {
            size,
            rng: Pcg32::from_seed(seed.0),
            squares: ArrayVec::new(),
        };
        this.reset();
        this
    }

    /// Refills the pool with every square of the board.
    pub fn reset(&mut self) {
        self.squares.clear();
        self.squares.extend(self.size.squares());
    }

    /// Removes and returns a uniformly random remaining square.
    pub fn draw(&mut self) -> Result<Square, EmptyPoolError> {
        if self.squares.is_empty() {
            return Err(EmptyPoolError);
        }
        let index = self.rng.random_range(0..self.squares.len());
        Ok(self.squares.remove(index))
    }

    /// Removes and returns the first remaining square in enumeration order.
    pub fn draw_first(&mut self) -> Result<Square, EmptyPoolError> {
        if self.squares.is_empty() {
            return Err(EmptyPoolError);
        }
        Ok(self.squares.remove(0))
    }

    /// Removes a specific square from the pool.
    pub fn claim(&mut self, square: Square) -> Result<Square, SquareUnavailableError> {
        let index = self
            .squares
            .iter()
            .position(|s| *s == square)
            .ok_or(SquareUnavailableError { square })?;
        Ok(self.squares.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns the remaining squares in enumeration order.
    #[must_use]
    pub fn remaining(&self) -> &[Square] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SEED: BoardSeed = BoardSeed([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    #[test]
    fn test_exactly_n_draws_succeed() {
        for (width, height) in [(1, 1), (2, 3), (8, 8), (16, 16)] {
            let size = BoardSize::new(width, height);
            let mut pool = SquarePool::with_seed(size, SEED);
            let mut drawn = HashSet::new();
            for _ in 0..size.num_squares() {
                let square = pool.draw().unwrap();
                assert!(size.contains(square));
                assert!(drawn.insert(square), "square {square:?} drawn twice");
            }
            assert!(pool.is_empty());
            assert!(pool.draw().is_err());
        }
    }

    #[test]
    fn test_draw_first_is_enumeration_order() {
        let size = BoardSize::CHESS;
        let mut pool = SquarePool::with_seed(size, SEED);
        for expected in size.squares() {
            assert_eq!(pool.draw_first().unwrap(), expected);
        }
        assert!(pool.draw_first().is_err());
    }

    #[test]
    fn test_reset_restores_all_squares() {
        let size = BoardSize::CHESS;
        let mut pool = SquarePool::with_seed(size, SEED);
        for _ in 0..10 {
            pool.draw().unwrap();
        }
        pool.reset();
        assert_eq!(pool.len(), 64);
        assert!(pool.remaining().iter().copied().eq(size.squares()));
    }

    #[test]
    fn test_claim() {
        let mut pool = SquarePool::with_seed(BoardSize::CHESS, SEED);
        let center = BoardSize::CHESS.center();
        assert_eq!(pool.claim(center).unwrap(), center);
        assert_eq!(pool.len(), 63);
        assert!(!pool.remaining().contains(&center));
        assert!(pool.claim(center).is_err());
        assert!(pool.claim(Square::new(9, 0)).is_err());
    }

    #[test]
    fn test_deterministic_draws() {
        let mut pool1 = SquarePool::with_seed(BoardSize::CHESS, SEED);
        let mut pool2 = SquarePool::with_seed(BoardSize::CHESS, SEED);
        for _ in 0..64 {
            assert_eq!(pool1.draw().unwrap(), pool2.draw().unwrap());
        }
    }

    mod board_seed_serialization {
        use super::*;

        #[test]
        fn test_known_value_sequential_bytes() {
            let seed = BoardSeed([
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ]);
            let serialized = serde_json::to_string(&seed).unwrap();
            assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");

            let deserialized: BoardSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, seed);
        }

        #[test]
        fn test_error_invalid_hex() {
            for json in [
                "\"ghijklmnopqrstuvwxyzghijklmnopqr\"",
                "\"0123456789abcdef0123456789abcde\"",
                "\"\"",
            ] {
                let result: Result<BoardSeed, _> = serde_json::from_str(json);
                let err_msg = result.unwrap_err().to_string();
                assert!(err_msg.contains("invalid hex"), "{err_msg}");
            }
        }

        #[test]
        fn test_parse_matches_display() {
            let seed: BoardSeed = rand::rng().random();
            let parsed: BoardSeed = seed.to_string().parse().unwrap();
            assert_eq!(parsed, seed);
        }
    }
}
