use serde::{Deserialize, Serialize};

use crate::{
    core::{BoardSize, MAX_BOARD_SIDE, PieceKind},
    dataset::EncodingScheme,
};

/// Invalid generator configuration.
///
/// Configurations are validated before any piece is placed or any capture is
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("camera subdivisions must be at least 2, got {subdivisions}")]
    CameraSubdivisions { subdivisions: usize },
    #[display("image dimensions must be positive, got {width}x{height}")]
    ImageDimensions { width: u32, height: u32 },
    #[display("board sides must be within 1..={MAX_BOARD_SIDE}, got {width}x{height}")]
    BoardSize { width: u8, height: u8 },
    #[display("piece kind count must be within 1..=6, got {piece_kinds}")]
    PieceKinds { piece_kinds: usize },
    #[display(
        "{max_pawns_per_color} pawns per color do not fit on a board of {num_squares} squares"
    )]
    PawnCapacity {
        max_pawns_per_color: usize,
        num_squares: usize,
    },
}

/// Resolution of a captured image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

impl ImageSize {
    fn validate(self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ImageDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn validate_board_size(size: BoardSize) -> Result<(), ConfigError> {
    if !size.is_supported() {
        return Err(ConfigError::BoardSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

fn validate_piece_kinds(piece_kinds: usize) -> Result<(), ConfigError> {
    if !(1..=PieceKind::LEN).contains(&piece_kinds) {
        return Err(ConfigError::PieceKinds { piece_kinds });
    }
    Ok(())
}

/// Configuration of a single-piece capture session.
///
/// Every field has a default, so partial JSON configuration files are
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub board_size: BoardSize,
    /// Number of piece kinds to capture, taken in ordinal order.
    pub piece_kinds: usize,
    /// Number of images captured for each `(color, kind)` combination.
    pub total_images: usize,
    pub image_size: ImageSize,
    /// Inert ticks after each state reset before anything is captured.
    pub frame_delay: u32,
    /// Number of camera grid values per axis.
    pub camera_subdivisions: usize,
    /// Height of a piece model, in board units.
    pub piece_height: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::CHESS,
            piece_kinds: PieceKind::LEN,
            total_images: 5,
            image_size: ImageSize::default(),
            frame_delay: 50,
            camera_subdivisions: 3,
            piece_height: 0.01,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        validate_piece_kinds(self.piece_kinds)?;
        self.image_size.validate()?;
        if self.camera_subdivisions < 2 {
            return Err(ConfigError::CameraSubdivisions {
                subdivisions: self.camera_subdivisions,
            });
        }
        Ok(())
    }
}

/// Configuration of a random-board sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub board_size: BoardSize,
    /// Number of boards to generate.
    pub total_boards: usize,
    pub image_size: ImageSize,
    /// Inert ticks before the first board is generated.
    pub frame_delay: u32,
    /// Upper bound (inclusive) of the random pawn count of each color.
    pub max_pawns_per_color: usize,
    pub scheme: EncodingScheme,
    /// Piece kind count `K`; the full encoding scheme has `2 * K` rows.
    pub piece_kinds: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::CHESS,
            total_boards: 5,
            image_size: ImageSize::default(),
            frame_delay: 50,
            max_pawns_per_color: 32,
            scheme: EncodingScheme::Narrow,
            piece_kinds: PieceKind::LEN,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        validate_piece_kinds(self.piece_kinds)?;
        self.image_size.validate()?;
        let num_squares = self.board_size.num_squares();
        if self.max_pawns_per_color * 2 > num_squares {
            return Err(ConfigError::PawnCapacity {
                max_pawns_per_color: self.max_pawns_per_color,
                num_squares,
            });
        }
        Ok(())
    }
}
