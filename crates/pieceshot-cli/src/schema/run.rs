use std::path::PathBuf;

use chrono::{DateTime, Utc};
use pieceshot_engine::{
    BoardSeed,
    engine::{SamplerConfig, SessionConfig},
};
use serde::{Deserialize, Serialize};

/// Metadata of a finished generation run, saved next to its outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Timestamp when the run finished (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Generation mode and the configuration it ran with
    pub generator: GeneratorInfo,
    /// Render job file listing every capture
    pub captures_file: PathBuf,
    /// Number of captures issued
    pub captures: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GeneratorInfo {
    /// One piece per pass, captured from a camera grid
    SinglePiece { config: SessionConfig },
    /// Random pawn boards with exported board positions
    RandomBoards {
        config: SamplerConfig,
        seed: BoardSeed,
        records_file: PathBuf,
        records: usize,
    },
}
