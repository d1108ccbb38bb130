//! Tick-driven generation workflows.
//!
//! This module drives the core data structures through a capture run:
//!
//! - [`SessionController`] - Captures every `(color, kind)` combination alone on the
//!   board from a grid of camera poses
//! - [`BoardSampler`] - Generates random pawn boards and accumulates their records
//! - [`all_combinations`] - The fixed capture order of `(color, kind)` pairs
//! - [`camera_grid`] - Camera poses sampled on a regular grid
//!
//! # Tick Flow
//!
//! Both workflows are advanced by a caller-owned loop, one `tick()` per step:
//!
//! 1. The first `frame_delay` ticks after a reset are inert (warm-up)
//! 2. Each following tick issues at most one capture
//! 3. When all work is done, every further tick returns [`TickOutcome::Done`]
//!
//! # Example
//!
//! ```
//! use pieceshot_engine::{
//!     capture::CaptureLog,
//!     engine::{SessionConfig, SessionController, TickOutcome},
//! };
//!
//! let config = SessionConfig {
//!     total_images: 1,
//!     frame_delay: 1,
//!     ..SessionConfig::default()
//! };
//! let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
//!
//! assert_eq!(session.tick().unwrap(), TickOutcome::WarmingUp);
//! assert_eq!(
//!     session.tick().unwrap(),
//!     TickOutcome::Captured("white_pawn_0".to_owned())
//! );
//! ```

pub use self::{
    board_sampler::*, camera::*, config::*, enumerator::*, single_piece::*, tick::*,
};

mod board_sampler;
mod camera;
mod config;
mod enumerator;
mod single_piece;
mod tick;
