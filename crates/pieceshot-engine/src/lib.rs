//! Board-state dataset generation for chess piece images.
//!
//! Pieces are placed on a board, each configuration is handed to an external
//! capture collaborator to be rendered, and the board states are encoded as
//! fixed-size 0/1 grids for a machine-learning dataset.
//!
//! - [`core`] - Squares, pieces, board state and the free-square pool
//! - [`engine`] - Tick-driven capture workflows and their configuration
//! - [`dataset`] - Record encoding and CSV export
//! - [`capture`] - The capture collaborator interface

pub use self::core::*;

pub mod capture;
pub mod core;
pub mod dataset;
pub mod engine;
