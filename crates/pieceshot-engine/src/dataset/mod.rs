//! Dataset encoding and export.
//!
//! - [`Encoder`] - Converts a [`BoardState`](crate::BoardState) into a [`Record`]
//! - [`Record`] - Fixed-size 0/1 grid, one row per `(color, kind)` class
//! - [`flush`] - Writes accumulated records as a headerless CSV file

pub use self::{encoder::*, exporter::*, record::*};

mod encoder;
mod exporter;
mod record;
