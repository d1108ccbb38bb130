use crate::{
    capture::CaptureError,
    core::{EmptyPoolError, SquareOccupiedError, SquareUnavailableError},
    dataset::EncodeError,
};

/// An error that aborts a generation run.
///
/// None of these are recoverable within a run: they indicate a placement bug
/// or a failed capture collaborator.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    #[display("cannot draw a square: {_0}")]
    EmptyPool(EmptyPoolError),
    #[display("cannot claim a square: {_0}")]
    SquareUnavailable(SquareUnavailableError),
    #[display("cannot place a piece: {_0}")]
    SquareOccupied(SquareOccupiedError),
    #[display("cannot encode the board: {_0}")]
    Encode(EncodeError),
    #[display("capture failed: {_0}")]
    Capture(CaptureError),
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The tick was consumed by the warm-up delay.
    WarmingUp,
    /// A capture with the given name was issued.
    Captured(String),
    /// The current pass ended without a capture because no camera pose was left.
    Skipped,
    /// The run is complete.
    Done,
}

/// Counts inert ticks after a state reset.
#[derive(Debug, Clone)]
pub(crate) struct WarmUp {
    delay: u32,
    elapsed: u32,
}

impl WarmUp {
    pub(crate) const fn new(delay: u32) -> Self {
        Self { delay, elapsed: 0 }
    }

    /// Consumes one tick if the delay has not elapsed yet.
    ///
    /// Returns `true` if the tick was consumed.
    pub(crate) fn consume(&mut self) -> bool {
        if self.elapsed < self.delay {
            self.elapsed += 1;
            return true;
        }
        false
    }

    pub(crate) fn reset(&mut self) {
        self.elapsed = 0;
    }
}
