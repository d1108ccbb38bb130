use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    capture::{Capture, CaptureRequest},
    core::{BoardSeed, BoardState, Color, PieceKind, SquarePool},
    dataset::{Encoder, Record},
};

use super::{
    config::{ConfigError, SamplerConfig},
    tick::{SessionError, TickOutcome, WarmUp},
};

const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SamplerState {
    Generating,
    Done,
}

/// Generates random pawn boards and their records, one board per tick.
///
/// Each board holds a random number (`0..=max_pawns_per_color`) of white
/// pawns and, independently, of black pawns on random distinct squares. The
/// board is encoded into a [`Record`] and captured as `board_{n}`.
///
/// The warm-up delay applies once, before the first board.
#[derive(Debug)]
pub struct BoardSampler<C> {
    config: SamplerConfig,
    capture: C,
    encoder: Encoder,
    rng: Pcg32,
    board: BoardState,
    pool: SquarePool,
    state: SamplerState,
    warm_up: WarmUp,
    records: Vec<Record>,
}

impl<C> BoardSampler<C>
where
    C: Capture,
{
    /// Creates a sampler with a random seed.
    pub fn new(config: SamplerConfig, capture: C) -> Result<Self, ConfigError> {
        Self::with_seed(config, capture, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible boards.
    pub fn with_seed(
        config: SamplerConfig,
        capture: C,
        seed: BoardSeed,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::from_seed(seed.to_bytes());
        let pool = SquarePool::with_seed(config.board_size, rng.random());
        let encoder = Encoder::new(config.scheme, config.board_size, config.piece_kinds);
        let state = if config.total_boards == 0 {
            SamplerState::Done
        } else {
            SamplerState::Generating
        };
        Ok(Self {
            records: Vec::with_capacity(config.total_boards),
            warm_up: WarmUp::new(config.frame_delay),
            config,
            capture,
            encoder,
            rng,
            board: BoardState::new(),
            pool,
            state,
        })
    }

    #[must_use]
    pub fn state(&self) -> SamplerState {
        self.state
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Records of the boards generated so far, in generation order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the sampler, returning the accumulated records and the capture.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Record>, C) {
        (self.records, self.capture)
    }

    /// Generates, encodes and captures the next board.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        if self.state.is_done() {
            return Ok(TickOutcome::Done);
        }
        if self.warm_up.consume() {
            return Ok(TickOutcome::WarmingUp);
        }

        let count = self.records.len();
        self.place_random_pawns()?;
        let record = self.encoder.encode(&self.board)?;

        let request = CaptureRequest {
            name: format!("board_{count}"),
            width: self.config.image_size.width,
            height: self.config.image_size.height,
            view: None,
        };
        self.capture.capture(&request)?;
        self.records.push(record);

        let generated = self.records.len();
        if generated.is_multiple_of(PROGRESS_INTERVAL) {
            log::info!("generated {generated} boards");
        }
        if generated >= self.config.total_boards {
            log::info!("board sampling done: {generated} boards");
            self.state = SamplerState::Done;
        }
        Ok(TickOutcome::Captured(request.name))
    }

    /// Ticks until every board has been generated.
    ///
    /// Returns the number of records.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        while !self.tick()?.is_done() {}
        Ok(self.records.len())
    }

    fn place_random_pawns(&mut self) -> Result<(), SessionError> {
        self.board.clear();
        self.pool.reset();
        let max = self.config.max_pawns_per_color;
        let white = self.rng.random_range(0..=max);
        let black = self.rng.random_range(0..=max);
        for (color, count) in [(Color::White, white), (Color::Black, black)] {
            for _ in 0..count {
                let square = self.pool.draw()?;
                self.board.place(PieceKind::Pawn, color, square)?;
            }
        }
        log::debug!("placed {white} white and {black} black pawns");
        Ok(())
    }
}
