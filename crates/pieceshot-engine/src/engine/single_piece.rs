use crate::{
    capture::{CameraView, Capture, CaptureRequest},
    core::{BoardState, Color, PieceKind, Placement, PlacementHandle, SquarePool, Vec3},
};

use super::{
    camera::{CameraPose, camera_grid},
    config::{ConfigError, SessionConfig},
    enumerator::combinations,
    tick::{SessionError, TickOutcome, WarmUp},
};

/// Multiplier applied to the piece height to get the camera's look-at point.
pub const TARGET_HEIGHT_FACTOR: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Waiting to set up the next `(color, kind)` combination.
    Idle,
    /// A piece is on the board and images are being captured.
    Generating,
    /// Every combination has been captured.
    Done,
}

/// Drives the single-piece capture workflow one tick at a time.
///
/// For every `(color, kind)` combination in capture order, the controller
/// places that piece alone on the center square and captures
/// `total_images` images, each from the next pose of the camera grid.
/// Images are named `{color}_{kind}_{index}`.
///
/// After construction and after every pass, the first `frame_delay` ticks do
/// nothing so that the renderer can settle before the next capture.
///
/// # Example
///
/// ```
/// use pieceshot_engine::{
///     capture::CaptureLog,
///     engine::{SessionConfig, SessionController},
/// };
///
/// let config = SessionConfig {
///     total_images: 2,
///     frame_delay: 0,
///     camera_subdivisions: 2,
///     ..SessionConfig::default()
/// };
/// let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
/// assert_eq!(session.run().unwrap(), 24);
///
/// let capture = session.into_capture();
/// assert_eq!(capture.names().next(), Some("white_pawn_0"));
/// ```
#[derive(Debug)]
pub struct SessionController<C> {
    config: SessionConfig,
    capture: C,
    combinations: Vec<(Color, PieceKind)>,
    camera_poses: Vec<CameraPose>,
    board: BoardState,
    pool: SquarePool,
    state: SessionState,
    current_index: usize,
    image_count: usize,
    piece: Option<PlacementHandle>,
    warm_up: WarmUp,
    captures_issued: usize,
}

impl<C> SessionController<C>
where
    C: Capture,
{
    /// Creates a controller in the [`SessionState::Idle`] state.
    ///
    /// The configuration is validated and the camera grid generated up front.
    pub fn new(config: SessionConfig, capture: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera_poses = camera_grid(config.camera_subdivisions)?;
        let combinations = combinations(config.piece_kinds).collect();
        Ok(Self {
            pool: SquarePool::new(config.board_size),
            warm_up: WarmUp::new(config.frame_delay),
            config,
            capture,
            combinations,
            camera_poses,
            board: BoardState::new(),
            state: SessionState::Idle,
            current_index: 0,
            image_count: 0,
            piece: None,
            captures_issued: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the combination being captured, or the next one while idle.
    #[must_use]
    pub fn current_combination(&self) -> Option<(Color, PieceKind)> {
        self.combinations.get(self.current_index).copied()
    }

    #[must_use]
    pub fn captures_issued(&self) -> usize {
        self.captures_issued
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn camera_poses(&self) -> &[CameraPose] {
        &self.camera_poses
    }

    #[must_use]
    pub fn capture(&self) -> &C {
        &self.capture
    }

    #[must_use]
    pub fn into_capture(self) -> C {
        self.capture
    }

    /// Advances the workflow by one step.
    ///
    /// Each tick issues at most one capture.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        if self.state.is_done() {
            return Ok(TickOutcome::Done);
        }
        if self.warm_up.consume() {
            return Ok(TickOutcome::WarmingUp);
        }

        if self.state.is_idle() {
            let Some((color, kind)) = self.current_combination() else {
                self.state = SessionState::Done;
                return Ok(TickOutcome::Done);
            };
            self.setup_piece(color, kind)?;
            self.state = SessionState::Generating;
        }

        let piece = self
            .piece
            .and_then(|handle| self.board.get(handle))
            .copied();
        let pose = self
            .camera_poses
            .get(self.image_count)
            .filter(|_| self.image_count < self.config.total_images)
            .copied();
        let (Some(piece), Some(pose)) = (piece, pose) else {
            log::debug!(
                "pass {} ended after {} images",
                self.current_index,
                self.image_count
            );
            self.finish_pass();
            return Ok(TickOutcome::Skipped);
        };

        let name = self.capture_from(piece, pose)?;
        self.image_count += 1;
        if self.image_count >= self.config.total_images {
            self.finish_pass();
        }
        Ok(TickOutcome::Captured(name))
    }

    /// Ticks until the workflow is done.
    ///
    /// Returns the total number of captures issued.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        while !self.tick()?.is_done() {}
        Ok(self.captures_issued)
    }

    fn setup_piece(&mut self, color: Color, kind: PieceKind) -> Result<(), SessionError> {
        self.board.clear();
        self.pool.reset();
        let square = self.pool.claim(self.config.board_size.center())?;
        self.piece = Some(self.board.place(kind, color, square)?);
        log::debug!(
            "placed {color} {kind} at ({}, {})",
            square.file,
            square.rank
        );
        Ok(())
    }

    fn capture_from(
        &mut self,
        piece: Placement,
        pose: CameraPose,
    ) -> Result<String, SessionError> {
        let name = format!("{}_{}_{}", piece.color(), piece.kind(), self.image_count);
        let piece_location = piece.square().location();
        let look_at = Vec3::new(0.0, self.config.piece_height * TARGET_HEIGHT_FACTOR, 0.0);
        let request = CaptureRequest {
            name,
            width: self.config.image_size.width,
            height: self.config.image_size.height,
            view: Some(CameraView {
                eye: piece_location + pose.position,
                target: piece_location + look_at,
            }),
        };
        self.capture.capture(&request)?;
        self.captures_issued += 1;
        if self.captures_issued.is_multiple_of(100) {
            log::info!("captured {} images", self.captures_issued);
        }
        Ok(request.name)
    }

    fn finish_pass(&mut self) {
        self.current_index += 1;
        self.board.clear();
        self.pool.reset();
        self.piece = None;
        self.image_count = 0;
        if self.current_index >= self.combinations.len() {
            log::info!(
                "single-piece session done: {} captures",
                self.captures_issued
            );
            self.state = SessionState::Done;
            return;
        }
        self.warm_up.reset();
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::{
        capture::{CaptureError, CaptureLog},
        core::{SQUARE_Y_OFFSET, Square},
    };

    use super::*;

    fn config(total_images: usize, camera_subdivisions: usize, frame_delay: u32) -> SessionConfig {
        SessionConfig {
            total_images,
            camera_subdivisions,
            frame_delay,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_first_pass_scenario() {
        let mut session = SessionController::new(config(3, 2, 1), CaptureLog::new()).unwrap();
        assert_eq!(session.camera_poses().len(), 8);

        assert_eq!(session.tick().unwrap(), TickOutcome::WarmingUp);
        assert!(session.capture().requests().is_empty());
        for i in 0..3 {
            assert_eq!(
                session.tick().unwrap(),
                TickOutcome::Captured(format!("white_pawn_{i}"))
            );
        }

        let names: Vec<_> = session.capture().names().collect();
        assert_eq!(names, ["white_pawn_0", "white_pawn_1", "white_pawn_2"]);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.current_combination(),
            Some((Color::White, PieceKind::Knight))
        );
        assert!(session.board().is_empty());

        // The warm-up delay applies again before the next pass.
        assert_eq!(session.tick().unwrap(), TickOutcome::WarmingUp);
        assert_eq!(
            session.tick().unwrap(),
            TickOutcome::Captured("white_knight_0".to_owned())
        );
        assert_eq!(session.state(), SessionState::Generating);
    }

    #[test]
    fn test_warm_up_delays_first_capture() {
        let mut session = SessionController::new(config(1, 2, 50), CaptureLog::new()).unwrap();
        for _ in 0..50 {
            assert!(session.tick().unwrap().is_warming_up());
        }
        assert!(session.tick().unwrap().is_captured());
    }

    #[test]
    fn test_full_run_captures_every_combination() {
        let mut session = SessionController::new(config(2, 2, 0), CaptureLog::new()).unwrap();
        assert_eq!(session.run().unwrap(), 24);
        assert!(session.state().is_done());
        assert_eq!(session.tick().unwrap(), TickOutcome::Done);

        let capture = session.into_capture();
        let names: Vec<_> = capture.names().collect();
        assert_eq!(names[0], "white_pawn_0");
        assert_eq!(names[1], "white_pawn_1");
        assert_eq!(names[2], "white_knight_0");
        assert_eq!(names[12], "black_pawn_0");
        assert_eq!(names[23], "black_king_1");
    }

    #[test]
    fn test_camera_pose_exhaustion_skips_remaining_images() {
        let mut session = SessionController::new(config(10, 2, 0), CaptureLog::new()).unwrap();
        for _ in 0..8 {
            assert!(session.tick().unwrap().is_captured());
        }
        assert_eq!(session.tick().unwrap(), TickOutcome::Skipped);
        assert_eq!(
            session.current_combination(),
            Some((Color::White, PieceKind::Knight))
        );
        assert_eq!(session.run().unwrap(), 8 * 12);
    }

    #[test]
    fn test_zero_images_still_visits_every_combination() {
        let mut session = SessionController::new(config(0, 2, 0), CaptureLog::new()).unwrap();
        for _ in 0..12 {
            assert_eq!(session.tick().unwrap(), TickOutcome::Skipped);
        }
        assert_eq!(session.tick().unwrap(), TickOutcome::Done);
        assert_eq!(session.captures_issued(), 0);
    }

    #[test]
    fn test_limited_piece_kinds() {
        let config = SessionConfig {
            piece_kinds: 1,
            ..config(1, 2, 0)
        };
        let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
        session.run().unwrap();
        let names: Vec<_> = session.capture().names().collect();
        assert_eq!(names, ["white_pawn_0", "black_pawn_0"]);
    }

    #[test]
    fn test_capture_view_and_request() {
        let config = SessionConfig {
            piece_height: 0.01,
            ..config(2, 2, 0)
        };
        let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
        session.tick().unwrap();
        assert!(session.state().is_generating());

        let placements = session.board().snapshot();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].square(), Square::new(4, 4));
        assert_eq!(placements[0].kind(), PieceKind::Pawn);
        assert_eq!(placements[0].color(), Color::White);

        let request = &session.capture().requests()[0];
        assert_eq!((request.width, request.height), (512, 512));
        let view = request.view.unwrap();
        assert_eq!(view.eye, Vec3::new(3.5, 2.0 + SQUARE_Y_OFFSET, 3.5));
        assert_eq!(view.target.x, 4.0);
        assert_eq!(view.target.z, 4.0);
        assert!((view.target.y - (SQUARE_Y_OFFSET + 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_board_is_empty_between_passes_and_when_done() {
        let config = SessionConfig {
            piece_kinds: 1,
            ..config(1, 2, 0)
        };
        let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
        assert!(session.tick().unwrap().is_captured());
        assert!(session.state().is_idle());
        assert!(session.board().is_empty());

        assert!(session.tick().unwrap().is_captured());
        assert!(session.state().is_done());
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_names_follow_placed_piece_across_passes() {
        let config = SessionConfig {
            piece_kinds: 2,
            ..config(2, 2, 0)
        };
        let mut session = SessionController::new(config, CaptureLog::new()).unwrap();
        for expected in ["white_pawn_0", "white_pawn_1", "white_knight_0"] {
            assert_eq!(
                session.tick().unwrap(),
                TickOutcome::Captured(expected.to_owned())
            );
        }
        let placements = session.board().snapshot();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].kind(), PieceKind::Knight);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = SessionController::new(config(3, 1, 0), CaptureLog::new());
        assert!(matches!(
            result,
            Err(ConfigError::CameraSubdivisions { subdivisions: 1 })
        ));
    }

    struct FailingCapture;

    impl Capture for FailingCapture {
        fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError> {
            Err(CaptureError::Io {
                name: request.name.clone(),
                path: request.file_name().into(),
                source: io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn test_capture_failure_aborts_run() {
        let mut session = SessionController::new(config(3, 2, 0), FailingCapture).unwrap();
        let err = session.run().unwrap_err();
        assert!(matches!(err, SessionError::Capture(_)));
        assert_eq!(session.captures_issued(), 0);
    }
}
