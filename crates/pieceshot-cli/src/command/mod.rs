use clap::{Parser, Subcommand};

use self::{
    camera_grid::CameraGridArg, random_boards::RandomBoardsArg, single_piece::SinglePieceArg,
};

mod camera_grid;
mod random_boards;
mod single_piece;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Capture every piece alone on the board from a grid of camera poses
    SinglePiece(#[clap(flatten)] SinglePieceArg),
    /// Generate random pawn boards and export their board positions
    RandomBoards(#[clap(flatten)] RandomBoardsArg),
    /// Print the camera pose grid as JSON
    CameraGrid(#[clap(flatten)] CameraGridArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logger::init(args.verbose)?;
    match args.mode {
        Mode::SinglePiece(arg) => single_piece::run(&arg)?,
        Mode::RandomBoards(arg) => random_boards::run(&arg)?,
        Mode::CameraGrid(arg) => camera_grid::run(&arg)?,
    }
    Ok(())
}
