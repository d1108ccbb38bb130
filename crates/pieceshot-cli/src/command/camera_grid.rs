use std::path::PathBuf;

use pieceshot_engine::engine::camera_grid;

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CameraGridArg {
    /// Number of grid values per axis
    #[arg(long, default_value_t = 3)]
    subdivisions: usize,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CameraGridArg) -> anyhow::Result<()> {
    let CameraGridArg {
        subdivisions,
        output,
    } = arg;
    let poses = camera_grid(*subdivisions)?;
    log::debug!("generated {} camera poses", poses.len());
    util::save_json(&poses, output.as_deref())?;
    Ok(())
}
