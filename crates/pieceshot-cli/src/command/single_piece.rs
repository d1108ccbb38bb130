use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use pieceshot_engine::engine::{SessionConfig, SessionController};

use crate::{
    capture::JobCapture,
    schema::run::{GeneratorInfo, RunRecord},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SinglePieceArg {
    /// Session configuration file (JSON); missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of images per piece and color
    #[arg(long)]
    total_images: Option<usize>,
    /// Number of piece kinds to capture, in ordinal order (1-6)
    #[arg(long)]
    piece_kinds: Option<usize>,
    /// Number of camera grid values per axis
    #[arg(long)]
    camera_subdivisions: Option<usize>,
    /// Image width in pixels
    #[arg(long)]
    image_width: Option<u32>,
    /// Image height in pixels
    #[arg(long)]
    image_height: Option<u32>,
    /// Ticks to wait after each reset before capturing
    #[arg(long)]
    frame_delay: Option<u32>,
    /// Directory receiving the render jobs and run metadata
    #[arg(long, default_value = "./data/images/")]
    output_dir: PathBuf,
}

impl SinglePieceArg {
    fn load_config(&self) -> anyhow::Result<SessionConfig> {
        let mut config: SessionConfig = util::read_config_file(self.config.as_deref())?;
        if let Some(total_images) = self.total_images {
            config.total_images = total_images;
        }
        if let Some(piece_kinds) = self.piece_kinds {
            config.piece_kinds = piece_kinds;
        }
        if let Some(subdivisions) = self.camera_subdivisions {
            config.camera_subdivisions = subdivisions;
        }
        if let Some(width) = self.image_width {
            config.image_size.width = width;
        }
        if let Some(height) = self.image_height {
            config.image_size.height = height;
        }
        if let Some(frame_delay) = self.frame_delay {
            config.frame_delay = frame_delay;
        }
        config.validate().context("Invalid single-piece session configuration")?;
        Ok(config)
    }
}

pub(crate) fn run(arg: &SinglePieceArg) -> anyhow::Result<()> {
    let config = arg.load_config()?;
    util::ensure_output_dir(&arg.output_dir)?;

    let captures_file = arg.output_dir.join("captures.jsonl");
    let capture = JobCapture::create(&captures_file)?;
    let mut session = SessionController::new(config.clone(), capture)
        .context("Invalid single-piece session configuration")?;

    eprintln!(
        "Capturing {} images for each of {} pieces...",
        config.total_images,
        config.piece_kinds * 2,
    );
    session.run().context("Single-piece session failed")?;
    let captures = session.into_capture().finish()?;
    eprintln!(
        "Wrote {captures} render jobs to {}",
        captures_file.display()
    );

    let record = RunRecord {
        generated_at: Utc::now(),
        generator: GeneratorInfo::SinglePiece { config },
        captures_file,
        captures,
    };
    util::save_json(&record, Some(&arg.output_dir.join("run.json")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let arg = SinglePieceArg {
            total_images: Some(2),
            image_width: Some(128),
            frame_delay: Some(0),
            ..SinglePieceArg::default()
        };
        let config = arg.load_config().unwrap();
        assert_eq!(config.total_images, 2);
        assert_eq!(config.image_size.width, 128);
        assert_eq!(config.image_size.height, 512);
        assert_eq!(config.frame_delay, 0);
        assert_eq!(config.camera_subdivisions, 3);
    }

    #[test]
    fn test_invalid_config_keeps_previous_outputs() {
        let output_dir = env::temp_dir().join(format!("pieceshot-single-{}", process::id()));
        fs::create_dir_all(&output_dir).unwrap();
        let captures_file = output_dir.join("captures.jsonl");
        fs::write(&captures_file, "{\"name\":\"previous\"}\n").unwrap();

        let arg = SinglePieceArg {
            camera_subdivisions: Some(1),
            output_dir: output_dir.clone(),
            ..SinglePieceArg::default()
        };
        assert!(run(&arg).is_err());

        let content = fs::read_to_string(&captures_file).unwrap();
        fs::remove_dir_all(&output_dir).unwrap();
        assert_eq!(content, "{\"name\":\"previous\"}\n");
    }
}
