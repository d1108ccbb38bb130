use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use pieceshot_engine::{
    BoardSeed,
    dataset::{self, EncodingScheme},
    engine::{BoardSampler, SamplerConfig},
};
use rand::Rng as _;

use crate::{
    capture::JobCapture,
    schema::run::{GeneratorInfo, RunRecord},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RandomBoardsArg {
    /// Sampler configuration file (JSON); missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of boards to generate
    #[arg(long)]
    num_boards: Option<usize>,
    /// Upper bound of the random pawn count of each color
    #[arg(long)]
    max_pawns_per_color: Option<usize>,
    /// Board position encoding (`narrow` or `full`)
    #[arg(long)]
    scheme: Option<EncodingScheme>,
    /// Seed (32 hex digits) for reproducible boards; random if omitted
    #[arg(long)]
    seed: Option<BoardSeed>,
    /// Ticks to wait before the first board
    #[arg(long)]
    frame_delay: Option<u32>,
    /// Directory receiving the render jobs, board positions and run metadata
    #[arg(long, default_value = "./data/images/")]
    output_dir: PathBuf,
}

impl RandomBoardsArg {
    fn load_config(&self) -> anyhow::Result<SamplerConfig> {
        let mut config: SamplerConfig = util::read_config_file(self.config.as_deref())?;
        if let Some(num_boards) = self.num_boards {
            config.total_boards = num_boards;
        }
        if let Some(max_pawns) = self.max_pawns_per_color {
            config.max_pawns_per_color = max_pawns;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if let Some(frame_delay) = self.frame_delay {
            config.frame_delay = frame_delay;
        }
        config.validate().context("Invalid random-board configuration")?;
        Ok(config)
    }
}

pub(crate) fn run(arg: &RandomBoardsArg) -> anyhow::Result<()> {
    let config = arg.load_config()?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    util::ensure_output_dir(&arg.output_dir)?;

    let captures_file = arg.output_dir.join("captures.jsonl");
    let capture = JobCapture::create(&captures_file)?;
    let mut sampler = BoardSampler::with_seed(config.clone(), capture, seed)
        .context("Invalid random-board configuration")?;

    eprintln!(
        "Generating {} random boards (seed {seed})...",
        config.total_boards
    );
    sampler.run().context("Random-board sampling failed")?;
    let (records, capture) = sampler.into_parts();
    let captures = capture.finish()?;

    let records_file = arg.output_dir.join("board_position.csv");
    dataset::flush(&records, &records_file)?;
    eprintln!(
        "Wrote {captures} render jobs and {} records to {}",
        records.len(),
        arg.output_dir.display()
    );

    let record = RunRecord {
        generated_at: Utc::now(),
        generator: GeneratorInfo::RandomBoards {
            config,
            seed,
            records_file,
            records: records.len(),
        },
        captures_file,
        captures,
    };
    util::save_json(&record, Some(&arg.output_dir.join("run.json")))?;

    Ok(())
}
