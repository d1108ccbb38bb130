use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use pieceshot_engine::capture::{Capture, CaptureError, CaptureRequest};
use serde::Serialize;

/// One line of the render job file.
#[derive(Debug, Serialize)]
struct RenderJob<'a> {
    /// Image file the renderer should write, relative to the job file.
    file: String,
    #[serde(flatten)]
    request: &'a CaptureRequest,
}

/// Captures by appending a render job per request to a JSON Lines file.
///
/// An external renderer replays the jobs to produce `{name}.png` images.
#[derive(Debug)]
pub(crate) struct JobCapture {
    writer: BufWriter<File>,
    path: PathBuf,
    count: usize,
}

impl JobCapture {
    pub(crate) fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create render job file: {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_owned(),
            count: 0,
        })
    }

    /// Flushes the job file, returning the number of jobs written.
    pub(crate) fn finish(mut self) -> anyhow::Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush render jobs to {}", self.path.display()))?;
        Ok(self.count)
    }

    fn write_job(&mut self, request: &CaptureRequest) -> io::Result<()> {
        let job = RenderJob {
            file: request.file_name(),
            request,
        };
        serde_json::to_writer(&mut self.writer, &job)?;
        writeln!(self.writer)
    }
}

impl Capture for JobCapture {
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError> {
        self.write_job(request).map_err(|source| CaptureError::Io {
            name: request.name.clone(),
            path: self.path.clone(),
            source,
        })?;
        self.count += 1;
        Ok(())
    }
}
