//! The capture collaborator.
//!
//! Rendering lives outside this crate. The engine only asks a [`Capture`]
//! implementation to persist the current frame under a logical name, from an
//! optional camera view.

use std::{io, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CaptureError {
    #[display("failed to persist capture {name} to {}", path.display())]
    Io {
        name: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// Camera placement for a capture: where it stands and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

/// A request to persist one image of the current scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Camera to render from; `None` keeps the renderer's current camera.
    pub view: Option<CameraView>,
}

impl CaptureRequest {
    /// Returns the image file name, `{name}.png`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Persists images of the current scene.
///
/// Captures are synchronous: `capture` returns once the image has been
/// persisted, so a caller never has more than one capture in flight.
pub trait Capture {
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError>;
}

impl<C> Capture for &mut C
where
    C: Capture + ?Sized,
{
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError> {
        (**self).capture(request)
    }
}

/// A [`Capture`] that keeps every request in memory.
///
/// Useful for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct CaptureLog {
    requests: Vec<CaptureRequest>,
}

impl CaptureLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn requests(&self) -> &[CaptureRequest] {
        &self.requests
    }

    /// Returns the names of all requests in the order they were made.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.requests.iter().map(|r| r.name.as_str())
    }
}

impl Capture for CaptureLog {
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError> {
        self.requests.push(request.clone());
        Ok(())
    }
}
