use crate::GestureError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use wave_camera::Frame;

// shared by every store so a number is never handed out twice per process
static NEXT_FRAME: AtomicU64 = AtomicU64::new(0);

/// Directory of numbered PNG copies of every frame sent for recognition.
///
/// Files are written for debugging and auditing only; nothing reads them back.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `frame` as `frame_<n>.png` and return its path.
    pub fn persist(&self, frame: &Frame) -> Result<PathBuf, GestureError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| GestureError::Artifact(format!("{}: {}", self.dir.display(), e)))?;

        let n = NEXT_FRAME.fetch_add(1, Ordering::Relaxed);
        let path = self.dir.join(format!("frame_{}.png", n));
        wave_image::write_png(&frame.raster, &path)?;
        log::debug!("{} written", path.display());
        Ok(path)
    }
}
