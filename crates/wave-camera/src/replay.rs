use crate::{CameraError, Frame, FrameSampler};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Frame sampler that cycles over image files instead of a camera.
///
/// Useful for running the control loop on a machine without a webcam, and
/// for feeding known hand poses to the recognition service. `grab` reads the
/// next file and waits out the frame interval, imitating a camera's pace.
#[derive(Debug)]
pub struct ReplaySampler {
    paths: Vec<PathBuf>,
    frame_interval: Duration,
    cursor: usize,
    grabbed: Option<(Vec<u8>, Instant)>,
    open: bool,
}

impl ReplaySampler {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            frame_interval: Duration::from_millis(33),
            cursor: 0,
            grabbed: None,
            open: false,
        }
    }

    /// Collect every file in `dir`, sorted by name.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, CameraError> {
        let dir = dir.into();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| CameraError::DeviceUnavailable(format!("{}: {}", dir.display(), e)))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(Self::new(paths))
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl FrameSampler for ReplaySampler {
    fn open(&mut self) -> Result<(), CameraError> {
        if self.open {
            return Err(CameraError::DeviceUnavailable(
                "replay sampler is already open".to_string(),
            ));
        }
        if self.paths.is_empty() {
            return Err(CameraError::DeviceUnavailable(
                "no images to replay".to_string(),
            ));
        }
        if let Some(missing) = self.paths.iter().find(|path| !path.is_file()) {
            return Err(CameraError::DeviceUnavailable(format!(
                "{} does not exist",
                missing.display()
            )));
        }
        self.cursor = 0;
        self.grabbed = None;
        self.open = true;
        Ok(())
    }

    fn grab(&mut self) -> Result<(), CameraError> {
        if !self.open {
            return Err(CameraError::GrabFailed("sampler is closed".to_string()));
        }
        if !self.frame_interval.is_zero() {
            std::thread::sleep(self.frame_interval);
        }
        let path = &self.paths[self.cursor];
        self.cursor = (self.cursor + 1) % self.paths.len();
        let bytes = std::fs::read(path)
            .map_err(|e| CameraError::GrabFailed(format!("{}: {}", path.display(), e)))?;
        self.grabbed = Some((bytes, Instant::now()));
        Ok(())
    }

    fn retrieve(&mut self) -> Result<Frame, CameraError> {
        let (bytes, captured_at) = self
            .grabbed
            .as_ref()
            .ok_or_else(|| CameraError::DecodeFailed("nothing grabbed yet".to_string()))?;
        let raster = wave_image::decode_rgb(bytes)?;
        Ok(Frame::new(raster, *captured_at))
    }

    fn close(&mut self) {
        self.grabbed = None;
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
