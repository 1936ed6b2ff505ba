use crate::{CameraConfig, CameraError, DeviceLease, Frame, FrameSampler, convert};
use std::time::Instant;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Mjpeg,
    Yuyv,
}

/// V4L2 webcam sampler.
///
/// Asks the device for MJPEG at the configured size and rate and falls back
/// to YUYV when the device insists on it.
pub struct V4l2Sampler {
    config: CameraConfig,
    lease: Option<DeviceLease>,
    stream: Option<MmapStream<'static>>,
    encoding: Encoding,
    width: usize,
    height: usize,
    // reused across grabs so the camera-rate path does not allocate
    payload: Vec<u8>,
    grabbed_at: Option<Instant>,
}

impl std::fmt::Debug for V4l2Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Sampler")
            .field("config", &self.config)
            .field("open", &self.stream.is_some())
            .field("encoding", &self.encoding)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl V4l2Sampler {
    /// Create a closed sampler; nothing touches the device until `open`.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            lease: None,
            stream: None,
            encoding: Encoding::Mjpeg,
            width: 0,
            height: 0,
            payload: Vec::new(),
            grabbed_at: None,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    fn unavailable(&self, err: impl std::fmt::Display) -> CameraError {
        CameraError::DeviceUnavailable(format!("{}: {}", self.config.device().display(), err))
    }

    fn open_stream(&mut self) -> Result<MmapStream<'static>, CameraError> {
        let device = Device::with_path(self.config.device()).map_err(|e| self.unavailable(e))?;

        let requested = Format::new(self.config.width(), self.config.height(), FourCC::new(b"MJPG"));
        let actual = Capture::set_format(&device, &requested).map_err(|e| self.unavailable(e))?;
        self.encoding = match &actual.fourcc.repr {
            b"MJPG" => Encoding::Mjpeg,
            b"YUYV" => Encoding::Yuyv,
            _ => {
                return Err(self.unavailable(format!("unsupported pixel format {}", actual.fourcc)));
            }
        };
        self.width = actual.width as usize;
        self.height = actual.height as usize;

        let params = v4l::video::capture::Parameters::with_fps(self.config.fps());
        Capture::set_params(&device, &params).map_err(|e| self.unavailable(e))?;

        MmapStream::with_buffers(&device, Type::VideoCapture, self.config.buffer_count())
            .map_err(|e| self.unavailable(e))
    }
}

/// Copy the used part of a dequeued buffer into `dst`, keeping its allocation.
fn copy_payload(dst: &mut Vec<u8>, data: &[u8], bytesused: u32) {
    let used = bytesused as usize;
    let src = if used > 0 && used <= data.len() {
        &data[..used]
    } else {
        data
    };
    dst.clear();
    dst.extend_from_slice(src);
}

impl FrameSampler for V4l2Sampler {
    fn open(&mut self) -> Result<(), CameraError> {
        let lease = DeviceLease::acquire(self.config.device())?;
        let stream = self.open_stream()?;

        log::info!(
            "opened {} at {}x{} ({:?})",
            self.config.device().display(),
            self.width,
            self.height,
            self.encoding
        );
        self.stream = Some(stream);
        self.lease = Some(lease);
        self.grabbed_at = None;
        Ok(())
    }

    fn grab(&mut self) -> Result<(), CameraError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| CameraError::GrabFailed("device is closed".to_string()))?;

        let (data, meta) =
            CaptureStream::next(stream).map_err(|e| CameraError::GrabFailed(e.to_string()))?;

        // the mmap buffer is requeued by the next dequeue, so keep a copy
        copy_payload(&mut self.payload, data, meta.bytesused);
        self.grabbed_at = Some(Instant::now());
        Ok(())
    }

    fn retrieve(&mut self) -> Result<Frame, CameraError> {
        let captured_at = self
            .grabbed_at
            .ok_or_else(|| CameraError::DecodeFailed("nothing grabbed yet".to_string()))?;

        let raster = match self.encoding {
            Encoding::Mjpeg => wave_image::decode_rgb(&self.payload)?,
            Encoding::Yuyv => convert::yuyv_to_raster(&self.payload, self.width, self.height)?,
        };
        Ok(Frame::new(raster, captured_at))
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            log::info!("closed {}", self.config.device().display());
        }
        self.grabbed_at = None;
        self.lease = None;
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for V4l2Sampler {
    fn drop(&mut self) {
        self.close();
    }
}
