use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RasterError {
    SizeOverflow,
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::SizeOverflow => write!(f, "raster dimensions overflow when multiplied"),
            RasterError::SizeMismatch { expected, got } => {
                write!(f, "raster size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// 8-bit interleaved pixel buffer in HWC order (`[height, width, channels]`).
#[derive(Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl fmt::Debug for Raster {
    // pixel data is omitted, frames are hundreds of kilobytes
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Raster {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(RasterError::SizeOverflow)?;

        if expected != data.len() {
            return Err(RasterError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a black RGB raster.
    pub fn black(width: usize, height: usize) -> Result<Self, RasterError> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::SizeOverflow)?;
        Self::new(width, height, 3, vec![0; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
