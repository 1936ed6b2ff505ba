use std::time::Instant;
use wave_base::Raster;

/// One decoded camera frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// RGB pixels, `[height, width, 3]`.
    pub raster: Raster,
    /// When the underlying buffer was grabbed.
    pub captured_at: Instant,
}

impl Frame {
    pub fn new(raster: Raster, captured_at: Instant) -> Self {
        Self {
            raster,
            captured_at,
        }
    }
}
