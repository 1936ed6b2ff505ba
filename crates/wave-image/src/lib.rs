//! Image codecs for the wave frame pipeline.
//!
//! Camera buffers (MJPEG, PNG replay files) are decoded into RGB
//! `Raster`s, and frames submitted for recognition are encoded as PNG.

pub mod error;

pub use error::ImageError;

use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;
use wave_base::Raster;

/// Decodes any supported image format into an RGB raster.
///
/// Grayscale and alpha variants are converted to 3-channel RGB so the rest of
/// the pipeline only ever sees one layout.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_rgb(data: &[u8]) -> Result<Raster, ImageError> {
    let rgb = image::load_from_memory(data)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Raster::new(width as usize, height as usize, 3, rgb.into_raw())?)
}

fn color_type(raster: &Raster) -> Result<ExtendedColorType, ImageError> {
    match raster.channels() {
        1 => Ok(ExtendedColorType::L8),
        3 => Ok(ExtendedColorType::Rgb8),
        4 => Ok(ExtendedColorType::Rgba8),
        n => Err(ImageError::Encode(format!("unsupported channel count: {n}"))),
    }
}

/// Encodes a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, ImageError> {
    let color = color_type(raster)?;
    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            raster.data(),
            raster.width() as u32,
            raster.height() as u32,
            color,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encodes a raster as JPEG bytes with the given quality (1-100).
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, ImageError> {
    let color = match color_type(raster)? {
        ExtendedColorType::Rgba8 => {
            return Err(ImageError::Encode("JPEG has no alpha channel".to_string()));
        }
        color => color,
    };
    let mut buffer = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            raster.data(),
            raster.width() as u32,
            raster.height() as u32,
            color,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encodes a raster as PNG and writes it to `path`, replacing any existing file.
pub fn write_png(raster: &Raster, path: impl AsRef<Path>) -> Result<(), ImageError> {
    let png = encode_png(raster)?;
    std::fs::write(path, png)?;
    Ok(())
}
