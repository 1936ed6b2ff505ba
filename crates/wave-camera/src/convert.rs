use crate::CameraError;
use wave_base::Raster;

// BT.601 YUV-to-RGB for a single pixel (fixed-point, shift 8)
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    [r, g, b]
}

/// Converts packed YUYV 4:2:2 (`[Y0, U, Y1, V, ...]`) into an RGB raster.
///
/// Cameras that refuse MJPEG fall back to YUYV, so this is the decode path
/// for those devices. Trailing bytes beyond `width * height * 2` are ignored.
pub fn yuyv_to_raster(data: &[u8], width: usize, height: usize) -> Result<Raster, CameraError> {
    let pixels = width * height;
    let expected = pixels * 2;
    if width % 2 != 0 {
        return Err(CameraError::DecodeFailed(format!(
            "YUYV width must be even, got {width}"
        )));
    }
    if data.len() < expected {
        return Err(CameraError::DecodeFailed(format!(
            "YUYV buffer too short: expected {expected} bytes, got {}",
            data.len()
        )));
    }

    let mut rgb = Vec::with_capacity(pixels * 3);
    for chunk in data[..expected].chunks_exact(4) {
        rgb.extend_from_slice(&yuv_to_rgb(chunk[0], chunk[1], chunk[3]));
        rgb.extend_from_slice(&yuv_to_rgb(chunk[2], chunk[1], chunk[3]));
    }

    Raster::new(width, height, 3, rgb).map_err(|e| CameraError::DecodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_chroma_is_gray() {
        assert_eq!(yuv_to_rgb(100, 128, 128), [100, 100, 100]);
    }

    #[test]
    fn test_saturated_values_clamp() {
        let [r, _, b] = yuv_to_rgb(255, 255, 255);
        assert_eq!(r, 255);
        assert_eq!(b, 255);
    }
}
