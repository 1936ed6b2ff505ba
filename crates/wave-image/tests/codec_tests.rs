use image::ImageEncoder;
use wave_base::Raster;
use wave_image::{ImageError, decode_rgb, encode_jpeg, encode_png, write_png};

fn gradient(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 40) as u8, (y * 40) as u8, 128]);
        }
    }
    Raster::new(width, height, 3, data).unwrap()
}

#[test]
fn test_decode_jpeg_to_rgb() {
    let mut buffer = Vec::new();
    let img = image::RgbImage::from_fn(4, 2, |x, _| image::Rgb([x as u8 * 60, 10, 20]));
    image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .encode_image(&img)
        .unwrap();

    let raster = decode_rgb(&buffer).unwrap();
    assert_eq!(raster.width(), 4);
    assert_eq!(raster.height(), 2);
    assert_eq!(raster.channels(), 3);
}

#[test]
fn test_decode_grayscale_png_expands_to_rgb() {
    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(&[0, 255, 128, 64], 2, 2, image::ExtendedColorType::L8)
        .unwrap();

    let raster = decode_rgb(&buffer).unwrap();
    assert_eq!(raster.channels(), 3);
    assert_eq!(&raster.data()[3..6], &[255, 255, 255]);
}

#[test]
fn test_decode_garbage_fails() {
    let result = decode_rgb(&[0xde, 0xad, 0xbe, 0xef]);
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_png_is_lossless() {
    let raster = gradient(5, 3);
    let png = encode_png(&raster).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(decode_rgb(&png).unwrap(), raster);
}

#[test]
fn test_encode_jpeg_rejects_alpha() {
    let raster = Raster::new(1, 1, 4, vec![1, 2, 3, 4]).unwrap();
    assert!(matches!(encode_jpeg(&raster, 80), Err(ImageError::Encode(_))));
}

#[test]
fn test_encode_jpeg_header() {
    let jpeg = encode_jpeg(&gradient(8, 8), 80).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_write_png_missing_dir_is_io_error() {
    let path = std::env::temp_dir()
        .join(format!("wave-image-missing-{}", std::process::id()))
        .join("nested")
        .join("frame.png");
    let result = write_png(&gradient(2, 2), &path);
    assert!(matches!(result, Err(ImageError::Io(_))));
}
