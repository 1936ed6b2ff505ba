use wave_camera::CameraError;
use wave_image::ImageError;

#[test]
fn test_from_image_error_is_decode_failure() {
    let err: CameraError = ImageError::Decode("truncated JPEG".to_string()).into();
    match err {
        CameraError::DecodeFailed(msg) => assert!(msg.contains("truncated JPEG")),
        other => panic!("Expected CameraError::DecodeFailed, got {:?}", other),
    }
}

#[test]
fn test_transient_classification() {
    assert!(!CameraError::DeviceUnavailable("gone".to_string()).is_transient());
    assert!(CameraError::GrabFailed("EAGAIN".to_string()).is_transient());
    assert!(CameraError::DecodeFailed("bad huffman".to_string()).is_transient());
}

#[test]
fn test_error_display() {
    let err = CameraError::DeviceUnavailable("/dev/video9".to_string());
    assert_eq!(err.to_string(), "device unavailable: /dev/video9");

    let err = CameraError::GrabFailed("timeout".to_string());
    assert!(err.to_string().contains("timeout"));
}
