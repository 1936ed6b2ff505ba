#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use wave_camera::{CameraConfig, CameraError, DeviceLease, FrameSampler, V4l2Sampler};

    #[test]
    fn test_missing_device_is_unavailable() {
        let config = CameraConfig::default().with_device("/dev/nonexistent_camera");
        let mut sampler = V4l2Sampler::new(config);

        match sampler.open() {
            Err(CameraError::DeviceUnavailable(msg)) => {
                assert!(msg.contains("/dev/nonexistent_camera"))
            }
            other => panic!("Expected DeviceUnavailable, got {:?}", other),
        }
        assert!(!sampler.is_open());
        // a failed open must not keep the lease
        assert!(!DeviceLease::is_held(std::path::Path::new("/dev/nonexistent_camera")));
    }

    #[test]
    fn test_closed_sampler_refuses_grab() {
        let mut sampler = V4l2Sampler::new(CameraConfig::default());
        assert!(matches!(sampler.grab(), Err(CameraError::GrabFailed(_))));
        assert!(matches!(sampler.retrieve(), Err(CameraError::DecodeFailed(_))));
        sampler.close();
    }

    #[test]
    fn test_config_builder() {
        let config = CameraConfig::default()
            .with_device("/dev/video2")
            .with_width(1280)
            .with_height(720)
            .with_fps(15)
            .with_buffer_count(0);
        let sampler = V4l2Sampler::new(config);
        assert_eq!(sampler.config().device(), std::path::Path::new("/dev/video2"));
        assert_eq!(sampler.config().width(), 1280);
        assert_eq!(sampler.config().height(), 720);
        assert_eq!(sampler.config().fps(), 15);
        assert_eq!(sampler.config().buffer_count(), 1);
    }
}
