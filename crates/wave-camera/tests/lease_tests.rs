use std::path::Path;
use wave_camera::{CameraError, DeviceLease};

#[test]
fn test_second_lease_is_refused() {
    let path = Path::new("/dev/wave-lease-test-0");
    let first = DeviceLease::acquire(path).unwrap();
    assert_eq!(first.path(), path);

    match DeviceLease::acquire(path) {
        Err(CameraError::DeviceUnavailable(msg)) => assert!(msg.contains("already held")),
        other => panic!("Expected DeviceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_lease_released_on_drop() {
    let path = Path::new("/dev/wave-lease-test-1");
    {
        let _lease = DeviceLease::acquire(path).unwrap();
        assert!(DeviceLease::is_held(path));
    }
    assert!(!DeviceLease::is_held(path));
    assert!(DeviceLease::acquire(path).is_ok());
}

#[test]
fn test_distinct_devices_coexist() {
    let a = DeviceLease::acquire(Path::new("/dev/wave-lease-test-2")).unwrap();
    let b = DeviceLease::acquire(Path::new("/dev/wave-lease-test-3")).unwrap();
    assert_ne!(a.path(), b.path());
}
