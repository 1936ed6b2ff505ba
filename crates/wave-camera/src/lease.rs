use crate::CameraError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// devices currently held by a sampler in this process
static HELD: Mutex<BTreeSet<PathBuf>> = Mutex::new(BTreeSet::new());

/// Process-wide exclusive claim on a device path, released on drop.
///
/// V4L2 happily hands the same node to several openers; the lease is what
/// keeps two samplers from fighting over one camera.
#[derive(Debug)]
pub struct DeviceLease {
    path: PathBuf,
}

impl DeviceLease {
    pub fn acquire(path: &Path) -> Result<Self, CameraError> {
        let mut held = HELD.lock().unwrap_or_else(|e| e.into_inner());
        if !held.insert(path.to_path_buf()) {
            return Err(CameraError::DeviceUnavailable(format!(
                "{} is already held",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_held(path: &Path) -> bool {
        HELD.lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
    }
}

impl Drop for DeviceLease {
    fn drop(&mut self) {
        HELD.lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.path);
    }
}
