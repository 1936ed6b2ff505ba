pub mod logging;
pub mod raster;

pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use raster::{Raster, RasterError};

// Re-export log crate so downstream crates can use wave_base::log::*
pub use log;
