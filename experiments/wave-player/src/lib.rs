pub mod console;
pub mod settings;

pub use console::{ConsoleInput, ConsolePlayer};
pub use settings::{Settings, SettingsError};
