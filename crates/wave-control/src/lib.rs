//! Gesture-driven playback control.
//!
//! The `CaptureLoop` runs on its own thread: it keeps the camera buffer
//! fresh, classifies one frame per delay interval while the player's text
//! entry is visible, maps each recognized gesture to a `PlayerCommand`, and
//! hands the commands to the player's event loop through the dispatch
//! bridge. The player side publishes its text-entry state as
//! `EntrySnapshot`s instead of being read directly.

pub mod bridge;
pub mod capture;
pub mod clock;
pub mod command;
pub mod config;
pub mod entry;
pub mod error;
pub mod mapper;
pub mod player;

pub use bridge::{CommandReceiver, CommandSender, dispatch_bridge};
pub use capture::{CaptureLoop, CaptureState, CaptureStats};
pub use clock::{Clock, ManualClock, SystemClock};
pub use command::PlayerCommand;
pub use config::CaptureConfig;
pub use entry::{EntryPublisher, EntrySnapshot, EntryWatch, entry_channel};
pub use error::{CaptureError, DispatchError};
pub use mapper::map;
pub use player::Player;
