use crate::Player;
use std::fmt;

/// Playback command produced from a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerCommand {
    Play,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    ToggleMute,
}

impl PlayerCommand {
    pub const ALL: [PlayerCommand; 6] = [
        PlayerCommand::Play,
        PlayerCommand::Next,
        PlayerCommand::Previous,
        PlayerCommand::VolumeUp,
        PlayerCommand::VolumeDown,
        PlayerCommand::ToggleMute,
    ];

    /// Run the command against the player. Only call this on the player's context.
    pub fn apply<P: Player + ?Sized>(self, player: &mut P) {
        match self {
            PlayerCommand::Play => player.play(),
            PlayerCommand::Next => player.next(),
            PlayerCommand::Previous => player.previous(),
            PlayerCommand::VolumeUp => player.volume_up(),
            PlayerCommand::VolumeDown => player.volume_down(),
            PlayerCommand::ToggleMute => player.toggle_mute(),
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerCommand::Play => "play",
            PlayerCommand::Next => "next",
            PlayerCommand::Previous => "previous",
            PlayerCommand::VolumeUp => "volume up",
            PlayerCommand::VolumeDown => "volume down",
            PlayerCommand::ToggleMute => "toggle mute",
        };
        f.write_str(name)
    }
}
