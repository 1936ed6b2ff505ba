#![allow(dead_code)]

use wave_control::{Player, PlayerCommand};

/// Player that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub applied: Vec<PlayerCommand>,
    pub entry_visible: bool,
    pub entry_text: String,
}

impl Player for RecordingPlayer {
    fn play(&mut self) {
        if self.entry_text.trim().is_empty() {
            self.entry_text.clear();
        }
        self.applied.push(PlayerCommand::Play);
    }

    fn next(&mut self) {
        self.applied.push(PlayerCommand::Next);
    }

    fn previous(&mut self) {
        self.applied.push(PlayerCommand::Previous);
    }

    fn volume_up(&mut self) {
        self.applied.push(PlayerCommand::VolumeUp);
    }

    fn volume_down(&mut self) {
        self.applied.push(PlayerCommand::VolumeDown);
    }

    fn toggle_mute(&mut self) {
        self.applied.push(PlayerCommand::ToggleMute);
    }

    fn is_text_entry_visible(&self) -> bool {
        self.entry_visible
    }

    fn text_entry_content(&self) -> String {
        self.entry_text.clone()
    }
}
