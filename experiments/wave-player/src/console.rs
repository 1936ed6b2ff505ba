use wave_control::Player;

const VOLUME_STEP: u8 = 10;

/// A line typed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Quit,
    ToggleEntry,
    Text(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "/quit" => ConsoleInput::Quit,
            "/hide" => ConsoleInput::ToggleEntry,
            text => ConsoleInput::Text(text.to_string()),
        }
    }
}

/// Terminal stand-in for a media player window with a search box.
#[derive(Debug)]
pub struct ConsolePlayer {
    playlist: Vec<String>,
    track: usize,
    playing: bool,
    volume: u8,
    muted: bool,
    entry_visible: bool,
    entry_text: String,
}

impl ConsolePlayer {
    pub fn new(playlist: Vec<String>) -> Self {
        Self {
            playlist,
            track: 0,
            playing: false,
            volume: 50,
            muted: false,
            entry_visible: true,
            entry_text: String::new(),
        }
    }

    pub fn track(&self) -> Option<&str> {
        self.playlist.get(self.track).map(String::as_str)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Apply typed input. Returns false when the user asked to quit.
    pub fn handle_input(&mut self, input: ConsoleInput) -> bool {
        match input {
            ConsoleInput::Quit => return false,
            ConsoleInput::ToggleEntry => self.entry_visible = !self.entry_visible,
            ConsoleInput::Text(text) => self.entry_text = text,
        }
        true
    }

    pub fn status(&self) -> String {
        format!(
            "[{}] {} | volume {}{} | search {}\"{}\"",
            if self.playing { "playing" } else { "stopped" },
            self.track().unwrap_or("-"),
            self.volume,
            if self.muted { " (muted)" } else { "" },
            if self.entry_visible { "" } else { "(hidden) " },
            self.entry_text,
        )
    }

    fn step_track(&mut self, forward: bool) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        self.track = if forward {
            (self.track + 1) % len
        } else {
            (self.track + len - 1) % len
        };
    }
}

impl Player for ConsolePlayer {
    fn play(&mut self) {
        if self.entry_text.trim().is_empty() {
            self.entry_text.clear();
        }
        self.playing = true;
    }

    fn next(&mut self) {
        self.step_track(true);
    }

    fn previous(&mut self) {
        self.step_track(false);
    }

    fn volume_up(&mut self) {
        self.volume = self.volume.saturating_add(VOLUME_STEP).min(100);
    }

    fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(VOLUME_STEP);
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    fn is_text_entry_visible(&self) -> bool {
        self.entry_visible
    }

    fn text_entry_content(&self) -> String {
        self.entry_text.clone()
    }
}
