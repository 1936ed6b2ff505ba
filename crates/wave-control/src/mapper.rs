use crate::PlayerCommand;
use wave_gesture::GestureSymbol;

/// Map a gesture to the command it stands for.
///
/// `hand_open` only plays when the text entry is empty or whitespace, so an
/// open palm does not interrupt someone typing a search. Visibility does not
/// change the mapping; the capture loop refuses to classify or dispatch while
/// the entry is hidden.
pub fn map(gesture: &GestureSymbol, _entry_visible: bool, entry_text: &str) -> Option<PlayerCommand> {
    match gesture {
        GestureSymbol::HandOpen if entry_text.trim().is_empty() => Some(PlayerCommand::Play),
        GestureSymbol::HandOpen => None,
        GestureSymbol::IndexFingerUp => Some(PlayerCommand::Next),
        GestureSymbol::Victory => Some(PlayerCommand::Previous),
        GestureSymbol::ThumbUp => Some(PlayerCommand::VolumeUp),
        GestureSymbol::ThumbDown => Some(PlayerCommand::VolumeDown),
        GestureSymbol::Fist => Some(PlayerCommand::ToggleMute),
        GestureSymbol::Other(_) => None,
    }
}
