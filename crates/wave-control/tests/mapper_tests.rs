use wave_control::{PlayerCommand, map};
use wave_gesture::GestureSymbol;

fn symbols() -> Vec<GestureSymbol> {
    vec![
        GestureSymbol::HandOpen,
        GestureSymbol::IndexFingerUp,
        GestureSymbol::Victory,
        GestureSymbol::ThumbUp,
        GestureSymbol::ThumbDown,
        GestureSymbol::Fist,
        GestureSymbol::Other("ok".to_string()),
        GestureSymbol::Other("unknown".to_string()),
        GestureSymbol::Other(String::new()),
    ]
}

fn expected(symbol: &GestureSymbol, text: &str) -> Option<PlayerCommand> {
    match symbol.as_str() {
        "hand_open" if text.trim().is_empty() => Some(PlayerCommand::Play),
        "index_finger_up" => Some(PlayerCommand::Next),
        "victory" => Some(PlayerCommand::Previous),
        "thumb_up" => Some(PlayerCommand::VolumeUp),
        "thumb_down" => Some(PlayerCommand::VolumeDown),
        "fist" => Some(PlayerCommand::ToggleMute),
        _ => None,
    }
}

#[test]
fn test_table_is_total_and_deterministic() {
    let texts = ["", " ", "\t\n", "abc", " abc ", "lofi beats"];
    for symbol in symbols() {
        for visible in [true, false] {
            for text in texts {
                let first = map(&symbol, visible, text);
                assert_eq!(first, expected(&symbol, text), "{symbol} {visible} {text:?}");
                assert_eq!(first, map(&symbol, visible, text));
            }
        }
    }
}

#[test]
fn test_hand_open_plays_only_on_blank_entry() {
    assert_eq!(map(&GestureSymbol::HandOpen, true, ""), Some(PlayerCommand::Play));
    assert_eq!(map(&GestureSymbol::HandOpen, true, " "), Some(PlayerCommand::Play));
    assert_eq!(map(&GestureSymbol::HandOpen, true, "abc"), None);
}

#[test]
fn test_other_commands_ignore_entry_text() {
    assert_eq!(
        map(&GestureSymbol::IndexFingerUp, true, "abc"),
        Some(PlayerCommand::Next)
    );
    assert_eq!(
        map(&GestureSymbol::Fist, true, "abc"),
        Some(PlayerCommand::ToggleMute)
    );
}

#[test]
fn test_labels_from_service_map() {
    assert_eq!(
        map(&GestureSymbol::from_label("thumb_down"), true, ""),
        Some(PlayerCommand::VolumeDown)
    );
    assert_eq!(map(&GestureSymbol::from_label("rock"), true, ""), None);
}
