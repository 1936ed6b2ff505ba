mod common;

use common::RecordingPlayer;
use wave_control::{EntrySnapshot, entry_channel};

#[test]
fn test_watch_sees_latest_snapshot() {
    let (publisher, watch) = entry_channel(EntrySnapshot::default());
    assert!(!watch.is_visible());

    assert!(publisher.publish(EntrySnapshot::new(true, "lofi")));
    assert_eq!(watch.snapshot(), EntrySnapshot::new(true, "lofi"));
    assert!(watch.is_visible());
}

#[test]
fn test_publishing_same_snapshot_reports_unchanged() {
    let (publisher, _watch) = entry_channel(EntrySnapshot::new(true, ""));
    assert!(!publisher.publish(EntrySnapshot::new(true, "")));
    assert!(publisher.publish(EntrySnapshot::new(false, "")));
}

#[test]
fn test_publish_from_player() {
    let (publisher, watch) = entry_channel(EntrySnapshot::default());
    let player = RecordingPlayer {
        entry_visible: true,
        entry_text: "cats".to_string(),
        ..Default::default()
    };
    publisher.publish_from(&player);
    assert_eq!(watch.snapshot(), EntrySnapshot::of(&player));
}

#[test]
fn test_last_value_survives_publisher_drop() {
    let (publisher, watch) = entry_channel(EntrySnapshot::default());
    let late = publisher.subscribe();
    publisher.publish(EntrySnapshot::new(true, "x"));
    drop(publisher);
    assert_eq!(watch.snapshot().text, "x");
    assert!(late.is_visible());
}

#[test]
fn test_watch_readable_from_other_thread() {
    let (publisher, watch) = entry_channel(EntrySnapshot::default());
    publisher.publish(EntrySnapshot::new(true, "abc"));
    let seen = std::thread::spawn(move || watch.snapshot()).join().unwrap();
    assert_eq!(seen, EntrySnapshot::new(true, "abc"));
}
