mod common;

use common::RecordingPlayer;
use wave_control::{DispatchError, PlayerCommand, dispatch_bridge};

#[test]
fn test_drain_applies_in_submission_order() {
    let (sender, mut receiver) = dispatch_bridge(8);
    for command in PlayerCommand::ALL {
        sender.dispatch(command).unwrap();
    }

    let mut player = RecordingPlayer::default();
    assert_eq!(receiver.drain(&mut player), 6);
    assert_eq!(player.applied, PlayerCommand::ALL.to_vec());
    assert_eq!(receiver.drain(&mut player), 0);
}

#[test]
fn test_full_queue_rejects_without_blocking() {
    let (sender, mut receiver) = dispatch_bridge(2);
    sender.dispatch(PlayerCommand::Next).unwrap();
    sender.dispatch(PlayerCommand::Previous).unwrap();
    assert_eq!(
        sender.dispatch(PlayerCommand::Play),
        Err(DispatchError::Full(PlayerCommand::Play))
    );

    // the rejected command is gone, the earlier ones are intact
    assert_eq!(receiver.try_next(), Some(PlayerCommand::Next));
    assert_eq!(receiver.try_next(), Some(PlayerCommand::Previous));
    assert_eq!(receiver.try_next(), None);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let (sender, mut receiver) = dispatch_bridge(0);
    sender.dispatch(PlayerCommand::ToggleMute).unwrap();
    assert_eq!(receiver.try_next(), Some(PlayerCommand::ToggleMute));
}

#[test]
fn test_dropped_player_is_closed() {
    let (sender, receiver) = dispatch_bridge(4);
    drop(receiver);
    assert!(sender.is_closed());
    assert_eq!(
        sender.dispatch(PlayerCommand::VolumeUp),
        Err(DispatchError::Closed(PlayerCommand::VolumeUp))
    );
}

#[test]
fn test_commands_cross_threads_in_order() {
    let (sender, mut receiver) = dispatch_bridge(16);
    let producer = std::thread::spawn(move || {
        for command in [PlayerCommand::Next, PlayerCommand::Previous, PlayerCommand::Play] {
            sender.dispatch(command).unwrap();
        }
    });
    producer.join().unwrap();

    let mut player = RecordingPlayer::default();
    receiver.drain(&mut player);
    assert_eq!(
        player.applied,
        vec![PlayerCommand::Next, PlayerCommand::Previous, PlayerCommand::Play]
    );
}

#[tokio::test]
async fn test_recv_ends_when_senders_are_gone() {
    let (sender, mut receiver) = dispatch_bridge(4);
    let second = sender.clone();
    sender.dispatch(PlayerCommand::VolumeDown).unwrap();
    second.dispatch(PlayerCommand::VolumeUp).unwrap();
    drop(sender);
    drop(second);

    assert_eq!(receiver.recv().await, Some(PlayerCommand::VolumeDown));
    assert_eq!(receiver.recv().await, Some(PlayerCommand::VolumeUp));
    assert_eq!(receiver.recv().await, None);
}

#[test]
fn test_close_keeps_queued_commands() {
    let (sender, mut receiver) = dispatch_bridge(4);
    sender.dispatch(PlayerCommand::Play).unwrap();
    receiver.close();
    assert!(matches!(
        sender.dispatch(PlayerCommand::Next),
        Err(DispatchError::Closed(_))
    ));
    assert_eq!(receiver.try_next(), Some(PlayerCommand::Play));
}

#[test]
fn test_play_clears_blank_entry() {
    let mut player = RecordingPlayer {
        entry_text: "  ".to_string(),
        ..Default::default()
    };
    PlayerCommand::Play.apply(&mut player);
    assert_eq!(player.entry_text, "");
    assert_eq!(player.applied, vec![PlayerCommand::Play]);
}

#[test]
fn test_command_display() {
    assert_eq!(PlayerCommand::ToggleMute.to_string(), "toggle mute");
    assert_eq!(PlayerCommand::VolumeUp.to_string(), "volume up");
}
