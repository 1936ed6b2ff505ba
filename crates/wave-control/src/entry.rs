use crate::Player;
use tokio::sync::watch;

/// The player's text-entry state as seen by the capture thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub visible: bool,
    pub text: String,
}

impl EntrySnapshot {
    pub fn new(visible: bool, text: impl Into<String>) -> Self {
        Self {
            visible,
            text: text.into(),
        }
    }

    /// Query the player. Only call this on the player's context.
    pub fn of<P: Player + ?Sized>(player: &P) -> Self {
        Self {
            visible: player.is_text_entry_visible(),
            text: player.text_entry_content(),
        }
    }
}

/// Create the snapshot channel, seeded with `initial`.
pub fn entry_channel(initial: EntrySnapshot) -> (EntryPublisher, EntryWatch) {
    let (tx, rx) = watch::channel(initial);
    (EntryPublisher { tx }, EntryWatch { rx })
}

/// Player-side handle: republish whenever the entry changes.
#[derive(Debug)]
pub struct EntryPublisher {
    tx: watch::Sender<EntrySnapshot>,
}

impl EntryPublisher {
    /// Publish `snapshot`; returns whether it differed from the previous one.
    pub fn publish(&self, snapshot: EntrySnapshot) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        })
    }

    /// Snapshot `player` and publish the result.
    pub fn publish_from<P: Player + ?Sized>(&self, player: &P) -> bool {
        self.publish(EntrySnapshot::of(player))
    }

    pub fn subscribe(&self) -> EntryWatch {
        EntryWatch {
            rx: self.tx.subscribe(),
        }
    }
}

/// Capture-side handle: a read-only view of the latest snapshot.
///
/// If the publisher is dropped the last published value stays readable.
#[derive(Debug, Clone)]
pub struct EntryWatch {
    rx: watch::Receiver<EntrySnapshot>,
}

impl EntryWatch {
    pub fn snapshot(&self) -> EntrySnapshot {
        self.rx.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.rx.borrow().visible
    }
}
