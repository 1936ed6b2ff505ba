use crate::{DispatchError, Player, PlayerCommand};
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};

/// Queue depth used by the demo player.
pub const DEFAULT_CAPACITY: usize = 64;

/// Create the bounded, ordered queue between the capture thread and the player.
///
/// The sender side never blocks. The receiver side is drained only on the
/// player's context, so every command runs there, in submission order.
pub fn dispatch_bridge(capacity: usize) -> (CommandSender, CommandReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (CommandSender { tx }, CommandReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<PlayerCommand>,
}

impl CommandSender {
    /// Queue a command for the player.
    pub fn dispatch(&self, command: PlayerCommand) -> Result<(), DispatchError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(cmd) => DispatchError::Full(cmd),
            TrySendError::Closed(cmd) => DispatchError::Closed(cmd),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[derive(Debug)]
pub struct CommandReceiver {
    rx: mpsc::Receiver<PlayerCommand>,
}

impl CommandReceiver {
    /// Idle callback: apply every queued command to `player`, oldest first.
    ///
    /// Returns how many commands ran.
    pub fn drain<P: Player + ?Sized>(&mut self, player: &mut P) -> usize {
        let mut count = 0;
        while let Some(command) = self.try_next() {
            log::debug!("applying {}", command);
            command.apply(player);
            count += 1;
        }
        count
    }

    /// Next queued command, if one is waiting.
    pub fn try_next(&mut self) -> Option<PlayerCommand> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next command. `None` once every sender is gone and the queue is empty.
    pub async fn recv(&mut self) -> Option<PlayerCommand> {
        self.rx.recv().await
    }

    /// Stop accepting commands; already queued ones can still be drained.
    pub fn close(&mut self) {
        self.rx.close();
    }
}
