//! The refresh boundary between the editor and the simulation that owns the
//! options.
//!
//! After every applied edit the editor asks for a refresh and returns at
//! once. It never waits for the simulation and never retries. Refreshes read
//! whatever the options hold when they run, so out-of-order or coalesced
//! refreshes still converge on the last write.

use std::sync::mpsc::{self, Receiver, Sender};

/// Something that re-applies the options and redraws.
pub trait Refresh {
    /// Request a refresh. Must not block on the refresh itself.
    fn refresh(&self);
}

impl<F: Fn()> Refresh for F {
    fn refresh(&self) {
        self()
    }
}

/// Commands the editor sends to the simulation owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationCommand {
    /// Re-apply the current options and redraw.
    Refresh,
}

/// Sending half of the command channel.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<SimulationCommand>,
}

impl CommandSender {
    pub fn send(&self, command: SimulationCommand) {
        if self.tx.send(command).is_err() {
            log::warn!("simulation stopped listening; dropped {:?}", command);
        }
    }
}

impl Refresh for CommandSender {
    fn refresh(&self) {
        self.send(SimulationCommand::Refresh);
    }
}

/// Create the command channel. The receiver belongs to the simulation owner.
pub fn command_channel() -> (CommandSender, Receiver<SimulationCommand>) {
    let (tx, rx) = mpsc::channel();
    (CommandSender { tx }, rx)
}

/// Drain every pending command, returning how many refreshes were queued.
///
/// Refreshes are idempotent, so the owner only needs to act once when this
/// is non-zero.
pub fn drain_refreshes(rx: &Receiver<SimulationCommand>) -> usize {
    rx.try_iter()
        .filter(|command| *command == SimulationCommand::Refresh)
        .count()
}
