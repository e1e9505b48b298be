//! State shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use starstrike_core::state::SimSnapshot;
use starstrike_core::types::PlayerInput;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Use this input on every tick until replaced. Disables the autopilot.
    SetInput(PlayerInput),
    /// Hand control to (or take it back from) the autopilot.
    SetAutopilot(bool),
    /// Start a fresh run.
    Reset,
    /// Stop the game loop thread.
    Shutdown,
}

/// Handles held by the runner while the game loop is alive.
///
/// `command_tx` is `None` until the loop is spawned. `latest_snapshot` is
/// refreshed by the loop after every tick.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);
        assert!(state.send(GameLoopCommand::Reset));
        assert_eq!(rx.try_recv().unwrap(), GameLoopCommand::Reset);
    }
}
