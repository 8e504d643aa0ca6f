//! Keyboard input mapping
//!
//! Key events arrive asynchronously from the host; the simulation only sees
//! the [`TickInput`] snapshot taken at the start of each tick.

use crate::sim::{GamePhase, GameState, TickInput};

/// Action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    ToggleRun,
}

impl KeyAction {
    /// Map a DOM `KeyboardEvent` (`key`, `code`) pair to an action
    pub fn from_key(key: &str, code: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(KeyAction::Left),
            "ArrowRight" | "d" | "D" => Some(KeyAction::Right),
            _ if code == "Space" => Some(KeyAction::ToggleRun),
            _ => None,
        }
    }
}

/// Held keys plus a pending start/pause toggle
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    toggle_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true if the key is bound.
    pub fn key_down(&mut self, key: &str, code: &str, repeat: bool) -> bool {
        match KeyAction::from_key(key, code) {
            Some(KeyAction::Left) => self.left = true,
            Some(KeyAction::Right) => self.right = true,
            Some(KeyAction::ToggleRun) => {
                // Holding space must not flicker the game on and off
                if !repeat {
                    // Two presses between ticks cancel out
                    self.toggle_pending = !self.toggle_pending;
                }
            }
            None => return false,
        }
        true
    }

    /// Handle a key release. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str, code: &str) -> bool {
        match KeyAction::from_key(key, code) {
            Some(KeyAction::Left) => self.left = false,
            Some(KeyAction::Right) => self.right = false,
            Some(KeyAction::ToggleRun) => {}
            None => return false,
        }
        true
    }

    /// Drop held keys (e.g. when the window loses focus and key-ups go missing)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Snapshot for the next tick; the toggle is consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            toggle_run: self.toggle_pending,
        };
        self.toggle_pending = false;
        input
    }
}

/// Demo player: serve when idle and keep the paddle under the ball
pub fn autopilot(state: &GameState) -> TickInput {
    let target = state.ball.pos.x;
    let center = state.paddle.center_x();
    let dead_zone = state.paddle.speed / 2.0;

    TickInput {
        left: center - target > dead_zone,
        right: target - center > dead_zone,
        toggle_run: state.phase() == GamePhase::Idle,
    }
}
