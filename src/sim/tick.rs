//! Simulation tick
//!
//! Core game loop step, invoked once per rendered frame by an external
//! scheduler. Never draws and never runs concurrently with itself.

use super::physics::{move_paddle, step_ball};
use super::rules::{check_ball_lost, check_wave_cleared, toggle_run};
use super::state::GameState;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Start/pause toggle (one-shot)
    pub toggle_run: bool,
}

/// Advance the game state by one logical step
///
/// Bounces resolve before life/wave bookkeeping, so a brick broken on the
/// tick that empties the wave is scored before the wave is replaced.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.clear_events();

    if input.toggle_run {
        toggle_run(state);
    }

    move_paddle(&mut state.paddle, input, state.layout.width);

    if state.running {
        step_ball(state);
        check_ball_lost(state);
        check_wave_cleared(state);
    }

    state.time_ticks += 1;
}
