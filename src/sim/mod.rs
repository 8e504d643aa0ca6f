//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per tick, no delta time
//! - Seeded RNG only
//! - Stable iteration order (bricks are scanned row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod rules;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_hits_rect};
pub use state::{
    Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Snapshot, new_wave, reset_round,
};
pub use tick::{TickInput, tick};
