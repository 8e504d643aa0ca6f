//! Monkey Breakout - a neon brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round/wave rules)
//! - `settings`: Layout constants and JSON loading
//! - `input`: Keyboard mapping and the demo autopilot
//! - `renderer`: Frame composition against an abstract draw surface

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{InputState, autopilot};
pub use settings::{Layout, LayoutError};

/// Game configuration constants (defaults for [`crate::Layout`])
pub mod consts {
    /// Play surface dimensions
    pub const SURFACE_WIDTH: f32 = 960.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Brick grid
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLS: u32 = 12;
    pub const BRICK_WIDTH: f32 = 64.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;
    pub const BRICK_ORIGIN_X: f32 = 30.0;
    pub const BRICK_ORIGIN_Y: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 140.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from the bottom of the surface to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 26.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Distance from the bottom of the surface to the ball spawn point
    pub const BALL_SPAWN_OFFSET: f32 = 60.0;
    /// Serve speed, pixels per tick
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 6.0;

    /// Horizontal speed for a strike on the very edge of the paddle
    pub const MAX_ANGLE_SPEED: f32 = 7.0;
    /// Gap left between ball and paddle after a paddle bounce
    pub const PADDLE_LIFT: f32 = 1.0;

    pub const STARTING_LIVES: u8 = 3;
    pub const BRICK_REWARD: u64 = 10;
}
