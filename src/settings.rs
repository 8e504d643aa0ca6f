//! Layout settings
//!
//! Every geometry and gameplay constant the simulation needs, supplied once
//! when a game is created. Loadable from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a layout cannot drive a game
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Brick grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("Paddle width {paddle} does not fit a surface {surface} wide")]
    PaddleTooWide { paddle: f32, surface: f32 },

    #[error("Brick grid spans to x={extent} but the surface is {surface} wide")]
    GridTooWide { extent: f32, surface: f32 },

    #[error("Brick grid reaches down to y={bottom} but the ball spawns at y={limit}")]
    GridTooTall { bottom: f32, limit: f32 },
}

/// Geometry and gameplay constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    // === Surface ===
    pub width: f32,
    pub height: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_origin_x: f32,
    pub brick_origin_y: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom of the surface to the paddle's top edge
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,
    pub max_angle_speed: f32,
    pub paddle_lift: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_spawn_offset: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,

    // === Rules ===
    pub starting_lives: u8,
    pub brick_reward: u64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_origin_x: BRICK_ORIGIN_X,
            brick_origin_y: BRICK_ORIGIN_Y,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,
            max_angle_speed: MAX_ANGLE_SPEED,
            paddle_lift: PADDLE_LIFT,

            ball_radius: BALL_RADIUS,
            ball_spawn_offset: BALL_SPAWN_OFFSET,
            ball_speed_x: BALL_SPEED_X,
            ball_speed_y: BALL_SPEED_Y,

            starting_lives: STARTING_LIVES,
            brick_reward: BRICK_REWARD,
        }
    }
}

impl Layout {
    /// Default layout resized to a given surface (e.g. the canvas element)
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate a layout. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Total brick count of one wave
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_cols as usize
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_bottom_offset
    }

    /// Right edge of the last brick column
    pub fn grid_extent(&self) -> f32 {
        let cols = self.brick_cols as f32;
        self.brick_origin_x + cols * (self.brick_width + self.brick_gap) - self.brick_gap
    }

    /// Bottom edge of the last brick row
    pub fn grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        self.brick_origin_y + rows * (self.brick_height + self.brick_gap) - self.brick_gap
    }

    /// Top edge of a freshly served ball
    pub fn spawn_top(&self) -> f32 {
        self.height - self.ball_spawn_offset - self.ball_radius
    }

    /// Reject layouts that would leave the simulation without a playable board
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(LayoutError::EmptyGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("max_angle_speed", self.max_angle_speed),
        ];
        for (name, value) in positive {
            // Also catches NaN
            if !(value > 0.0) {
                return Err(LayoutError::NonPositive(name));
            }
        }
        if self.starting_lives == 0 {
            return Err(LayoutError::NonPositive("starting_lives"));
        }
        // Zero lift is allowed: the ball then rests tangent to the paddle
        if !(self.paddle_lift >= 0.0) {
            return Err(LayoutError::Negative("paddle_lift"));
        }

        if self.paddle_width > self.width {
            return Err(LayoutError::PaddleTooWide {
                paddle: self.paddle_width,
                surface: self.width,
            });
        }

        let extent = self.grid_extent();
        if extent > self.width {
            return Err(LayoutError::GridTooWide {
                extent,
                surface: self.width,
            });
        }

        let bottom = self.grid_bottom();
        let limit = self.spawn_top();
        if bottom >= limit {
            return Err(LayoutError::GridTooTall { bottom, limit });
        }

        Ok(())
    }
}
