//! Per-tick motion and bounce responses
//!
//! One fixed logical step per tick. Wall bounces only flip velocity signs, so
//! the ball may overlap a wall for up to one tick of travel.

use super::collision::circle_hits_rect;
use super::state::{GameEvent, GameState, Paddle};
use super::tick::TickInput;

/// Move the paddle by held input and clamp it to the surface
pub fn move_paddle(paddle: &mut Paddle, input: &TickInput, surface_width: f32) {
    if input.left {
        paddle.x -= paddle.speed;
    }
    if input.right {
        paddle.x += paddle.speed;
    }
    paddle.x = paddle.x.max(0.0).min(surface_width - paddle.width);
}

/// Advance the ball and resolve wall, paddle and brick contacts
///
/// Does nothing unless the game is running.
pub fn step_ball(state: &mut GameState) {
    if !state.running {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let width = state.layout.width;
    let mut wall_hit = false;
    if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= width {
        ball.vel.x = -ball.vel.x;
        wall_hit = true;
    }
    if ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        wall_hit = true;
    }
    if wall_hit {
        state.emit(GameEvent::WallBounce);
    }

    if let Some(offset) = paddle_bounce(state) {
        state.emit(GameEvent::PaddleHit { offset });
    }

    if let Some(index) = brick_hit(state) {
        state.emit(GameEvent::BrickBroken { index });
    }
}

/// Bounce off the paddle, remapping the angle from the strike position
///
/// Only a descending ball can hit the paddle. The outgoing horizontal speed
/// depends on where the ball struck, not on how it arrived. Returns the
/// normalized strike offset on a hit.
///
/// A strike on a paddle corner puts the ball center past the paddle edge; its
/// offset is capped at ±1, so the ball never leaves faster than
/// `max_angle_speed` sideways.
pub fn paddle_bounce(state: &mut GameState) -> Option<f32> {
    let ball = &mut state.ball;
    let paddle = &state.paddle;
    if ball.vel.y <= 0.0 || !circle_hits_rect(ball.pos, ball.radius, &paddle.rect()) {
        return None;
    }

    let half = paddle.width / 2.0;
    let offset = ((ball.pos.x - paddle.center_x()) / half).clamp(-1.0, 1.0);
    ball.vel.x = offset * state.layout.max_angle_speed;
    ball.vel.y = -ball.vel.y;
    // Lift clear of the paddle so the next tick can't re-trigger
    ball.pos.y = paddle.y - ball.radius - state.layout.paddle_lift;

    Some(offset)
}

/// Destroy the first live brick the ball touches, in row-major order
///
/// At most one brick breaks per tick even if the ball overlaps several.
/// Returns the index of the broken brick.
pub fn brick_hit(state: &mut GameState) -> Option<usize> {
    let ball = &state.ball;
    let index = state
        .bricks
        .iter()
        .position(|b| b.alive && circle_hits_rect(ball.pos, ball.radius, &b.rect))?;

    state.bricks[index].alive = false;
    state.score += state.layout.brick_reward;
    state.ball.vel.y = -state.ball.vel.y;
    log::trace!("Brick {} broken, score {}", index, state.score);

    Some(index)
}
