//! Round and wave progression
//!
//! Life loss, game over, wave clearance and the run toggle. None of these
//! are error conditions; every transition is resolved within the tick that
//! triggers it.

use super::state::{GameEvent, GameState};

/// Flip between running and stopped
pub fn toggle_run(state: &mut GameState) {
    state.running = !state.running;
    if state.running {
        if state.awaiting_serve {
            state.awaiting_serve = false;
            log::debug!("Served (lives {}, score {})", state.lives, state.score);
            state.emit(GameEvent::Served);
        } else {
            state.emit(GameEvent::Resumed);
        }
    } else {
        log::debug!("Paused");
        state.emit(GameEvent::Paused);
    }
}

/// Force the game to stop (view entered, focus lost)
pub fn suspend(state: &mut GameState) {
    if state.running {
        state.running = false;
        state.emit(GameEvent::Paused);
    }
}

/// Handle a ball that fell past the bottom of the surface
///
/// Returns true if the ball was lost this tick.
pub fn check_ball_lost(state: &mut GameState) -> bool {
    if state.ball.top() <= state.layout.height {
        return false;
    }

    state.lives = state.lives.saturating_sub(1);
    state.running = false;
    log::debug!("Ball lost, {} lives left", state.lives);
    state.emit(GameEvent::BallLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        let final_score = state.score;
        state.best_score = state.best_score.max(final_score);
        log::info!(
            "Game over: score {} after {} waves (best {})",
            final_score,
            state.wave_index,
            state.best_score
        );

        state.lives = state.layout.starting_lives;
        state.score = 0;
        state.wave_index = 0;
        state.regenerate_wave();
        state.emit(GameEvent::GameOver { final_score });
    }

    state.reset_round();
    true
}

/// Lay out a fresh wave once every brick is gone
///
/// Stops the game so the player must serve the next wave explicitly.
/// Returns true if the wave was cleared this tick.
pub fn check_wave_cleared(state: &mut GameState) -> bool {
    if !state.wave_cleared() {
        return false;
    }

    state.wave_index += 1;
    log::info!("Wave {} cleared, score {}", state.wave_index, state.score);

    state.regenerate_wave();
    state.reset_round();
    state.running = false;
    state.emit(GameEvent::WaveCleared {
        wave: state.wave_index,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Layout;
    use crate::sim::GamePhase;

    fn running_state() -> GameState {
        let mut state = GameState::new(Layout::default(), 99);
        toggle_run(&mut state);
        state
    }

    fn push_ball_below(state: &mut GameState) {
        state.ball.pos.y = state.layout.height + state.ball.radius + 1.0;
    }

    #[test]
    fn test_toggle_serve_pause_resume() {
        let mut state = GameState::new(Layout::default(), 99);
        assert_eq!(state.phase(), GamePhase::Idle);

        toggle_run(&mut state);
        assert_eq!(state.phase(), GamePhase::Playing);
        toggle_run(&mut state);
        assert_eq!(state.phase(), GamePhase::Paused);
        toggle_run(&mut state);
        assert_eq!(state.phase(), GamePhase::Playing);

        assert_eq!(
            state.events(),
            &[GameEvent::Served, GameEvent::Paused, GameEvent::Resumed]
        );
    }

    #[test]
    fn test_suspend_only_when_running() {
        let mut state = GameState::new(Layout::default(), 99);
        suspend(&mut state);
        assert!(state.events().is_empty());

        toggle_run(&mut state);
        suspend(&mut state);
        assert!(!state.running);
        assert_eq!(state.events().last(), Some(&GameEvent::Paused));
    }

    #[test]
    fn test_ball_on_bottom_edge_not_lost() {
        let mut state = running_state();
        // Top edge exactly on the bottom bound
        state.ball.pos.y = state.layout.height + state.ball.radius;
        assert!(!check_ball_lost(&mut state));
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_ball_lost_with_lives_left() {
        let mut state = running_state();
        state.lives = 2;
        state.score = 40;
        state.bricks[5].alive = false;
        push_ball_below(&mut state);

        assert!(check_ball_lost(&mut state));
        assert_eq!(state.lives, 1);
        assert_eq!(state.score, 40);
        assert!(!state.bricks[5].alive);
        assert_eq!(state.bricks_alive(), 71);
        assert!(!state.running);
        assert_eq!(state.phase(), GamePhase::Idle);
        // Round was reset
        assert_eq!(state.ball.pos.y, 540.0);
        assert_eq!(state.paddle.x, 410.0);
    }

    #[test]
    fn test_last_life_resets_game() {
        let mut state = running_state();
        state.lives = 1;
        state.score = 250;
        state.wave_index = 2;
        state.bricks[0].alive = false;
        state.bricks[40].alive = false;
        push_ball_below(&mut state);

        assert!(check_ball_lost(&mut state));
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.wave_index, 0);
        assert_eq!(state.best_score, 250);
        assert_eq!(state.bricks_alive(), 72);
        assert!(!state.running);
        assert!(
            state
                .events()
                .contains(&GameEvent::GameOver { final_score: 250 })
        );
    }

    #[test]
    fn test_wave_cleared_regenerates() {
        let mut state = running_state();
        state.score = 720;
        for brick in &mut state.bricks {
            brick.alive = false;
        }

        assert!(check_wave_cleared(&mut state));
        assert_eq!(state.bricks.len(), 72);
        assert_eq!(state.bricks_alive(), 72);
        assert!(!state.running);
        assert_eq!(state.wave_index, 1);
        assert_eq!(state.score, 720);
        assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_wave_with_survivors_not_cleared() {
        let mut state = running_state();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.alive = false;
        }
        assert!(!check_wave_cleared(&mut state));
        assert!(state.running);
        assert_eq!(state.bricks_alive(), 1);
    }
}
