//! Per-frame simulation driver
//!
//! Advances one [`GameState`] by one measured frame: paddle movement from
//! input intent, docked-ball tracking, launch, collision resolution, and
//! application of the resulting step events.

use super::resolve::{StepError, StepEvent, resolve};
use super::state::{GamePhase, GameState};

/// Paddle movement intent for one frame. Never raw key codes; the embedding
/// application maps its input to this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDir {
    Left,
    #[default]
    None,
    Right,
}

impl PaddleDir {
    #[inline]
    fn as_f32(self) -> f32 {
        match self {
            PaddleDir::Left => -1.0,
            PaddleDir::None => 0.0,
            PaddleDir::Right => 1.0,
        }
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub dir: PaddleDir,
    /// Launch the docked ball
    pub launch: bool,
}

/// Advance the game state by one frame of `dt` seconds.
///
/// On error the ball has not advanced and the obstacle set is unchanged;
/// the caller may skip the frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<(), StepError> {
    match state.phase {
        GamePhase::Won | GamePhase::Lost => return Ok(()),
        GamePhase::Serve | GamePhase::Playing => {}
    }

    let field = state.field;
    state.paddle.slide(input.dir.as_f32(), dt, &field);

    match state.phase {
        GamePhase::Serve => {
            state.ball.update_docked(&state.paddle);
            if input.launch {
                state.ball.launch(input.dir.as_f32() * 0.25);
                state.phase = GamePhase::Playing;
                log::info!("ball launched, vel {}", state.ball.vel);
            }
        }
        GamePhase::Playing => {
            let obstacles = state.obstacles();
            let outcome = resolve(&state.ball, dt, &obstacles, state.sweep)?;
            state.ball.pos = outcome.pos;
            state.ball.vel = outcome.vel;

            for event in &outcome.events {
                match event {
                    StepEvent::BrickDestroyed { id } => {
                        state.remove_brick(*id);
                        log::debug!("brick {id} destroyed, {} left", state.bricks.len());
                    }
                    StepEvent::LevelCleared => {
                        state.phase = GamePhase::Won;
                        log::info!("level cleared");
                    }
                    StepEvent::BallLost => {
                        state.phase = GamePhase::Lost;
                        log::info!("ball lost");
                    }
                }
            }
        }
        GamePhase::Won | GamePhase::Lost => unreachable!(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallState;
    use glam::Vec2;

    const DT: f32 = 1.0 / 120.0;
    const LEVEL: &str = include_str!("../../resources/levels/0000.lvl");

    fn playing_state() -> GameState {
        let mut state = GameState::new(LEVEL).unwrap();
        tick(
            &mut state,
            &TickInput {
                dir: PaddleDir::None,
                launch: true,
            },
            DT,
        )
        .unwrap();
        state
    }

    #[test]
    fn test_docked_ball_follows_paddle() {
        let mut state = GameState::new(LEVEL).unwrap();
        let start_x = state.ball.pos.x;
        let input = TickInput {
            dir: PaddleDir::Right,
            launch: false,
        };
        for _ in 0..10 {
            tick(&mut state, &input, DT).unwrap();
        }
        assert_eq!(state.phase, GamePhase::Serve);
        assert!(state.ball.pos.x > start_x);
        assert_eq!(state.ball.pos.x, state.paddle.bounds().center().x);
    }

    #[test]
    fn test_launch_enters_play() {
        let state = playing_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.state, BallState::InFlight);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_ball_bounces_off_top_border() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(512.0, 15.0);
        state.ball.vel = Vec2::new(0.0, -500.0);
        state.bricks.clear();

        let input = TickInput::default();
        for _ in 0..10 {
            tick(&mut state, &input, DT).unwrap();
        }
        assert!(state.ball.vel.y > 0.0, "vel {}", state.ball.vel);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_brick_hit_removes_it() {
        let mut state = playing_state();
        let count = state.bricks.len();
        // Aim straight up at the bottom row of the grid
        let target = state.bricks.last().unwrap().rect;
        state.ball.pos = Vec2::new(target.center().x, target.bottom() + 60.0);
        state.ball.vel = Vec2::new(0.0, -500.0);

        let input = TickInput::default();
        for _ in 0..30 {
            tick(&mut state, &input, DT).unwrap();
        }
        assert_eq!(state.bricks.len(), count - 1);
        assert!(state.ball.vel.y > 0.0, "reflected downward after the hit");
    }

    #[test]
    fn test_last_brick_wins_the_game() {
        let mut state = playing_state();
        state.bricks.truncate(1);
        let target = state.bricks[0].rect;
        state.ball.pos = Vec2::new(target.center().x, target.bottom() + 60.0);
        state.ball.vel = Vec2::new(0.0, -500.0);

        let input = TickInput::default();
        for _ in 0..30 {
            tick(&mut state, &input, DT).unwrap();
        }
        assert!(state.bricks.is_empty());
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_missed_ball_loses_the_game() {
        let mut state = playing_state();
        // Park the paddle far left, drop the ball on the right
        state.paddle.pos.x = 0.0;
        state.ball.pos = Vec2::new(900.0, 700.0);
        state.ball.vel = Vec2::new(0.0, 500.0);

        let input = TickInput::default();
        for _ in 0..60 {
            tick(&mut state, &input, DT).unwrap();
            if state.phase == GamePhase::Lost {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Lost);
        // Clamped to the border edge, never past it
        assert!(state.ball.pos.y <= state.field.bottom() - state.ball.radius + 1e-3);
    }

    #[test]
    fn test_terminal_phases_are_inert() {
        let mut state = playing_state();
        state.phase = GamePhase::Won;
        let snapshot = state.ball.pos;
        tick(&mut state, &TickInput::default(), DT).unwrap();
        assert_eq!(state.ball.pos, snapshot);
    }

    #[test]
    fn test_failed_step_leaves_state_untouched() {
        let mut state = playing_state();
        state.ball.vel = Vec2::new(f32::NAN, 0.0);
        let pos = state.ball.pos;
        let err = tick(&mut state, &TickInput::default(), DT);
        assert!(err.is_err());
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
