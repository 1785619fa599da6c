//! Headless demo driver
//!
//! Loads a level, launches the ball and lets a trivial follow-the-ball
//! controller play until the level is cleared or the ball is lost. Useful
//! for exercising the simulation core without a renderer attached.

use std::process::ExitCode;

use tankoid::sim::{GamePhase, GameState, PaddleDir, TickInput, tick};

const DEFAULT_LEVEL: &str = include_str!("../resources/levels/0000.lvl");

/// Fixed timestep, matching a 120 Hz frame clock
const DT: f32 = 1.0 / 120.0;
/// Give up after ten minutes of simulated play
const MAX_STEPS: u64 = 120 * 600;

fn main() -> ExitCode {
    env_logger::init();

    let level = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::error!("cannot read level {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_LEVEL.to_string(),
    };

    let mut state = match GameState::new(&level) {
        Ok(state) => state,
        Err(e) => {
            log::error!("level rejected: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut steps = 0u64;
    while steps < MAX_STEPS {
        let input = TickInput {
            dir: follow_ball(&state),
            launch: state.phase == GamePhase::Serve,
        };
        if let Err(e) = tick(&mut state, &input, DT) {
            log::error!("step {steps} failed: {e}");
            return ExitCode::FAILURE;
        }
        steps += 1;

        match state.phase {
            GamePhase::Won => {
                log::info!("cleared the level in {steps} steps");
                return ExitCode::SUCCESS;
            }
            GamePhase::Lost => {
                log::info!(
                    "ball lost after {steps} steps, {} bricks left",
                    state.bricks.len()
                );
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
    }

    log::warn!("gave up after {MAX_STEPS} steps");
    ExitCode::SUCCESS
}

/// Keep the paddle center under the ball
fn follow_ball(state: &GameState) -> PaddleDir {
    let delta = state.ball.pos.x - state.paddle.bounds().center().x;
    if delta < -5.0 {
        PaddleDir::Left
    } else if delta > 5.0 {
        PaddleDir::Right
    } else {
        PaddleDir::None
    }
}
