//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed inputs produce fixed outputs (no hidden global state)
//! - Stable obstacle iteration order (paddle, borders, bricks by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod resolve;
pub mod state;
pub mod tick;

pub use collision::{Impact, Side, SweepMethod, detect};
pub use level::{LevelError, load_level};
pub use rect::Rect;
pub use resolve::{StepError, StepEvent, StepOutcome, resolve};
pub use state::{
    Ball, BallState, BorderSide, Brick, BrickKind, GamePhase, GameState, Obstacle, Paddle,
};
pub use tick::{PaddleDir, TickInput, tick};
