//! Tankoid - a paddle-and-ball brick breaker, simulation core only
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swept collision detection, collision
//!   resolution, level loading, game state)
//!
//! Rendering, window management and raw input polling live in the embedding
//! application; this crate consumes movement intent and emits step events.

pub mod sim;

pub use sim::{GamePhase, GameState, PaddleDir, StepEvent, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play field dimensions (pixels, +y downward)
    pub const FIELD_SIZE: Vec2 = Vec2::new(1024.0, 768.0);

    /// Paddle dimensions
    pub const PADDLE_SIZE: Vec2 = Vec2::new(140.0, 30.0);
    /// Paddle horizontal speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 750.0;
    /// Gap between the paddle bottom and the field bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 20.0;

    /// Brick dimensions
    pub const BRICK_SIZE: Vec2 = Vec2::new(50.0, 25.0);
    /// Gap between adjacent bricks
    pub const BRICK_GAP: f32 = 12.0;
    /// Vertical offset of the brick grid from the field top
    pub const BRICK_TOP_MARGIN: f32 = 50.0;

    /// Level grid dimensions
    pub const LEVEL_COLS: usize = 10;
    pub const LEVEL_ROWS: usize = 8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 500.0;

    /// Thickness of the four border rectangles enclosing the field
    pub const BORDER_THICKNESS: f32 = 32.0;
}
