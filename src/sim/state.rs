//! Game state and core simulation types
//!
//! The whole simulation context lives in one owned [`GameState`] value that
//! the game loop passes into [`crate::sim::tick`]; there is no process-wide
//! mutable state anywhere in the crate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::SweepMethod;
use super::level::{self, LevelError};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball docked on the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Ball passed the bottom border
    Lost,
}

/// Ball state - docked on the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Tracks the paddle top directly; the resolver is not invoked
    Docked,
    /// Free flight, simulated every step
    InFlight,
}

/// The ball: a moving circle with a fixed radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Docked,
        }
    }

    /// Snap a docked ball onto the paddle top
    pub fn update_docked(&mut self, paddle: &Paddle) {
        if self.state == BallState::Docked {
            let bounds = paddle.bounds();
            self.pos = Vec2::new(bounds.center().x, bounds.top() - self.radius);
        }
    }

    /// Launch from the docked state, upward with a horizontal bias
    pub fn launch(&mut self, bias: f32) {
        if self.state == BallState::Docked {
            let dir = Vec2::new(bias.clamp(-0.5, 0.5), -1.0).normalize();
            self.vel = dir * BALL_SPEED;
            self.state = BallState::InFlight;
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle. Only the position moves; the size is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
}

impl Paddle {
    /// Paddle resting centered near the field bottom
    pub fn new(field: &Rect) -> Self {
        let pos = Vec2::new(
            field.center().x - PADDLE_SIZE.x / 2.0,
            field.bottom() - PADDLE_SIZE.y - PADDLE_BOTTOM_MARGIN,
        );
        Self { pos }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, PADDLE_SIZE)
    }

    /// Move horizontally by `dir * PADDLE_SPEED * dt`, clamped to the field
    pub fn slide(&mut self, dir: f32, dt: f32, field: &Rect) {
        self.pos.x += dir * PADDLE_SPEED * dt;
        self.pos.x = self
            .pos
            .x
            .clamp(field.left(), field.right() - PADDLE_SIZE.x);
    }
}

/// Brick palette. The discriminants are the level-file digit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    Red,
    Blue,
    Green,
    White,
}

impl BrickKind {
    /// Map a level-file digit to a brick kind, if it is in the pool
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BrickKind::Red),
            1 => Some(BrickKind::Blue),
            2 => Some(BrickKind::Green),
            3 => Some(BrickKind::White),
            _ => None,
        }
    }
}

/// A destructible brick. Removed permanently on first impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub rect: Rect,
}

/// Which play-field border a border rect is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// One of the four static rects enclosing the play field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Border {
    pub side: BorderSide,
    pub rect: Rect,
}

impl Border {
    /// The four borders just outside the field bounds
    pub fn surrounding(field: &Rect) -> [Border; 4] {
        let t = BORDER_THICKNESS;
        let w = field.size.x;
        let h = field.size.y;
        [
            Border {
                side: BorderSide::Left,
                rect: Rect::new(field.pos - Vec2::new(t, t), Vec2::new(t, h + 2.0 * t)),
            },
            Border {
                side: BorderSide::Right,
                rect: Rect::new(
                    Vec2::new(field.right(), field.top() - t),
                    Vec2::new(t, h + 2.0 * t),
                ),
            },
            Border {
                side: BorderSide::Top,
                rect: Rect::new(field.pos - Vec2::new(t, t), Vec2::new(w + 2.0 * t, t)),
            },
            Border {
                side: BorderSide::Bottom,
                rect: Rect::new(
                    Vec2::new(field.left() - t, field.bottom()),
                    Vec2::new(w + 2.0 * t, t),
                ),
            },
        ]
    }
}

/// A collision candidate for one simulation step.
///
/// Uniform tagged view over everything that occupies a rectangular region,
/// so the resolver never inspects concrete entity types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    Brick { id: u32, rect: Rect },
    Paddle { rect: Rect },
    Border { side: BorderSide, rect: Rect },
}

impl Obstacle {
    #[inline]
    pub fn bounds(&self) -> &Rect {
        match self {
            Obstacle::Brick { rect, .. } => rect,
            Obstacle::Paddle { rect } => rect,
            Obstacle::Border { rect, .. } => rect,
        }
    }
}

/// Complete simulation context, owned by the game loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Rect,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks, ordered by id; destroyed bricks are removed outright
    pub bricks: Vec<Brick>,
    pub borders: [Border; 4],
    /// Which swept test drives the resolver
    pub sweep: SweepMethod,
}

impl GameState {
    /// Build a fresh state from level-file text
    pub fn new(level_text: &str) -> Result<Self, LevelError> {
        let field = Rect::new(Vec2::ZERO, FIELD_SIZE);
        let bricks = level::load_level(level_text, LEVEL_COLS, LEVEL_ROWS, &field)?;
        let paddle = Paddle::new(&field);
        let mut ball = Ball::new();
        ball.update_docked(&paddle);
        log::info!("level loaded: {} bricks", bricks.len());

        Ok(Self {
            field,
            phase: GamePhase::Serve,
            paddle,
            ball,
            bricks,
            borders: Border::surrounding(&field),
            sweep: SweepMethod::default(),
        })
    }

    /// Collision candidates for the current step: paddle, borders, then
    /// live bricks in id order.
    pub fn obstacles(&self) -> Vec<Obstacle> {
        let mut out = Vec::with_capacity(5 + self.bricks.len());
        out.push(Obstacle::Paddle {
            rect: self.paddle.bounds(),
        });
        for border in &self.borders {
            out.push(Obstacle::Border {
                side: border.side,
                rect: border.rect,
            });
        }
        for brick in &self.bricks {
            out.push(Obstacle::Brick {
                id: brick.id,
                rect: brick.rect,
            });
        }
        out
    }

    /// Remove a destroyed brick by id
    pub fn remove_brick(&mut self, id: u32) {
        self.bricks.retain(|b| b.id != id);
    }

    /// Serialize the whole context for save/continue
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = include_str!("../../resources/levels/0000.lvl");

    #[test]
    fn test_borders_enclose_field() {
        let field = Rect::new(Vec2::ZERO, FIELD_SIZE);
        let borders = Border::surrounding(&field);
        for border in &borders {
            assert!(!border.rect.intersects(&field), "{:?}", border.side);
        }
        // Bottom border top edge sits exactly on the field bottom
        let bottom = borders
            .iter()
            .find(|b| b.side == BorderSide::Bottom)
            .unwrap();
        assert_eq!(bottom.rect.top(), field.bottom());
    }

    #[test]
    fn test_docked_ball_tracks_paddle() {
        let mut state = GameState::new(LEVEL).unwrap();
        let field = state.field;
        state.paddle.slide(1.0, 0.1, &field);
        state.ball.update_docked(&state.paddle);
        let bounds = state.paddle.bounds();
        assert_eq!(state.ball.pos.x, bounds.center().x);
        assert_eq!(state.ball.pos.y, bounds.top() - state.ball.radius);
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let field = Rect::new(Vec2::ZERO, FIELD_SIZE);
        let mut paddle = Paddle::new(&field);
        paddle.slide(1.0, 100.0, &field);
        assert_eq!(paddle.bounds().right(), field.right());
        paddle.slide(-1.0, 100.0, &field);
        assert_eq!(paddle.bounds().left(), field.left());
    }

    #[test]
    fn test_launch_sets_upward_velocity_at_full_speed() {
        let mut ball = Ball::new();
        ball.launch(0.25);
        assert_eq!(ball.state, BallState::InFlight);
        assert!(ball.vel.y < 0.0);
        assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-3);

        // Launching again is a no-op once in flight
        let vel = ball.vel;
        ball.launch(-0.5);
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = GameState::new(LEVEL).unwrap();
        let json = state.to_json().unwrap();
        let restored = GameState::from_json(&json).unwrap();
        assert_eq!(restored.bricks.len(), state.bricks.len());
        assert_eq!(restored.phase, GamePhase::Serve);
    }
}
