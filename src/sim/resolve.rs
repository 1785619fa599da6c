//! Collision resolution
//!
//! One resolver call per simulation step: fan the swept detector out over
//! every candidate obstacle, reduce to the single nearest impact, clamp the
//! ball to the contact point, reflect one velocity axis, and report what the
//! impact consumed. The corrected position is deliberately not re-tested
//! against the remaining obstacles within the same step; at very large
//! translations a second thin obstacle directly behind the first can be
//! skipped. Callers clamp dt upstream to keep steps small.

use glam::Vec2;
use thiserror::Error;

use super::collision::{SweepMethod, detect};
use super::state::{Ball, BorderSide, Obstacle};

/// Invariant violations in resolver inputs. These are programming errors;
/// the step fails loudly instead of producing garbage geometry.
#[derive(Debug, Error, PartialEq)]
pub enum StepError {
    #[error("ball radius must be positive, is {0}")]
    NonPositiveRadius(f32),
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}

/// Auxiliary consequence of one resolved step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A destructible brick was struck and must be removed
    BrickDestroyed { id: u32 },
    /// The struck brick was the last one
    LevelCleared,
    /// The ball struck the bottom border
    BallLost,
}

/// The resolver's per-step result
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Consequences in resolution order, for the caller to act on
    pub events: Vec<StepEvent>,
}

/// Advance the ball by one step against the given obstacles.
///
/// Destroyed bricks must not be in `obstacles`; the caller rebuilds the
/// candidate set each step. Ties in impact distance go to the earlier
/// obstacle in testing order.
pub fn resolve(
    ball: &Ball,
    dt: f32,
    obstacles: &[Obstacle],
    method: SweepMethod,
) -> Result<StepOutcome, StepError> {
    validate(ball, dt)?;

    let translation = ball.vel * dt;

    let mut best: Option<(f32, super::collision::Impact, &Obstacle)> = None;
    for obstacle in obstacles {
        let Some(impact) = detect(ball.pos, ball.radius, translation, obstacle.bounds(), method)
        else {
            continue;
        };
        let dist_sq = ball.pos.distance_squared(impact.pos);
        if best.as_ref().is_none_or(|(d, _, _)| dist_sq < *d) {
            best = Some((dist_sq, impact, obstacle));
        }
    }

    let Some((_, impact, struck)) = best else {
        return Ok(StepOutcome {
            pos: ball.pos + translation,
            vel: ball.vel,
            events: Vec::new(),
        });
    };

    // Exactly one axis inverts per impact, matching the single struck face.
    let mut vel = ball.vel;
    if impact.side.reflects_x() {
        vel.x = -vel.x;
    } else {
        vel.y = -vel.y;
    }

    let mut events = Vec::new();
    match struck {
        Obstacle::Brick { id, .. } => {
            events.push(StepEvent::BrickDestroyed { id: *id });
            let bricks_left = obstacles
                .iter()
                .filter(|o| matches!(o, Obstacle::Brick { .. }))
                .count();
            if bricks_left == 1 {
                events.push(StepEvent::LevelCleared);
            }
        }
        Obstacle::Border {
            side: BorderSide::Bottom,
            ..
        } => {
            events.push(StepEvent::BallLost);
        }
        Obstacle::Paddle { .. } | Obstacle::Border { .. } => {}
    }

    Ok(StepOutcome {
        pos: impact.pos,
        vel,
        events,
    })
}

fn validate(ball: &Ball, dt: f32) -> Result<(), StepError> {
    if !(ball.radius > 0.0 && ball.radius.is_finite()) {
        return Err(StepError::NonPositiveRadius(ball.radius));
    }
    if !ball.pos.is_finite() {
        return Err(StepError::NonFinite("ball position"));
    }
    if !ball.vel.is_finite() {
        return Err(StepError::NonFinite("ball velocity"));
    }
    if !dt.is_finite() {
        return Err(StepError::NonFinite("elapsed time"));
    }
    Ok(())
}
