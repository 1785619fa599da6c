//! Level loading
//!
//! A level file is a rectangular grid of single-digit brick type codes, one
//! row per line. Validation is strict: any dimension mismatch or unknown
//! code fails the whole load with row/column context, and no partial level
//! is constructed.

use glam::Vec2;
use thiserror::Error;

use super::rect::Rect;
use super::state::{Brick, BrickKind};
use crate::consts::*;

/// Level validation errors, with the offending location
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("row count must be {expected}, is {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("column count must be {expected} at row {row}, is {actual}")]
    ColumnCount {
        expected: usize,
        row: usize,
        actual: usize,
    },
    #[error("invalid brick type {code:?} at row {row}, column {col}")]
    InvalidCode { code: char, row: usize, col: usize },
    #[error("brick type {code} at row {row}, column {col} is not in the pool")]
    UnknownKind { code: u8, row: usize, col: usize },
}

/// Parse level text into bricks laid out on the play field.
///
/// The grid is centered horizontally with a fixed top margin; cell stride is
/// brick size plus gap. Brick ids are row-major starting at 1.
pub fn load_level(
    text: &str,
    cols: usize,
    rows: usize,
    field: &Rect,
) -> Result<Vec<Brick>, LevelError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != rows {
        return Err(LevelError::RowCount {
            expected: rows,
            actual: lines.len(),
        });
    }

    let stride = BRICK_SIZE + Vec2::splat(BRICK_GAP);
    let shift = Vec2::new(
        field.center().x - cols as f32 / 2.0 * stride.x,
        field.top() + BRICK_TOP_MARGIN,
    );

    let mut bricks = Vec::with_capacity(cols * rows);
    let mut next_id = 1;

    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != cols {
            return Err(LevelError::ColumnCount {
                expected: cols,
                row,
                actual: line.chars().count(),
            });
        }

        for (col, ch) in line.chars().enumerate() {
            let code = ch
                .to_digit(10)
                .ok_or(LevelError::InvalidCode { code: ch, row, col })? as u8;
            let kind =
                BrickKind::from_code(code).ok_or(LevelError::UnknownKind { code, row, col })?;

            let pos = shift + Vec2::new(col as f32 * stride.x, row as f32 * stride.y);
            bricks.push(Brick {
                id: next_id,
                kind,
                rect: Rect::new(pos, BRICK_SIZE),
            });
            next_id += 1;
        }
    }

    Ok(bricks)
}
