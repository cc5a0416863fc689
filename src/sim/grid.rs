//! Brick field: tiers, individual bricks, and the fixed grid
//!
//! The grid is a flat row-major array of value-typed bricks. Geometry is
//! computed once at construction; after that only the `cleared` flag
//! changes. Row 0 is the bottom-most row of the field, so higher row
//! indices sit nearer the arena top and score more.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Row-pair grouping of bricks sharing color and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Yellow,
    Green,
    Orange,
    Red,
}

impl Tier {
    /// Tier for a grid row (0 = bottom-most row of the field).
    /// Rows beyond the table fall back to the highest tier; unreachable
    /// with the fixed 8-row grid.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => Tier::Yellow,
            2 | 3 => Tier::Green,
            4 | 5 => Tier::Orange,
            _ => Tier::Red,
        }
    }

    /// Base point value, multiplied by the current level when scored
    pub fn points(&self) -> u64 {
        match self {
            Tier::Yellow => 1,
            Tier::Green => 3,
            Tier::Orange => 5,
            Tier::Red => 7,
        }
    }

    /// Color name as the transport layer expects it
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Yellow => "yellow",
            Tier::Green => "green",
            Tier::Orange => "orange",
            Tier::Red => "red",
        }
    }
}

/// A single destructible cell
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tier: Tier,
    pub cleared: bool,
}

impl Brick {
    /// Build the brick for a grid cell, computing its rectangle.
    ///
    /// Columns share the arena width in integer units; the division
    /// remainder is split between the first and last columns so the row
    /// spans the arena exactly with no gap.
    pub fn new(row: usize, col: usize) -> Self {
        let total = ARENA_WIDTH as i32;
        let cols = BRICK_COLS as i32;
        let cell = total / cols;
        let rest = total - cell * cols;

        let width = if col == 0 {
            cell + rest / 2
        } else if col == BRICK_COLS - 1 {
            total - (cols - 1) * cell - rest / 2
        } else {
            cell
        };

        let mut x = col as i32 * cell;
        if col > 0 {
            x += rest / 2;
        }

        Self {
            row,
            col,
            x: x as f32,
            y: TOP_OFFSET + (BRICK_ROWS - row - 1) as f32 * BRICK_HEIGHT,
            width: width as f32,
            height: BRICK_HEIGHT,
            tier: Tier::for_row(row),
            cleared: false,
        }
    }
}

/// The fixed BRICK_ROWS × BRICK_COLS field, stored flat in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// Build a full grid with every brick intact
    pub fn new() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                bricks.push(Brick::new(row, col));
            }
        }
        Self { bricks }
    }

    /// Total number of cells in the grid
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[row * BRICK_COLS + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Brick {
        &mut self.bricks[row * BRICK_COLS + col]
    }

    /// Row-major iteration; the engine's scan order depends on it
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Number of bricks already cleared
    pub fn cleared_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.cleared).count()
    }
}
