//! The player's paddle
//!
//! Horizontal-only movement in fixed steps, saturating at the arena edges.
//! Shrink/unshrink are exposed capabilities with no automatic trigger in
//! the engine; they are reserved for power-up style extensions.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The paddle entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge x-coordinate; invariant 0 ≤ x ≤ ARENA_WIDTH − width
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: ARENA_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Horizontal center of the paddle
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Step left, saturating at the left wall
    pub fn move_left(&mut self) {
        self.x = (self.x - PADDLE_STEP).max(0.0);
    }

    /// Step right, saturating at the right wall
    pub fn move_right(&mut self) {
        self.x = (self.x + PADDLE_STEP).min(ARENA_WIDTH - self.width);
    }

    /// Reduce to the shrunk width, if not already there
    pub fn shrink(&mut self) {
        if self.width > PADDLE_WIDTH_SHRUNK {
            self.width = PADDLE_WIDTH_SHRUNK;
        }
    }

    /// Restore the default width, if shrunk. Re-clamps the position so the
    /// wider paddle stays inside the arena.
    pub fn unshrink(&mut self) {
        if self.width < PADDLE_WIDTH {
            self.width = PADDLE_WIDTH;
            self.x = self.x.min(ARENA_WIDTH - self.width);
        }
    }
}
