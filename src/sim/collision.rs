//! Collision detection for the brick field and paddle
//!
//! Axis-aligned tests between the ball's bounding circle and rectangles.
//! Each side of a rectangle is tested separately, and a contact only
//! counts when the ball is travelling into that side; the travel
//! direction disambiguates which axis caused the contact. The caller
//! applies the resulting velocity inversions.

use super::ball::Ball;
use super::grid::Brick;
use super::paddle::Paddle;
use crate::consts::ARENA_HEIGHT;

/// Axis decision from a ball-vs-brick test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrickHit {
    /// Contact on a vertical side; invert the ball's horizontal velocity
    pub reverse_x: bool,
    /// Contact on a horizontal side; invert the ball's vertical velocity
    pub reverse_y: bool,
}

impl BrickHit {
    pub fn any(&self) -> bool {
        self.reverse_x || self.reverse_y
    }
}

/// Test the ball against one brick, one side at a time.
///
/// A side hit requires the ball's edge to straddle that side, the ball to
/// overlap the brick's extent along the other axis, and the ball to be
/// moving into the side. Cleared bricks never collide.
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> BrickHit {
    let mut hit = BrickHit::default();
    if brick.cleared {
        return hit;
    }

    let (bx, by, r) = (ball.pos.x, ball.pos.y, ball.radius);
    let vel = ball.vel();
    let (left, top) = (brick.x, brick.y);
    let right = brick.x + brick.width;
    let bottom = brick.y + brick.height;

    let overlaps_y = (by + r > top && by + r <= bottom) || (by - r > top && by - r <= bottom);
    let overlaps_x = (bx + r > left && bx + r <= right) || (bx - r > left && bx - r <= right);

    // Left side: only counts moving rightward into it
    if bx + r > left && bx - r <= left && overlaps_y && vel.x > 0.0 {
        hit.reverse_x = true;
    }
    // Right side: only counts moving leftward into it
    if bx - r < right && bx + r >= right && overlaps_y && vel.x < 0.0 {
        hit.reverse_x = true;
    }
    // Top side: only counts moving downward into it
    if by + r > top && by - r <= top && overlaps_x && vel.y > 0.0 {
        hit.reverse_y = true;
    }
    // Bottom side: only counts moving upward into it
    if by - r < bottom && by + r >= bottom && overlaps_x && vel.y < 0.0 {
        hit.reverse_y = true;
    }

    hit
}

/// Test the ball against the paddle band at the bottom of the arena.
///
/// Vertical overlap with the band plus either ball edge inside the
/// paddle's horizontal extent. Rebound direction is the caller's job.
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    let (bx, by, r) = (ball.pos.x, ball.pos.y, ball.radius);
    let band_top = ARENA_HEIGHT - paddle.height;
    let band_bottom = band_top + paddle.height;

    if by + r < band_top || by >= band_bottom {
        return false;
    }

    let left = paddle.x;
    let right = paddle.x + paddle.width;
    (bx + r >= left && bx + r <= right) || (bx - r >= left && bx - r <= right)
}
