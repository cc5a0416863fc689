//! Ball kinematics and wall reflection
//!
//! The ball stores its heading in degrees (the engine's external contract)
//! and a derived velocity vector. Side and top walls are absorbed inside
//! [`Ball::advance`]; only the bottom boundary is reported to the caller,
//! because crossing it costs a life.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_to_velocity;

/// Outcome of a single ball advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Ball is still in play (includes ordinary wall bounces)
    InPlay,
    /// Ball crossed the bottom boundary; life-loss trigger
    OutOfBounds,
}

/// The ball entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Heading in degrees; velocity is derived from it
    dir: f32,
    speed: f32,
    vel: Vec2,
}

impl Ball {
    /// Spawn a fresh ball at the vertical mid-point, at a random horizontal
    /// offset, heading down-right (45°) or down-left (135°) with equal odds.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random_range(BALL_SPAWN_MARGIN..ARENA_WIDTH - BALL_SPAWN_MARGIN);
        let mut ball = Self {
            pos: Vec2::new(x, ARENA_HEIGHT / 2.0),
            radius: BALL_RADIUS,
            dir: 0.0,
            speed: BALL_SPEED,
            vel: Vec2::ZERO,
        };
        ball.set_dir(if rng.random_bool(0.5) { 45.0 } else { 135.0 });
        ball
    }

    /// Current heading in degrees
    pub fn dir(&self) -> f32 {
        self.dir
    }

    /// Current velocity vector
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Set the heading and recompute velocity from it.
    ///
    /// The components are clamped (|vx| ≤ BALL_MAX_VX, |vy| ≤ BRICK_HEIGHT)
    /// so a speed change can never let the ball tunnel through a brick row
    /// in one tick.
    pub fn set_dir(&mut self, dir_deg: f32) {
        self.dir = dir_deg;
        let v = heading_to_velocity(dir_deg, self.speed);
        self.vel = Vec2::new(
            v.x.clamp(-BALL_MAX_VX, BALL_MAX_VX),
            v.y.clamp(-BRICK_HEIGHT, BRICK_HEIGHT),
        );
    }

    /// Override the scalar speed, keeping the current heading
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.set_dir(self.dir);
    }

    /// Advance one tick and resolve wall contacts per axis.
    ///
    /// Left, right, and top walls clamp-and-invert only when the ball is
    /// moving toward them. The bottom boundary does the same but reports
    /// [`BallEvent::OutOfBounds`] instead of absorbing the contact.
    #[must_use]
    pub fn advance(&mut self) -> BallEvent {
        self.pos += self.vel;

        if self.pos.x <= self.radius && self.vel.x < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
        }
        if self.pos.x >= ARENA_WIDTH - self.radius && self.vel.x > 0.0 {
            self.pos.x = ARENA_WIDTH - self.radius;
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= self.radius && self.vel.y < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
        }
        if self.pos.y > ARENA_HEIGHT - self.radius {
            if self.vel.y > 0.0 {
                self.pos.y = ARENA_HEIGHT - self.radius;
                self.vel.y = -self.vel.y;
            }
            return BallEvent::OutOfBounds;
        }

        BallEvent::InPlay
    }

    /// Flip the horizontal velocity; used after a brick-collision axis decision
    pub fn reverse_vx(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Flip the vertical velocity; used after a brick-collision axis decision
    pub fn reverse_vy(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_ball() -> Ball {
        Ball::spawn(&mut Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_spawn_defaults() {
        let ball = test_ball();
        assert_eq!(ball.pos.y, ARENA_HEIGHT / 2.0);
        assert_eq!(ball.radius, BALL_RADIUS);
        assert!(ball.pos.x >= BALL_SPAWN_MARGIN);
        assert!(ball.pos.x <= ARENA_WIDTH - BALL_SPAWN_MARGIN);
        assert!(ball.dir() == 45.0 || ball.dir() == 135.0);
        // Both spawn headings move downward
        assert!(ball.vel().y > 0.0);
    }

    #[test]
    fn test_set_dir_velocity() {
        let mut ball = test_ball();
        ball.set_dir(90.0);
        assert_eq!(ball.dir(), 90.0);
        assert!(ball.vel().x.abs() < 1e-5);
        assert!((ball.vel().y - BALL_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_set_dir_clamps_high_speed() {
        let mut ball = test_ball();
        ball.set_speed(20.0);

        ball.set_dir(0.0);
        assert!(ball.vel().x <= BALL_MAX_VX);
        ball.set_dir(180.0);
        assert!(ball.vel().x >= -BALL_MAX_VX);
        ball.set_dir(90.0);
        assert!(ball.vel().y <= BRICK_HEIGHT);
        ball.set_dir(270.0);
        assert!(ball.vel().y >= -BRICK_HEIGHT);
    }

    #[test]
    fn test_side_and_top_walls_reflect() {
        let mut ball = test_ball();

        ball.pos = Vec2::new(ball.radius, ARENA_HEIGHT / 2.0);
        ball.vel = Vec2::new(-1.0, 0.0);
        assert_eq!(ball.advance(), BallEvent::InPlay);
        assert!(ball.vel().x > 0.0);
        assert_eq!(ball.pos.x, ball.radius);

        ball.pos = Vec2::new(ARENA_WIDTH - ball.radius, ARENA_HEIGHT / 2.0);
        ball.vel = Vec2::new(1.0, 0.0);
        assert_eq!(ball.advance(), BallEvent::InPlay);
        assert!(ball.vel().x < 0.0);

        ball.pos = Vec2::new(ARENA_WIDTH / 2.0, ball.radius);
        ball.vel = Vec2::new(0.0, -1.0);
        assert_eq!(ball.advance(), BallEvent::InPlay);
        assert!(ball.vel().y > 0.0);
    }

    #[test]
    fn test_bottom_boundary_reports_out_of_bounds() {
        let mut ball = test_ball();
        ball.pos = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - ball.radius);
        ball.vel = Vec2::new(0.0, 2.0);

        assert_eq!(ball.advance(), BallEvent::OutOfBounds);
        // Clamped and inverted, not left below the floor
        assert_eq!(ball.pos.y, ARENA_HEIGHT - ball.radius);
        assert!(ball.vel().y < 0.0);
    }

    #[test]
    fn test_reverse_components() {
        let mut ball = test_ball();
        let vel = ball.vel();
        ball.reverse_vx();
        assert_eq!(ball.vel().x, -vel.x);
        ball.reverse_vy();
        assert_eq!(ball.vel().y, -vel.y);
    }

    proptest! {
        /// The ball can never escape through the side or top walls, and the
        /// bottom clamp keeps it at or above the floor line.
        #[test]
        fn prop_ball_stays_in_arena(seed in any::<u64>(), dir in 0.0f32..360.0, steps in 1usize..500) {
            let mut ball = Ball::spawn(&mut Pcg32::seed_from_u64(seed));
            ball.set_dir(dir);
            for _ in 0..steps {
                let _ = ball.advance();
                prop_assert!(ball.pos.x >= ball.radius);
                prop_assert!(ball.pos.x <= ARENA_WIDTH - ball.radius);
                prop_assert!(ball.pos.y >= ball.radius);
                prop_assert!(ball.pos.y <= ARENA_HEIGHT);
            }
        }
    }
}
