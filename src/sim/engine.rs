//! Game engine: per-tick orchestration and state transitions
//!
//! Owns the ball, paddle, and brick grid exclusively, plus the run
//! counters (score, level, lives) and the seeded RNG used for spawns.
//! One `tick()` is one bounded state transition: advance the ball, resolve
//! at most one brick collision, resolve the paddle, then apply life/level
//! transitions. Callers observe the engine only through [`Snapshot`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallEvent};
use super::collision::{BrickHit, ball_brick_collision, ball_paddle_overlap};
use super::grid::{BrickGrid, Tier};
use super::paddle::Paddle;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay; life-loss and level-clear resets happen within it
    Playing,
    /// Terminal; every subsequent tick is a no-op
    GameOver,
}

/// One brick as exposed to external callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Tier,
}

/// Immutable state projection for the transport layer.
///
/// A value copy with no references back into engine state; cleared bricks
/// are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub width: f32,
    pub height: f32,
    pub paddle_x: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub bricks: Vec<BrickView>,
    pub level: u32,
    pub score: u64,
    pub lives: u32,
    pub frame_reward: i32,
    pub game_over: bool,
}

/// The simulation engine for one game session.
///
/// Single-threaded and fully synchronous; the embedding layer serializes
/// all command and tick calls against one instance.
#[derive(Debug, Clone)]
pub struct GameEngine {
    rng: Pcg32,
    ball: Ball,
    paddle: Paddle,
    grid: BrickGrid,
    score: u64,
    level: u32,
    lives: u32,
    frame_reward: i32,
    phase: GamePhase,
}

impl GameEngine {
    /// Fresh game with a reproducible spawn sequence
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(&mut rng);
        Self {
            rng,
            ball,
            paddle: Paddle::default(),
            grid: BrickGrid::new(),
            score: 0,
            level: 1,
            lives: 1,
            frame_reward: REWARD_NEUTRAL,
            phase: GamePhase::Playing,
        }
    }

    /// Fresh game seeded from the OS
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reward signal from the most recent tick
    pub fn frame_reward(&self) -> i32 {
        self.frame_reward
    }

    /// Step the paddle left; takes effect on the next tick's geometry
    pub fn paddle_left(&mut self) {
        self.paddle.move_left();
    }

    /// Step the paddle right; takes effect on the next tick's geometry
    pub fn paddle_right(&mut self) {
        self.paddle.move_right();
    }

    /// Reserved power-up capability; no automatic trigger
    pub fn paddle_shrink(&mut self) {
        self.paddle.shrink();
    }

    /// Reserved power-up capability; no automatic trigger
    pub fn paddle_unshrink(&mut self) {
        self.paddle.unshrink();
    }

    /// Advance the simulation one step.
    ///
    /// Sequence: ball advance (with possible life loss ending the tick
    /// early), row-major brick scan resolving at most one collision,
    /// paddle rebound, then the level-clear check.
    pub fn tick(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        if self.ball.advance() == BallEvent::OutOfBounds {
            self.lives += 1;
            log::debug!("ball out of bounds, lives now {}", self.lives);
            if self.lives > LIFE_LIMIT {
                log::info!("game over at score {} level {}", self.score, self.level);
                self.phase = GamePhase::GameOver;
            }
            self.frame_reward = REWARD_LIFE_LOST;
            self.ball = Ball::spawn(&mut self.rng);
            self.paddle = Paddle::default();
            return;
        }

        // Scan bricks in row-major order. The first brick with an axis hit
        // is cleared and scored; the rest of the scan only tallies cleared
        // bricks for the level-clear check.
        let mut cleared = 0usize;
        let mut hit = BrickHit::default();
        for brick in self.grid.iter_mut() {
            if brick.cleared {
                cleared += 1;
                continue;
            }
            if hit.any() {
                continue;
            }
            let this_hit = ball_brick_collision(&self.ball, brick);
            if this_hit.any() {
                brick.cleared = true;
                let points = brick.tier.points() * self.level as u64;
                self.score += points;
                cleared += 1;
                hit = this_hit;
                log::debug!(
                    "brick ({}, {}) cleared for {} points",
                    brick.row,
                    brick.col,
                    points
                );
            }
        }
        if hit.reverse_x {
            self.ball.reverse_vx();
        }
        if hit.reverse_y {
            self.ball.reverse_vy();
        }

        // Paddle rebound: map the contact offset linearly onto the
        // [center − spread, center + spread] fan, plus the epsilon nudge
        // off the boundary angle. Overwrites the reward every tick that
        // reaches this point.
        if ball_paddle_overlap(&self.ball, &self.paddle) {
            let offset = (self.ball.pos.x - self.paddle.center()) / (self.paddle.width / 2.0);
            self.ball.set_dir(
                PADDLE_REBOUND_CENTER_DEG
                    + offset * PADDLE_REBOUND_SPREAD_DEG
                    + PADDLE_REBOUND_EPSILON_DEG,
            );
            self.frame_reward = REWARD_PADDLE_HIT;
        } else {
            self.frame_reward = REWARD_NEUTRAL;
        }

        if cleared == self.grid.len() {
            self.level += 1;
            log::info!("field cleared, advancing to level {}", self.level);
            self.grid = BrickGrid::new();
            self.ball = Ball::spawn(&mut self.rng);
            self.paddle = Paddle::default();
        }
    }

    /// Immutable snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            ball_radius: self.ball.radius,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            paddle_x: self.paddle.x,
            paddle_width: self.paddle.width,
            paddle_height: self.paddle.height,
            bricks: self
                .grid
                .iter()
                .filter(|b| !b.cleared)
                .map(|b| BrickView {
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    height: b.height,
                    color: b.tier,
                })
                .collect(),
            level: self.level,
            score: self.score,
            lives: self.lives,
            frame_reward: self.frame_reward,
            game_over: self.is_game_over(),
        }
    }
}
