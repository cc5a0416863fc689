//! Breakwall - a tick-driven brick-breaking simulation core
//!
//! The crate is the gameplay engine only: ball kinematics, paddle control,
//! brick-grid collisions, scoring, and life/level progression. Rendering,
//! transport, and session management live in the embedding layer, which
//! drives the engine through paddle commands and `tick()` and reads back
//! an immutable [`sim::Snapshot`].

pub mod sim;

pub use sim::{Ball, BallEvent, Brick, BrickGrid, GameEngine, GamePhase, Paddle, Snapshot, Tier};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 182.0;
    pub const ARENA_HEIGHT: f32 = 240.0;

    /// Brick field layout
    pub const BRICK_COLS: usize = 14;
    pub const BRICK_ROWS: usize = 8;
    /// Vertical gap between the arena top and the highest brick row
    pub const TOP_OFFSET: f32 = 32.0;
    pub const BRICK_HEIGHT: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 2.0;
    pub const BALL_SPEED: f32 = 3.0;
    /// Horizontal velocity is clamped to this magnitude on heading changes
    pub const BALL_MAX_VX: f32 = 10.0;
    /// Margin kept clear of the side walls when spawning
    pub const BALL_SPAWN_MARGIN: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 24.0;
    pub const PADDLE_WIDTH_SHRUNK: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_STEP: f32 = 3.0;

    /// Paddle rebound: center angle (straight up, y grows downward)
    pub const PADDLE_REBOUND_CENTER_DEG: f32 = 270.0;
    /// Paddle rebound: spread to either side of center
    pub const PADDLE_REBOUND_SPREAD_DEG: f32 = 60.0;
    /// Small offset so the rebound never lands exactly on a boundary angle
    pub const PADDLE_REBOUND_EPSILON_DEG: f32 = 1.0;

    /// Lives counter starts at 1 and counts up; past this value the run ends
    pub const LIFE_LIMIT: u32 = 5;

    /// Per-tick reward signal values
    pub const REWARD_LIFE_LOST: i32 = -10;
    pub const REWARD_PADDLE_HIT: i32 = 10;
    pub const REWARD_NEUTRAL: i32 = 0;
}

/// Convert a heading in degrees and a scalar speed to a velocity vector
#[inline]
pub fn heading_to_velocity(dir_deg: f32, speed: f32) -> Vec2 {
    let theta = dir_deg.to_radians();
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}
