//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, one state transition per call
//! - Seeded RNG only
//! - Stable row-major brick scan order
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod engine;
pub mod grid;
pub mod paddle;

pub use ball::{Ball, BallEvent};
pub use collision::{BrickHit, ball_brick_collision, ball_paddle_overlap};
pub use engine::{BrickView, GameEngine, GamePhase, Snapshot};
pub use grid::{Brick, BrickGrid, Tier};
pub use paddle::Paddle;
