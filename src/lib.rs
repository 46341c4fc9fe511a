//! Pulse & Path - a rhythm puzzle about connecting pulsing nodes in sync
//!
//! Core modules:
//! - `engine`: Deterministic gameplay engine (pulse timing, connection rules, win check)
//! - `levels`: Curated tutorial levels and the seeded procedural generator
//! - `progress`: Star-rating persistence across sessions
//! - `rush`: Pulse Rush countdown mode

pub mod engine;
pub mod levels;
pub mod progress;
pub mod rush;

pub use engine::level::{Connection, GameNode, LevelConfig, LevelError, NodeColor, NodeKind};
pub use engine::session::{Attempt, Session, SessionStatus};
pub use levels::{TOTAL_LEVELS, get_level};
pub use progress::Progress;
pub use rush::RushMode;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Width of the connectable window around each pulse peak, in ms.
    /// Capped per node at 70% of its interval (see `engine::pulse`).
    pub const PULSE_WINDOW_MS: f32 = 1200.0;

    /// How long an anchor node stays forced-active after being reached (ms)
    pub const ANCHOR_HOLD_MS: u64 = 3000;

    /// Board coordinates are percentages; nodes live inside the padded region
    pub const BOARD_MIN: f32 = 10.0;
    pub const BOARD_MAX: f32 = 90.0;

    /// Minimum center-to-center distance between any two generated nodes
    pub const MIN_NODE_SEPARATION: f32 = 16.0;

    /// Pointer pick-up radius around a node, in board units
    pub const NODE_HIT_RADIUS: f32 = 8.0;

    /// Placement retries before a chain or branch is abandoned
    pub const MAX_PLACE_ATTEMPTS: u32 = 50;

    /// Generated phase offsets are rolled in [0, MAX_OFFSET_MS)
    pub const MAX_OFFSET_MS: f32 = 2000.0;

    /// Rush mode: starting clock, bonus per solve, clock cap (seconds)
    pub const RUSH_START_SECS: u32 = 60;
    pub const RUSH_BONUS_SECS: u32 = 10;
    pub const RUSH_CAP_SECS: u32 = 90;
}

/// Squared distance between two board points (avoids the sqrt in hot checks)
#[inline]
pub fn dist_sq(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}
