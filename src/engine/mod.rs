//! Deterministic gameplay engine
//!
//! All rules logic lives here. This module must be pure and deterministic:
//! - Game time is an explicit input, never read from ambient clocks
//! - Seeded RNG only (the generator threads its own 32-bit state)
//! - The connection set is mutated in exactly one place (`Session::release`)
//! - No rendering or platform dependencies

pub mod connect;
pub mod level;
pub mod pulse;
pub mod rng;
pub mod session;
pub mod win;

pub use connect::{RejectReason, can_originate, try_connect};
pub use level::{Connection, GameNode, LevelConfig, LevelError, NodeColor, NodeKind};
pub use pulse::is_active;
pub use rng::Mulberry32;
pub use session::{Attempt, Session, SessionStatus};
pub use win::is_solved;
