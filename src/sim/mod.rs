//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick semantics (the spawn timer is the lone wall-clock input)
//! - Seeded RNG only
//! - Stable pool iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::ball_paddle_catch;
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickInput, tick};
