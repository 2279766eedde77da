//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use spawn::{seed_stars, spawn_enemy};
pub use state::{Bullet, Enemy, EnemyClass, GamePhase, GameState, Player, Star};
pub use tick::{TickInput, tick};
