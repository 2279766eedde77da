//! Astro Strike - a vertical space shooter on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `assets`: Fire-and-forget image pool with polled readiness
//! - `render`: Canvas-2D presentation (wasm only, consumes sim output)

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use assets::EnemyImages;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield defaults (native / fallback; wasm reads the canvas element)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HP: i32 = 100;
    /// Vertical gap between the playfield bottom and the player's start position
    pub const PLAYER_START_OFFSET: f32 = 100.0;

    /// Player bullets
    pub const PLAYER_BULLET_WIDTH: f32 = 6.0;
    pub const PLAYER_BULLET_HEIGHT: f32 = 20.0;
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;

    /// Enemy bullets
    pub const ENEMY_BULLET_WIDTH: f32 = 6.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 15.0;
    pub const ENEMY_BULLET_SPEED: f32 = 5.0;
    pub const ENEMY_BULLET_DAMAGE: i32 = 10;

    /// Damage when an enemy rams the player
    pub const ENEMY_CONTACT_DAMAGE: i32 = 20;

    /// One enemy spawns every this many ticks
    pub const SPAWN_INTERVAL_TICKS: u64 = 60;
    /// Minimum ticks between shots from a single enemy
    pub const ENEMY_SHOOT_COOLDOWN_TICKS: u32 = 60;
    /// Per-tick firing probability once the cooldown has elapsed
    pub const ENEMY_SHOOT_CHANCE: f32 = 0.02;

    /// Background starfield size
    pub const STAR_COUNT: usize = 100;

    /// Number of enemy images in the shared pool
    pub const ENEMY_IMAGE_COUNT: usize = 9;
}
