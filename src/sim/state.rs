//! Game state and core simulation types
//!
//! Everything the tick pipeline reads or mutates lives here, owned by a
//! single [`GameState`] that the driver passes explicitly to each update.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::seed_stars;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player hp reached zero; simulation halted until restart
    GameOver,
}

/// Enemy classes, in ascending order of toughness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyClass {
    Normal,
    Strong,
    Boss,
}

impl EnemyClass {
    /// Side length of the (square) enemy rectangle
    pub fn size(&self) -> f32 {
        match self {
            EnemyClass::Normal => 40.0,
            EnemyClass::Strong => 60.0,
            EnemyClass::Boss => 80.0,
        }
    }

    /// Hit points at spawn
    pub fn max_hp(&self) -> i32 {
        match self {
            EnemyClass::Normal => 1,
            EnemyClass::Strong => 3,
            EnemyClass::Boss => 10,
        }
    }

    /// Fall speed range in pixels per tick, `[min, max)`
    pub fn speed_range(&self) -> (f32, f32) {
        match self {
            EnemyClass::Normal => (2.0, 4.0),
            EnemyClass::Strong => (1.0, 2.0),
            EnemyClass::Boss => (0.5, 1.0),
        }
    }

    /// Score awarded when destroyed by player bullets
    pub fn score(&self) -> u64 {
        match self {
            EnemyClass::Normal => 100,
            EnemyClass::Strong => 300,
            EnemyClass::Boss => 1000,
        }
    }

    /// Flat CSS color used when the enemy's image has not loaded yet
    pub fn fallback_color(&self) -> &'static str {
        match self {
            EnemyClass::Normal => "#f0f",
            EnemyClass::Strong => "#ff0",
            EnemyClass::Boss => "#f00",
        }
    }

    /// Whether the renderer shows a health bar for this class
    pub fn has_health_bar(&self) -> bool {
        !matches!(self, EnemyClass::Normal)
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement speed in pixels per tick, per axis
    pub speed: f32,
    /// May dip below zero the instant damage lands; clamp for display
    pub hp: i32,
    pub max_hp: i32,
}

impl Player {
    /// Player at the default start position for the given playfield
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                bounds.x / 2.0 - PLAYER_SIZE / 2.0,
                bounds.y - PLAYER_START_OFFSET,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Hit points clamped at zero for presentation
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }
}

/// A projectile, fired by the player (moving up) or an enemy (moving down)
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Magnitude only; direction is implied by the owning collection
    pub speed: f32,
}

impl Bullet {
    /// Player bullet spawned at the ship's top-center
    pub fn from_player(player: &Player) -> Self {
        Self {
            pos: Vec2::new(
                player.pos.x + player.size.x / 2.0 - PLAYER_BULLET_WIDTH / 2.0,
                player.pos.y,
            ),
            size: Vec2::new(PLAYER_BULLET_WIDTH, PLAYER_BULLET_HEIGHT),
            speed: PLAYER_BULLET_SPEED,
        }
    }

    /// Enemy bullet spawned at the enemy's bottom-center
    pub fn from_enemy(enemy: &Enemy) -> Self {
        Self {
            pos: Vec2::new(
                enemy.pos.x + enemy.size.x / 2.0 - ENEMY_BULLET_WIDTH / 2.0,
                enemy.pos.y + enemy.size.y,
            ),
            size: Vec2::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT),
            speed: ENEMY_BULLET_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A descending enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed in pixels per tick
    pub speed: f32,
    pub hp: i32,
    pub class: EnemyClass,
    /// Ticks since this enemy last fired
    pub shoot_timer: u32,
    /// Index into the shared image pool (the slot may not be loaded yet)
    pub image_index: usize,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Remaining hp as a 0..=1 fraction of the class maximum
    pub fn hp_fraction(&self) -> f32 {
        (self.hp.max(0) as f32) / (self.class.max_hp() as f32)
    }
}

/// A background star; purely decorative, wraps around forever
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Playfield size in pixels
    pub bounds: Vec2,
    /// Simulation tick counter
    pub frame: u64,
    pub score: u64,
    pub enemies_destroyed: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    /// Kept in spawn order; updates iterate front to back
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
}

impl GameState {
    /// Create a fresh game with the given seed and playfield size
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = seed_stars(&mut rng, bounds);
        Self {
            seed,
            rng,
            bounds,
            frame: 0,
            score: 0,
            enemies_destroyed: 0,
            phase: GamePhase::Running,
            player: Player::new(bounds),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            stars,
        }
    }

    /// Reset all session and entity state atomically and resume running
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed, self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(42, Vec2::new(800.0, 600.0));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies_destroyed, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert!(state.player_bullets.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.stars.len(), STAR_COUNT);
        // Player starts centered, near the bottom
        assert_eq!(state.player.pos.x, 400.0 - PLAYER_SIZE / 2.0);
        assert_eq!(state.player.pos.y, 600.0 - PLAYER_START_OFFSET);
    }

    #[test]
    fn test_restart_resets_everything() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut state = GameState::new(1, bounds);
        state.score = 5000;
        state.enemies_destroyed = 12;
        state.frame = 999;
        state.player.hp = -5;
        state.phase = GamePhase::GameOver;
        state.player_bullets.push(Bullet::from_player(&state.player));

        state.restart(2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies_destroyed, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert!(state.player_bullets.is_empty());
        assert_eq!(state.bounds, bounds);
        assert_eq!(state.seed, 2);
    }

    #[test]
    fn test_display_hp_clamps_at_zero() {
        let mut player = Player::new(Vec2::new(800.0, 600.0));
        player.hp = -5;
        assert_eq!(player.display_hp(), 0);
    }

    #[test]
    fn test_class_parameters() {
        assert_eq!(EnemyClass::Normal.score(), 100);
        assert_eq!(EnemyClass::Strong.score(), 300);
        assert_eq!(EnemyClass::Boss.score(), 1000);
        assert!(!EnemyClass::Normal.has_health_bar());
        assert!(EnemyClass::Strong.has_health_bar());
        assert!(EnemyClass::Boss.has_health_bar());
    }
}
