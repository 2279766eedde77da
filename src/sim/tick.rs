//! Per-tick simulation update
//!
//! One call to [`tick`] advances the whole world by a single frame:
//! spawn cadence, player movement, firing, projectile motion, collision
//! resolution, scoring, and the game-over transition. The pipeline order
//! is fixed; each stage sees the results of the previous one.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use super::spawn::spawn_enemy;
use super::state::{Bullet, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
///
/// Directional intents are held-key state sampled by the driver; `fire` is
/// one-shot, latched on key-down and cleared by the driver after the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game state by one tick
///
/// A no-op once the phase is [`GamePhase::GameOver`]; only an explicit
/// restart resumes the simulation.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;

    if state.frame.is_multiple_of(SPAWN_INTERVAL_TICKS) {
        let enemy = spawn_enemy(&mut state.rng, state.bounds);
        state.enemies.push(enemy);
    }

    update_player(state, input);

    if input.fire {
        state
            .player_bullets
            .push(Bullet::from_player(&state.player));
    }

    update_player_bullets(state);
    update_enemy_bullets(state);
    update_enemies(state);
    update_stars(state);
}

/// Apply held directional intents and clamp the player inside the playfield.
///
/// Diagonal movement is unnormalized on purpose: both axes move at full
/// speed, matching the reference behavior.
fn update_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.pos.x -= player.speed;
    }
    if input.right {
        player.pos.x += player.speed;
    }
    if input.up {
        player.pos.y -= player.speed;
    }
    if input.down {
        player.pos.y += player.speed;
    }
    player.pos = player.pos.clamp(Vec2::ZERO, state.bounds - player.size);
}

/// Move player bullets upward; drop them once fully past the top edge
fn update_player_bullets(state: &mut GameState) {
    state.player_bullets.retain_mut(|bullet| {
        bullet.pos.y -= bullet.speed;
        bullet.pos.y > -bullet.size.y
    });
}

/// Move enemy bullets downward and resolve hits against the player.
///
/// A colliding bullet is consumed immediately; it never tests further
/// targets. Survivors are dropped once past the bottom edge.
fn update_enemy_bullets(state: &mut GameState) {
    let GameState {
        player,
        enemy_bullets,
        phase,
        score,
        bounds,
        ..
    } = state;

    enemy_bullets.retain_mut(|bullet| {
        bullet.pos.y += bullet.speed;

        if overlaps(&bullet.rect(), &player.rect()) {
            player.hp -= ENEMY_BULLET_DAMAGE;
            if player.hp <= 0 && *phase == GamePhase::Running {
                *phase = GamePhase::GameOver;
                log::info!("Game over (enemy fire), final score {score}");
            }
            return false;
        }

        bullet.pos.y < bounds.y
    });
}

/// Advance every enemy in spawn order: fall, maybe fire, take bullet hits,
/// then ram the player or leave the playfield.
///
/// Bullet checks run before the player-contact check, so an enemy killed by
/// a bullet this tick never deals contact damage. Enemies past the bottom
/// edge vanish silently (no score, no penalty).
fn update_enemies(state: &mut GameState) {
    let mut enemies = std::mem::take(&mut state.enemies);
    let GameState {
        rng,
        player,
        player_bullets,
        enemy_bullets,
        phase,
        score,
        enemies_destroyed,
        bounds,
        ..
    } = state;

    enemies.retain_mut(|enemy| {
        enemy.pos.y += enemy.speed;

        // Geometric firing interval with a cooldown floor
        enemy.shoot_timer += 1;
        if enemy.shoot_timer > ENEMY_SHOOT_COOLDOWN_TICKS
            && rng.random::<f32>() < ENEMY_SHOOT_CHANCE
        {
            enemy_bullets.push(Bullet::from_enemy(enemy));
            enemy.shoot_timer = 0;
        }

        // Scan bullets from the end so in-place removal stays stable
        let mut i = player_bullets.len();
        while i > 0 {
            i -= 1;
            if overlaps(&player_bullets[i].rect(), &enemy.rect()) {
                player_bullets.remove(i);
                enemy.hp -= 1;
                if enemy.hp <= 0 {
                    *score += enemy.class.score();
                    *enemies_destroyed += 1;
                    return false;
                }
            }
        }

        if overlaps(&enemy.rect(), &player.rect()) {
            player.hp -= ENEMY_CONTACT_DAMAGE;
            if player.hp <= 0 && *phase == GamePhase::Running {
                *phase = GamePhase::GameOver;
                log::info!("Game over (collision), final score {score}");
            }
            return false;
        }

        enemy.pos.y < bounds.y
    });

    state.enemies = enemies;
}

/// Scroll the starfield; stars wrap to the top at a fresh random x
fn update_stars(state: &mut GameState) {
    let GameState {
        rng,
        stars,
        bounds,
        ..
    } = state;

    for star in stars.iter_mut() {
        star.pos.y += star.speed;
        if star.pos.y > bounds.y {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..bounds.x);
        }
    }
}
