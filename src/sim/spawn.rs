//! Probabilistic enemy spawning and starfield seeding
//!
//! Class selection uses fixed cumulative thresholds on a single uniform
//! draw: 70% normal, 20% strong, 10% boss. Spawn cadence is the tick
//! pipeline's concern (one spawn every `SPAWN_INTERVAL_TICKS`).

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyClass, Star};
use crate::consts::{ENEMY_IMAGE_COUNT, STAR_COUNT};

/// Draw one enemy, fully inside the horizontal bounds and one body-height
/// above the top edge.
pub fn spawn_enemy<R: Rng>(rng: &mut R, bounds: Vec2) -> Enemy {
    let roll: f32 = rng.random();
    let class = if roll < 0.7 {
        EnemyClass::Normal
    } else if roll < 0.9 {
        EnemyClass::Strong
    } else {
        EnemyClass::Boss
    };

    let size = class.size();
    let (speed_min, speed_max) = class.speed_range();
    // Image chosen independently of class; the slot may still be loading
    let image_index = rng.random_range(0..ENEMY_IMAGE_COUNT);

    Enemy {
        pos: Vec2::new(rng.random_range(0.0..bounds.x - size), -size),
        size: Vec2::splat(size),
        speed: rng.random_range(speed_min..speed_max),
        hp: class.max_hp(),
        class,
        shoot_timer: 0,
        image_index,
    }
}

/// Seed the decorative starfield, scattered across the whole playfield
pub fn seed_stars<R: Rng>(rng: &mut R, bounds: Vec2) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            speed: rng.random_range(1.0..3.0),
            size: rng.random_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_spawn_inside_horizontal_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let enemy = spawn_enemy(&mut rng, BOUNDS);
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x + enemy.size.x <= BOUNDS.x);
            // Starts exactly one body-height above the top edge
            assert_eq!(enemy.pos.y, -enemy.size.y);
            assert!(enemy.image_index < ENEMY_IMAGE_COUNT);
            assert_eq!(enemy.shoot_timer, 0);
        }
    }

    #[test]
    fn test_class_parameters_applied() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..1000 {
            let enemy = spawn_enemy(&mut rng, BOUNDS);
            assert_eq!(enemy.hp, enemy.class.max_hp());
            assert_eq!(enemy.size.x, enemy.class.size());
            let (lo, hi) = enemy.class.speed_range();
            assert!(enemy.speed >= lo && enemy.speed < hi);
        }
    }

    #[test]
    fn test_class_distribution() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let n = 100_000;
        let mut counts = [0u32; 3];
        for _ in 0..n {
            let enemy = spawn_enemy(&mut rng, BOUNDS);
            match enemy.class {
                EnemyClass::Normal => counts[0] += 1,
                EnemyClass::Strong => counts[1] += 1,
                EnemyClass::Boss => counts[2] += 1,
            }
        }
        let frac = |c: u32| c as f64 / n as f64;
        assert!((frac(counts[0]) - 0.7).abs() < 0.01);
        assert!((frac(counts[1]) - 0.2).abs() < 0.01);
        assert!((frac(counts[2]) - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_starfield_seeding() {
        let mut rng = Pcg32::seed_from_u64(3);
        let stars = seed_stars(&mut rng, BOUNDS);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < BOUNDS.x);
            assert!(star.pos.y >= 0.0 && star.pos.y < BOUNDS.y);
            assert!(star.speed >= 1.0 && star.speed < 3.0);
            assert!(star.size >= 0.0 && star.size < 2.0);
        }
    }
}
