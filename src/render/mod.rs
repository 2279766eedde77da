//! Canvas-2D presentation layer (wasm only)
//!
//! Consumes simulation output and the image pool; produces nothing back.
//! Enemies render from their image when the slot has loaded, otherwise as a
//! flat class-colored rectangle.

use web_sys::CanvasRenderingContext2d;

use crate::assets::EnemyImages;
use crate::sim::GameState;

/// Height of the green hp bar above strong/boss enemies
const HP_BAR_HEIGHT: f64 = 5.0;
/// Vertical gap between an enemy and its hp bar
const HP_BAR_OFFSET: f64 = 10.0;

/// Draw one frame of the current state
pub fn render(ctx: &CanvasRenderingContext2d, state: &GameState, images: &EnemyImages) {
    // Background
    ctx.set_fill_style_str("#001f3f");
    ctx.fill_rect(0.0, 0.0, state.bounds.x as f64, state.bounds.y as f64);

    // Starfield
    ctx.set_fill_style_str("#fff");
    for star in &state.stars {
        ctx.fill_rect(
            star.pos.x as f64,
            star.pos.y as f64,
            star.size as f64,
            star.size as f64,
        );
    }

    // Player ship as an upward-pointing triangle
    let p = &state.player;
    ctx.set_fill_style_str("#0ff");
    ctx.begin_path();
    ctx.move_to((p.pos.x + p.size.x / 2.0) as f64, p.pos.y as f64);
    ctx.line_to(p.pos.x as f64, (p.pos.y + p.size.y) as f64);
    ctx.line_to((p.pos.x + p.size.x) as f64, (p.pos.y + p.size.y) as f64);
    ctx.close_path();
    ctx.fill();

    // Player bullets
    ctx.set_fill_style_str("#0f0");
    for bullet in &state.player_bullets {
        ctx.fill_rect(
            bullet.pos.x as f64,
            bullet.pos.y as f64,
            bullet.size.x as f64,
            bullet.size.y as f64,
        );
    }

    // Enemy bullets
    ctx.set_fill_style_str("#f00");
    for bullet in &state.enemy_bullets {
        ctx.fill_rect(
            bullet.pos.x as f64,
            bullet.pos.y as f64,
            bullet.size.x as f64,
            bullet.size.y as f64,
        );
    }

    // Enemies: image when ready, class color otherwise
    for enemy in &state.enemies {
        let (x, y) = (enemy.pos.x as f64, enemy.pos.y as f64);
        let (w, h) = (enemy.size.x as f64, enemy.size.y as f64);

        match images.get(enemy.image_index) {
            Some(image) => {
                if let Err(e) =
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)
                {
                    log::warn!("drawImage failed: {e:?}");
                }
            }
            None => {
                ctx.set_fill_style_str(enemy.class.fallback_color());
                ctx.fill_rect(x, y, w, h);
            }
        }

        if enemy.class.has_health_bar() {
            ctx.set_fill_style_str("#0f0");
            ctx.fill_rect(
                x,
                y - HP_BAR_OFFSET,
                w * enemy.hp_fraction() as f64,
                HP_BAR_HEIGHT,
            );
        }
    }
}
