//! Astro Strike entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use astro_strike::assets::EnemyImages;
    use astro_strike::consts::*;
    use astro_strike::render;
    use astro_strike::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        images: EnemyImages,
        ctx: CanvasRenderingContext2d,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, bounds: Vec2, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(seed, bounds),
                input: TickInput::default(),
                images: EnemyImages::load(),
                ctx,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks from the accumulated frame time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= TICK_DT;
                substeps += 1;

                // Fire is one-shot; held keys stay latched until keyup
                self.input.fire = false;
            }
        }

        fn render(&self) {
            render::render(&self.ctx, &self.state, &self.images);
        }

        /// Mirror score/hp/game-over state into the DOM
        fn update_hud(&self, document: &Document) {
            set_text(document, "score", &self.state.score.to_string());
            set_text(document, "hp", &self.state.player.display_hp().to_string());

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    set_text(document, "final-score", &self.state.score.to_string());
                    set_text(
                        document,
                        "enemies-destroyed",
                        &self.state.enemies_destroyed.to_string(),
                    );
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Reset all session and entity state for a new run
        fn restart(&mut self, seed: u64) {
            self.state.restart(seed);
            self.input = TickInput::default();
            self.accumulator = 0.0;
        }
    }

    fn set_text(document: &Document, id: &str, value: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(value));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Strike starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, bounds, ctx)));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Astro Strike running!");
    }

    /// Map a key name to the held directional intent it controls
    fn intent_flag<'a>(input: &'a mut TickInput, key: &str) -> Option<&'a mut bool> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(&mut input.left),
            "ArrowRight" | "d" | "D" => Some(&mut input.right),
            "ArrowUp" | "w" | "W" => Some(&mut input.up),
            "ArrowDown" | "s" | "S" => Some(&mut input.down),
            _ => None,
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key-down: latch held intents, edge-trigger fire
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if key == " " {
                    event.prevent_default();
                    g.input.fire = true;
                } else if let Some(flag) = intent_flag(&mut g.input, &key) {
                    *flag = true;
                }
                // Unrecognized keys are silently ignored
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up: release held intents
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(flag) = intent_flag(&mut g.input, &event.key()) {
                    *flag = false;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {seed}");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #restart-btn element; restart unavailable");
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_strike::consts::*;
    use astro_strike::sim::{GamePhase, GameState, TickInput, tick};
    use glam::Vec2;

    env_logger::init();
    log::info!("Astro Strike (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in the browser");

    // Scripted smoke run against a fixed seed
    let bounds = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    let mut state = GameState::new(0xA57_805E, bounds);
    let mut ticks = 0u32;
    while state.phase == GamePhase::Running && ticks < 3600 {
        let input = TickInput {
            left: (ticks / 120) % 2 == 0,
            right: (ticks / 120) % 2 == 1,
            fire: ticks % 15 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    println!(
        "Demo run: {} ticks, score {}, destroyed {}, hp {}",
        ticks,
        state.score,
        state.enemies_destroyed,
        state.player.display_hp()
    );
}
