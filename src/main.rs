//! Dash Runner entry point
//!
//! Handles platform-specific wiring and runs the frame loop. The browser
//! build drives the simulation from requestAnimationFrame; the native
//! build runs a short headless session on the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use dash_runner::Settings;
    use dash_runner::consts::*;
    use dash_runner::renderer::CanvasRenderer;
    use dash_runner::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        settings: Settings,
        input: TickInput,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase transitions for logging
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, view: Vec2, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed, view),
                renderer: None,
                settings,
                input: TickInput::default(),
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Ready,
            }
        }

        /// Run one simulation step from a frame timestamp delta
        fn update(&mut self, dt: f32, time: f64) {
            // A backgrounded tab hands us a huge delta on resume; clamp it
            // so the player can't tunnel through an obstacle in one step
            let dt = dt.min(MAX_FRAME_DT);

            let input = self.input.clone();
            tick(&mut self.state, &input, dt);

            // Clear one-shot inputs after processing
            self.input.jump_press = false;
            self.input.jump_release = false;
            self.input.duck_press = false;
            self.input.duck_release = false;

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == GamePhase::GameOver {
                    log::info!("Run over at score {}", self.state.score_display());
                }
                self.last_phase = phase;
            }
        }

        /// Paint the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state, &self.settings);
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score_display())));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} FPS", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Instructions overlay before the first start
            if let Some(el) = document.get_element_by_id("instructions") {
                if self.state.phase == GamePhase::Ready {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Game-over overlay with the final score
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score_display().to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Fresh seeded state, running immediately
        fn restart(&mut self, seed: u64) {
            let view = self.state.view;
            self.state = GameState::new(seed, view);
            self.state.start();
            self.input = TickInput {
                idle_mode: self.input.idle_mode,
                ..Default::default()
            };
            self.last_phase = self.state.phase;
        }
    }

    /// Playable area from the window, capped at the design maximum
    fn view_size(window: &web_sys::Window) -> Vec2 {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(MAX_VIEW_WIDTH as f64) as f32;
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(MAX_VIEW_HEIGHT as f64) as f32;
        Vec2::new(w.min(MAX_VIEW_WIDTH), h.min(MAX_VIEW_HEIGHT))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dash Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let view = view_size(&window);
        canvas.set_width(view.x as u32);
        canvas.set_height(view.y as u32);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, view, settings)));

        log::info!("Game initialized with seed: {}", seed);

        match CanvasRenderer::new(&canvas) {
            Ok(renderer) => game.borrow_mut().renderer = Some(renderer),
            Err(e) => log::error!("Renderer init failed: {:?}", e),
        }

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_touch_controls(game.clone());
        setup_resize(canvas, game.clone());

        request_animation_frame(game);

        log::info!("Dash Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard press edges
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => {
                        g.state.start();
                        g.input.jump_press = true;
                    }
                    "ArrowDown" => {
                        g.state.start();
                        g.input.duck_press = true;
                    }
                    "i" | "I" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    "c" | "C" => {
                        g.settings.decorations = !g.settings.decorations;
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard release edges
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => g.input.jump_release = true,
                    "ArrowDown" => g.input.duck_release = true,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen jump/duck buttons for touch devices; start = press edge,
    /// end = release edge, same as the keyboard
    fn setup_touch_controls(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("jump-btn") {
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    g.state.start();
                    g.input.jump_press = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.jump_release = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("duck-btn") {
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    g.state.start();
                    g.input.duck_press = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.duck_release = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let view = view_size(&window);
            canvas.set_width(view.x as u32);
            canvas.set_height(view.y as u32);
            game.borrow_mut().state.set_viewport(view);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
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
                0.0
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;

    use dash_runner::consts::MAX_VIEW_WIDTH;
    use dash_runner::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Dash Runner (native) starting...");

    // Headless smoke run: one autopilot minute, or until it crashes into
    // something
    let mut state = GameState::new(42, Vec2::new(MAX_VIEW_WIDTH, 450.0));
    state.start();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let step = 1.0 / 60.0;
    let mut frames = 0u32;
    while state.phase == GamePhase::Running && frames < 60 * 60 {
        tick(&mut state, &input, step);
        frames += 1;
    }

    println!(
        "Autopilot survived {:.1}s, final score {}",
        frames as f32 * step,
        state.score_display()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
