//! Orb Blaster entry point
//!
//! In the browser this wires the canvas, pointer input and menu to the
//! simulation. Natively it runs a headless autoplaying session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use glam::Vec2;
    use orb_blaster::consts::*;
    use orb_blaster::renderer::{CanvasSurface, draw_frame};
    use orb_blaster::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use orb_blaster::{GameConfig, Theme};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        last_time: f64,
        /// A frame callback is queued
        looping: bool,
    }

    impl Game {
        /// Run one simulation tick and draw it
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                FRAME_MS
            };
            self.last_time = time;

            tick(&mut self.state, &self.input, dt);
            self.input.clear();
            draw_frame(&self.state, &mut self.surface);
        }

        fn redraw(&mut self) {
            draw_frame(&self.state, &mut self.surface);
        }

        fn restart(&mut self) {
            self.state.start();
            self.input.clear();
            self.last_time = 0.0;
        }
    }

    fn current_document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = el.style().set_property(property, value) {
            log::warn!("set {} failed: {:?}", property, e);
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        if let Some(el) = element(document, id) {
            set_style(&el, "display", display);
        }
    }

    /// Recolor the page chrome for a theme
    fn apply_theme_chrome(document: &Document, theme: &Theme) {
        if let Some(body) = document.body() {
            set_style(&body, "background-color", &theme.background.to_css());
        }
        if let Ok(buttons) = document.query_selector_all(".button") {
            for i in 0..buttons.length() {
                if let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                {
                    set_style(&button, "background-color", &theme.button.to_css());
                }
            }
        }
        if let Some(counter) = element(document, "score-counter") {
            set_style(&counter, "color", &theme.score.to_css());
        }
    }

    /// Pointer position relative to the canvas
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Orb Blaster starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Canvas fills the window
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let config = GameConfig::with_canvas(width as f32, height as f32);
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let theme = Theme::default();
        let state = GameState::new(config, theme, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let surface = CanvasSurface::new(&canvas)?;

        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            input: TickInput::default(),
            last_time: 0.0,
            looping: false,
        }));
        game.borrow_mut().redraw();
        apply_theme_chrome(&document, &theme);

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;
        setup_start_button(&document, game.clone())?;
        setup_theme_button(&document, game)?;

        log::info!("Orb Blaster ready");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Click anywhere fires toward the pointer
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    let point = canvas_point(&canvas, event.client_x(), event.client_y());
                    g.input.shots.push(point);
                }
            });
            window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start fires like a click
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    event.prevent_default();
                    let point = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                    g.input.shots.push(point);
                }
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("start-btn") else {
            log::warn!("start button missing");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // Keep the click from also firing a shot
            event.stop_propagation();

            let start_loop = {
                let mut g = game.borrow_mut();
                g.restart();
                let start_loop = !g.looping;
                g.looping = true;
                start_loop
            };

            if let Some(document) = current_document() {
                set_display(&document, "menu", "none");
                set_text(&document, "score-value", "0");
            }
            if start_loop {
                request_animation_frame(game.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_theme_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("theme-btn") else {
            log::warn!("theme button missing");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.stop_propagation();
            let mut g = game.borrow_mut();
            let theme = g.state.theme.toggled();
            g.state.set_theme(theme);
            if let Some(document) = current_document() {
                apply_theme_chrome(&document, &theme);
            }
            g.redraw();
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.frame(time);
            let events = g.state.drain_events();

            if let Some(document) = current_document() {
                set_text(&document, "score-value", &g.state.score.to_string());

                for event in &events {
                    if let GameEvent::GameOver { score } = event {
                        set_text(&document, "final-score", &score.to_string());
                        set_display(&document, "game-over-msg", "block");
                        set_text(&document, "start-btn", "Play again!");
                        set_display(&document, "menu", "flex");
                    }
                }
            }

            g.looping = g.state.phase == GamePhase::Running;
            g.looping
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orb Blaster (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12345);

    match headless::autoplay(seed, 60 * 60 * 5) {
        Ok(score) => println!("Final score: {score}"),
        Err(e) => {
            log::error!("Could not start session: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted play without a display
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use orb_blaster::consts::FRAME_MS;
    use orb_blaster::sim::{GamePhase, GameState, TickInput, tick};
    use orb_blaster::{ConfigError, GameConfig, Theme};

    /// Frames between shots
    const FIRE_EVERY: u64 = 12;

    /// Play up to `max_frames` frames, shooting at the closest enemy on a
    /// fixed cadence, and return the score
    pub fn autoplay(seed: u64, max_frames: u64) -> Result<u64, ConfigError> {
        let mut state = GameState::new(GameConfig::default(), Theme::default(), seed)?;
        state.start();

        let mut input = TickInput::default();
        for frame in 0..max_frames {
            if frame % FIRE_EVERY == 0 {
                let player = state.player.pos;
                let target = state
                    .enemies
                    .iter()
                    .map(|e| e.body.pos)
                    .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));
                if let Some(target) = target {
                    input.shots.push(target);
                }
            }

            tick(&mut state, &input, FRAME_MS);
            input.clear();

            if state.phase != GamePhase::Running {
                break;
            }
        }

        log::info!(
            "Autoplay finished after {} frames: score {}, {} enemies left",
            state.frame,
            state.score,
            state.enemies.len()
        );
        Ok(state.score)
    }
}
