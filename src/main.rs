//! Monkey Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use monkey_breakout::renderer::{CanvasSurface, draw_frame};
    use monkey_breakout::sim::{GameEvent, GameState, rules, tick};
    use monkey_breakout::{InputState, Layout};

    const CANVAS_ID: &str = "breakoutCanvas";

    thread_local! {
        /// Handle for the menu shell's `breakout_start` hook
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
    }

    impl Game {
        /// One frame: snapshot input, tick, draw
        fn frame(&mut self) {
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input);

            for event in self.state.events() {
                match event {
                    GameEvent::GameOver { final_score } => {
                        log::info!("Game over with {} points", final_score)
                    }
                    GameEvent::WaveCleared { wave } => log::info!("Wave {} cleared", wave),
                    _ => {}
                }
            }

            draw_frame(&self.state, &mut self.surface);
        }

        fn suspend(&mut self, reason: &str) {
            if self.state.running {
                rules::suspend(&mut self.state);
                log::info!("Auto-paused ({})", reason);
            }
            self.input.release_all();
        }
    }

    /// Called by the menu shell when the breakout view is shown
    #[wasm_bindgen]
    pub fn breakout_start() {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().suspend("view entered");
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Monkey Breakout starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        // Page without the breakout view: nothing to do
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No #{} canvas, breakout disabled", CANVAS_ID);
            return;
        };

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let layout = Layout::for_surface(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = layout.validate() {
            log::error!("Canvas too small for the brick layout: {}", e);
            return;
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(layout, seed),
            input: InputState::new(),
            surface,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone());
        setup_auto_pause(&window, &document, game.clone());
        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        // Start game loop
        request_animation_frame(game);

        log::info!("Monkey Breakout running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.input.key_down(&event.key(), &event.code(), event.repeat()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key(), &event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(
        window: &web_sys::Window,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().suspend("tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().suspend("window blur");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use monkey_breakout::sim::{GameEvent, GameState, tick};
    use monkey_breakout::{Layout, autopilot};

    /// Ticks in a demo run (one minute at 60 frames per second)
    const DEMO_TICKS: u64 = 60 * 60;

    /// Parse `[seed] [--layout <file.json>]`
    fn parse_args() -> (u64, Layout) {
        let mut seed = 42;
        let mut layout = Layout::default();
        let mut args = std::env::args().skip(1);

        while let Some(arg) = args.next() {
            if arg == "--layout" {
                let Some(path) = args.next() else {
                    log::error!("--layout needs a file path");
                    continue;
                };
                match std::fs::read_to_string(&path) {
                    Ok(json) => match Layout::from_json(&json) {
                        Ok(loaded) => {
                            log::info!("Loaded layout from {}", path);
                            layout = loaded;
                        }
                        Err(e) => log::error!("{}: {}, using default layout", path, e),
                    },
                    Err(e) => log::error!("Cannot read {}: {}, using default layout", path, e),
                }
            } else {
                match arg.parse() {
                    Ok(s) => seed = s,
                    Err(_) => log::warn!("Ignoring argument {:?}", arg),
                }
            }
        }

        (seed, layout)
    }

    pub fn run() {
        let (seed, layout) = parse_args();
        let mut state = GameState::new(layout, seed);
        log::info!("Autopilot demo with seed {} for {} ticks", seed, DEMO_TICKS);

        let mut bricks_broken = 0u64;
        let mut balls_lost = 0u64;
        for _ in 0..DEMO_TICKS {
            let input = autopilot(&state);
            tick(&mut state, &input);
            for event in state.events() {
                match event {
                    GameEvent::BrickBroken { .. } => bricks_broken += 1,
                    GameEvent::BallLost { .. } => balls_lost += 1,
                    _ => {}
                }
            }
        }

        log::info!(
            "Demo finished: score {}, lives {}, waves cleared {}, best {}",
            state.score,
            state.lives,
            state.wave_index,
            state.best_score
        );
        log::info!(
            "{} bricks broken, {} balls lost, {} bricks standing",
            bricks_broken,
            balls_lost,
            state.bricks_alive()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Monkey Breakout (native) starting...");
    log::info!("The browser build runs with `trunk serve`; natively the autopilot plays");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
