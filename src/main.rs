//! Lane Drop entry point
//!
//! Handles platform-specific wiring and runs the frame loop. Everything in
//! here is external-collaborator territory: canvas setup, key bindings and
//! 2D drawing. The simulation itself lives in `lane_drop::sim`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use lane_drop::GameConfig;
    use lane_drop::scene::{Scene, build_scene};
    use lane_drop::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                state: GameState::new(config, seed),
                input: TickInput::default(),
            }
        }

        /// Run one frame, then clear the one-shot inputs
        fn update(&mut self, now_ms: f64) {
            let input = self.input.clone();
            tick(&mut self.state, &input, now_ms);
            self.input.move_left = false;
            self.input.move_right = false;
        }
    }

    fn css_color(c: [f32; 4]) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (c[0] * 255.0).round() as u8,
            (c[1] * 255.0).round() as u8,
            (c[2] * 255.0).round() as u8,
            c[3]
        )
    }

    /// Draw one scene through the browser 2D context
    fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, width: f64, height: f64) {
        ctx.set_fill_style_str(&css_color(scene.background));
        ctx.fill_rect(0.0, 0.0, width, height);

        for line in &scene.lines {
            ctx.set_stroke_style_str(&css_color(line.color));
            ctx.set_line_width(line.width as f64);
            ctx.begin_path();
            ctx.move_to(line.from.x as f64, line.from.y as f64);
            ctx.line_to(line.to.x as f64, line.to.y as f64);
            ctx.stroke();
        }

        for circle in &scene.circles {
            ctx.set_fill_style_str(&css_color(circle.fill));
            ctx.set_stroke_style_str(&css_color(circle.stroke));
            ctx.set_line_width(1.0);
            ctx.begin_path();
            let _ = ctx.arc(
                circle.center.x as f64,
                circle.center.y as f64,
                circle.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
            ctx.stroke();
        }

        for arc in &scene.arcs {
            ctx.set_stroke_style_str(&css_color(arc.color));
            ctx.set_line_width(arc.width as f64);
            ctx.begin_path();
            let _ = ctx.arc(
                arc.center.x as f64,
                arc.center.y as f64,
                arc.radius as f64,
                arc.start_angle as f64,
                arc.end_angle as f64,
            );
            ctx.stroke();
        }

        for rect in &scene.rects {
            ctx.set_fill_style_str(&css_color(rect.fill));
            ctx.fill_rect(
                rect.min.x as f64,
                rect.min.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
            ctx.set_stroke_style_str(&css_color(rect.stroke));
            ctx.set_line_width(1.0);
            ctx.stroke_rect(
                rect.min.x as f64,
                rect.min.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        }

        for text in &scene.texts {
            ctx.set_fill_style_str(&css_color(text.color));
            ctx.set_font(&format!("{}px sans-serif", text.size));
            let _ = ctx.fill_text(&text.text, text.pos.x as f64, text.pos.y as f64);
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(f.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Optional config override from an embedded JSON block
        let config = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
            .map(|json| GameConfig::from_json(&json))
            .unwrap_or_default();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(config.game_width as u32);
        canvas.set_height(config.game_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        log::info!("Started new game with seed: {}", seed);

        let width = config.game_width as f64;
        let height = config.game_height as f64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        // Key bindings: arrows or A/D steer the paddle one lane per press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.move_left = true,
                    "ArrowRight" | "d" | "D" => g.input.move_right = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // requestAnimationFrame loop
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            {
                let mut game = game.borrow_mut();
                game.update(now_ms);
                draw(&ctx, &build_scene(&game.state), width, height);
            }
            request_animation_frame(f.borrow().as_ref().unwrap());
        }));
        request_animation_frame(g.borrow().as_ref().unwrap());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_drop::GameConfig;
    use lane_drop::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Lane Drop (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let config = GameConfig::default();
    let mut state = GameState::new(config, 0xC0FFEE);

    // Headless autopilot: chase the lane of the lowest ball in flight
    let frame_ms = 1000.0 / 60.0;
    for frame in 0..3600u32 {
        let now_ms = frame as f64 * frame_ms;

        let target_lane = state
            .balls
            .iter()
            .filter(|b| b.is_active())
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|b| b.lane);

        let mut input = TickInput::default();
        if let Some(lane) = target_lane {
            if lane < state.paddle.lane {
                input.move_left = true;
            } else if lane > state.paddle.lane {
                input.move_right = true;
            }
        }

        tick(&mut state, &input, now_ms);
    }

    println!("Final score after 60 simulated seconds: {}", state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
