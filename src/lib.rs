#[macro_use]
mod utils;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod scheduler;
pub mod surface;

use crate::error::BackgroundError;
use crate::field::Field;
use crate::renderer::Renderer;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Animated particle backdrop bound to a `<canvas>` element.
///
/// JS can drive it by hand (`tick`, `on_pointer_move`) or hand it to
/// [`start_background`] which runs the timer loop and listeners itself.
#[wasm_bindgen]
pub struct ParticleBackground {
    field: Field,
    renderer: Renderer,
    profiling: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        let renderer = Renderer::from_canvas_id(canvas_id)?;
        let field = Field::new(renderer.bounds());
        Ok(ParticleBackground {
            field,
            renderer,
            profiling: false,
        })
    }

    /// Wraps every tick in `console.time`/`console.timeEnd` when enabled.
    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling = enabled;
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        let _timer = if self.profiling {
            Some(Timer::new("ParticleBackground::tick"))
        } else {
            None
        };
        self.field.tick(&mut self.renderer)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.field.on_pointer_move([x, y]);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.set_size(width, height);
        self.field.resize(self.renderer.bounds());
    }

    pub fn fit_to_window(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
        let bounds = self.renderer.fit_to_window(&window)?;
        log!("particle backdrop resized to {}x{}", bounds[0], bounds[1]);
        self.field.resize(bounds);
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn elapsed(&self) -> u32 {
        self.field.elapsed()
    }

    pub fn width(&self) -> f64 {
        self.field.bounds()[0]
    }

    pub fn height(&self) -> f64 {
        self.field.bounds()[1]
    }

    pub fn tick_interval_ms(&self) -> i32 {
        self.field.config().tick_interval_ms()
    }
}

impl ParticleBackground {
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub(crate) fn canvas(&self) -> &HtmlCanvasElement {
        &self.renderer.canvas
    }
}

/// Attaches a backdrop to `canvas_id` and keeps it animating for the life of the page.
#[wasm_bindgen]
pub fn start_background(canvas_id: &str) -> Result<(), JsValue> {
    let background = ParticleBackground::new(canvas_id)?;
    scheduler::start(background)?;
    Ok(())
}
