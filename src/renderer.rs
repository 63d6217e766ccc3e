// Renderer struct that owns the canvas and its 2d context, and implements
// the drawing surface the particle field paints onto.

use crate::color::Color;
use crate::error::BackgroundError;
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Looks the canvas up on the DOM and stretches it over the whole window
    pub fn from_canvas_id(canvas_id: &str) -> Result<Self, BackgroundError> {
        let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
        let document = window.document().ok_or(BackgroundError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| BackgroundError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackgroundError::NotACanvas(canvas_id.to_owned()))?;

        let renderer = Renderer::new(canvas)?;
        renderer.fit_to_window(&window)?;
        Ok(renderer)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackgroundError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(BackgroundError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackgroundError::ContextUnavailable)?;
        Ok(Renderer { canvas, context })
    }

    pub fn bounds(&self) -> Vector2<f64> {
        [self.canvas.width() as f64, self.canvas.height() as f64]
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn fit_to_window(&self, window: &Window) -> Result<Vector2<f64>, BackgroundError> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        self.set_size(width.max(0.0) as u32, height.max(0.0) as u32);
        Ok(self.bounds())
    }
}

fn css(color: Color) -> JsValue {
    JsValue::from_str(&color.to_css())
}

impl Surface for Renderer {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.context.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style(&css(color));
    }

    #[allow(deprecated)]
    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style(&css(color));
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
