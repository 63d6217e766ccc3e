//! The slice of a 2D immediate-mode canvas that the backdrop draws with.
//!
//! The browser canvas implements this in `renderer`; `RecordingSurface`
//! captures the calls so frames can be inspected without a browser.

use crate::color::Color;
use std::convert::Infallible;

pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    /// Adds a full circle of `radius` centred on `(x, y)` to the current path.
    fn arc(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error>;
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn fill(&mut self);
    fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    Arc {
        x: f64,
        y: f64,
        radius: f64,
    },
    FillColor(Color),
    StrokeColor(Color),
    Fill,
    Stroke,
}

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arcs(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Arc { x, y, radius } => Some((x, y, radius)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Arc { x, y, radius });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::StrokeColor(color));
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
}
