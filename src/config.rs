//! Tunables for the particle backdrop.
//!
//! The defaults give a hundred warm-coloured dots under 7px that ease in
//! over twenty ticks and grow up to tenfold within 140px of the cursor.

use crate::color::{Color, PALETTE};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of particles; fixed for the lifetime of a field.
    pub particle_count: usize,
    /// Ticks until the velocity ramp reaches its final value.
    pub ramp_ticks: u32,
    /// Ramp multiplier gained per elapsed tick.
    pub ramp_step: f64,
    /// Base sizes are drawn from `[0, max_base_size)`.
    pub max_base_size: f64,
    /// Half-open range for the horizontal drift.
    pub velocity_x: (f64, f64),
    /// Half-open range for the vertical drift.
    pub velocity_y: (f64, f64),
    /// Colours picked uniformly per particle. An empty palette paints every
    /// particle `Color::RED`.
    pub palette: Vec<Color>,
    /// Size factor at distance zero, before clamping.
    pub proximity_peak: f64,
    /// Distance (in pixels) over which the factor drops by one.
    pub proximity_falloff: f64,
    pub min_size_factor: f64,
    pub max_size_factor: f64,
    /// Nominal scheduler rate.
    pub tick_rate_hz: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 100,
            ramp_ticks: 20,
            ramp_step: 0.05,
            max_base_size: 7.0,
            velocity_x: (-1.0, 4.0),
            velocity_y: (-1.0, 1.0),
            palette: PALETTE.to_vec(),
            proximity_peak: 15.0,
            proximity_falloff: 10.0,
            min_size_factor: 1.0,
            max_size_factor: 10.0,
            tick_rate_hz: 60,
        }
    }
}

impl FieldConfig {
    /// Delay between scheduled ticks, in whole milliseconds.
    pub fn tick_interval_ms(&self) -> i32 {
        (1000 / self.tick_rate_hz.max(1)) as i32
    }

    /// Velocity multiplier for a given tick count.
    pub fn ramp(&self, elapsed: u32) -> f64 {
        elapsed.min(self.ramp_ticks) as f64 * self.ramp_step
    }

    pub fn size_factor(&self, distance: f64) -> f64 {
        (self.proximity_peak - distance / self.proximity_falloff)
            .min(self.max_size_factor)
            .max(self.min_size_factor)
    }
}
