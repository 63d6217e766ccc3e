// Simple particle struct to keep track of individual position, velocity, color and size

use crate::color::Color;
use crate::config::FieldConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub color: Color,
    pub base_size: f64,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, color: Color, base_size: f64) -> Particle {
        Particle {
            pos,
            vel,
            color,
            base_size,
        }
    }

    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        bounds: Vector2<f64>,
    ) -> Particle {
        let pos = [sample(rng, 0.0, bounds[0]), sample(rng, 0.0, bounds[1])];
        let vel = [
            sample(rng, config.velocity_x.0, config.velocity_x.1),
            sample(rng, config.velocity_y.0, config.velocity_y.1),
        ];
        let color = config.palette.choose(rng).copied().unwrap_or(Color::RED);
        let base_size = sample(rng, 0.0, config.max_base_size);
        Particle::new(pos, vel, color, base_size)
    }

    pub fn advance(&mut self, ramp: f64) {
        self.pos = vecmath::vec2_add(self.pos, vecmath::vec2_scale(self.vel, ramp));
    }

    // Toroidal: leaving one edge re-enters at the opposite one, per axis
    pub fn wrap(&mut self, bounds: Vector2<f64>) {
        self.pos[0] = wrap_axis(self.pos[0], bounds[0]);
        self.pos[1] = wrap_axis(self.pos[1], bounds[1]);
    }

    pub fn distance_to(&self, point: Vector2<f64>) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, point))
    }
}

// gen_range panics on an empty range, which a zero-sized canvas would produce
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        low
    }
}

fn wrap_axis(value: f64, bound: f64) -> f64 {
    if value >= bound {
        0.0
    } else if value < 0.0 {
        top_of_range(bound)
    } else {
        value
    }
}

// Largest coordinate still inside [0, bound)
fn top_of_range(bound: f64) -> f64 {
    (bound * (1.0 - f64::EPSILON)).max(0.0)
}
