// The particle field: a fixed set of drifting dots that ease in after creation,
// wrap around the viewport edges, and swell when the pointer comes near.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub struct Field {
    config: FieldConfig,
    particles: Vec<Particle>,
    elapsed: u32,
    pointer: Vector2<f64>,
    bounds: Vector2<f64>,
}

impl Field {
    pub fn new(bounds: Vector2<f64>) -> Field {
        Field::with_config(FieldConfig::default(), bounds)
    }

    pub fn with_config(config: FieldConfig, bounds: Vector2<f64>) -> Field {
        Field::with_rng(config, bounds, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: FieldConfig,
        bounds: Vector2<f64>,
        rng: &mut R,
    ) -> Field {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, &config, bounds))
            .collect();
        Field {
            config,
            particles,
            elapsed: 0,
            pointer: [0.0, 0.0],
            bounds,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn pointer(&self) -> Vector2<f64> {
        self.pointer
    }

    pub fn bounds(&self) -> Vector2<f64> {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size_factor(&self, distance: f64) -> f64 {
        self.config.size_factor(distance)
    }

    pub fn on_pointer_move(&mut self, pos: Vector2<f64>) {
        self.pointer = pos;
    }

    // Particles outside the new bounds re-enter through the wrap rule
    pub fn resize(&mut self, bounds: Vector2<f64>) {
        self.bounds = bounds;
        for particle in &mut self.particles {
            particle.wrap(bounds);
        }
    }

    /// Draws the current frame to `surface`, then advances every particle one step.
    ///
    /// A particle whose circle the surface rejects is skipped for this frame
    /// only; the step itself always completes and the first drawing error is
    /// returned afterwards.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear_rect(0.0, 0.0, self.bounds[0], self.bounds[1]);
        let ramp = self.config.ramp(self.elapsed);
        let mut first_err = None;
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let factor = self.config.size_factor(particle.distance_to(self.pointer));
            surface.begin_path();
            match surface.arc(particle.pos[0], particle.pos[1], particle.base_size * factor) {
                Ok(()) => {
                    surface.set_fill_color(particle.color);
                    surface.set_stroke_color(particle.color);
                    if i % 2 == 0 {
                        surface.stroke();
                    } else {
                        surface.fill();
                    }
                }
                Err(err) => {
                    if first_err.is_none() {
                        first_err = Some(err);
                    }
                }
            }

            particle.advance(ramp);
            particle.wrap(self.bounds);
        }
        if self.elapsed < self.config.ramp_ticks {
            self.elapsed += 1;
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
