//! The particle field: a fixed working set of drifting points that is
//! recreated wholesale whenever the surface changes size.
//!
//! One `step` is one animation frame: clear, move and draw every particle,
//! then link every pair that is close enough. The pair pass is O(n²), which
//! is why the count is capped.

use crate::color::Color;
use crate::config::{FieldConfig, LINK_LINE_WIDTH, MAX_LINK_OPACITY};
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Surface;
use rand::Rng;

/// `min(floor(width * height / area_per_particle), max_particles)`.
///
/// Degenerate surfaces (zero, negative or non-finite sizes) get no particles.
pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
    let area = width * height;
    if !area.is_finite() || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let count = (area / config.area_per_particle).floor();
    if count >= config.max_particles as f64 {
        config.max_particles
    } else {
        count as usize
    }
}

/// Link opacity for two particles `distance` apart: fades linearly from
/// `MAX_LINK_OPACITY` at 0 to nothing at `max_distance`.
pub fn connection_opacity(distance: f64, max_distance: f64) -> f64 {
    if distance >= max_distance {
        0.0
    } else {
        (1.0 - distance / max_distance) * MAX_LINK_OPACITY
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: FieldConfig,
    ) -> ParticleField {
        let count = particle_count(width, height, &config);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(rng, width, height));
        }
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    /// Fresh field for the new size; nothing carries over from the old one.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
        *self = ParticleField::new(rng, width, height, self.config);
    }

    /// The surface changed size but the field has not been rebuilt yet.
    /// Particles keep going and wrap against the new bounds.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance and render one frame.
    pub fn step<S: Surface + ?Sized>(&mut self, pointer: &Pointer, surface: &mut S) {
        surface.clear(self.width, self.height);

        for particle in &mut self.particles {
            particle.update(pointer, self.config.repulsion_strength, self.width, self.height);
            surface.fill_circle(particle.pos, particle.size, particle.color, particle.opacity);
        }

        self.connect(surface);
    }

    fn connect<S: Surface + ?Sized>(&self, surface: &mut S) {
        let max_distance = self.config.max_link_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance < max_distance {
                    surface.stroke_line(
                        a.pos,
                        b.pos,
                        Color::ACCENT,
                        connection_opacity(distance, max_distance),
                        LINK_LINE_WIDTH,
                    );
                }
            }
        }
    }
}
