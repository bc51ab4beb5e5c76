// Simple particle struct to keep track of individual position, velocity, and
// color, plus the per-frame motion rule: drift, pointer repulsion, wrap.

use crate::color::Color;
use crate::config::{MAX_OPACITY, MAX_SIZE, MAX_SPEED, MIN_OPACITY, MIN_SIZE};
use crate::pointer::Pointer;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
            color,
        }
    }

    /// Uniformly placed inside `width` x `height` with a small random drift.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
        ];
        let size = rng.gen::<f64>() * (MAX_SIZE - MIN_SIZE) + MIN_SIZE;
        let opacity = rng.gen::<f64>() * (MAX_OPACITY - MIN_OPACITY) + MIN_OPACITY;
        let color = if rng.gen::<bool>() {
            Color::VIOLET
        } else {
            Color::CYAN
        };
        Particle::new(pos, vel, size, opacity, color)
    }

    /// Advance one frame. Velocity is never touched: the pointer pushes the
    /// position directly, so a particle resumes its drift once out of range.
    pub fn update(&mut self, pointer: &Pointer, strength: f64, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if let Some(push) = pointer.repulsion(self.pos, strength) {
            self.pos = vecmath::vec2_add(self.pos, push);
        }

        self.pos[0] = wrap(self.pos[0], width);
        self.pos[1] = wrap(self.pos[1], height);
    }
}

/// Wraparound onto `[0, bound)`: falling off one edge reappears at the other.
pub fn wrap(value: f64, bound: f64) -> f64 {
    if bound <= 0.0 {
        0.0
    } else if value < 0.0 {
        // far edge, kept just inside the half-open range
        bound * (1.0 - f64::EPSILON)
    } else if value >= bound {
        0.0
    } else {
        value
    }
}
