// Pointer state shared between the canvas mouse listeners and the frame
// step. Position is surface-relative and `None` while the pointer is outside
// the canvas, which switches repulsion off.

use crate::config::POINTER_RADIUS;
use vecmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub pos: Option<Vector2<f64>>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Self {
        Pointer { pos: None, radius }
    }

    // Client coordinates minus the canvas' bounding rect origin
    pub fn move_to(&mut self, client: Vector2<f64>, surface_origin: Vector2<f64>) {
        self.pos = Some(vecmath::vec2_sub(client, surface_origin));
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }

    /// Displacement pushing `point` away from the pointer, scaled by how far
    /// inside the influence radius it sits. `None` when out of range.
    pub fn repulsion(&self, point: Vector2<f64>, strength: f64) -> Option<Vector2<f64>> {
        let to_pointer = vecmath::vec2_sub(self.pos?, point);
        let distance = vecmath::vec2_len(to_pointer);
        if distance < self.radius {
            let force = (self.radius - distance) / self.radius;
            Some(vecmath::vec2_scale(to_pointer, -force * strength))
        } else {
            None
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Pointer::new(POINTER_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_is_relative_to_surface_origin() {
        let mut pointer = Pointer::default();
        pointer.move_to([130.0, 90.0], [30.0, 40.0]);
        assert_eq!(pointer.pos, Some([100.0, 50.0]));
    }

    #[test]
    fn repulsion_only_inside_radius() {
        let mut pointer = Pointer::default();
        pointer.pos = Some([100.0, 50.0]);
        // 10 below the pointer: force = 140/150, pushed further down
        let push = pointer.repulsion([100.0, 60.0], 0.01).unwrap();
        assert_eq!(push[0], 0.0);
        assert!((push[1] - 10.0 * (140.0 / 150.0) * 0.01).abs() < 1e-12);
        assert_eq!(pointer.repulsion([100.0, 200.0], 0.01), None);
    }

    #[test]
    fn repulsion_at_pointer_is_zero() {
        let mut pointer = Pointer::default();
        pointer.pos = Some([5.0, 5.0]);
        assert_eq!(pointer.repulsion([5.0, 5.0], 0.01), Some([0.0, 0.0]));
    }

    #[test]
    fn leave_forgets_position() {
        let mut pointer = Pointer::default();
        pointer.move_to([10.0, 10.0], [0.0, 0.0]);
        pointer.leave();
        assert_eq!(pointer.pos, None);
        assert_eq!(pointer.repulsion([10.0, 10.0], 0.01), None);
    }
}
