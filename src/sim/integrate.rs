//! Per-tick motion under constant gravity
//!
//! Frame-based explicit Euler: velocity first, then position. There is no
//! `dt`; one call is one tick regardless of how much wall time passed.

use super::body::Body;

/// Advance a body by one tick
#[inline]
pub fn integrate(body: &mut Body, gravity: f32) {
    body.vel.y += gravity;
    body.pos += body.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;
    use glam::Vec2;

    #[test]
    fn test_gravity_accumulates() {
        let mut body = Body::new(Vec2::new(500.0, 100.0), 20.0, Color::Red);
        integrate(&mut body, 0.5);
        assert_eq!(body.vel.y, 0.5);
        assert_eq!(body.pos.y, 100.5);

        integrate(&mut body, 0.5);
        assert_eq!(body.vel.y, 1.0);
        assert_eq!(body.pos.y, 101.5);
    }

    #[test]
    fn test_horizontal_velocity_unaffected() {
        let mut body =
            Body::new(Vec2::new(500.0, 100.0), 20.0, Color::Red).with_velocity(Vec2::new(3.0, 0.0));
        integrate(&mut body, 0.5);
        assert_eq!(body.vel.x, 3.0);
        assert_eq!(body.pos.x, 503.0);
    }

    #[test]
    fn test_zero_gravity_at_rest_is_noop() {
        let mut body = Body::new(Vec2::new(500.0, 300.0), 30.0, Color::Green);
        let before = body.clone();
        integrate(&mut body, 0.0);
        assert_eq!(body, before);
    }
}
