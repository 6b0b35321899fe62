use glam::Vec2;

/// Point on the heart outline for parameter `t`, conventionally drawn
/// from `[-pi, pi]`. Math coordinates: y grows upward, so callers flip
/// the y axis when mapping into top-down pixel space.
pub fn point_on_heart(t: f32) -> Vec2 {
    Vec2::new(
        160.0 * t.sin().powi(3),
        130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos() - 10.0 * (4.0 * t).cos()
            + 25.0,
    )
}
