use glam::Vec2;

/// Abstract drawing collaborator. The simulation only ever paints filled
/// circles; the web front-end implements this on the 2D canvas context,
/// and tests implement it with a recording stub.
pub trait Surface {
    /// Paint a filled circle at `center` (pixel coordinates, y down).
    /// `alpha` may fall outside `[0, 1]` right at the expiry boundary and
    /// must be clamped by the implementation.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}
