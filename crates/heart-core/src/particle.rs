use glam::Vec2;

/// Ease-out cubic, `(f - 1)^3 + 1`. Shapes particle size over a lifetime.
#[inline]
pub fn ease_out_cubic(f: f32) -> f32 {
    let g = f - 1.0;
    g * g * g + 1.0
}

/// One simulated point mass. Particles are allocated once by the pool and
/// re-initialized in place on every emission; `age` resets to zero then
/// and only then.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub age: f32,
}

impl Particle {
    pub fn initialize(&mut self, position: Vec2, velocity: Vec2, effect: f32) {
        self.position = position;
        self.velocity = velocity;
        self.acceleration = velocity * effect;
        self.age = 0.0;
    }

    /// Semi-implicit Euler step. Position advances with the pre-step
    /// velocity before the velocity itself is updated; swapping the order
    /// changes the trajectory shape.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.age += dt;
    }

    pub fn is_expired(&self, duration: f32) -> bool {
        self.age >= duration
    }

    /// Current diameter given the configured base size.
    pub fn size(&self, base: f32, duration: f32) -> f32 {
        base * ease_out_cubic(self.age / duration)
    }

    /// Linear fade from 1 to 0 over the lifetime. Goes negative past end
    /// of life; the drawing side clamps at the paint call.
    pub fn alpha(&self, duration: f32) -> f32 {
        1.0 - self.age / duration
    }
}
