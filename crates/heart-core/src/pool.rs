use glam::Vec2;

use crate::config::ParticleSettings;
use crate::particle::Particle;
use crate::surface::Surface;

/// Fixed-capacity ring of particles addressed by two cursors.
///
/// The live range is the circular half-open interval
/// `[first_active, first_free)`; the range is empty when the cursors are
/// equal. Slots outside the range keep their stale data and are simply
/// overwritten by the next `add`. When an `add` would lap the ring, the
/// oldest live particle is silently dropped instead of growing: fixed
/// memory, oldest-drop-first, no error raised.
pub struct ParticlePool {
    slots: Vec<Particle>,
    first_active: usize,
    first_free: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::default(); capacity.max(1)],
            first_active: 0,
            first_free: 0,
        }
    }

    /// Re-initialize the slot at `first_free` and advance the cursor.
    pub fn add(&mut self, position: Vec2, velocity: Vec2, effect: f32) {
        let n = self.slots.len();
        self.slots[self.first_free].initialize(position, velocity, effect);
        self.first_free = (self.first_free + 1) % n;
        if self.first_free == self.first_active {
            // Pool was full: retire the oldest live particle.
            self.first_active = (self.first_active + 1) % n;
        }
    }

    /// Age every live particle, then retire expired ones from the front.
    /// Ages are monotonic and `duration` is constant, so expiry is FIFO.
    pub fn update(&mut self, dt: f32, duration: f32) {
        let n = self.slots.len();
        let mut i = self.first_active;
        while i != self.first_free {
            self.slots[i].update(dt);
            i = (i + 1) % n;
        }
        while self.first_active != self.first_free
            && self.slots[self.first_active].is_expired(duration)
        {
            self.first_active = (self.first_active + 1) % n;
        }
    }

    /// Paint every live particle. No pool state changes.
    pub fn draw(&self, surface: &mut dyn Surface, settings: &ParticleSettings) {
        for p in self.iter_live() {
            surface.fill_circle(
                p.position,
                p.size(settings.size, settings.duration) / 2.0,
                p.alpha(settings.duration),
            );
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        let n = self.slots.len();
        (self.first_free + n - self.first_active) % n
    }

    pub fn is_empty(&self) -> bool {
        self.first_active == self.first_free
    }

    /// `(first_active, first_free)`, both in `[0, capacity)`.
    pub fn cursors(&self) -> (usize, usize) {
        (self.first_active, self.first_free)
    }

    /// Live particles in emission order, oldest first.
    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> + '_ {
        let n = self.slots.len();
        (0..self.live_count()).map(move |k| &self.slots[(self.first_active + k) % n])
    }
}
