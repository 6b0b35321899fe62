use std::f32::consts::PI;

use glam::Vec2;
use rand::prelude::*;

use crate::config::Settings;
use crate::constants::{HEART_EMISSION_SHARE, TEXT_EMISSION_SHARE, TEXT_JITTER_SPAN};
use crate::heart::point_on_heart;
use crate::pool::ParticlePool;
use crate::surface::Surface;

/// Per-frame driver: stochastic emission from the heart outline and the
/// text silhouette, then pool aging. Frame scheduling stays with the
/// host; the core only exposes [`tick`](Simulation::tick) and
/// [`draw`](Simulation::draw).
pub struct Simulation {
    settings: Settings,
    pool: ParticlePool,
    /// Precomputed silhouette point set, anchor-relative. Immutable for
    /// the session; empty when there is no text to emit from.
    silhouette: Vec<Vec2>,
    /// Particles per second needed to keep the pool steadily refreshed.
    emit_rate: f32,
    rng: StdRng,
}

impl Simulation {
    pub fn new(settings: Settings, silhouette: Vec<Vec2>, seed: u64) -> Self {
        let pool = ParticlePool::new(settings.particles.capacity);
        let emit_rate = settings.particles.capacity as f32 / settings.particles.duration;
        log::info!(
            "simulation ready: capacity={} rate={:.0}/s silhouette_points={}",
            settings.particles.capacity,
            emit_rate,
            silhouette.len()
        );
        Self {
            settings,
            pool,
            silhouette,
            emit_rate,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance one frame by `dt` seconds. `center` is the surface
    /// midpoint in pixels and may move between frames (resize); the pool
    /// itself is never reset.
    ///
    /// Fractional emission budgets truncate each frame rather than
    /// accumulating, so a frame too short to afford one whole particle
    /// emits none.
    pub fn tick(&mut self, dt: f32, center: Vec2) {
        let velocity = self.settings.particles.velocity;
        let effect = self.settings.particles.effect;

        let heart_count = (self.emit_rate * dt * HEART_EMISSION_SHARE) as usize;
        for _ in 0..heart_count {
            let t = self.rng.gen_range(-PI..PI);
            let p = point_on_heart(t);
            // The curve is y-up; flip into the canvas' top-down space.
            let dir = p.normalize() * velocity;
            self.pool.add(
                Vec2::new(center.x + p.x, center.y - p.y),
                Vec2::new(dir.x, -dir.y),
                effect,
            );
        }

        if !self.silhouette.is_empty() {
            let text_count = (self.emit_rate * dt * TEXT_EMISSION_SHARE) as usize;
            for _ in 0..text_count {
                let pt = *self.silhouette.choose(&mut self.rng).unwrap_or(&Vec2::ZERO);
                let jitter = Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * velocity * TEXT_JITTER_SPAN,
                    (self.rng.gen::<f32>() - 0.5) * velocity * TEXT_JITTER_SPAN,
                );
                self.pool.add(center + pt, jitter, effect);
            }
        }

        self.pool.update(dt, self.settings.particles.duration);
    }

    /// Paint the current live set. Side effect only.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.pool.draw(surface, &self.settings.particles);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }
}
