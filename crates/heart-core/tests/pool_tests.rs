// Ring-buffer lifecycle: capacity bound, FIFO expiry, overflow policy.

use glam::Vec2;
use heart_core::{ParticlePool, ParticleSettings, Surface};

fn add_at(pool: &mut ParticlePool, x: f32) {
    pool.add(Vec2::new(x, 0.0), Vec2::ZERO, 0.0);
}

struct RecordingSurface {
    circles: Vec<(Vec2, f32, f32)>,
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.circles.push((center, radius, alpha));
    }
}

#[test]
fn live_count_never_exceeds_capacity() {
    let mut pool = ParticlePool::new(8);
    for i in 0..100 {
        add_at(&mut pool, i as f32);
        assert!(pool.live_count() <= pool.capacity());
        let (a, f) = pool.cursors();
        assert!(a < pool.capacity() && f < pool.capacity());
    }
}

#[test]
fn update_on_empty_pool_is_a_no_op() {
    let mut pool = ParticlePool::new(8);
    assert!(pool.is_empty());
    pool.update(1.0, 4.0);
    assert!(pool.is_empty());
    assert_eq!(pool.cursors(), (0, 0));
}

#[test]
fn particles_expire_in_emission_order() {
    let mut pool = ParticlePool::new(8);
    let duration = 3.0;

    // Stagger emissions one second apart.
    add_at(&mut pool, 1.0);
    pool.update(1.0, duration);
    add_at(&mut pool, 2.0);
    pool.update(1.0, duration);
    add_at(&mut pool, 3.0);
    pool.update(1.0, duration);

    // Oldest particle just hit its lifetime; the younger two remain.
    assert_eq!(pool.live_count(), 2);
    let oldest = pool.iter_live().next().unwrap();
    assert_eq!(oldest.position.x, 2.0);

    pool.update(1.0, duration);
    assert_eq!(pool.live_count(), 1);
    assert_eq!(pool.iter_live().next().unwrap().position.x, 3.0);

    pool.update(1.0, duration);
    assert!(pool.is_empty());
}

#[test]
fn overflow_drops_exactly_the_oldest_particle() {
    let mut pool = ParticlePool::new(4);
    for x in 0..4 {
        add_at(&mut pool, x as f32);
    }
    // The fourth add lapped the ring and retired particle 0.
    assert_eq!(pool.live_count(), 3);
    assert_eq!(pool.iter_live().next().unwrap().position.x, 1.0);

    // Every further add advances the front by exactly one slot.
    for x in 4..10 {
        let (before, _) = pool.cursors();
        add_at(&mut pool, x as f32);
        let (after, _) = pool.cursors();
        assert_eq!((before + 1) % pool.capacity(), after);
        assert_eq!(pool.live_count(), 3);
        assert_eq!(
            pool.iter_live().next().unwrap().position.x,
            (x - 2) as f32,
            "oldest survivor after adding {x}"
        );
    }
}

#[test]
fn iter_live_walks_oldest_to_newest_across_the_wrap() {
    let mut pool = ParticlePool::new(4);
    for x in 0..6 {
        add_at(&mut pool, x as f32);
    }
    let xs: Vec<f32> = pool.iter_live().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0]);
}

#[test]
fn draw_paints_one_circle_per_live_particle() {
    let settings = ParticleSettings::default();
    let mut pool = ParticlePool::new(8);
    for x in 0..3 {
        add_at(&mut pool, x as f32);
    }
    pool.update(1.0, settings.duration);

    let mut surface = RecordingSurface { circles: Vec::new() };
    pool.draw(&mut surface, &settings);
    assert_eq!(surface.circles.len(), 3);

    // age 1 of 4: f = 0.25, ease = 0.578125, alpha = 0.75.
    let (_, radius, alpha) = surface.circles[0];
    let expected_radius = settings.size * 0.578_125 / 2.0;
    assert!((radius - expected_radius).abs() < 1e-4, "radius {radius}");
    assert!((alpha - 0.75).abs() < 1e-4, "alpha {alpha}");
}
