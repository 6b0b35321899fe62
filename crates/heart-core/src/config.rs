//! Animation settings, resolved once at start-up and immutable afterwards.

#[derive(Clone, Debug)]
pub struct ParticleSettings {
    /// Fixed pool capacity; no allocation happens after construction.
    pub capacity: usize,
    /// Particle lifetime in seconds.
    pub duration: f32,
    /// Base emission speed in pixels per second.
    pub velocity: f32,
    /// Acceleration coefficient applied to the emission velocity.
    /// Negative values decelerate particles along their launch direction.
    pub effect: f32,
    /// Base diameter in pixels at full ease.
    pub size: f32,
    /// CSS fill color, interpreted only by the drawing side.
    pub color: String,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            capacity: 15_000,
            duration: 4.0,
            velocity: 100.0,
            effect: -1.3,
            size: 6.0,
            color: "#f50b02".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextSettings {
    pub content: String,
    /// Font size in pixels; the text renders bold, centered.
    pub size_px: f32,
    /// Vertical offset of the text anchor below the surface midpoint.
    pub y_offset: f32,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            content: String::new(),
            size_px: 150.0,
            y_offset: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub particles: ParticleSettings,
    pub text: TextSettings,
}
