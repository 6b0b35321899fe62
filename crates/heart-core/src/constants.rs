// Emission and sampling tuning constants

/// Fraction of the per-frame emission budget fed from the heart outline.
pub const HEART_EMISSION_SHARE: f32 = 0.7;
/// Fraction of the per-frame emission budget fed from the text silhouette.
pub const TEXT_EMISSION_SHARE: f32 = 0.3;

/// Velocity jitter span for text particles, as a fraction of the base
/// emission velocity (each axis draws from +-span/2).
pub const TEXT_JITTER_SPAN: f32 = 0.5;

/// Alpha above which a rendered pixel counts as part of a glyph.
pub const ALPHA_THRESHOLD: u8 = 128;
/// Pixel stride used when scanning rendered text, in both axes.
pub const SAMPLE_STRIDE: usize = 2;
