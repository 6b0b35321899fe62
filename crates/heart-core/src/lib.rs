//! Particle simulation and emission engine for the heart animation.
//!
//! Everything in this crate is pure Rust with no platform APIs: the web
//! front-end supplies the canvas (through the [`Surface`] trait), the
//! frame scheduler, and the clock. That keeps the whole engine natively
//! buildable and testable.

pub mod config;
pub mod constants;
pub mod heart;
pub mod particle;
pub mod pool;
pub mod silhouette;
pub mod sim;
pub mod surface;

pub use config::*;
pub use heart::*;
pub use particle::*;
pub use pool::*;
pub use silhouette::*;
pub use sim::*;
pub use surface::*;
