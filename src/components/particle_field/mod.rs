//! Ambient particle field: a decorative per-section canvas animation.
//!
//! Moving points wrap toroidally at the surface bounds and are linked by
//! faint lines whose opacity falls off linearly with distance. Each page
//! section mounts its own [`ParticleCanvas`] with a [`FieldConfig`] preset;
//! fields are fully independent and torn down with their section.
//!
//! The simulation ([`field`]) is pure and the frame/resize plumbing is
//! injected through ports ([`ports`]), so everything but the actual canvas
//! painting runs deterministically under `cargo test`.

mod browser;
mod component;
pub mod config;
mod driver;
pub mod field;
mod ports;
mod render;

pub use component::ParticleCanvas;
pub use config::FieldConfig;
pub use driver::AnimationLoop;
pub use ports::{FrameHandle, FrameScheduler, ResizeHandle, ResizeNotifier};
