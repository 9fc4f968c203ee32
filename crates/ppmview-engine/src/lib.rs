//! ppmview engine crate.
//!
//! Owns the platform + GPU runtime pieces the viewer binary builds on: the
//! winit event loop and window, the wgpu device/surface, platform-agnostic
//! input, logger setup and the textured-quad image renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod window;
