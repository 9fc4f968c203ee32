//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and build
//! them lazily on first use from a [`RenderCtx`].

mod ctx;
pub mod image;

pub use ctx::{RenderCtx, RenderTarget};
