//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for one window
//! - configures the surface and reconfigures it on resize
//! - acquires frames and hands out an encoder + view for rendering

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
