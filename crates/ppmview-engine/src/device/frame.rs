/// One acquired surface texture plus the encoder recording into it.
///
/// Short-lived: the surface cannot hand out another texture until this one is
/// submitted via [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
