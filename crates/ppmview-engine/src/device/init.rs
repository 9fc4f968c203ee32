/// Surface and device preferences.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format.
    ///
    /// The image texture is uploaded as sRGB too, so decoded bytes reach the
    /// screen unchanged.
    pub prefer_srgb: bool,

    /// Swap behavior. `Fifo` (vsync) is always supported.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Limits requested from the adapter. Bounds the largest image that can
    /// be displayed through `max_texture_dimension_2d`.
    pub required_limits: wgpu::Limits,

    /// Hint for the number of frames queued ahead of presentation.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Present without waiting for vblank when the surface allows it.
    pub fn without_vsync(mut self) -> Self {
        self.present_mode = wgpu::PresentMode::AutoNoVsync;
        self
    }
}
