use anyhow::Result;

use ppmview_engine::core::{App, AppControl, FrameCtx};
use ppmview_engine::device::Gpu;
use ppmview_engine::render::image::ImageRenderer;
use ppmview_view::{ViewSignal, ViewState};

use crate::bindings::action_for;

/// The viewer session: one image and its view transform.
pub struct Viewer {
    view: ViewState,
    renderer: ImageRenderer,
}

impl Viewer {
    pub fn new(renderer: ImageRenderer) -> Self {
        Self {
            view: ViewState::new(),
            renderer,
        }
    }
}

/// Fails when the image cannot be uploaded as a single texture.
fn check_texture_limit(renderer: &ImageRenderer, max_dimension: u32) -> Result<()> {
    anyhow::ensure!(
        renderer.fits(max_dimension),
        "image exceeds the device's maximum texture size of {max_dimension}"
    );
    Ok(())
}

impl App for Viewer {
    fn on_start(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        check_texture_limit(&self.renderer, gpu.max_texture_dimension())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for event in &ctx.input_frame.events {
            let Some(action) = action_for(event) else { continue };
            if self.view.apply(action) == ViewSignal::Close {
                return AppControl::Exit;
            }
        }

        let transform = self.view.compose().to_cols_array();
        let renderer = &mut self.renderer;
        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, &transform)
        })
    }
}
