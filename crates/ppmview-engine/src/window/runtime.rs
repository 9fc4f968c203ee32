use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputFrame;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Inner size in logical pixels.
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ppmview".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Opens one window, calls [`App::on_start`] once the GPU is ready, then
/// redraws continuously, calling [`App::on_frame`] per frame until the app
/// returns [`AppControl::Exit`] or the window is closed. Everything runs on
/// the calling thread.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.into_result()
    }
}

#[self_referencing]
struct WindowEntry {
    input_frame: InputFrame,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    /// Set once the window has been created; a closed window is not reopened
    /// on a later `resumed`.
    started: bool,
    /// First setup or start failure, returned from `Runtime::run`.
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            started: false,
            error: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::info!(
            "opened window `{}` ({}x{} physical)",
            self.config.title,
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_frame: InputFrame::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.record_error(err);
        self.shutdown(event_loop);
    }

    /// Keeps the first failure; later ones are only logged.
    fn record_error(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
    }

    fn into_result(mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drops the window (and its GPU context) and stops the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.window = None;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => return self.fail(event_loop, e),
        };

        let app = &mut self.app;
        if let Err(e) = entry.with_gpu(|gpu| app.on_start(gpu)) {
            drop(entry);
            return self.fail(event_loop, e.context("app failed to start"));
        }

        entry.borrow_window().request_redraw();
        self.window = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the transform is recomposed every frame.
        if let Some(entry) = self.window.as_ref() {
            entry.borrow_window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let app = &mut self.app;
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        if entry.borrow_window().id() != window_id {
            return;
        }

        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, &event) {
                fields.input_frame.push_event(ev);
            }
        });

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{}", new_size.width, new_size.height);
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.borrow_window().request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.borrow_window().inner_size();
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.borrow_window().request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let control = entry.with_mut(|fields| {
                    let control = {
                        let mut ctx = FrameCtx {
                            window: fields.window,
                            gpu: fields.gpu,
                            input_frame: fields.input_frame,
                        };
                        app.on_frame(&mut ctx)
                    };

                    // Queued events are consumed.
                    fields.input_frame.clear();
                    control
                });

                if control == AppControl::Exit {
                    log::info!("exit requested");
                    self.shutdown(event_loop);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle;

    impl App for Idle {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }
    }

    fn state() -> AppState<Idle> {
        AppState::new(RuntimeConfig::default(), GpuInit::default(), Idle)
    }

    #[test]
    fn clean_session_is_ok() {
        assert!(state().into_result().is_ok());
    }

    #[test]
    fn start_failure_is_returned_from_run() {
        let mut s = state();
        s.record_error(anyhow::anyhow!("image exceeds texture limit"));
        s.record_error(anyhow::anyhow!("later failure"));

        let err = s.into_result().unwrap_err();
        assert_eq!(err.to_string(), "image exceeds texture limit");
    }
}
