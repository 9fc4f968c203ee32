//! `ppmview`: opens one raw PPM (P6) image and lets the user rotate, shear,
//! pan and zoom it.

mod bindings;
mod viewer;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use ppmview_engine::device::GpuInit;
use ppmview_engine::logging::{init_logging, LoggingConfig};
use ppmview_engine::render::image::ImageRenderer;
use ppmview_engine::window::{Runtime, RuntimeConfig};
use ppmview_pnm::{rgb_to_rgba, Image};

use crate::viewer::Viewer;

#[derive(Parser, Debug)]
#[command(name = "ppmview")]
#[command(about = "Interactive viewer for raw PPM (P6) images")]
struct Args {
    /// Path to a binary PPM (P6) file with maxval 255
    image: PathBuf,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Present without waiting for vertical sync
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Decode fully before any window exists.
    let image = Image::open(&args.image)
        .with_context(|| format!("cannot load `{}`", args.image.display()))?;

    let (width, height) = (image.width(), image.height());
    let renderer = ImageRenderer::new(width, height, rgb_to_rgba(&image.into_pixels()));

    let config = RuntimeConfig {
        title: window_title(&args.image),
        initial_size: LogicalSize::new(f64::from(width), f64::from(height)),
    };

    let gpu_init = if args.no_vsync {
        GpuInit::default().without_vsync()
    } else {
        GpuInit::default()
    };

    Runtime::run(config, gpu_init, Viewer::new(renderer))
}

/// File name of `path`, or the whole path when it has none.
fn window_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
