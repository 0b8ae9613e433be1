//! Wires configuration, sprite, render loop and a display backend together.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::config::{BackendKind, Config};
use crate::core::{reference_palette, reference_sprite};
use crate::engine::{RenderLoop, RunFlag, Surface};
use crate::term::TerminalSurface;

/// Build the render loop for the compiled-in sprite.
///
/// Fails if the sprite references a symbol the palette lacks, before any
/// display is touched.
pub fn build_render_loop(config: &Config) -> Result<RenderLoop> {
    let sprite = reference_sprite().context("invalid sprite definition")?;
    let palette = reference_palette().context("invalid palette definition")?;
    let render = RenderLoop::new(sprite, palette).context("sprite does not match palette")?;
    Ok(render
        .with_pacing(config.pacing)
        .centered(config.centered)
        .with_max_frames(config.max_frames))
}

/// Open the configured backend and run until `flag` stops.
///
/// The surface is released before this returns, so the terminal is already
/// restored when the caller prints anything. Returns the number of frames
/// shown.
pub fn run(config: &Config, flag: &RunFlag) -> Result<u64> {
    let render = build_render_loop(config)?;
    let (width, height) = (config.panel.surface_width(), config.panel.surface_height());

    match config.backend {
        BackendKind::Terminal => {
            let surface =
                TerminalSurface::open(width, height)?.with_brightness(config.panel.brightness);
            run_on(&render, surface, flag)
        }
        BackendKind::Matrix => run_matrix(config, &render, flag),
    }
}

/// Run `render` on an already opened surface, releasing it afterwards.
pub fn run_on<S: Surface>(render: &RenderLoop, surface: S, flag: &RunFlag) -> Result<u64> {
    let summary = render.run(surface, flag)?;
    drop(summary.surface);
    info!("displayed {} frames", summary.frames);
    Ok(summary.frames)
}

/// Line printed on stdout after a clean stop.
pub const SHUTDOWN_MESSAGE: &str = "Exiting... clean shutdown";

/// Report how a run ended and return the process exit status.
///
/// Success prints [`SHUTDOWN_MESSAGE`] to `out` and yields 0. Failure prints
/// one `error: ...` line (the whole cause chain) to `err` and yields 1.
pub fn report<T>(result: Result<T>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match result {
        Ok(_) => {
            let _ = writeln!(out, "{SHUTDOWN_MESSAGE}");
            0
        }
        Err(e) => {
            let _ = writeln!(err, "error: {e:#}");
            1
        }
    }
}

#[cfg(feature = "hardware")]
fn run_matrix(config: &Config, render: &RenderLoop, flag: &RunFlag) -> Result<u64> {
    let surface = crate::hardware::MatrixSurface::open(&config.panel)?;
    run_on(render, surface, flag)
}

#[cfg(not(feature = "hardware"))]
fn run_matrix(_config: &Config, _render: &RenderLoop, _flag: &RunFlag) -> Result<u64> {
    Err(crate::engine::SurfaceError::init("matrix backend requires the `hardware` feature").into())
}
