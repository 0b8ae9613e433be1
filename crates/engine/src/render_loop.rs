//! RenderLoop: clear, blit, submit, pace, until stopped.
//!
//! The loop runs on the calling thread. A stop request is observed at the
//! top of each iteration, so a frame that has started is always completed
//! and submitted before the loop returns.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::blit::{centering_offset, draw_frame, Offset};
use crate::core::{Palette, Pixel, Sprite, SpriteResult};
use crate::error::SurfaceError;
use crate::pacing::Pacing;
use crate::run_flag::RunFlag;
use crate::surface::Surface;
use crate::types::{Rgb, BACKGROUND};

/// What a finished [`RenderLoop::run`] hands back.
#[derive(Debug)]
pub struct RunSummary<S> {
    /// Frames drawn and submitted.
    pub frames: u64,
    /// The surface returned by the last submit, for the caller to release.
    pub surface: S,
}

/// A validated sprite plus the settings for displaying it.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    sprite: Sprite,
    palette: Palette,
    /// Opaque cells resolved once, row-major.
    pixels: Vec<Pixel>,
    pacing: Pacing,
    centered: bool,
    background: Rgb,
    max_frames: Option<u64>,
}

impl RenderLoop {
    /// Validate `sprite` against `palette` and build a loop with default
    /// settings: fixed 50ms pacing, centered, black background, no frame
    /// limit.
    pub fn new(sprite: Sprite, palette: Palette) -> SpriteResult<Self> {
        sprite.validate(&palette)?;
        let pixels = sprite
            .opaque_pixels(&palette)
            .collect::<SpriteResult<Vec<_>>>()?;
        Ok(Self {
            sprite,
            palette,
            pixels,
            pacing: Pacing::default(),
            centered: true,
            background: BACKGROUND,
            max_frames: None,
        })
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Stop on our own after `max` submitted frames.
    pub fn with_max_frames(mut self, max: Option<u64>) -> Self {
        self.max_frames = max;
        self
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Where the sprite's top-left cell lands on `surface`.
    pub fn offset_for<S: Surface>(&self, surface: &S) -> Offset {
        if !self.centered {
            return Offset::ORIGIN;
        }
        centering_offset(
            surface.width(),
            surface.height(),
            self.sprite.width(),
            self.sprite.height(),
        )
    }

    /// Clear `surface` and draw the sprite at `offset`.
    ///
    /// Returns the number of pixels written. Allocation-free.
    pub fn render_frame<S: Surface>(&self, surface: &mut S, offset: Offset) -> usize {
        draw_frame(surface, &self.pixels, offset, self.background)
    }

    /// Draw and submit frames until `flag` is stopped (or the frame limit is
    /// reached).
    ///
    /// A flag that is already stopped returns immediately with zero frames.
    /// Any submit failure ends the loop and is returned as is.
    pub fn run<S: Surface>(
        &self,
        mut surface: S,
        flag: &RunFlag,
    ) -> Result<RunSummary<S>, SurfaceError> {
        let offset = self.offset_for(&surface);
        debug!(
            "render loop start: surface {}x{}, sprite {}x{} at ({}, {}), {} pacing every {:?}",
            surface.width(),
            surface.height(),
            self.sprite.width(),
            self.sprite.height(),
            offset.x,
            offset.y,
            self.pacing.as_str(),
            self.pacing.interval(),
        );

        let mut frames: u64 = 0;
        while flag.is_running() {
            let started = Instant::now();

            let written = self.render_frame(&mut surface, offset);
            surface = surface.submit()?;
            frames += 1;

            let frame_time = started.elapsed();
            trace!("frame {frames}: {written} pixels in {frame_time:?}");

            if self.max_frames.is_some_and(|max| frames >= max) {
                debug!("frame limit reached");
                break;
            }

            if self.pacing.overran(frame_time) {
                warn!(
                    "frame {frames} took {frame_time:?}, over the {:?} interval",
                    self.pacing.interval()
                );
            }
            let delay = self.pacing.delay_after(frame_time);
            if delay > Duration::ZERO {
                thread::sleep(delay);
            }
        }

        debug!("render loop stopped after {frames} frames");
        Ok(RunSummary { frames, surface })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reference_palette, reference_sprite, SpriteError};
    use crate::surface::MemorySurface;

    fn reference_loop() -> RenderLoop {
        RenderLoop::new(reference_sprite().unwrap(), reference_palette().unwrap())
            .unwrap()
            .with_pacing(Pacing::Fixed(Duration::ZERO))
    }

    #[test]
    fn new_rejects_unmapped_symbols() {
        let sprite = Sprite::from_rows(&["AX"]).unwrap();
        let palette = Palette::from_entries(&[('A', Rgb::new(1, 1, 1))]).unwrap();
        assert_eq!(
            RenderLoop::new(sprite, palette).unwrap_err(),
            SpriteError::UnknownSymbol { symbol: 'X' }
        );
    }

    #[test]
    fn offset_centers_reference_sprite() {
        let r = reference_loop();
        assert_eq!(r.offset_for(&MemorySurface::new(32, 32)), Offset::new(8, 8));
        assert_eq!(r.offset_for(&MemorySurface::new(64, 32)), Offset::new(24, 8));
    }

    #[test]
    fn uncentered_draws_at_origin() {
        let r = reference_loop().centered(false);
        assert_eq!(r.offset_for(&MemorySurface::new(32, 32)), Offset::ORIGIN);
    }

    #[test]
    fn stopped_flag_runs_zero_frames() {
        let flag = RunFlag::new();
        flag.stop();

        let summary = reference_loop()
            .run(MemorySurface::new(32, 32), &flag)
            .unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.surface.submits(), 0);
        assert_eq!(summary.surface.writes(), 0);
    }

    #[test]
    fn frame_limit_stops_loop() {
        let flag = RunFlag::new();
        let summary = reference_loop()
            .with_max_frames(Some(3))
            .run(MemorySurface::new(32, 32), &flag)
            .unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.surface.submits(), 3);
        assert!(flag.is_running());
    }

    #[test]
    fn render_frame_counts_opaque_pixels() {
        let r = reference_loop();
        let mut s = MemorySurface::new(32, 32);
        let written = r.render_frame(&mut s, Offset::new(8, 8));
        assert_eq!(written, r.pixels.len());
        assert_eq!(written, r.sprite().opaque_pixels(r.palette()).count());
        assert_eq!(s.writes() as usize, written);
    }

    #[test]
    fn custom_background_fills_untouched_pixels() {
        let bg = Rgb::new(0, 0, 40);
        let r = reference_loop().with_background(bg);
        let mut s = MemorySurface::new(32, 32);
        r.render_frame(&mut s, Offset::new(8, 8));
        assert_eq!(s.pixel(0, 0), Some(bg));
        assert_eq!(s.pixel(31, 31), Some(bg));
    }
}
