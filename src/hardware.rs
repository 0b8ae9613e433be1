//! LED-matrix backend over the rpi-rgb-led-matrix bindings.
//!
//! The driver owns GPIO timing and refresh; we only see its offscreen
//! canvas. `swap` hands the finished canvas to the driver (presented on the
//! next vsync) and gives back the one to draw into next.

use log::debug;
use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

use crate::config::PanelConfig;
use crate::engine::{Surface, SurfaceError};
use crate::types::Rgb;

pub struct MatrixSurface {
    matrix: LedMatrix,
    canvas: LedCanvas,
    width: i32,
    height: i32,
}

impl MatrixSurface {
    /// Initialize the panel. Usually needs root for GPIO access.
    pub fn open(panel: &PanelConfig) -> Result<Self, SurfaceError> {
        let mut options = LedMatrixOptions::new();
        options.set_rows(u32::from(panel.rows));
        options.set_cols(u32::from(panel.cols));
        options.set_chain_length(u32::from(panel.chain_length));
        options.set_parallel(u32::from(panel.parallel));
        options.set_hardware_mapping(&panel.hardware_mapping);
        options
            .set_brightness(panel.brightness)
            .map_err(SurfaceError::init)?;

        let mut runtime = LedRuntimeOptions::new();
        runtime.set_gpio_slowdown(panel.gpio_slowdown);

        let matrix = LedMatrix::new(Some(options), Some(runtime)).map_err(SurfaceError::init)?;
        let canvas = matrix.offscreen_canvas();
        let (width, height) = canvas.canvas_size();
        debug!(
            "matrix surface {width}x{height} ({} mapping, slowdown {})",
            panel.hardware_mapping, panel.gpio_slowdown
        );

        Ok(Self {
            matrix,
            canvas,
            width,
            height,
        })
    }
}

fn led_color(color: Rgb) -> LedColor {
    LedColor {
        red: color.r,
        green: color.g,
        blue: color.b,
    }
}

impl Surface for MatrixSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill(&mut self, color: Rgb) {
        self.canvas.fill(&led_color(color));
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if self.contains(x, y) {
            self.canvas.set(x, y, &led_color(color));
        }
    }

    fn submit(self) -> Result<Self, SurfaceError> {
        let Self {
            matrix,
            canvas,
            width,
            height,
        } = self;
        let canvas = matrix.swap(canvas);
        Ok(Self {
            matrix,
            canvas,
            width,
            height,
        })
    }
}
