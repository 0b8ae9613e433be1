//! Terminal preview backend.
//!
//! Renders the LED panel into a simple framebuffer of terminal cells and
//! flushes it with crossterm, re-encoding only the cells that changed since
//! the previous frame. Useful for developing without a panel attached.
//!
//! Goals:
//! - Keep the render loop unaware of terminals (it only sees a `Surface`)
//! - Square-looking pixels: two LED rows per terminal row via `▀`
//! - Testable without a tty: every writer-facing type accepts any `Write`

pub mod fb;
pub mod panel_view;
pub mod renderer;
pub mod surface;

pub use led_sprite_engine as engine;
pub use led_sprite_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use panel_view::{PanelView, Viewport, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
