//! Render loop module - draws the sprite onto a display surface
//!
//! This crate owns the draw/submit/pace cycle. The display itself is behind
//! the [`Surface`] trait, so the loop runs the same against an LED matrix, a
//! terminal preview, or the in-memory [`MemorySurface`] used by tests.
//!
//! # Module Structure
//!
//! - [`surface`]: the [`Surface`] capability and [`MemorySurface`]
//! - [`blit`]: centering offset and clipped pixel blit
//! - [`pacing`]: fixed vs. time-corrected frame pacing
//! - [`run_flag`]: shared stop flag and interrupt handler installation
//! - [`render_loop`]: [`RenderLoop`], tying the pieces together
//! - [`error`]: [`SurfaceError`]
//!
//! # Frame Cycle
//!
//! Each iteration, while the [`RunFlag`] is set:
//!
//! 1. Fill the surface with the background color (black)
//! 2. Write every opaque sprite cell at `offset + (x, y)`, skipping targets
//!    outside the surface
//! 3. Submit, continuing with the surface `submit` returns
//! 4. Sleep according to the [`Pacing`] strategy
//!
//! # Example
//!
//! ```
//! use led_sprite_core::{reference_palette, reference_sprite};
//! use led_sprite_engine::{MemorySurface, RenderLoop, RunFlag};
//!
//! let render = RenderLoop::new(reference_sprite().unwrap(), reference_palette().unwrap())
//!     .unwrap()
//!     .with_max_frames(Some(1));
//!
//! let summary = render.run(MemorySurface::new(32, 32), &RunFlag::new()).unwrap();
//! assert_eq!(summary.frames, 1);
//! ```

pub mod blit;
pub mod error;
pub mod pacing;
pub mod render_loop;
pub mod run_flag;
pub mod surface;

pub use led_sprite_core as core;
pub use led_sprite_types as types;

pub use blit::{blit, centering_offset, draw_frame, Offset};
pub use error::{BoxError, SurfaceError};
pub use pacing::Pacing;
pub use render_loop::{RenderLoop, RunSummary};
pub use run_flag::RunFlag;
pub use surface::{MemorySurface, Surface};
