//! LED sprite display (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`led_sprite::{core, engine, term, types}`) and adds the pieces that only
//! the binary needs: command-line configuration, backend selection, and the
//! optional LED-matrix hardware surface.

pub use led_sprite_core as core;
pub use led_sprite_engine as engine;
pub use led_sprite_term as term;
pub use led_sprite_types as types;

pub mod app;
pub mod config;
#[cfg(feature = "hardware")]
pub mod hardware;

pub use config::{BackendKind, Config, PanelConfig};
