//! Command-line configuration.
//!
//! Every flag has a default matching the reference setup: one 32x32 panel,
//! 50ms fixed pacing, sprite centered, terminal preview. Panel wiring flags
//! (chain length, parallel chains, GPIO slowdown, mapping, brightness) only
//! reach the LED-matrix backend; the render loop sees nothing but the
//! resulting surface size.

use std::time::Duration;

use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};

use crate::engine::Pacing;
use crate::types::{FRAME_INTERVAL_MS, PANEL_COLS, PANEL_ROWS};

/// Tallest HUB75 panel the driver addresses (1:32 scan, two halves).
pub const MAX_PANEL_ROWS: u16 = 64;
/// Widest single panel sold for these drivers.
pub const MAX_PANEL_COLS: u16 = 128;
/// Longest daisy chain we accept; beyond this refresh drops below usable.
pub const MAX_CHAIN_LENGTH: u16 = 16;

/// Which display surface to draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Emulated panel in the terminal.
    Terminal,
    /// Physical HUB75 panel (needs the `hardware` feature).
    Matrix,
}

impl BackendKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(BackendKind::Terminal),
            "matrix" => Some(BackendKind::Matrix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Terminal => "terminal",
            BackendKind::Matrix => "matrix",
        }
    }
}

/// Panel wiring passed through to the matrix driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub rows: u16,
    pub cols: u16,
    pub chain_length: u16,
    pub parallel: u16,
    pub gpio_slowdown: u32,
    pub hardware_mapping: String,
    pub brightness: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            rows: PANEL_ROWS,
            cols: PANEL_COLS,
            chain_length: 1,
            parallel: 1,
            gpio_slowdown: 4,
            hardware_mapping: "regular".to_string(),
            brightness: 100,
        }
    }
}

impl PanelConfig {
    /// Width of the drawable surface (chained panels sit side by side).
    pub fn surface_width(&self) -> u16 {
        self.cols.saturating_mul(self.chain_length)
    }

    /// Height of the drawable surface (parallel chains stack vertically).
    pub fn surface_height(&self) -> u16 {
        self.rows.saturating_mul(self.parallel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendKind,
    pub panel: PanelConfig,
    pub pacing: Pacing,
    pub centered: bool,
    pub max_frames: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Terminal,
            panel: PanelConfig::default(),
            pacing: Pacing::default(),
            centered: true,
            max_frames: None,
        }
    }
}

/// The `led-sprite` command definition.
pub fn command() -> Command {
    command!()
        .arg(
            arg!(--backend <BACKEND> "Display surface to draw into")
                .value_parser(["terminal", "matrix"])
                .default_value("terminal"),
        )
        .arg(
            arg!(--rows <N> "Rows per panel")
                .value_parser(value_parser!(u16).range(1..=i64::from(MAX_PANEL_ROWS)))
                .default_value("32"),
        )
        .arg(
            arg!(--cols <N> "Columns per panel")
                .value_parser(value_parser!(u16).range(1..=i64::from(MAX_PANEL_COLS)))
                .default_value("32"),
        )
        .arg(
            arg!(--"chain-length" <N> "Number of daisy-chained panels")
                .value_parser(value_parser!(u16).range(1..=i64::from(MAX_CHAIN_LENGTH)))
                .default_value("1"),
        )
        .arg(
            arg!(--parallel <N> "Number of parallel chains")
                .value_parser(value_parser!(u16).range(1..=3))
                .default_value("1"),
        )
        .arg(
            arg!(--"gpio-slowdown" <N> "GPIO slowdown factor for faster Raspberry Pis")
                .value_parser(value_parser!(u32).range(0..=5))
                .default_value("4"),
        )
        .arg(
            arg!(--"hardware-mapping" <NAME> "GPIO mapping of the HAT/bonnet")
                .default_value("regular"),
        )
        .arg(
            arg!(--brightness <PERCENT> "Panel brightness")
                .value_parser(value_parser!(u8).range(1..=100))
                .default_value("100"),
        )
        .arg(
            arg!(--"interval-ms" <MS> "Time between frames")
                .value_parser(value_parser!(u64))
                .default_value("50"),
        )
        .arg(
            arg!(--pacing <MODE> "fixed: sleep the full interval; corrected: subtract draw time")
                .value_parser(["fixed", "corrected"])
                .default_value("fixed"),
        )
        .arg(arg!(--"no-center" "Draw the sprite at (0, 0)").action(ArgAction::SetTrue))
        .arg(
            arg!(--frames <N> "Stop after N frames")
                .value_parser(value_parser!(u64).range(1..)),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Config::default();
        let panel_defaults = PanelConfig::default();

        let interval = Duration::from_millis(
            matches
                .get_one::<u64>("interval-ms")
                .copied()
                .unwrap_or(FRAME_INTERVAL_MS),
        );
        let pacing = matches
            .get_one::<String>("pacing")
            .and_then(|name| Pacing::from_name(name, interval))
            .unwrap_or(Pacing::Fixed(interval));

        let panel = PanelConfig {
            rows: get_or(matches, "rows", panel_defaults.rows),
            cols: get_or(matches, "cols", panel_defaults.cols),
            chain_length: get_or(matches, "chain-length", panel_defaults.chain_length),
            parallel: get_or(matches, "parallel", panel_defaults.parallel),
            gpio_slowdown: get_or(matches, "gpio-slowdown", panel_defaults.gpio_slowdown),
            hardware_mapping: matches
                .get_one::<String>("hardware-mapping")
                .cloned()
                .unwrap_or(panel_defaults.hardware_mapping),
            brightness: get_or(matches, "brightness", panel_defaults.brightness),
        };

        Self {
            backend: matches
                .get_one::<String>("backend")
                .and_then(|s| BackendKind::from_str(s))
                .unwrap_or(defaults.backend),
            panel,
            pacing,
            centered: !matches.get_flag("no-center"),
            max_frames: matches.get_one::<u64>("frames").copied(),
        }
    }

    /// Parse from an explicit argument list (first item is the binary name).
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }
}

fn get_or<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str, default: T) -> T {
    matches.get_one::<T>(id).cloned().unwrap_or(default)
}
