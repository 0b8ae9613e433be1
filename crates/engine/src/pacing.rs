//! Frame pacing strategies.
//!
//! The reference display loop sleeps a fixed interval after every frame,
//! regardless of how long drawing took, so the real rate drifts below the
//! nominal one under load. [`Pacing::Corrected`] subtracts the measured frame
//! time instead.

use std::time::Duration;

use crate::types::FRAME_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep the full interval after each frame.
    Fixed(Duration),
    /// Sleep the interval minus the time the frame took (never negative).
    Corrected(Duration),
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed(Duration::from_millis(FRAME_INTERVAL_MS))
    }
}

impl Pacing {
    /// Parse a strategy name ("fixed" or "corrected", case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use led_sprite_engine::Pacing;
    ///
    /// let interval = Duration::from_millis(50);
    /// assert_eq!(Pacing::from_name("fixed", interval), Some(Pacing::Fixed(interval)));
    /// assert_eq!(Pacing::from_name("Corrected", interval), Some(Pacing::Corrected(interval)));
    /// assert_eq!(Pacing::from_name("vsync", interval), None);
    /// ```
    pub fn from_name(name: &str, interval: Duration) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fixed" => Some(Pacing::Fixed(interval)),
            "corrected" => Some(Pacing::Corrected(interval)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::Fixed(_) => "fixed",
            Pacing::Corrected(_) => "corrected",
        }
    }

    pub fn interval(&self) -> Duration {
        match *self {
            Pacing::Fixed(interval) | Pacing::Corrected(interval) => interval,
        }
    }

    /// How long to sleep after a frame that took `frame_time`.
    pub fn delay_after(&self, frame_time: Duration) -> Duration {
        match *self {
            Pacing::Fixed(interval) => interval,
            Pacing::Corrected(interval) => interval.saturating_sub(frame_time),
        }
    }

    /// Whether a frame that took `frame_time` already used up the interval.
    pub fn overran(&self, frame_time: Duration) -> bool {
        matches!(self, Pacing::Corrected(interval) if frame_time > *interval)
    }
}
