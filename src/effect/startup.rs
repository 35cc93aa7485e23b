//! Startup rainbow
//!
//! Scrolls a full hue wheel along the strip until the first message from
//! the game arrives. Hue math follows the `FastLED` convention of a 0-255
//! color wheel.

use embassy_time::{Duration, Instant};

use super::{Effect, GameState, Tick};
use crate::color::{Hsv, Rgb, hsv2rgb};

const DEFAULT_CYCLE_MS: u64 = 5_000;

/// Horizontally scrolling rainbow shown before the game connects
#[derive(Debug, Clone)]
pub struct StartupEffect {
    active: bool,
    /// Duration of one complete rainbow cycle
    cycle_duration: Duration,
}

impl Default for StartupEffect {
    fn default() -> Self {
        Self {
            active: true,
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
        }
    }
}

impl StartupEffect {
    /// Set the cycle duration
    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the rainbow. There is no way back into startup mode.
    ///
    /// Returns `true` if the effect was active.
    pub fn deactivate(&mut self) -> bool {
        core::mem::replace(&mut self.active, false)
    }

    /// Hue of the first pixel at `now`
    #[allow(clippy::cast_possible_truncation)]
    pub fn base_hue(&self, now: Instant) -> u8 {
        let cycle_ms = self.cycle_duration.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        ((progress_ms * 255) / cycle_ms) as u8
    }

    /// Fill `leds` with the rainbow at `now`
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let base_hue = self.base_hue(now);
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = (i * 255 / len) as u8;
            *led = hsv2rgb(Hsv {
                hue: base_hue.wrapping_add(offset),
                sat: 255,
                val: 255,
            });
        }
    }
}

impl Effect for StartupEffect {
    fn tick(&mut self, now: Instant, _game: &mut GameState, leds: &mut [Rgb]) -> Tick {
        if !self.active {
            return Tick::Pass;
        }
        self.render(now, leds);
        Tick::Rendered
    }
}
