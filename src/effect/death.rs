//! Death animation
//!
//! Two phases: the strip blinks red a few times, then the red collapses
//! from both edges toward the center. Once it is over the health bar gets
//! the strip back.

use embassy_time::{Duration, Instant};

use super::{Effect, GameState, Tick};
use crate::{
    color::{BLACK, RED, Rgb, fill_solid},
    math::{duration_secs, ease_pow, elapsed_secs},
};

const DEFAULT_BLINK_PHASE_MS: u64 = 1_500;
const DEFAULT_BLINK_CYCLE_MS: u64 = 500;
const DEFAULT_BLINK_ON_MS: u64 = 250;
const DEFAULT_FADE_PHASE_MS: u64 = 2_000;
const DEFAULT_FADE_EXPONENT: f32 = 0.4;

/// Death animation timeline
#[derive(Debug, Clone, Copy)]
pub struct DeathTimings {
    /// Length of the blink phase
    pub blink_phase: Duration,
    /// Length of one on/off blink
    pub blink_cycle: Duration,
    /// Part of each blink during which the strip is lit
    pub blink_on: Duration,
    /// Length of the edge fade phase
    pub fade_phase: Duration,
    /// Exponent of the edge fade progress curve
    pub fade_exponent: f32,
}

impl DeathTimings {
    pub const DEFAULT: Self = Self {
        blink_phase: Duration::from_millis(DEFAULT_BLINK_PHASE_MS),
        blink_cycle: Duration::from_millis(DEFAULT_BLINK_CYCLE_MS),
        blink_on: Duration::from_millis(DEFAULT_BLINK_ON_MS),
        fade_phase: Duration::from_millis(DEFAULT_FADE_PHASE_MS),
        fade_exponent: DEFAULT_FADE_EXPONENT,
    };

    /// Whole animation length
    pub const fn total(&self) -> Duration {
        Duration::from_ticks(self.blink_phase.as_ticks() + self.fade_phase.as_ticks())
    }
}

impl Default for DeathTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Death animation state
#[derive(Debug, Clone)]
pub struct DeathEffect {
    started_at: Option<Instant>,
    blink_phase: f32,
    blink_cycle: f32,
    blink_on: f32,
    fade_phase: f32,
    fade_exponent: f32,
}

impl DeathEffect {
    pub fn new(timings: DeathTimings) -> Self {
        Self {
            started_at: None,
            blink_phase: duration_secs(timings.blink_phase),
            blink_cycle: duration_secs(timings.blink_cycle),
            blink_on: duration_secs(timings.blink_on),
            fade_phase: duration_secs(timings.fade_phase),
            fade_exponent: timings.fade_exponent,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub const fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Start the animation
    ///
    /// Returns `false` and keeps the original start time if it is
    /// already running.
    pub fn activate(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Whole animation length in seconds
    pub fn total_secs(&self) -> f32 {
        self.blink_phase + self.fade_phase
    }

    /// Draw the frame `elapsed` seconds into the animation
    pub fn render_at(&self, elapsed: f32, leds: &mut [Rgb]) {
        if elapsed < self.blink_phase {
            let cycle = libm::fmodf(elapsed, self.blink_cycle);
            let color = if cycle < self.blink_on { RED } else { BLACK };
            fill_solid(leds, color);
            return;
        }

        let half = leds.len() / 2;
        let leds_off = self.leds_off(elapsed - self.blink_phase, half);
        let len = leds.len();
        fill_solid(leds, RED);
        fill_solid(&mut leds[..leds_off], BLACK);
        fill_solid(&mut leds[len - leds_off..], BLACK);
    }

    /// LEDs dark on each edge `fade_time` seconds into the fade phase
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn leds_off(&self, fade_time: f32, half: usize) -> usize {
        let linear = fade_time / self.fade_phase;
        let progress = ease_pow(linear, self.fade_exponent);
        ((progress * half as f32) as usize).min(half)
    }
}

impl Default for DeathEffect {
    fn default() -> Self {
        Self::new(DeathTimings::DEFAULT)
    }
}

impl Effect for DeathEffect {
    fn tick(&mut self, now: Instant, game: &mut GameState, leds: &mut [Rgb]) -> Tick {
        let Some(started_at) = self.started_at else {
            return Tick::Pass;
        };

        let elapsed = elapsed_secs(started_at, now);
        if elapsed >= self.total_secs() {
            self.started_at = None;
            game.mark_changed();
            hud_log!("[Death] Death animation completed, back to health display");
            return Tick::Pass;
        }

        self.render_at(elapsed, leds);
        Tick::Rendered
    }
}
