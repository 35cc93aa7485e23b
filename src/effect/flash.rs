//! Damage flash
//!
//! A white pop laid over the health bar that fades out with a power curve:
//! bright for a moment, then quickly back to the bar colors. The tick on
//! which a flash runs out draws nothing and asks the health bar to redraw
//! on the next one, so no white tint is left on the strip.

use embassy_time::Instant;

use super::{Effect, GameState, Tick};
use crate::{
    color::{BLACK, Rgb, blend_white, health_color},
    math::{ease_pow, elapsed_secs},
};

/// A running flash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashSession {
    pub started_at: Instant,
    /// Total length in seconds, always positive
    pub duration: f32,
}

impl FlashSession {
    /// Seconds left at `now`. Negative once the flash has run out.
    pub fn remaining(&self, now: Instant) -> f32 {
        self.duration - elapsed_secs(self.started_at, now)
    }
}

/// Outcome of a flash trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTrigger {
    /// No flash was running, a new one started
    Started,
    /// The new flash outlasts the running one and replaced it
    Extended,
    /// The running flash lasts longer, the trigger was dropped
    Ignored,
    /// The death animation owns the strip
    Suppressed,
}

/// Flash effect state
#[derive(Debug, Clone)]
pub struct FlashEffect {
    session: Option<FlashSession>,
    exponent: f32,
}

impl FlashEffect {
    pub const fn new(exponent: f32) -> Self {
        Self {
            session: None,
            exponent,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub const fn session(&self) -> Option<FlashSession> {
        self.session
    }

    /// Start a flash, or extend the running one
    ///
    /// A running flash is only replaced when the new one lasts longer than
    /// what is left of it, so a burst of short hits never cuts a long flash
    /// short. `duration` must be positive.
    pub fn trigger(&mut self, duration: f32, now: Instant) -> FlashTrigger {
        let outcome = match self.session {
            None => FlashTrigger::Started,
            Some(session) => {
                let remaining = session.remaining(now);
                if duration > remaining {
                    hud_log!("[Flash] Extending flash: {} > {} remaining", duration, remaining);
                    FlashTrigger::Extended
                } else {
                    hud_log!("[Flash] Ignoring flash: {} <= {} remaining", duration, remaining);
                    return FlashTrigger::Ignored;
                }
            }
        };

        hud_log!("[Flash] Starting flash effect: {} seconds", duration);
        self.session = Some(FlashSession {
            started_at: now,
            duration,
        });
        outcome
    }

    /// Drop the running flash, if any
    pub fn deactivate(&mut self) {
        self.session = None;
    }

    /// White weight at `now`, or `None` once the flash is over
    pub fn intensity(&self, now: Instant) -> Option<f32> {
        let session = self.session?;
        let elapsed = elapsed_secs(session.started_at, now);
        if elapsed >= session.duration {
            return None;
        }
        let normalized = (session.duration - elapsed) / session.duration;
        Some(ease_pow(normalized, self.exponent))
    }
}

impl Effect for FlashEffect {
    fn tick(&mut self, now: Instant, game: &mut GameState, leds: &mut [Rgb]) -> Tick {
        if self.session.is_none() {
            return Tick::Pass;
        }
        let Some(intensity) = self.intensity(now) else {
            self.session = None;
            game.mark_changed();
            hud_log!("[Flash] Flash effect completed");
            return Tick::Held;
        };

        let lit = game.lit_count(leds.len());
        let bar_color = health_color(game.health_fraction());
        for (i, led) in leds.iter_mut().enumerate() {
            let base = if i < lit { bar_color } else { BLACK };
            *led = blend_white(base, intensity);
        }
        Tick::Rendered
    }
}
