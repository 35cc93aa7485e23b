//! HUD effects
//!
//! Four time-driven renderers share the strip: the startup rainbow, the
//! death animation, the damage flash and the health bar. Each one owns its
//! activation state and redraws the full frame from `now` and the
//! [`GameState`]. Which one gets the strip on a given tick is decided by
//! [`crate::arbiter`].

mod death;
mod flash;
mod health_bar;
mod startup;

use embassy_time::{Duration, Instant};
pub use death::{DeathEffect, DeathTimings};
pub use flash::{FlashEffect, FlashSession, FlashTrigger};
pub use health_bar::HealthBarEffect;
pub use startup::StartupEffect;

use crate::{arbiter::EffectId, color::Rgb};

const DEFAULT_RAINBOW_CYCLE_MS: u64 = 5_000;
const DEFAULT_FLASH_EXPONENT: f32 = 2.5;

/// Upper bound for the player health value.
pub const MAX_HEALTH: u8 = 100;

/// What an effect did with its tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not active, lower priority effects may run
    Pass,
    /// Active and wrote a full frame
    Rendered,
    /// Claimed the tick without drawing anything
    Held,
}

pub trait Effect {
    /// Advance the effect to `now` and render into `leds` if it owns the strip
    fn tick(&mut self, now: Instant, game: &mut GameState, leds: &mut [Rgb]) -> Tick;
}

/// Game state shared between the router and the effects
#[derive(Debug, Clone)]
pub struct GameState {
    health: u8,
    health_changed: bool,
}

impl GameState {
    pub const fn new(health: u8) -> Self {
        let health = if health > MAX_HEALTH { MAX_HEALTH } else { health };
        Self {
            health,
            health_changed: true,
        }
    }

    /// Current player health, `0..=100`
    pub const fn health(&self) -> u8 {
        self.health
    }

    /// Health as a fraction of full health
    pub fn health_fraction(&self) -> f32 {
        f32::from(self.health) / f32::from(MAX_HEALTH)
    }

    /// Store a new health value
    ///
    /// Returns the previous value if the health actually changed. Values
    /// above [`MAX_HEALTH`] are clamped.
    pub fn set_health(&mut self, health: u8) -> Option<u8> {
        let health = health.min(MAX_HEALTH);
        if health == self.health {
            return None;
        }
        let previous = self.health;
        self.health = health;
        self.health_changed = true;
        Some(previous)
    }

    /// Request a health bar redraw on the next free tick
    pub fn mark_changed(&mut self) {
        self.health_changed = true;
    }

    pub const fn is_changed(&self) -> bool {
        self.health_changed
    }

    /// Clear the redraw request, returning whether it was set
    pub fn take_changed(&mut self) -> bool {
        core::mem::take(&mut self.health_changed)
    }

    /// Number of leading LEDs the health bar lights on a strip of `len`
    pub fn lit_count(&self, len: usize) -> usize {
        usize::from(self.health) * len / usize::from(MAX_HEALTH)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}

/// Timing constants of every effect
#[derive(Debug, Clone, Copy)]
pub struct EffectTimings {
    /// Period of one full startup rainbow rotation
    pub rainbow_cycle: Duration,
    /// Exponent of the flash fade (applied to the remaining fraction)
    pub flash_exponent: f32,
    /// Death animation timeline
    pub death: DeathTimings,
}

impl EffectTimings {
    pub const DEFAULT: Self = Self {
        rainbow_cycle: Duration::from_millis(DEFAULT_RAINBOW_CYCLE_MS),
        flash_exponent: DEFAULT_FLASH_EXPONENT,
        death: DeathTimings::DEFAULT,
    };
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// All effects, one slot each
///
/// Cross-effect rules live here: death preempts the flash and a flash can
/// not start while the death animation runs.
#[derive(Debug, Clone)]
pub struct EffectSet {
    pub startup: StartupEffect,
    pub death: DeathEffect,
    pub flash: FlashEffect,
    pub health_bar: HealthBarEffect,
}

impl EffectSet {
    pub fn new(timings: &EffectTimings) -> Self {
        Self {
            startup: StartupEffect::default().with_cycle_duration(timings.rainbow_cycle),
            death: DeathEffect::new(timings.death),
            flash: FlashEffect::new(timings.flash_exponent),
            health_bar: HealthBarEffect,
        }
    }

    /// Start the death animation, cancelling any running flash
    ///
    /// Returns `false` if the animation was already running; it is never
    /// restarted mid-play.
    pub fn start_death(&mut self, now: Instant) -> bool {
        if !self.death.activate(now) {
            return false;
        }
        self.flash.deactivate();
        hud_log!("[Death] Player died, starting death animation");
        true
    }

    /// Trigger a flash of `duration` seconds
    pub fn trigger_flash(&mut self, duration: f32, now: Instant) -> FlashTrigger {
        if self.death.is_active() {
            return FlashTrigger::Suppressed;
        }
        self.flash.trigger(duration, now)
    }

    /// Leave startup mode for good
    ///
    /// Returns `true` on the first call only.
    pub fn exit_startup(&mut self, game: &mut GameState) -> bool {
        if !self.startup.deactivate() {
            return false;
        }
        game.mark_changed();
        hud_log!("[Startup] First message received, leaving startup mode");
        true
    }

    /// Run a single effect for this tick
    pub fn tick(
        &mut self,
        id: EffectId,
        now: Instant,
        game: &mut GameState,
        leds: &mut [Rgb],
    ) -> Tick {
        match id {
            EffectId::Startup => self.startup.tick(now, game, leds),
            EffectId::Death => self.death.tick(now, game, leds),
            EffectId::Flash => self.flash.tick(now, game, leds),
            EffectId::HealthBar => self.health_bar.tick(now, game, leds),
        }
    }

    /// Returns `true` if the given effect currently claims the strip
    pub fn is_active(&self, id: EffectId, game: &GameState) -> bool {
        match id {
            EffectId::Startup => self.startup.is_active(),
            EffectId::Death => self.death.is_active(),
            EffectId::Flash => self.flash.is_active(),
            EffectId::HealthBar => game.is_changed(),
        }
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        Self::new(&EffectTimings::DEFAULT)
    }
}
