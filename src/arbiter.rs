//! Effect arbitration
//!
//! Exactly one effect may draw per tick. Effects are asked in a fixed
//! priority order; the first one that renders or holds the tick wins and
//! the rest are not run at all.

use embassy_time::Instant;

use crate::{
    color::Rgb,
    effect::{EffectSet, GameState, Tick},
};

const EFFECT_NAME_STARTUP: &str = "startup";
const EFFECT_NAME_DEATH: &str = "death";
const EFFECT_NAME_FLASH: &str = "flash";
const EFFECT_NAME_HEALTH_BAR: &str = "health_bar";

const EFFECT_ID_STARTUP: u8 = 0;
const EFFECT_ID_DEATH: u8 = 1;
const EFFECT_ID_FLASH: u8 = 2;
const EFFECT_ID_HEALTH_BAR: u8 = 3;

/// Known effects, numbered by priority (lower wins)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum EffectId {
    Startup = EFFECT_ID_STARTUP,
    Death = EFFECT_ID_DEATH,
    Flash = EFFECT_ID_FLASH,
    HealthBar = EFFECT_ID_HEALTH_BAR,
}

impl EffectId {
    /// Effects in the order they get the strip
    pub const PRIORITY: [Self; 4] = [Self::Startup, Self::Death, Self::Flash, Self::HealthBar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => EFFECT_NAME_STARTUP,
            Self::Death => EFFECT_NAME_DEATH,
            Self::Flash => EFFECT_NAME_FLASH,
            Self::HealthBar => EFFECT_NAME_HEALTH_BAR,
        }
    }
}

/// Run one tick of effects
///
/// Walks [`EffectId::PRIORITY`] and stops at the first effect that renders
/// or holds the tick. Returns the effect that rendered a frame, or `None`
/// if the strip should not be touched this tick.
pub fn arbitrate(
    effects: &mut EffectSet,
    game: &mut GameState,
    now: Instant,
    leds: &mut [Rgb],
) -> Option<EffectId> {
    for id in EffectId::PRIORITY {
        match effects.tick(id, now, game, leds) {
            Tick::Pass => {}
            Tick::Rendered => return Some(id),
            Tick::Held => return None,
        }
    }
    None
}
