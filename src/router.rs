//! Event routing
//!
//! Turns inbound messages into state changes: leaves startup mode, starts
//! and extends flashes, updates health and fires the death animation.

use embassy_time::Instant;

use crate::effect::{EffectSet, FlashTrigger, GameState, MAX_HEALTH};
use crate::message::{GameEvent, InboundMessage, MessageReceiver};

/// Pulls messages off the transport queue, one per tick
pub struct EventRouter<'a, const SIZE: usize> {
    messages: MessageReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> EventRouter<'a, SIZE> {
    /// Create a new event router
    pub const fn new(messages: MessageReceiver<'a, SIZE>) -> Self {
        Self { messages }
    }

    /// Take at most one pending message (non-blocking)
    pub fn poll(&mut self) -> Option<InboundMessage> {
        self.messages.try_receive().ok()
    }
}

/// Parse and apply one message
///
/// Any message, even one that does not parse, ends startup mode.
/// Returns the parsed event.
pub fn route(
    message: &str,
    now: Instant,
    effects: &mut EffectSet,
    game: &mut GameState,
) -> GameEvent {
    effects.exit_startup(game);

    let event = GameEvent::parse(message);
    match event {
        GameEvent::Flash(duration) => apply_flash(duration, now, effects),
        GameEvent::HealthUpdate(health) => apply_health(health, now, effects, game),
        GameEvent::Unrecognized => {}
    }
    event
}

fn apply_flash(duration: f32, now: Instant, effects: &mut EffectSet) {
    if !duration.is_finite() || duration <= 0.0 {
        return;
    }
    if effects.trigger_flash(duration, now) == FlashTrigger::Suppressed {
        hud_log!("[Flash] Dropped {}s flash, death animation running", duration);
    }
}

/// Out of range values are dropped, not clamped
fn apply_health(health: i32, now: Instant, effects: &mut EffectSet, game: &mut GameState) {
    let Ok(health) = u8::try_from(health) else {
        return;
    };
    if health > MAX_HEALTH {
        return;
    }
    let Some(previous) = game.set_health(health) else {
        return;
    };
    hud_log!("[Health] Player health updated: {}", health);

    if health == 0 && previous > 0 && !effects.death.is_active() {
        effects.start_death(now);
    }
}
