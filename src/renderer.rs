//! HUD renderer
//!
//! Ties the message router, the effect set and the brightness cap into a
//! single per-tick step.

use embassy_time::Instant;

use crate::arbiter::{EffectId, arbitrate};
use crate::color::Rgb;
use crate::effect::{EffectSet, EffectTimings, GameState, MAX_HEALTH};
use crate::filter::{BrightnessConfig, BrightnessFilter};
use crate::message::{GameEvent, MessageReceiver};
use crate::router::{self, EventRouter};

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Health shown until the game reports one
    pub initial_health: u8,
    pub brightness: BrightnessConfig,
    pub timings: EffectTimings,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            initial_health: MAX_HEALTH,
            brightness: BrightnessConfig::default(),
            timings: EffectTimings::DEFAULT,
        }
    }
}

/// HUD renderer - owns all game and effect state
///
/// One [`tick`](Self::tick) takes at most one pending message, routes it,
/// lets the arbiter pick an effect and returns the frame to present, if
/// any effect drew one.
pub struct Renderer<'a, const N: usize, const MESSAGE_QUEUE_SIZE: usize> {
    // External dependencies
    router: EventRouter<'a, MESSAGE_QUEUE_SIZE>,
    brightness: BrightnessFilter,

    // Internal state
    game: GameState,
    effects: EffectSet,
    active: Option<EffectId>,
    frame_buffer: [Rgb; N],
    output: [Rgb; N],
}

impl<'a, const N: usize, const MESSAGE_QUEUE_SIZE: usize> Renderer<'a, N, MESSAGE_QUEUE_SIZE> {
    /// Create a new renderer reading from the given message queue
    pub fn new(messages: MessageReceiver<'a, MESSAGE_QUEUE_SIZE>, config: &RendererConfig) -> Self {
        Self {
            router: EventRouter::new(messages),
            brightness: BrightnessFilter::new(&config.brightness),
            game: GameState::new(config.initial_health),
            effects: EffectSet::new(&config.timings),
            active: None,
            frame_buffer: [Rgb::default(); N],
            output: [Rgb::default(); N],
        }
    }

    /// Process one tick
    ///
    /// Returns the brightness-limited frame when an effect rendered, `None`
    /// when the strip should be left alone.
    pub fn tick(&mut self, now: Instant) -> Option<&[Rgb]> {
        if let Some(message) = self.router.poll() {
            self.handle_message(&message, now);
        }

        let rendered = arbitrate(
            &mut self.effects,
            &mut self.game,
            now,
            &mut self.frame_buffer,
        )?;
        self.active = Some(rendered);

        self.brightness.apply(&self.frame_buffer, &mut self.output);
        Some(self.output.as_slice())
    }

    /// Route a message directly, bypassing the queue
    pub fn handle_message(&mut self, message: &str, now: Instant) -> GameEvent {
        router::route(message, now, &mut self.effects, &mut self.game)
    }

    /// Last rendered frame, before brightness limiting
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Last presented frame
    pub fn output(&self) -> &[Rgb] {
        &self.output
    }

    /// Effect that rendered the last frame
    pub const fn active_effect(&self) -> Option<EffectId> {
        self.active
    }

    pub const fn game(&self) -> &GameState {
        &self.game
    }

    pub const fn effects(&self) -> &EffectSet {
        &self.effects
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness.max()
    }

    /// Change the output brightness cap
    ///
    /// Takes effect with the next rendered frame.
    pub fn set_brightness(&mut self, max: u8) {
        self.brightness.set_max(max);
    }
}
