#![no_std]

#[macro_use]
mod log;

pub mod arbiter;
pub mod channel;
pub mod color;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod math;
pub mod message;
pub mod renderer;
pub mod router;

pub use arbiter::{EffectId, arbitrate};
pub use effect::{
    DeathEffect, DeathTimings, EffectSet, EffectTimings, FlashEffect, FlashSession,
    FlashTrigger, GameState, HealthBarEffect, StartupEffect,
};
pub use filter::{BrightnessConfig, BrightnessFilter};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use message::{
    GameEvent, InboundMessage, MessageChannel, MessageReceiver, MessageSender, SendTextError,
};
pub use renderer::{Renderer, RendererConfig};
pub use router::EventRouter;

pub use color::{Hsv, Rgb, health_color};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The driver must push the whole frame to the strip in one go,
/// so the viewer never sees a half-updated strip.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
