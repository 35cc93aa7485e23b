//! Control loop pacing.
//!
//! Portable tick scheduling without async/await or platform-specific timers.
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::arbiter::EffectId;
use crate::{OutputDriver, Renderer};

/// Default tick period of the control loop.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(10);

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Effect whose frame was written to the driver, if any.
    pub presented: Option<EffectId>,
}

/// Drives a [`Renderer`] and writes its frames to an [`OutputDriver`].
///
/// The driver is only written when an effect rendered, so an idle health
/// bar costs no strip updates.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const N: usize, const MESSAGE_QUEUE_SIZE: usize> {
    output: O,
    renderer: Renderer<'a, N, MESSAGE_QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const N: usize, const MESSAGE_QUEUE_SIZE: usize>
    FrameScheduler<'a, O, N, MESSAGE_QUEUE_SIZE>
{
    /// Create a new scheduler ticking every [`DEFAULT_TICK_DURATION`].
    pub fn new(renderer: Renderer<'a, N, MESSAGE_QUEUE_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_TICK_DURATION)
    }

    /// Create a new scheduler with a custom tick period.
    pub fn with_frame_duration(
        renderer: Renderer<'a, N, MESSAGE_QUEUE_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// If the loop has fallen more than two periods behind, the schedule
    /// restarts from `now` instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration + self.frame_duration;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let presented = match self.renderer.tick(now) {
            Some(frame) => {
                self.output.write(frame);
                self.renderer.active_effect()
            }
            None => None,
        };

        self.next_frame += self.frame_duration;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
            presented,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, N, MESSAGE_QUEUE_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, N, MESSAGE_QUEUE_SIZE> {
        &mut self.renderer
    }

    /// Get a reference to the output driver.
    pub fn driver(&self) -> &O {
        &self.output
    }
}
