use embassy_time::{Duration, Instant};

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Length of a duration in (fractional) seconds
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn duration_secs(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1_000_000.0
}

/// Seconds elapsed between `since` and `now`
///
/// Saturates at zero if `now` is earlier than `since`.
#[inline]
pub fn elapsed_secs(since: Instant, now: Instant) -> f32 {
    duration_secs(now.saturating_duration_since(since))
}

/// Power curve over a unit interval
///
/// Exponents above 1 decay fast (ease-out for a falling input), exponents
/// below 1 rise fast at the start and flatten out.
#[inline]
pub fn ease_pow(value: f32, exponent: f32) -> f32 {
    libm::powf(value.clamp(0.0, 1.0), exponent)
}
