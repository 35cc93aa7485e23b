//! Health color ramp
//!
//! Three bands: solid red at the bottom, red fading into yellow in the
//! middle, yellow fading into green at the top. The bands meet without a
//! visible jump, so a health bar walking down never pops between colors.

use crate::color::{RED, Rgb};

/// Upper edge of the solid red band (fraction of full health).
pub const RED_BAND_LIMIT: f32 = 0.3;

/// Upper edge of the red to yellow band (fraction of full health).
pub const YELLOW_BAND_LIMIT: f32 = 0.6;

/// Map a health fraction in `[0, 1]` to a bar color.
///
/// The caller clamps `percent`; values outside the range saturate to the
/// nearest band end.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn health_color(percent: f32) -> Rgb {
    if percent > YELLOW_BAND_LIMIT {
        let t = (percent - YELLOW_BAND_LIMIT) / (1.0 - YELLOW_BAND_LIMIT);
        Rgb::new((255.0 * (1.0 - t)) as u8, 255, 0)
    } else if percent > RED_BAND_LIMIT {
        let t = (percent - RED_BAND_LIMIT) / (YELLOW_BAND_LIMIT - RED_BAND_LIMIT);
        Rgb::new(255, (255.0 * t) as u8, 0)
    } else {
        RED
    }
}
