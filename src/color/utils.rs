pub use smart_leds::hsv::hsv2rgb;

use crate::color::Rgb;

/// Fill every LED with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Overlay white on top of `base`
///
/// `intensity` is the white weight in `[0, 1]`: 0 leaves `base` untouched,
/// 1 gives pure white.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend_white(base: Rgb, intensity: f32) -> Rgb {
    let keep = 1.0 - intensity;
    let white = 255.0 * intensity;
    let channel = |value: u8| (white + f32::from(value) * keep) as u8;
    Rgb {
        r: channel(base.r),
        g: channel(base.g),
        b: channel(base.b),
    }
}
