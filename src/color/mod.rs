mod ramp;
mod utils;

pub use ramp::{RED_BAND_LIMIT, YELLOW_BAND_LIMIT, health_color};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_white, fill_solid, hsv2rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
