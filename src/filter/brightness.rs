//! Global brightness cap
//!
//! Limits the strip output the way a driver-level brightness setting does.
//! Applied only to the presentation copy of the frame.

use crate::{color::Rgb, math::scale8};

const DEFAULT_MAX_BRIGHTNESS: u8 = 100;

/// Configuration for the brightness filter
#[derive(Debug, Clone, Copy)]
pub struct BrightnessConfig {
    /// Output scale (0-255 = 0.0-1.0)
    pub max: u8,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_BRIGHTNESS,
        }
    }
}

/// Brightness filter
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    max: u8,
}

impl BrightnessFilter {
    pub const fn new(config: &BrightnessConfig) -> Self {
        Self { max: config.max }
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    pub fn set_max(&mut self, max: u8) {
        self.max = max;
    }

    /// Write `frame` scaled by the brightness cap into `output`
    pub fn apply(self, frame: &[Rgb], output: &mut [Rgb]) {
        for (out, pixel) in output.iter_mut().zip(frame) {
            *out = match self.max {
                255 => *pixel,
                0 => Rgb::default(),
                max => Rgb {
                    r: scale8(pixel.r, max),
                    g: scale8(pixel.g, max),
                    b: scale8(pixel.b, max),
                },
            };
        }
    }
}
