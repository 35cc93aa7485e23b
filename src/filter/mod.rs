//! Output filters
//!
//! Post-processing applied between the logical frame and the hardware.
//! Effects never see filtered colors.

mod brightness;

pub use brightness::{BrightnessConfig, BrightnessFilter};
