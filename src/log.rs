//! Feature-gated event log.
//!
//! With `esp32-log` enabled every call prints a line over the ESP serial
//! console. Otherwise the arguments are type-checked and discarded.

#[cfg(feature = "esp32-log")]
macro_rules! hud_log {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! hud_log {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
