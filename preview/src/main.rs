//! Desktop preview app for myrtio-hud-strip
//!
//! Renders the HUD strip in a window. Every control sends the same text
//! messages the game integration sends, through the same message channel.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_hud_strip::{
    BrightnessConfig, EffectId, Instant, MessageChannel, MessageSender, Renderer,
    RendererConfig, SendTextError,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 144;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Message channel size
const MESSAGE_QUEUE_SIZE: usize = 16;

/// Static channel between the UI and the renderer
static MESSAGES: MessageChannel<MESSAGE_QUEUE_SIZE> = MessageChannel::<MESSAGE_QUEUE_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("HUD Strip Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-hud-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    renderer: Renderer<'static, LED_COUNT, MESSAGE_QUEUE_SIZE>,
    sender: MessageSender<'static, MESSAGE_QUEUE_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether time is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Health slider value
    health: i32,
    /// Flash length in seconds
    flash_secs: f32,
    /// Output brightness cap
    brightness: u8,
    /// Free-form message input
    raw_message: String,
    /// Result of the last send
    last_error: Option<SendTextError>,
    /// LED pixel size for display
    led_size: f32,
}

/// Fresh renderer on the shared channel, back in startup mode
fn build_renderer(brightness: u8) -> Renderer<'static, LED_COUNT, MESSAGE_QUEUE_SIZE> {
    let config = RendererConfig {
        brightness: BrightnessConfig { max: brightness },
        ..RendererConfig::default()
    };
    Renderer::new(MESSAGES.receiver(), &config)
}

impl PreviewApp {
    fn new() -> Self {
        let renderer = build_renderer(255);

        Self {
            health: i32::from(renderer.game().health()),
            brightness: renderer.brightness(),
            renderer,
            sender: MESSAGES.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            flash_secs: 1.5,
            raw_message: String::new(),
            last_error: None,
            led_size: LED_SIZE,
        }
    }

    /// Rewind time and restart from the startup rainbow
    fn reset(&mut self) {
        MESSAGES.clear();
        self.renderer = build_renderer(self.brightness);
        self.health = i32::from(self.renderer.game().health());
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.last_error = None;
    }

    fn send(&mut self, text: &str) {
        self.last_error = self.sender.send_text(text).err();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        // The renderer only yields a frame when something changed; the
        // strip keeps showing the last presented one otherwise.
        let now = Instant::from_millis(self.t_ms);
        self.renderer.tick(now);
        let frame = self.renderer.output().to_vec();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui.button("⏮ Reset").clicked() {
                            self.reset();
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <GameControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Health:");
                        let old_health = self.health;
                        ui.add(egui::Slider::new(&mut self.health, 0..=100));
                        if self.health != old_health {
                            self.send(&format!("localPlayer:{}", self.health));
                        }
                        if ui.button("☠ Kill").clicked() {
                            self.health = 0;
                            self.send("localPlayer:0");
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Flash:");
                        ui.add(egui::Slider::new(&mut self.flash_secs, 0.1..=5.0).suffix("s"));
                        if ui.button("⚡ Flash").clicked() {
                            self.send(&format!("flash:{}", self.flash_secs));
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Message:");
                        ui.text_edit_singleline(&mut self.raw_message);
                        if ui.button("Send").clicked() {
                            let text = std::mem::take(&mut self.raw_message);
                            self.send(&text);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Brightness:");
                        let old_brightness = self.brightness;
                        ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                        if self.brightness != old_brightness {
                            self.renderer.set_brightness(self.brightness);
                        }
                    });
                });
                // </GameControls>
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let effect = self.renderer.active_effect().map_or("none", EffectId::as_str);
                ui.label(format!(
                    "Effect: {effect}   Health: {}",
                    self.renderer.game().health()
                ));
                if let Some(error) = self.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
