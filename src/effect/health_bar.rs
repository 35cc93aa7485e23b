//! Health bar
//!
//! Lights the leading share of the strip in the health ramp color. The bar
//! only redraws when the game state asks for it, so an idle strip is not
//! rewritten every tick.

use embassy_time::Instant;

use super::{Effect, GameState, Tick};
use crate::color::{BLACK, Rgb, fill_solid, health_color};

/// Health bar, derived entirely from [`GameState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthBarEffect;

impl HealthBarEffect {
    /// Draw the bar for the current health, whatever the redraw flag says
    pub fn render(game: &GameState, leds: &mut [Rgb]) {
        let lit = game.lit_count(leds.len());
        let color = health_color(game.health_fraction());
        let (bar, rest) = leds.split_at_mut(lit);
        fill_solid(bar, color);
        fill_solid(rest, BLACK);
    }
}

impl Effect for HealthBarEffect {
    fn tick(&mut self, _now: Instant, game: &mut GameState, leds: &mut [Rgb]) -> Tick {
        if !game.take_changed() {
            return Tick::Pass;
        }
        Self::render(game, leds);
        Tick::Rendered
    }
}
