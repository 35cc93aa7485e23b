mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_hud_strip::color::{BLACK, RED, Rgb};
    use myrtio_hud_strip::effect::{Effect, Tick};
    use myrtio_hud_strip::{DeathEffect, DeathTimings, GameState};

    const LEDS: usize = 144;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn render(elapsed: f32) -> [Rgb; LEDS] {
        let death = DeathEffect::default();
        let mut leds = [Rgb::new(9, 9, 9); LEDS];
        death.render_at(elapsed, &mut leds);
        leds
    }

    #[test]
    fn test_default_timeline() {
        assert_eq!(DeathTimings::DEFAULT.total(), Duration::from_millis(3500));
        assert_eq!(DeathEffect::default().total_secs(), 3.5);
    }

    #[test]
    fn test_blink_phase() {
        for (elapsed, expected) in [
            (0.0, RED),
            (0.1, RED),
            (0.3, BLACK),
            (0.6, RED),
            (0.8, BLACK),
            (1.1, RED),
            (1.4, BLACK),
        ] {
            assert_eq!(render(elapsed), [expected; LEDS], "at {elapsed}s");
        }
    }

    #[test]
    fn test_fade_starts_fully_red() {
        assert_eq!(render(1.5), [RED; LEDS]);
    }

    #[test]
    fn test_fade_collapses_from_both_edges() {
        // 1s into the fade: 0.5^0.4 * 72 = 54.6
        let leds = render(2.5);
        assert!(leds[..54].iter().all(|led| *led == BLACK));
        assert!(leds[54..90].iter().all(|led| *led == RED));
        assert!(leds[90..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_fade_is_symmetric() {
        for elapsed in [1.6, 2.0, 2.7, 3.2, 3.49] {
            let leds = render(elapsed);
            for i in 0..LEDS / 2 {
                assert_eq!(leds[i], leds[LEDS - 1 - i], "at {elapsed}s, led {i}");
            }
        }
    }

    #[test]
    fn test_fade_on_odd_strip_keeps_center() {
        let death = DeathEffect::default();
        let mut leds = [Rgb::default(); 7];
        death.render_at(3.49, &mut leds);
        assert_eq!(leds, [BLACK, BLACK, RED, RED, RED, BLACK, BLACK]);
    }

    #[test]
    fn test_activate_is_not_reentrant() {
        let mut death = DeathEffect::default();
        assert!(!death.is_active());

        assert!(death.activate(at(0)));
        assert!(!death.activate(at(2000)));
        assert_eq!(death.started_at(), Some(at(0)));
    }

    #[test]
    fn test_completion_requests_health_redraw() {
        let mut death = DeathEffect::default();
        let mut game = GameState::new(0);
        let mut leds = [Rgb::default(); LEDS];
        game.take_changed();
        death.activate(at(1000));

        assert_eq!(death.tick(at(1100), &mut game, &mut leds), Tick::Rendered);
        assert_eq!(leds, [RED; LEDS]);
        assert!(!game.is_changed());

        assert_eq!(death.tick(at(4500), &mut game, &mut leds), Tick::Pass);
        assert!(!death.is_active());
        assert!(game.is_changed());
    }

    #[test]
    fn test_custom_timings() {
        let timings = DeathTimings {
            blink_phase: Duration::from_millis(0),
            fade_phase: Duration::from_millis(1000),
            ..DeathTimings::DEFAULT
        };
        let mut death = DeathEffect::new(timings);
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 10];
        death.activate(at(0));

        assert_eq!(death.tick(at(0), &mut game, &mut leds), Tick::Rendered);
        assert_eq!(leds, [RED; 10]);
        assert_eq!(death.tick(at(1000), &mut game, &mut leds), Tick::Pass);
    }
}
