mod tests {
    use embassy_time::Instant;
    use myrtio_hud_strip::color::Rgb;
    use myrtio_hud_strip::{EffectId, EffectSet, GameState, arbitrate};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_effect_id_priority_order() {
        assert_eq!(
            EffectId::PRIORITY,
            [
                EffectId::Startup,
                EffectId::Death,
                EffectId::Flash,
                EffectId::HealthBar
            ]
        );
        assert!(EffectId::PRIORITY.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_effect_id_as_str() {
        assert_eq!(EffectId::Death.as_str(), "death");
        assert_eq!(EffectId::HealthBar.as_str(), "health_bar");
    }

    #[test]
    fn test_startup_blocks_everything() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 20];
        effects.trigger_flash(5.0, at(0));
        effects.start_death(at(0));

        assert_eq!(
            arbitrate(&mut effects, &mut game, at(100), &mut leds),
            Some(EffectId::Startup)
        );
        // Lower priority effects were not ticked
        assert!(game.is_changed());
    }

    #[test]
    fn test_death_beats_health_bar() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 20];
        effects.exit_startup(&mut game);
        effects.start_death(at(0));

        assert_eq!(
            arbitrate(&mut effects, &mut game, at(100), &mut leds),
            Some(EffectId::Death)
        );
        assert!(game.is_changed());
    }

    #[test]
    fn test_flash_beats_health_bar() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 20];
        effects.exit_startup(&mut game);
        effects.trigger_flash(1.0, at(0));

        assert_eq!(
            arbitrate(&mut effects, &mut game, at(100), &mut leds),
            Some(EffectId::Flash)
        );
        assert!(game.is_changed());
    }

    #[test]
    fn test_finished_flash_holds_its_last_tick() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 20];
        effects.exit_startup(&mut game);
        effects.trigger_flash(1.0, at(0));

        assert_eq!(arbitrate(&mut effects, &mut game, at(1000), &mut leds), None);
        assert!(game.is_changed());
        assert_eq!(
            arbitrate(&mut effects, &mut game, at(1010), &mut leds),
            Some(EffectId::HealthBar)
        );
    }

    #[test]
    fn test_finished_death_hands_over_in_same_tick() {
        let mut effects = EffectSet::default();
        let mut game = GameState::new(0);
        let mut leds = [Rgb::new(255, 0, 0); 20];
        effects.exit_startup(&mut game);
        game.take_changed();
        effects.start_death(at(0));

        assert_eq!(
            arbitrate(&mut effects, &mut game, at(3600), &mut leds),
            Some(EffectId::HealthBar)
        );
        assert!(!effects.death.is_active());
        assert_eq!(leds, [Rgb::default(); 20]);
    }

    #[test]
    fn test_idle_tick_renders_nothing() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        let mut leds = [Rgb::default(); 20];
        effects.exit_startup(&mut game);

        assert_eq!(
            arbitrate(&mut effects, &mut game, at(0), &mut leds),
            Some(EffectId::HealthBar)
        );
        assert_eq!(arbitrate(&mut effects, &mut game, at(10), &mut leds), None);
        assert_eq!(arbitrate(&mut effects, &mut game, at(20), &mut leds), None);
    }

    #[test]
    fn test_is_active_reports_claims() {
        let mut effects = EffectSet::default();
        let mut game = GameState::default();
        assert!(effects.is_active(EffectId::Startup, &game));

        effects.exit_startup(&mut game);
        effects.trigger_flash(1.0, at(0));
        assert!(!effects.is_active(EffectId::Startup, &game));
        assert!(effects.is_active(EffectId::Flash, &game));
        assert!(effects.is_active(EffectId::HealthBar, &game));
        assert!(!effects.is_active(EffectId::Death, &game));
    }
}
