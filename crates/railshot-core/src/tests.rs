#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::{InputIntents, PlayerCommand};
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::state::GameStateSnapshot;
    use crate::types::{secs_to_ticks, Bounds2, Region, SimTime};

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.player.bounds, Bounds2::default());
        assert_eq!(config.player.bounds.max_x, 4.0);
        assert_eq!(config.player.bounds.min_y, -3.0);
        assert!((config.dt() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{
            "seed": 7,
            "weapon": { "reload_time": 0.25 },
            "target_field": { "count": 5, "origin": [1.0, 2.0, 3.0] }
        }"#;
        let config = SimConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.weapon.reload_time, 0.25);
        assert_eq!(config.target_field.count, 5);
        assert_eq!(config.target_field.origin, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.projectile, SimConfig::default().projectile);
        config.validate().unwrap();
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SimConfig::from_json_str("{ \"seed\": \"nope\" }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_reload_time() {
        let mut config = SimConfig::default();
        config.weapon.reload_time = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "weapon.reload_time",
                ..
            })
        ));

        config.weapon.reload_time = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_projectile_speed_is_accepted_and_never_expires() {
        let mut config = SimConfig::default();
        config.projectile.speed = 0.0;
        config.validate().unwrap();
        assert_eq!(config.projectile.ttl_secs(), None);
    }

    #[test]
    fn test_rejects_negative_or_nan_projectile_speed() {
        let mut config = SimConfig::default();
        config.projectile.speed = -5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));

        config.projectile.speed = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_range_and_tick_rate() {
        let mut config = SimConfig::default();
        config.projectile.range = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.tick_rate = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "tick_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_tick_rate_with_infinite_tick_length() {
        let mut config = SimConfig::default();
        config.tick_rate = 1e-320;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "1 / tick_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_bounds_and_outside_start() {
        let mut config = SimConfig::default();
        config.player.bounds.min_x = 5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { axis: "x", .. })
        ));

        let mut config = SimConfig::default();
        config.player.start_y = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_rail() {
        let mut config = SimConfig::default();
        config.rail.reset_distance = config.rail.start_point;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRailLoop { .. })
        ));

        let mut config = SimConfig::default();
        config.rail.start_point = 0.0;
        config.rail.reset_distance = 1.0;
        config.rail.speed = 120.0; // 2 units per tick at 60 Hz
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RailStepTooLong { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_field_size() {
        let mut config = SimConfig::default();
        config.target_field.size.y = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NotPositive {
            field: "weapon.reload_time",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "weapon.reload_time must be greater than zero, got 0"
        );
    }

    // ---- Types ----

    #[test]
    fn test_secs_to_ticks_snaps_to_boundaries() {
        assert_eq!(secs_to_ticks(0.5, 0.1), 5);
        assert_eq!(secs_to_ticks(2.0, 0.1), 20);
        assert_eq!(secs_to_ticks(1.0, 1.0 / 60.0), 60);
        // Partial ticks round up so the duration has fully elapsed.
        assert_eq!(secs_to_ticks(0.55, 0.1), 6);
        // Never zero.
        assert_eq!(secs_to_ticks(0.001, 0.1), 1);
    }

    #[test]
    fn test_region_corners_and_containment() {
        let region = Region::new(DVec3::new(0.0, 0.0, 10.0), DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(region.min(), DVec3::new(-1.0, -2.0, 7.0));
        assert_eq!(region.max(), DVec3::new(1.0, 2.0, 13.0));
        assert!(region.contains(DVec3::new(1.0, -2.0, 10.0)));
        assert!(!region.contains(DVec3::new(0.0, 0.0, 13.5)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..20 {
            time.advance(0.1);
        }
        assert_eq!(time.tick, 20);
        assert!((time.elapsed_secs - 2.0).abs() < 1e-12);
    }

    // ---- Serialization ----

    #[test]
    fn test_weapon_state_serde() {
        let state = WeaponState::Cooldown { remaining_ticks: 3 };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"state":"Cooldown","remaining_ticks":3}"#);
        let back: WeaponState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_player_command_serde() {
        let json = r#"{"type":"RepopulateTargets"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, PlayerCommand::RepopulateTargets));
    }

    #[test]
    fn test_fire_intent_helper() {
        let intents = InputIntents::fire();
        assert!(intents.fire);
        assert!(!intents.move_left && !intents.move_right);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.player.is_none());
        assert!(back.events.is_empty());
    }
}
