use alien_invasion::settings::*;
use alien_invasion::ConfigError;

// ── defaults ──────────────────────────────────────────────────────────────────

#[test]
fn defaults_start_with_dynamic_equal_to_base() {
    let s = Settings::new();
    assert_eq!(s.dynamic, s.base);
    assert_eq!(s.dynamic.fleet_direction, FleetDirection::Right);
    assert_eq!(s.screen_width, 1200);
    assert_eq!(s.screen_height, 800);
    assert_eq!(s.bullets_allowed, 3);
    assert_eq!(s.ship_limit, 3);
}

#[test]
fn default_settings_are_valid() {
    assert_eq!(Settings::default().validate(), Ok(()));
}

// ── fleet direction ───────────────────────────────────────────────────────────

#[test]
fn fleet_direction_sign_is_unit() {
    assert_eq!(FleetDirection::Right.sign(), 1.0);
    assert_eq!(FleetDirection::Left.sign(), -1.0);
    assert_eq!(FleetDirection::Right.reverse(), FleetDirection::Left);
    assert_eq!(FleetDirection::Left.reverse().reverse(), FleetDirection::Left);
}

// ── increase_speed / reset_dynamic ────────────────────────────────────────────

#[test]
fn increase_speed_scales_every_speed() {
    let mut s = Settings::new();
    s.increase_speed();
    let d = s.dynamic;
    assert!((d.ship_speed - 1.5 * 1.1).abs() < 1e-5);
    assert!((d.bullet_speed - 3.0 * 1.1).abs() < 1e-5);
    assert!((d.alien_speed - 1.1).abs() < 1e-5);
    assert!((d.fleet_drop_speed - 11.0).abs() < 1e-4);
    assert_eq!(d.alien_points, 75);
}

#[test]
fn increase_speed_compounds_and_rounds_halves_up() {
    let mut s = Settings::new();
    s.increase_speed(); // 50 * 1.5 = 75
    s.increase_speed(); // 75 * 1.5 = 112.5 → 113
    assert_eq!(s.dynamic.alien_points, 113);
    s.increase_speed(); // 113 * 1.5 = 169.5 → 170
    assert_eq!(s.dynamic.alien_points, 170);
}

#[test]
fn increase_speed_leaves_base_alone() {
    let mut s = Settings::new();
    s.increase_speed();
    assert_eq!(s.base, Tuning::default());
}

#[test]
fn reset_dynamic_restores_base_and_direction() {
    let mut s = Settings::new();
    s.increase_speed();
    s.dynamic.fleet_direction = FleetDirection::Left;
    s.reset_dynamic();
    assert_eq!(s.dynamic, s.base);
    assert_eq!(s.dynamic.fleet_direction, FleetDirection::Right);
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_rejects_zero_screen() {
    let s = Settings {
        screen_width: 0,
        ..Settings::default()
    };
    assert_eq!(
        s.validate(),
        Err(ConfigError::NonPositiveScreen { width: 0, height: 800 })
    );
}

#[test]
fn validate_rejects_negative_height() {
    let s = Settings {
        screen_height: -10,
        ..Settings::default()
    };
    assert!(matches!(s.validate(), Err(ConfigError::NonPositiveScreen { .. })));
}

#[test]
fn validate_rejects_screen_too_small_for_fleet() {
    // 100 - 48 = 52 → 52 / 48 = 1 column, but rows: 100 - 72 - 48 < 0
    let s = Settings {
        screen_width: 100,
        screen_height: 100,
        ..Settings::default()
    };
    match s.validate() {
        Err(ConfigError::EmptyFleet { rows, columns }) => {
            assert!(rows < 1);
            assert_eq!(columns, 1);
        }
        other => panic!("expected EmptyFleet, got {other:?}"),
    }
}

#[test]
fn validate_rejects_zero_bullets_and_lives() {
    let s = Settings {
        bullets_allowed: 0,
        ..Settings::default()
    };
    assert_eq!(s.validate(), Err(ConfigError::NoBulletsAllowed));

    let s = Settings {
        ship_limit: 0,
        ..Settings::default()
    };
    assert_eq!(s.validate(), Err(ConfigError::NoLives));
}

#[test]
fn validate_rejects_bad_sprite_and_speed() {
    let s = Settings {
        alien_width: 0,
        ..Settings::default()
    };
    assert!(matches!(
        s.validate(),
        Err(ConfigError::NonPositiveSprite { name: "alien", .. })
    ));

    let mut s = Settings::default();
    s.base.alien_speed = -1.0;
    assert!(matches!(
        s.validate(),
        Err(ConfigError::NonPositiveSpeed { name: "alien_speed", .. })
    ));
}

#[test]
fn validate_rejects_oversized_screen_and_sprites() {
    let s = Settings {
        screen_width: i32::MAX,
        ..Settings::default()
    };
    assert!(matches!(
        s.validate(),
        Err(ConfigError::TooLarge { name: "screen", max: MAX_DIMENSION, .. })
    ));

    let s = Settings {
        ship_height: MAX_DIMENSION + 1,
        ..Settings::default()
    };
    assert!(matches!(
        s.validate(),
        Err(ConfigError::TooLarge { name: "ship", .. })
    ));

    let s = Settings {
        screen_width: MAX_DIMENSION,
        screen_height: MAX_DIMENSION,
        ..Settings::default()
    };
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn config_error_messages_are_readable() {
    let msg = ConfigError::EmptyFleet { rows: 0, columns: 3 }.to_string();
    assert!(msg.contains("0 rows"));
    assert!(msg.contains("3 columns"));
}
