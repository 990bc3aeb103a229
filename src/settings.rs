//! Game configuration.
//!
//! Fixed values (screen, sprite sizes, caps, scaling factors) are plain
//! fields.  Everything that escalates per level lives in a `Tuning`: `base`
//! holds the values a new game starts from, `dynamic` is the session copy
//! that `increase_speed` scales.

use std::time::Duration;

use crate::error::ConfigError;
use crate::fleet::{compute_columns, compute_rows};

pub type Rgb = (u8, u8, u8);

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 1200;
pub const SCREEN_HEIGHT: i32 = 800;
pub const BG_COLOR: Rgb = (230, 230, 230);

pub const SHIP_WIDTH: i32 = 48;
pub const SHIP_HEIGHT: i32 = 48;
pub const ALIEN_WIDTH: i32 = 24;
pub const ALIEN_HEIGHT: i32 = 24;

pub const SHIP_SPEED: f32 = 1.5;
pub const SHIP_LIMIT: u32 = 3;

pub const BULLET_SPEED: f32 = 3.0;
pub const BULLET_WIDTH: i32 = 3;
pub const BULLET_HEIGHT: i32 = 15;
pub const BULLET_COLOR: Rgb = (60, 60, 60);
pub const BULLETS_ALLOWED: usize = 3;

pub const ALIEN_SPEED: f32 = 1.0;
pub const FLEET_DROP_SPEED: f32 = 10.0;
pub const ALIEN_POINTS: u32 = 50;

pub const SPEEDUP_SCALE: f32 = 1.1;
pub const SCORE_SCALE: f32 = 1.5;

pub const LIFE_LOST_PAUSE: Duration = Duration::from_millis(500);

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 50;

/// Largest accepted screen or sprite side, in pixels.
pub const MAX_DIMENSION: i32 = 10_000;

// ── Fleet direction ──────────────────────────────────────────────────────────

/// Horizontal heading of the whole fleet.  Two variants only, so the
/// "direction is always ±1" rule cannot be broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

// ── Tuning ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    pub alien_points: u32,
    pub fleet_direction: FleetDirection,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            bullet_speed: BULLET_SPEED,
            alien_speed: ALIEN_SPEED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            alien_points: ALIEN_POINTS,
            fleet_direction: FleetDirection::Right,
        }
    }
}

// ── Settings ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,

    pub alien_width: i32,
    pub alien_height: i32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    pub speedup_scale: f32,
    pub score_scale: f32,

    /// How long the simulation stays frozen after a life is lost.
    pub life_lost_pause: Duration,

    pub button_width: i32,
    pub button_height: i32,

    pub base: Tuning,
    pub dynamic: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bg_color: BG_COLOR,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_limit: SHIP_LIMIT,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_color: BULLET_COLOR,
            bullets_allowed: BULLETS_ALLOWED,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            life_lost_pause: LIFE_LOST_PAUSE,
            button_width: BUTTON_WIDTH,
            button_height: BUTTON_HEIGHT,
            base: Tuning::default(),
            dynamic: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every level-scaled value back to its base.  Called at the start
    /// of each new game.
    pub fn reset_dynamic(&mut self) {
        self.dynamic = self.base;
    }

    /// Level-up escalation: speeds grow by `speedup_scale`, points by
    /// `score_scale` rounded to the nearest integer (halves round up).
    pub fn increase_speed(&mut self) {
        let scale = self.speedup_scale;
        let d = &mut self.dynamic;
        d.ship_speed *= scale;
        d.bullet_speed *= scale;
        d.alien_speed *= scale;
        d.fleet_drop_speed *= scale;
        d.alien_points = (d.alien_points as f64 * self.score_scale as f64).round() as u32;
    }

    /// Reject configurations that would produce an unplayable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::NonPositiveScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let sprites = [
            ("ship", self.ship_width, self.ship_height),
            ("alien", self.alien_width, self.alien_height),
            ("bullet", self.bullet_width, self.bullet_height),
        ];
        for (name, width, height) in sprites {
            if width <= 0 || height <= 0 {
                return Err(ConfigError::NonPositiveSprite { name, width, height });
            }
        }

        let sized = [("screen", self.screen_width, self.screen_height)]
            .into_iter()
            .chain(sprites);
        for (name, width, height) in sized {
            if width > MAX_DIMENSION || height > MAX_DIMENSION {
                return Err(ConfigError::TooLarge {
                    name,
                    width,
                    height,
                    max: MAX_DIMENSION,
                });
            }
        }

        let speeds = [
            ("ship_speed", self.base.ship_speed),
            ("bullet_speed", self.base.bullet_speed),
            ("alien_speed", self.base.alien_speed),
            ("fleet_drop_speed", self.base.fleet_drop_speed),
        ];
        for (name, value) in speeds {
            // `!(x > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveSpeed { name, value });
            }
        }

        let scales = [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ];
        for (name, value) in scales {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveScale { name, value });
            }
        }

        if self.bullets_allowed == 0 {
            return Err(ConfigError::NoBulletsAllowed);
        }
        if self.ship_limit == 0 {
            return Err(ConfigError::NoLives);
        }

        let columns = compute_columns(self.screen_width, self.alien_width);
        let rows = compute_rows(self.screen_height, self.ship_height, self.alien_height);
        if rows < 1 || columns < 1 {
            return Err(ConfigError::EmptyFleet { rows, columns });
        }

        Ok(())
    }
}
