//! The single per-process game context.

use crate::entities::{Alien, Bullet, Ship};
use crate::error::ConfigError;
use crate::fleet::build_fleet;
use crate::settings::Settings;
use crate::stats::GameStats;

/// Everything the simulation touches, owned in one place and lent out to
/// each update step.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
}

impl SessionContext {
    /// Validate `settings` and lay out the opening board.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut ctx = Self {
            stats: GameStats::new(&settings),
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            aliens: Vec::new(),
            settings,
        };
        ctx.settings.reset_dynamic();
        build_fleet(&ctx.settings, &mut ctx.aliens);
        Ok(ctx)
    }

    /// Clear both collections, lay out a new fleet and put the ship back in
    /// the middle.
    pub fn reset_board(&mut self) {
        self.bullets.clear();
        build_fleet(&self.settings, &mut self.aliens);
        self.ship.recenter();
    }
}
