//! Per-session statistics.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    /// Best score since the process started.  Never reset.
    pub high_score: u32,
    pub level: u32,
    pub game_active: bool,
    /// Only meaningful while `game_active`.
    pub game_paused: bool,
}

impl GameStats {
    /// Fresh stats for a process that is waiting for its first game.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            high_score: 0,
            level: 1,
            game_active: false,
            game_paused: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Per-game reset; leaves the high score and the active/paused flags alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Add points and lift the high score if it was beaten.  Returns true
    /// when a new high score was set.
    pub fn add_score(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// The simulation step runs only in this state.
    pub fn is_running(&self) -> bool {
        self.game_active && !self.game_paused
    }
}
