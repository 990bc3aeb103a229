//! The per-tick orchestrator.
//!
//! A `Game` owns the `SessionContext` plus the little bit of state that only
//! matters between ticks: the deadline of a life-lost pause.  Input arrives
//! as `InputEvent`s; `tick` advances the simulation; `view` hands a borrowed
//! snapshot to whatever draws the frame.

use std::time::Instant;

use crate::compute::{
    advance_bullets, check_aliens_reached_bottom, check_fleet_cleared, fire_bullet,
    purge_offscreen_bullets, resolve_bullet_alien, resolve_ship_alien, ShipHit,
};
use crate::entities::{Alien, Bullet, Direction, Entity, Rect, Ship};
use crate::error::ConfigError;
use crate::fleet::{advance_fleet, check_fleet_edges};
use crate::session::SessionContext;
use crate::settings::Settings;
use crate::stats::GameStats;

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Pause,
    /// Starts a new game when none is running.
    Play,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click in screen coordinates.
    Click { x: i32, y: i32 },
    /// Window closed / interrupt.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

// ── Phase ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Paused,
    /// A ship was just lost; the simulation is frozen until the deadline.
    LifeLost,
    /// No game running: before the first one, or after the last ship.
    GameOver,
}

/// What the renderer gets once per tick.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub settings: &'a Settings,
    pub ship: &'a Ship,
    pub bullets: &'a [Bullet],
    pub aliens: &'a [Alien],
    pub stats: &'a GameStats,
    pub phase: Phase,
    pub play_button: Rect,
}

// ── Game ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Game {
    ctx: SessionContext,
    /// Set while recovering from a lost life.
    resume_at: Option<Instant>,
    play_button: Rect,
}

impl Game {
    /// Validate the configuration and lay out the opening board.  The game
    /// starts inactive, waiting for Play.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let ctx = SessionContext::new(settings)?;
        let s = &ctx.settings;
        let mut play_button = Rect::new(0, 0, s.button_width, s.button_height);
        play_button.set_center(s.screen_width / 2, s.screen_height / 2);
        tracing::debug!(
            width = s.screen_width,
            height = s.screen_height,
            aliens = ctx.aliens.len(),
            "game initialised"
        );
        Ok(Self {
            ctx,
            resume_at: None,
            play_button,
        })
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Direct access for callers that stage a particular board.
    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.ctx
    }

    pub fn stats(&self) -> &GameStats {
        &self.ctx.stats
    }

    pub fn play_button(&self) -> Rect {
        self.play_button
    }

    pub fn phase(&self, now: Instant) -> Phase {
        let stats = &self.ctx.stats;
        if !stats.game_active {
            Phase::GameOver
        } else if self.resume_at.is_some_and(|t| now < t) {
            Phase::LifeLost
        } else if stats.game_paused {
            Phase::Paused
        } else {
            Phase::Active
        }
    }

    /// True when the next `tick` would move things.
    pub fn is_simulating(&self, now: Instant) -> bool {
        self.phase(now) == Phase::Active
    }

    // ── Input handling ────────────────────────────────────────────────────────

    /// Apply one input event.  Never blocks, including during a life-lost
    /// pause, so quit stays responsive.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> Control {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Control::Quit,
            InputEvent::KeyDown(key) => self.key_down(key, now),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::Click { x, y } => {
                if self.play_button.contains_point(x, y) {
                    self.start_new_game();
                }
            }
        }
        Control::Continue
    }

    fn key_down(&mut self, key: Key, now: Instant) {
        match key {
            Key::Left => self.ctx.ship.set_movement(Direction::Left, true),
            Key::Right => self.ctx.ship.set_movement(Direction::Right, true),
            Key::Fire => {
                if self.is_simulating(now) {
                    fire_bullet(&mut self.ctx);
                }
            }
            Key::Pause => self.toggle_pause(),
            Key::Play => {
                self.start_new_game();
            }
            // Quit is answered by handle_input
            _ => {}
        }
    }

    fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.ctx.ship.set_movement(Direction::Left, false),
            Key::Right => self.ctx.ship.set_movement(Direction::Right, false),
            _ => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        let stats = &mut self.ctx.stats;
        if stats.game_active {
            stats.game_paused = !stats.game_paused;
            tracing::debug!(paused = stats.game_paused, "pause toggled");
        }
    }

    /// Start over: stats, board, ship and speeds all back to their initial
    /// values.  Does nothing while a game is already running; returns whether
    /// a game was started.
    pub fn start_new_game(&mut self) -> bool {
        if self.ctx.stats.game_active {
            return false;
        }
        let ctx = &mut self.ctx;
        ctx.stats.reset_stats(&ctx.settings);
        ctx.stats.game_active = true;
        ctx.stats.game_paused = false;
        ctx.reset_board();
        ctx.settings.reset_dynamic();
        ctx.ship.moving_left = false;
        ctx.ship.moving_right = false;
        self.resume_at = None;
        tracing::info!(ships = ctx.stats.ships_left, "new game");
        true
    }

    // ── Simulation ────────────────────────────────────────────────────────────

    /// One simulation step.  Does nothing unless a game is active, unpaused
    /// and past any life-lost pause.
    pub fn tick(&mut self, now: Instant) {
        match self.resume_at {
            Some(deadline) if now < deadline => return,
            Some(_) => {
                self.resume_at = None;
                tracing::debug!("resuming after life lost");
            }
            None => {}
        }
        if !self.ctx.stats.is_running() {
            return;
        }

        self.ctx.ship.advance(&self.ctx.settings);
        self.update_bullets();
        if let Some(hit) = self.update_aliens() {
            self.on_ship_hit(hit, now);
        }
    }

    fn update_bullets(&mut self) {
        let ctx = &mut self.ctx;
        advance_bullets(ctx);
        purge_offscreen_bullets(ctx);
        resolve_bullet_alien(ctx);
        check_fleet_cleared(ctx);
    }

    /// Move the fleet and look for anything that costs a ship.  Stops at the
    /// first hit so one tick never costs two ships.
    fn update_aliens(&mut self) -> Option<ShipHit> {
        let ctx = &mut self.ctx;
        check_fleet_edges(&mut ctx.settings, &mut ctx.aliens);
        advance_fleet(&ctx.settings, &mut ctx.aliens);
        resolve_ship_alien(ctx).or_else(|| check_aliens_reached_bottom(ctx))
    }

    fn on_ship_hit(&mut self, hit: ShipHit, now: Instant) {
        if hit == ShipHit::LifeLost {
            self.resume_at = Some(now + self.ctx.settings.life_lost_pause);
        }
    }

    // ── Rendering hand-off ────────────────────────────────────────────────────

    pub fn view(&self, now: Instant) -> View<'_> {
        View {
            settings: &self.ctx.settings,
            ship: &self.ctx.ship,
            bullets: &self.ctx.bullets,
            aliens: &self.ctx.aliens,
            stats: &self.ctx.stats,
            phase: self.phase(now),
            play_button: self.play_button,
        }
    }
}
