//! Collision, scoring and the life/level transitions.
//!
//! Every function works on a borrowed `SessionContext`.  Removals are
//! collected during a scan and applied afterwards, so no collection is
//! modified while it is being iterated.

use crate::entities::{Bullet, Entity};
use crate::fleet::build_fleet;
use crate::session::SessionContext;

/// Result of the ship being struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipHit {
    /// Lives remain; the board was reset.
    LifeLost,
    /// That was the last ship; the game is no longer active.
    GameOver,
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// Fire from the ship's nose.  Silently refused (returns false) when the
/// cap on live bullets is reached.
pub fn fire_bullet(ctx: &mut SessionContext) -> bool {
    if ctx.bullets.len() >= ctx.settings.bullets_allowed {
        tracing::trace!(live = ctx.bullets.len(), "bullet cap reached");
        return false;
    }
    let bullet = Bullet::new(&ctx.settings, &ctx.ship);
    ctx.bullets.push(bullet);
    true
}

pub fn advance_bullets(ctx: &mut SessionContext) {
    for bullet in ctx.bullets.iter_mut() {
        bullet.advance(&ctx.settings);
    }
}

/// Drop bullets that have left through the top.  Returns how many went.
pub fn purge_offscreen_bullets(ctx: &mut SessionContext) -> usize {
    let before = ctx.bullets.len();
    ctx.bullets.retain(|b| !b.is_offscreen());
    before - ctx.bullets.len()
}

/// Destroy every bullet/alien pair that overlaps and score the aliens.
///
/// Bullets are scanned in order.  An alien belongs to the first bullet that
/// reaches it; a later bullet that only touches already-claimed aliens
/// keeps flying.  Returns the number of aliens destroyed.
pub fn resolve_bullet_alien(ctx: &mut SessionContext) -> u32 {
    let mut bullet_hit = vec![false; ctx.bullets.len()];
    let mut alien_hit = vec![false; ctx.aliens.len()];
    let mut destroyed = 0u32;

    for (bi, bullet) in ctx.bullets.iter().enumerate() {
        let bbox = bullet.bounding_box();
        for (ai, alien) in ctx.aliens.iter().enumerate() {
            if !alien_hit[ai] && bbox.overlaps(&alien.bounding_box()) {
                alien_hit[ai] = true;
                bullet_hit[bi] = true;
                destroyed += 1;
            }
        }
    }

    if destroyed == 0 {
        return 0;
    }

    let mut flags = bullet_hit.iter();
    ctx.bullets.retain(|_| !flags.next().copied().unwrap_or(false));
    let mut flags = alien_hit.iter();
    ctx.aliens.retain(|_| !flags.next().copied().unwrap_or(false));

    let points = ctx.settings.dynamic.alien_points.saturating_mul(destroyed);
    if ctx.stats.add_score(points) {
        tracing::debug!(high_score = ctx.stats.high_score, "new high score");
    }
    destroyed
}

// ── Level progression ────────────────────────────────────────────────────────

/// Level-up when the fleet is gone: clear bullets, speed up, bump the level
/// and lay out the next fleet.  Returns whether it happened.
pub fn check_fleet_cleared(ctx: &mut SessionContext) -> bool {
    if !ctx.aliens.is_empty() {
        return false;
    }
    ctx.bullets.clear();
    ctx.settings.increase_speed();
    ctx.stats.level += 1;
    build_fleet(&ctx.settings, &mut ctx.aliens);
    tracing::info!(
        level = ctx.stats.level,
        alien_points = ctx.settings.dynamic.alien_points,
        "fleet destroyed, level up"
    );
    true
}

// ── Ship damage ──────────────────────────────────────────────────────────────

/// Lose a ship.  With lives left the board is rebuilt; on the last ship the
/// game ends and the board is left exactly as it was.
pub fn ship_hit(ctx: &mut SessionContext) -> ShipHit {
    ctx.stats.ships_left = ctx.stats.ships_left.saturating_sub(1);

    if ctx.stats.ships_left > 0 {
        ctx.reset_board();
        tracing::info!(ships_left = ctx.stats.ships_left, "ship hit, life lost");
        ShipHit::LifeLost
    } else {
        ctx.stats.game_active = false;
        ctx.stats.game_paused = false;
        tracing::info!(
            score = ctx.stats.score,
            level = ctx.stats.level,
            high_score = ctx.stats.high_score,
            "game over"
        );
        ShipHit::GameOver
    }
}

/// Ship rammed by any alien.
pub fn resolve_ship_alien(ctx: &mut SessionContext) -> Option<ShipHit> {
    let ship_box = ctx.ship.bounding_box();
    if ctx.aliens.iter().any(|a| ship_box.overlaps(&a.bounding_box())) {
        Some(ship_hit(ctx))
    } else {
        None
    }
}

/// Any alien touching the bottom of the screen costs a ship too.
pub fn check_aliens_reached_bottom(ctx: &mut SessionContext) -> Option<ShipHit> {
    let bottom = ctx.settings.screen_height;
    if ctx.aliens.iter().any(|a| a.bounding_box().bottom() >= bottom) {
        Some(ship_hit(ctx))
    } else {
        None
    }
}
