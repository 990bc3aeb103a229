//! Fleet layout and fleet-wide movement.
//!
//! Aliens sit on a grid with one empty alien-width between columns and one
//! empty alien-height between rows.  A margin of one alien is left on the
//! left and top, and the bottom keeps room for the ship plus two rows.

use crate::entities::{Alien, Entity};
use crate::settings::Settings;

/// Columns that fit across the screen.  Floor division, so a partial
/// column is dropped (and a too-narrow screen gives zero or less).
pub fn compute_columns(screen_width: i32, alien_width: i32) -> i32 {
    let space_x = screen_width - 2 * alien_width;
    space_x.div_euclid(2 * alien_width)
}

pub fn compute_rows(screen_height: i32, ship_height: i32, alien_height: i32) -> i32 {
    let space_y = screen_height - 3 * alien_height - ship_height;
    space_y.div_euclid(2 * alien_height)
}

/// Top-left corner of the alien at `(row, col)`.
pub fn place(row: i32, col: i32, alien_width: i32, alien_height: i32) -> (f32, f32) {
    let x = alien_width * (1 + 2 * col);
    let y = alien_height * (1 + 2 * row);
    (x as f32, y as f32)
}

/// Fill `aliens` with a fresh `rows × columns` grid.  Any aliens already in
/// the collection are dropped first.
pub fn build_fleet(settings: &Settings, aliens: &mut Vec<Alien>) {
    let columns = compute_columns(settings.screen_width, settings.alien_width).max(0);
    let rows = compute_rows(
        settings.screen_height,
        settings.ship_height,
        settings.alien_height,
    )
    .max(0);

    aliens.clear();
    aliens.reserve(rows as usize * columns as usize);
    for row in 0..rows {
        for col in 0..columns {
            let (x, y) = place(row, col, settings.alien_width, settings.alien_height);
            aliens.push(Alien::new(x, y, settings.alien_width, settings.alien_height));
        }
    }
}

/// Reverse the fleet if any alien touches a side.  At most one reversal per
/// call, however many aliens are at the edge.  Returns whether it reversed.
pub fn check_fleet_edges(settings: &mut Settings, aliens: &mut [Alien]) -> bool {
    let screen_width = settings.screen_width;
    if aliens.iter().any(|a| a.at_edge(screen_width)) {
        reverse_fleet(settings, aliens);
        true
    } else {
        false
    }
}

/// Drop every alien by `fleet_drop_speed` and flip the heading.
pub fn reverse_fleet(settings: &mut Settings, aliens: &mut [Alien]) {
    let drop = settings.dynamic.fleet_drop_speed;
    for alien in aliens.iter_mut() {
        alien.drop_by(drop);
    }
    settings.dynamic.fleet_direction = settings.dynamic.fleet_direction.reverse();
}

pub fn advance_fleet(settings: &Settings, aliens: &mut [Alien]) {
    for alien in aliens.iter_mut() {
        alien.advance(settings);
    }
}
