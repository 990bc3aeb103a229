use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

fn settings() -> Settings {
    Settings::default()
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 40);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 60);
    assert_eq!(r.centerx(), 25);
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
    assert!(a.overlaps(&a));
    // Touching edges only
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    // Empty box
    assert!(!a.overlaps(&Rect::new(2, 2, 0, 5)));
}

#[test]
fn rect_contains_point_excludes_far_edges() {
    let r = Rect::new(0, 0, 10, 10);
    assert!(r.contains_point(0, 0));
    assert!(r.contains_point(9, 9));
    assert!(!r.contains_point(10, 5));
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_bottom_centre() {
    let s = settings();
    let ship = Ship::new(&s);
    assert_eq!(ship.rect.centerx(), 600);
    assert_eq!(ship.rect.bottom(), 800);
    assert_eq!(ship.cx, 600.0);
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn ship_moves_by_speed_while_flag_set() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.set_movement(Direction::Right, true);
    ship.advance(&s);
    assert_eq!(ship.cx, 601.5);
    assert_eq!(ship.rect.centerx(), 601);

    ship.set_movement(Direction::Right, false);
    ship.set_movement(Direction::Left, true);
    ship.advance(&s);
    ship.advance(&s);
    assert_eq!(ship.cx, 598.5);
}

#[test]
fn ship_still_without_intent() {
    let s = settings();
    let mut ship = Ship::new(&s);
    let before = ship.clone();
    ship.advance(&s);
    assert_eq!(ship, before);
}

#[test]
fn ship_never_leaves_screen_by_more_than_one_step() {
    let s = settings();
    let step = s.dynamic.ship_speed.ceil() as i32;

    let mut ship = Ship::new(&s);
    ship.set_movement(Direction::Right, true);
    for _ in 0..2000 {
        ship.advance(&s);
        assert!(ship.rect.right() <= s.screen_width + step);
    }
    // Pinned at the edge: further ticks do not move it
    let resting = ship.cx;
    ship.advance(&s);
    assert_eq!(ship.cx, resting);

    ship.set_movement(Direction::Right, false);
    ship.set_movement(Direction::Left, true);
    for _ in 0..2000 {
        ship.advance(&s);
        assert!(ship.rect.left() >= -step);
    }
}

#[test]
fn ship_recenter() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.cx = 100.0;
    ship.recenter();
    assert_eq!(ship.cx, 600.0);
    assert_eq!(ship.rect.centerx(), 600);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_spawns_at_ship_nose() {
    let s = settings();
    let ship = Ship::new(&s);
    let b = Bullet::new(&s, &ship);
    assert_eq!(b.rect.centerx(), ship.rect.centerx());
    assert_eq!(b.rect.top(), ship.rect.top());
    assert_eq!(b.y, ship.rect.top() as f32);
    assert_eq!(b.rect.width, s.bullet_width);
    assert_eq!(b.rect.height, s.bullet_height);
    assert_eq!(b.color, s.bullet_color);
}

#[test]
fn bullet_travels_up_without_drift() {
    let mut s = settings();
    s.dynamic.bullet_speed = 0.4;
    let ship = Ship::new(&s);
    let mut b = Bullet::new(&s, &ship);
    let start = b.y;
    for _ in 0..10 {
        b.advance(&s);
    }
    // 10 × 0.4 = 4 px; per-tick integer truncation would have lost it all
    assert!((start - b.y - 4.0).abs() < 1e-2);
    assert_eq!(b.rect.y, b.y as i32);
}

#[test]
fn bullet_offscreen_once_bottom_reaches_zero() {
    let s = settings();
    let ship = Ship::new(&s);
    let mut b = Bullet::new(&s, &ship);
    b.y = -(s.bullet_height as f32);
    b.rect.y = b.y as i32;
    assert!(b.is_offscreen());
    b.rect.y += 1;
    assert!(!b.is_offscreen());
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_moves_with_fleet_direction() {
    let mut s = settings();
    let mut a = Alien::new(100.0, 50.0, 24, 24);
    a.advance(&s);
    assert_eq!(a.x, 101.0);
    s.dynamic.fleet_direction = s.dynamic.fleet_direction.reverse();
    a.advance(&s);
    a.advance(&s);
    assert_eq!(a.x, 99.0);
    assert_eq!(a.rect.x, 99);
}

#[test]
fn alien_edge_detection() {
    assert!(Alien::new(0.0, 0.0, 24, 24).at_edge(1200));
    assert!(Alien::new(1176.0, 0.0, 24, 24).at_edge(1200));
    assert!(!Alien::new(1.0, 0.0, 24, 24).at_edge(1200));
    assert!(!Alien::new(1175.0, 0.0, 24, 24).at_edge(1200));
}

#[test]
fn alien_drop_keeps_fraction() {
    let mut a = Alien::new(24.0, 24.0, 24, 24);
    a.drop_by(10.5);
    a.drop_by(10.5);
    assert_eq!(a.y, 45.0);
    assert_eq!(a.rect.y, 45);
}
