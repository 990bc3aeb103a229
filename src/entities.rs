//! Game entity types.
//!
//! Each entity keeps its exact position as a float and derives an integer
//! bounding box from it after every move, the same way a sprite's rect
//! follows its float position.

use crate::settings::{Rgb, Settings};

// ── Bounding box ──────────────────────────────────────────────────────────────

/// Integer axis-aligned rectangle in screen pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_centerx(&mut self, cx: i32) {
        self.x = cx - self.width / 2;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// True when the interiors intersect.  Boxes that merely share an edge
    /// do not overlap, and an empty box never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Float-to-pixel sync.  Truncates toward zero like assigning a float to an
/// integer rect coordinate.
fn to_px(v: f32) -> i32 {
    v as i32
}

// ── Shared capability ─────────────────────────────────────────────────────────

/// Anything the engine moves and collides.
pub trait Entity {
    fn bounding_box(&self) -> Rect;

    /// Advance by one tick using the current dynamic speeds.
    fn advance(&mut self, settings: &Settings);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Exact horizontal centre.
    pub cx: f32,
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
    screen_width: i32,
}

impl Ship {
    /// A ship resting on the bottom edge, horizontally centred.
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.ship_width, settings.ship_height);
        rect.set_centerx(settings.screen_width / 2);
        rect.set_bottom(settings.screen_height);
        Self {
            cx: rect.centerx() as f32,
            rect,
            moving_left: false,
            moving_right: false,
            screen_width: settings.screen_width,
        }
    }

    pub fn set_movement(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.moving_left = active,
            Direction::Right => self.moving_right = active,
        }
    }

    pub fn recenter(&mut self) {
        self.cx = (self.screen_width / 2) as f32;
        self.rect.set_centerx(to_px(self.cx));
    }
}

impl Entity for Ship {
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    /// Edge checks happen before the move, so the box may come to rest on
    /// (or one step past) the edge, after which that direction stops.
    fn advance(&mut self, settings: &Settings) {
        let speed = settings.dynamic.ship_speed;
        if self.moving_right && self.rect.right() < self.screen_width {
            self.cx += speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.cx -= speed;
        }
        self.rect.set_centerx(to_px(self.cx));
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Exact vertical position of the top edge.
    pub y: f32,
    pub rect: Rect,
    pub color: Rgb,
}

impl Bullet {
    /// Spawn at the ship's top-centre.  The cap on live bullets is enforced
    /// by whoever owns the bullet collection.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_centerx(ship.rect.centerx());
        rect.set_top(ship.rect.top());
        Self {
            y: rect.y as f32,
            rect,
            color: settings.bullet_color,
        }
    }

    /// Fully above the top of the screen.
    pub fn is_offscreen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Entity for Bullet {
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self, settings: &Settings) {
        self.y -= settings.dynamic.bullet_speed;
        self.rect.y = to_px(self.y);
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: f32, y: f32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            rect: Rect::new(to_px(x), to_px(y), width, height),
        }
    }

    pub fn at_edge(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    /// Move straight down, used when the fleet bounces off an edge.
    pub fn drop_by(&mut self, dy: f32) {
        self.y += dy;
        self.rect.y = to_px(self.y);
    }
}

impl Entity for Alien {
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn advance(&mut self, settings: &Settings) {
        let d = &settings.dynamic;
        self.x += d.alien_speed * d.fleet_direction.sign();
        self.rect.x = to_px(self.x);
    }
}
