//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and a borrowed `View`.  No game
//! logic is performed; world pixels are scaled onto the terminal grid and
//! drawn with crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::entities::Rect;
use alien_invasion::settings::Rgb;
use alien_invasion::{Phase, View};

// ── Colour palette ────────────────────────────────────────────────────────────

// Drawn over the light `bg_color` backdrop, so all dark tones.
const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::DarkYellow;
const C_HUD_LEVEL: Color = Color::DarkCyan;
const C_HUD_LIVES: Color = Color::DarkRed;
const C_SHIP: Color = Color::Black;
const C_ALIEN: Color = Color::DarkGreen;
const C_HINT: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::DarkGreen;

// ── Screen mapping ────────────────────────────────────────────────────────────

/// Terminal area the world is squeezed into: everything inside the border.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_w: i32,
    world_h: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_w: i32, world_h: i32) -> Self {
        Self { cols, rows, world_w, world_h }
    }

    fn play_cols(&self) -> i32 {
        (self.cols as i32 - 2).max(1)
    }

    fn play_rows(&self) -> i32 {
        (self.rows as i32 - 4).max(1)
    }

    fn col(&self, x: i32) -> i32 {
        1 + scale(x, self.play_cols(), self.world_w)
    }

    fn row(&self, y: i32) -> i32 {
        2 + scale(y, self.play_rows(), self.world_h)
    }

    /// Terminal cell → world pixel at the cell's centre.  Used for clicks.
    pub fn to_world(&self, col: u16, row: u16) -> (i32, i32) {
        let cx = col as i32 - 1;
        let cy = row as i32 - 2;
        let x = scale(2 * cx + 1, self.world_w, 2 * self.play_cols());
        let y = scale(2 * cy + 1, self.world_h, 2 * self.play_rows());
        (x, y)
    }

    /// Cells covered by `rect`, clipped to the play area.  Always at least
    /// one cell wide and tall so small sprites stay visible.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col(rect.left());
        let c1 = self.col(rect.right()).max(c0 + 1);
        let r0 = self.row(rect.top());
        let r1 = self.row(rect.bottom()).max(r0 + 1);

        let min_c = 1;
        let max_c = 1 + self.play_cols();
        let min_r = 2;
        let max_r = 2 + self.play_rows();

        let (c0, c1) = (c0.max(min_c), c1.min(max_c));
        let (r0, r1) = (r0.max(min_r), r1.min(max_r));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, (c1 - c0) as u16, (r1 - r0) as u16))
    }
}

/// `v * num / den` without overflowing `i32` in the product.
fn scale(v: i32, num: i32, den: i32) -> i32 {
    let scaled = v as i64 * num as i64 / (den as i64).max(1);
    scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &View, vp: &Viewport) -> std::io::Result<()> {
    // Clearing fills with the current background colour
    out.queue(style::SetBackgroundColor(rgb(view.settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, vp)?;
    draw_hud(out, view, vp)?;

    for alien in view.aliens {
        fill_rect(out, vp, &alien.rect, C_ALIEN, '▒')?;
    }
    let bullet_color = rgb(view.settings.bullet_color);
    for bullet in view.bullets {
        fill_rect(out, vp, &bullet.rect, bullet_color, '║')?;
    }
    fill_rect(out, vp, &view.ship.rect, C_SHIP, '█')?;

    draw_controls_hint(out, vp)?;

    match view.phase {
        Phase::Active => {}
        Phase::Paused => draw_banner(out, vp, &["PAUSED", "P - Resume"], Color::DarkYellow)?,
        Phase::LifeLost => {
            let msg = format!("Ships left: {}", view.stats.ships_left);
            draw_banner(out, vp, &["SHIP DESTROYED", msg.as_str()], Color::DarkRed)?;
        }
        Phase::GameOver => draw_play_button(out, view, vp)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;
    let h = vp.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &View, vp: &Viewport) -> std::io::Result<()> {
    let stats = view.stats;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Hi:{:>7}",
        stats.score, stats.high_score
    )))?;

    let level_str = format!("[ LEVEL {} ]", stats.level);
    let lx = (vp.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let lives_str = format!("Ships:{}", "▲".repeat(stats.ships_left as usize));
    let rx = vp
        .cols
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = vp.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take(w as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Shoot   P : Pause   ENTER : Play   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    vp: &Viewport,
    lines: &[&str],
    color: Color,
) -> std::io::Result<()> {
    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    out.queue(style::SetForegroundColor(color))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

/// The clickable Play button, plus the final score once a game has ended.
fn draw_play_button<W: Write>(out: &mut W, view: &View, vp: &Viewport) -> std::io::Result<()> {
    let button = view.play_button;
    fill_rect(out, vp, &button, C_BUTTON, '█')?;

    if let Some((col, row, w, h)) = vp.cells(&button) {
        let label = "PLAY";
        let lc = col + (w / 2).saturating_sub(label.len() as u16 / 2);
        out.queue(cursor::MoveTo(lc, row + h / 2))?;
        out.queue(style::SetBackgroundColor(C_BUTTON))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(label))?;
        out.queue(style::SetBackgroundColor(rgb(view.settings.bg_color)))?;
    }

    let stats = view.stats;
    if stats.score > 0 || stats.high_score > 0 {
        let score_line = format!("Last Score: {:>7}", stats.score);
        let best_line = format!("Best Score: {:>7}", stats.high_score);
        let below = vp.row(button.bottom()).max(0) as u16 + 1;
        let cx = vp.cols / 2;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(score_line.chars().count() as u16 / 2),
            below,
        ))?;
        out.queue(Print(&score_line))?;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(best_line.chars().count() as u16 / 2),
            below + 1,
        ))?;
        out.queue(Print(&best_line))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alien_invasion::{Game, Settings};
    use std::time::Instant;

    fn frame(settings: Settings) -> String {
        let game = Game::new(settings).unwrap();
        let mut out = Vec::new();
        let vp = Viewport::new(80, 24, 1200, 800);
        render(&mut out, &game.view(Instant::now()), &vp).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_is_painted_with_background_colour() {
        let text = frame(Settings::default());
        let bg = text.find("48;2;230;230;230").unwrap();
        let clear = text.find("\x1b[2J").unwrap();
        assert!(bg < clear);

        let dark = frame(Settings {
            bg_color: (10, 20, 30),
            ..Settings::default()
        });
        assert!(dark.contains("48;2;10;20;30"));
        assert!(!dark.contains("48;2;230;230;230"));
    }

    #[test]
    fn huge_world_coordinates_do_not_overflow() {
        let vp = Viewport::new(u16::MAX, u16::MAX, 10_000, 10_000);
        assert_eq!(vp.col(10_000), 1 + vp.play_cols());
        let (x, y) = vp.to_world(u16::MAX - 1, u16::MAX - 3);
        assert!(x <= 10_000 && y <= 10_000);
    }
}
