mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::filter::EnvFilter;

use alien_invasion::{Control, Game, InputEvent, Key, Settings};
use display::Viewport;

/// A key counts as "held" if its last press/repeat event arrived within this
/// window.  Only used on terminals that never report key releases: the OS
/// key-repeat keeps refreshing it while the key is down.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Parser, Debug)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down the descending alien fleet")]
struct Args {
    /// World width in pixels
    #[arg(long, default_value_t = alien_invasion::settings::SCREEN_WIDTH)]
    width: i32,

    /// World height in pixels
    #[arg(long, default_value_t = alien_invasion::settings::SCREEN_HEIGHT)]
    height: i32,

    /// Ships per game
    #[arg(long, default_value_t = alien_invasion::settings::SHIP_LIMIT)]
    lives: u32,

    /// Bullets allowed on screen at once
    #[arg(long, default_value_t = alien_invasion::settings::BULLETS_ALLOWED)]
    bullets: usize,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            screen_width: self.width,
            screen_height: self.height,
            ship_limit: self.lives,
            bullets_allowed: self.bullets,
            ..Settings::default()
        }
    }

    fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// The terminal is in raw mode while playing, so logs go to a file or
/// nowhere.
fn init_tracing(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

// ── Input mapping ─────────────────────────────────────────────────────────────

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Enter => Some(Key::Play),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Turns raw terminal events into game input.  Remembers when each movement
/// key was last seen so releases can be synthesised on classic terminals.
struct InputTranslator {
    reports_release: bool,
    held: HashMap<Key, Instant>,
}

impl InputTranslator {
    fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: HashMap::new(),
        }
    }

    fn translate(&mut self, ev: Event, vp: &Viewport, now: Instant) -> Option<InputEvent> {
        match ev {
            Event::Key(KeyEvent { code, modifiers, .. })
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(InputEvent::Quit)
            }
            Event::Key(KeyEvent { code, kind, .. }) => {
                let key = map_key(code)?;
                match kind {
                    KeyEventKind::Press => {
                        let repeat = self.held.insert(key, now).is_some();
                        // Classic terminals report auto-repeat as fresh presses;
                        // only the first one should fire or toggle.
                        if repeat && !self.reports_release && !is_movement(key) {
                            return None;
                        }
                        Some(InputEvent::KeyDown(key))
                    }
                    KeyEventKind::Repeat => {
                        self.held.insert(key, now);
                        None
                    }
                    KeyEventKind::Release => {
                        self.held.remove(&key);
                        Some(InputEvent::KeyUp(key))
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = vp.to_world(column, row);
                Some(InputEvent::Click { x, y })
            }
            _ => None,
        }
    }

    /// Keys whose repeat stream has gone quiet, released on this frame.
    fn expired(&mut self, now: Instant) -> Vec<InputEvent> {
        if self.reports_release {
            return Vec::new();
        }
        let stale: Vec<Key> = self
            .held
            .iter()
            .filter(|&(_, &seen)| now.duration_since(seen) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        stale
            .into_iter()
            .map(|key| {
                self.held.remove(&key);
                InputEvent::KeyUp(key)
            })
            .collect()
    }
}

fn is_movement(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One iteration per frame: drain input (quit is honoured even during a
/// life-lost pause), advance the simulation, draw.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
    frame: Duration,
) -> Result<()> {
    let mut input = InputTranslator::new(keyboard_enhanced);
    let (world_w, world_h) = {
        let s = &game.context().settings;
        (s.screen_width, s.screen_height)
    };

    loop {
        let frame_start = Instant::now();
        let (cols, rows) = terminal::size()?;
        let vp = Viewport::new(cols, rows, world_w, world_h);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if let Some(ev) = input.translate(ev, &vp, frame_start) {
                events.push(ev);
            }
        }
        events.extend(input.expired(frame_start));

        for ev in events {
            if game.handle_input(ev, frame_start) == Control::Quit {
                tracing::info!(
                    score = game.stats().score,
                    high_score = game.stats().high_score,
                    "quit"
                );
                return Ok(());
            }
        }

        game.tick(frame_start);

        display::render(out, &game.view(frame_start), &vp)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_ref())?;

    // Bad configuration is reported before the terminal is touched.
    let mut game = Game::new(args.settings()).context("invalid game configuration")?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events only where the terminal answers the
    // capability query.  Pushing the flags succeeds on any Unix terminal,
    // so its result says nothing about support.  Others fall back to the
    // hold window.  The query reads from stdin, so it runs before the
    // input thread starts.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    tracing::debug!(keyboard_enhanced, "terminal ready");

    // Blocking event reads happen on their own thread so the loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, keyboard_enhanced, args.frame());

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
