use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use alien_invasion::audio::Jukebox;
use alien_invasion::background::Starfield;
use alien_invasion::compute::{click_play, fire_bullet, init_state, start_game, tick};
use alien_invasion::config::Config;
use alien_invasion::display::{self, PLAYFIELD_TOP};
use alien_invasion::entities::{GameEvent, GameState};
use alien_invasion::input::{is_held, key_action, KeyAction, LEFT_KEYS, RIGHT_KEYS};
use alien_invasion::settings::Settings;
use alien_invasion::store::HighScoreStore;

/// Smallest terminal the fleet and HUD fit in.
const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 16;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: the terminal belongs to the game.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Everything the loop needs besides the game state itself.
struct Frontend<'a, W: Write> {
    out: &'a mut W,
    rx: &'a mpsc::Receiver<Event>,
    jukebox: Jukebox,
    store: HighScoreStore,
    sky: Starfield,
    frame_duration: Duration,
    mouse_captured: bool,
}

impl<W: Write> Frontend<'_, W> {
    /// Side effects of simulation events: sound, and eager high-score writes.
    fn dispatch(&mut self, events: Vec<GameEvent>) -> std::io::Result<()> {
        for event in events {
            if let GameEvent::NewHighScore { score, .. } = event {
                if let Err(e) = self.store.save(score) {
                    tracing::warn!("could not save high score {score}: {e}");
                }
            }
            self.jukebox.play(&mut *self.out, &event)?;
        }
        Ok(())
    }

    /// Mouse capture stands in for pointer visibility.
    fn sync_pointer(&mut self, state: &GameState) -> std::io::Result<()> {
        if state.pointer_visible == self.mouse_captured {
            return Ok(());
        }
        if state.pointer_visible {
            self.out.execute(EnableMouseCapture)?;
        } else {
            self.out.execute(DisableMouseCapture)?;
        }
        self.mouse_captured = state.pointer_visible;
        Ok(())
    }

    /// Runs until a quit key.
    ///
    /// Movement uses a `key_frame` map recording the frame of the last
    /// press/repeat event for every key; each frame the ship's intent flags
    /// are recomputed from the keys that are still "fresh".  Terminals with
    /// keyboard enhancement also send `Release`, which drops the key at once.
    /// Fire is edge-triggered: one bullet per press.
    fn run(&mut self, state: &mut GameState) -> anyhow::Result<()> {
        let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
        let mut frame: u64 = 0;

        loop {
            let frame_start = Instant::now();
            frame += 1;

            // ── Drain all pending input events (non-blocking) ─────────────────
            while let Ok(ev) = self.rx.try_recv() {
                match ev {
                    Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                        KeyEventKind::Press => {
                            match key_action(code, modifiers, state.game_active()) {
                                KeyAction::Quit => {
                                    tracing::info!("quit requested");
                                    return Ok(());
                                }
                                KeyAction::Fire => {
                                    fire_bullet(state);
                                }
                                KeyAction::Start => {
                                    let events = start_game(state);
                                    self.dispatch(events)?;
                                }
                                KeyAction::Steer => {}
                            }
                            key_frame.insert(code, frame);
                        }
                        KeyEventKind::Repeat => {
                            key_frame.insert(code, frame);
                        }
                        KeyEventKind::Release => {
                            key_frame.remove(&code);
                        }
                    },
                    Event::Mouse(MouseEvent {
                        kind: MouseEventKind::Down(MouseButton::Left),
                        column,
                        row,
                        ..
                    }) => {
                        let x = f32::from(column);
                        let y = f32::from(row) - f32::from(PLAYFIELD_TOP);
                        let events = click_play(state, x, y);
                        self.dispatch(events)?;
                    }
                    _ => {}
                }
            }

            state.ship.moving_left = is_held(&key_frame, &LEFT_KEYS, frame);
            state.ship.moving_right = is_held(&key_frame, &RIGHT_KEYS, frame);

            let events = tick(state, Instant::now());
            self.dispatch(events)?;
            self.sync_pointer(state)?;

            display::render(&mut *self.out, state, &self.sky)?;

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_duration {
                thread::sleep(self.frame_duration - elapsed);
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_path)?;
    config.log_summary();

    let (cols, rows) = terminal::size().context("reading terminal size")?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        bail!("terminal is {cols}x{rows}; Alien Invasion needs at least {MIN_COLS}x{MIN_ROWS}");
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, cols, rows);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!("exiting on error: {e:#}");
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    cols: u16,
    rows: u16,
) -> anyhow::Result<()> {
    // HUD row on top, hint row at the bottom.
    let field_rows = rows - 2;
    let settings = Settings::new(f32::from(cols), f32::from(field_rows));

    let store = HighScoreStore::new(&config.score_path);
    let high_score = store.load_or_default();
    let mut state = init_state(settings, high_score);

    let mut frontend = Frontend {
        out,
        rx,
        jukebox: Jukebox::new(config.muted),
        store,
        sky: Starfield::generate(cols, field_rows, &mut thread_rng()),
        frame_duration: config.frame_duration(),
        mouse_captured: true,
    };
    frontend.run(&mut state)
}
