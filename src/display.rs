/// Rendering layer: all terminal drawing lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Row 0 is the HUD, the playfield starts at
/// row 1 and the hint line sits just below it.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::background::Starfield;
use crate::compute::play_button_rect;
use crate::entities::{Alien, AlienFrame, Bullet, GameState, Rect};
use crate::scoreboard::Scoreboard;

/// Terminal row of playfield y = 0.
pub const PLAYFIELD_TOP: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_HUD: Color = Color::Grey;
const C_HUD_HIGH: Color = Color::Yellow;
const C_TITLE: Color = Color::Green;
const C_GAME_OVER: Color = Color::White;
const C_BUTTON_BG: Color = Color::DarkGreen;
const C_BUTTON_FG: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const SHIP_SPRITE: &str = "/A\\";
const ALIEN_SPRITE_A: &str = "<O>";
const ALIEN_SPRITE_B: &str = ">O<";
const BULLET_SPRITE: &str = "|";
const LIFE_ICON: &str = "A";

const TITLE: [&str; 3] = [
    "A L I E N",
    "I N V A S I O N",
    "defend the planet",
];
const HINT: &str = "<- -> : Move   SPACE : Fire   Q : Quit";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame, back to front.
pub fn render<W: Write>(out: &mut W, state: &GameState, sky: &Starfield) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(state.settings.background_color))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, state, sky)?;
    draw_ship(out, state)?;
    for bullet in &state.bullets {
        draw_bullet(out, state, bullet)?;
    }
    for alien in &state.aliens {
        draw_alien(out, state, alien)?;
    }
    draw_hud(out, state)?;

    if state.first_run() {
        draw_title(out, state)?;
    }
    if state.game_over() {
        draw_game_over(out, state)?;
    }
    if !state.game_active() {
        draw_play_button(out, state)?;
    }
    draw_controls_hint(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Terminal cell of a playfield rect's top-left corner, or `None` when the
/// rect lies outside the playfield.  A rect poking past the left edge is
/// pinned to column 0.
fn cell(state: &GameState, rect: &Rect) -> Option<(u16, u16)> {
    let (x, y) = (rect.x.floor(), rect.y.floor());
    if rect.right() <= 0.0 || y < 0.0 || x >= state.settings.screen_width || y >= state.settings.screen_height {
        return None;
    }
    Some((x.max(0.0) as u16, y as u16 + PLAYFIELD_TOP))
}

fn centered_col(state: &GameState, text: &str) -> u16 {
    let width = state.settings.screen_width as u16;
    (width / 2).saturating_sub(text.chars().count() as u16 / 2)
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(
    out: &mut W,
    state: &GameState,
    sky: &Starfield,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    let height = state.settings.screen_height as u16;
    for star in sky.stars.iter().filter(|s| s.y < height) {
        out.queue(cursor::MoveTo(star.x, star.y + PLAYFIELD_TOP))?;
        out.queue(Print(star.glyph))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    if let Some((col, row)) = cell(state, &state.ship.rect) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_SHIP))?;
        out.queue(Print(SHIP_SPRITE))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, state: &GameState, bullet: &Bullet) -> std::io::Result<()> {
    if let Some((col, row)) = cell(state, &bullet.rect) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(state.settings.bullet_color))?;
        out.queue(Print(BULLET_SPRITE))?;
    }
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, state: &GameState, alien: &Alien) -> std::io::Result<()> {
    if let Some((col, row)) = cell(state, &alien.rect) {
        let sprite = match alien.frame {
            AlienFrame::A => ALIEN_SPRITE_A,
            AlienFrame::B => ALIEN_SPRITE_B,
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_ALIEN))?;
        out.queue(Print(sprite))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let board = Scoreboard::prep(&state.stats);
    let width = state.settings.screen_width as u16;

    // Ships left and level, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(Print(LIFE_ICON.repeat(board.ships_left as usize)))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("  {}", board.level)))?;

    // High score, centre
    out.queue(cursor::MoveTo(centered_col(state, &board.high_score), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(&board.high_score))?;

    // Score, right
    let sx = width.saturating_sub(board.score.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&board.score))?;

    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let button = play_button_rect(&state.settings);
    let first_row = (button.y as u16 + PLAYFIELD_TOP).saturating_sub(TITLE.len() as u16 + 1);
    out.queue(style::SetForegroundColor(C_TITLE))?;
    for (i, line) in TITLE.iter().enumerate() {
        out.queue(cursor::MoveTo(centered_col(state, line), first_row + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let msg = "G A M E   O V E R";
    let button = play_button_rect(&state.settings);
    let row = (button.y as u16 + PLAYFIELD_TOP).saturating_sub(2);
    out.queue(cursor::MoveTo(centered_col(state, msg), row))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_play_button<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let rect = play_button_rect(&state.settings);
    let (col, top) = (rect.x as u16, rect.y as u16 + PLAYFIELD_TOP);
    let width = rect.w as usize;
    let label = format!("{:^width$}", "PLAY");

    out.queue(style::SetBackgroundColor(C_BUTTON_BG))?;
    out.queue(style::SetForegroundColor(C_BUTTON_FG))?;
    for i in 0..rect.h as u16 {
        out.queue(cursor::MoveTo(col, top + i))?;
        if i == rect.h as u16 / 2 {
            out.queue(Print(&label))?;
        } else {
            out.queue(Print(" ".repeat(width)))?;
        }
    }
    out.queue(style::SetBackgroundColor(state.settings.background_color))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let row = state.settings.screen_height as u16 + PLAYFIELD_TOP;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}
