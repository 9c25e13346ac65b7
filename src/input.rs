/// Keyboard mapping: which keys steer, fire, start and quit.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms at
/// 30 FPS) is always refreshed before expiry.
pub const HOLD_WINDOW: u64 = 4;

pub const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
pub const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
pub const FIRE_KEY: KeyCode = KeyCode::Char(' ');

/// What a key press asks the game loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Fire,
    /// Start (or restart) a game.
    Start,
    /// Nothing beyond recording the key for steering.
    Steer,
}

pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map one key press to an action.  `active` is whether a game is running
/// (including the ship-lost pause).
///
/// Quit keys always win.  While no game runs, any key other than fire or a
/// steering key starts one.
pub fn key_action(code: KeyCode, modifiers: KeyModifiers, active: bool) -> KeyAction {
    if is_quit(code, modifiers) {
        KeyAction::Quit
    } else if code == FIRE_KEY {
        KeyAction::Fire
    } else if !active && !LEFT_KEYS.contains(&code) && !RIGHT_KEYS.contains(&code) {
        KeyAction::Start
    } else {
        KeyAction::Steer
    }
}

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW` frames.
pub fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}
