/// Game logic.
///
/// Every operation takes the `GameState` by `&mut`, mutates it in place and
/// returns the `GameEvent`s it produced.  Time is injected as an `Instant`,
/// so callers (and tests) control when a life-loss pause ends.

use std::time::{Duration, Instant};

use crate::entities::{
    Alien, Bullet, GameEvent, GamePhase, GameState, Rect, Ship, ALIEN_HEIGHT, ALIEN_WIDTH,
    SHIP_HEIGHT,
};
use crate::settings::Settings;
use crate::stats::GameStats;

/// Freeze after losing a life.
pub const SHIP_LOST_PAUSE: Duration = Duration::from_millis(500);

pub const PLAY_BUTTON_WIDTH: f32 = 12.0;
pub const PLAY_BUTTON_HEIGHT: f32 = 3.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the session state: title screen, fleet already in place.
pub fn init_state(settings: Settings, high_score: u32) -> GameState {
    let stats = GameStats::new(&settings, high_score);
    let ship = Ship::new(&settings);
    let mut state = GameState {
        settings,
        stats,
        ship,
        bullets: Vec::new(),
        aliens: Vec::new(),
        phase: GamePhase::NotStarted,
        pointer_visible: true,
    };
    create_fleet(&mut state);
    state
}

/// The PLAY button, centred on the playfield.
pub fn play_button_rect(settings: &Settings) -> Rect {
    Rect::new(
        ((settings.screen_width - PLAY_BUTTON_WIDTH) / 2.0).floor(),
        ((settings.screen_height - PLAY_BUTTON_HEIGHT) / 2.0).floor(),
        PLAY_BUTTON_WIDTH,
        PLAY_BUTTON_HEIGHT,
    )
}

// ── Fleet ────────────────────────────────────────────────────────────────────

/// `(columns, rows)` of aliens that fit the playfield.
///
/// One alien width of margin on each side with a one-width gap between
/// columns; rows reserve three alien heights plus the ship at the bottom.
pub fn fleet_dimensions(
    settings: &Settings,
    alien_width: f32,
    alien_height: f32,
    ship_height: f32,
) -> (usize, usize) {
    let available_x = settings.screen_width - 2.0 * alien_width;
    let columns = (available_x / (2.0 * alien_width)).floor().max(0.0) as usize;

    let available_y = settings.screen_height - 3.0 * alien_height - ship_height;
    let rows = (available_y / (4.0 * alien_height)).floor().max(0.0) as usize;

    (columns, rows)
}

/// Replace the fleet with a fresh grid, row-major.
pub fn create_fleet(state: &mut GameState) {
    let (columns, rows) = fleet_dimensions(&state.settings, ALIEN_WIDTH, ALIEN_HEIGHT, SHIP_HEIGHT);
    state.aliens.clear();
    for row in 0..rows {
        for column in 0..columns {
            let x = ALIEN_WIDTH + 2.0 * ALIEN_WIDTH * column as f32;
            let y = ALIEN_HEIGHT + 2.0 * ALIEN_HEIGHT * row as f32;
            state.aliens.push(Alien::new(x, y));
        }
    }
}

/// Drop the fleet and reverse it if any alien is at an edge.  At most one
/// reaction per tick.
fn check_fleet_edges(state: &mut GameState) {
    let width = state.settings.screen_width;
    if state.aliens.iter().any(|a| a.check_edges(width)) {
        change_fleet_direction(state);
    }
}

fn change_fleet_direction(state: &mut GameState) {
    for alien in &mut state.aliens {
        alien.rect.y += state.settings.fleet_drop_speed;
    }
    state.settings.fleet_direction *= -1.0;
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Begin a new game from the title or game-over screen.
pub fn start_game(state: &mut GameState) -> Vec<GameEvent> {
    state.settings.reset_dynamic();
    state.stats.reset_stats(&state.settings);
    state.phase = GamePhase::Active;
    state.pointer_visible = false;

    state.bullets.clear();
    create_fleet(state);
    state.ship.center(&state.settings);

    tracing::info!(high_score = state.stats.high_score, "game started");
    vec![GameEvent::MusicStart]
}

/// Start a game if the click lands on the PLAY button while no game is running.
pub fn click_play(state: &mut GameState, x: f32, y: f32) -> Vec<GameEvent> {
    if state.game_active() || !play_button_rect(&state.settings).contains_point(x, y) {
        return Vec::new();
    }
    start_game(state)
}

/// Fire from the ship.  Returns `false` when the bullet cap is reached or
/// the simulation is not running.
pub fn fire_bullet(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Active || state.bullets.len() >= state.settings.bullets_allowed {
        return false;
    }
    state.bullets.push(Bullet::new(&state.ship, &state.settings));
    true
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
pub fn tick(state: &mut GameState, now: Instant) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => {}
        GamePhase::ShipLost { resume_at } => {
            if now >= resume_at {
                state.phase = GamePhase::Active;
            }
        }
        GamePhase::Active => {
            state.ship.update(&state.settings);
            update_bullets(state, &mut events);
            update_aliens(state, now, &mut events);
        }
    }
    events
}

fn update_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for bullet in &mut state.bullets {
        bullet.update(&state.settings);
    }
    state.bullets.retain(|b| b.rect.bottom() > 0.0);

    check_bullet_alien_collisions(state, events);
}

/// Index of the alien `bullet` hits: of all overlapping aliens, the one
/// whose centre is nearest the bullet's; ties go to the earlier alien.
fn struck_alien(bullet: &Rect, aliens: &[Alien]) -> Option<usize> {
    let (bx, by) = bullet.center();
    aliens
        .iter()
        .enumerate()
        .filter(|(_, a)| a.rect.intersects(bullet))
        .map(|(i, a)| {
            let (ax, ay) = a.rect.center();
            (i, (ax - bx).powi(2) + (ay - by).powi(2))
        })
        .fold(None, |best: Option<(usize, f32)>, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}

fn check_bullet_alien_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut destroyed = 0u32;
    let mut i = 0;
    while i < state.bullets.len() {
        match struck_alien(&state.bullets[i].rect, &state.aliens) {
            Some(hit) => {
                state.aliens.remove(hit);
                state.bullets.remove(i);
                destroyed += 1;
                events.push(GameEvent::AlienHit);
            }
            None => i += 1,
        }
    }

    if destroyed > 0 {
        let gained = state.settings.alien_points.saturating_mul(destroyed);
        state.stats.score = state.stats.score.saturating_add(gained);
        if let Some(first_crossing) = state.stats.check_high_score() {
            events.push(GameEvent::NewHighScore {
                score: state.stats.high_score,
                first_crossing,
            });
        }
        for _ in 0..state.stats.check_extra_life_award(&state.settings) {
            tracing::info!(ships_left = state.stats.ships_left, "bonus ship awarded");
            events.push(GameEvent::BonusLife);
        }
    }

    if state.aliens.is_empty() {
        state.bullets.clear();
        create_fleet(state);
        state.settings.increase_speed();
        state.stats.level += 1;
        tracing::info!(
            level = state.stats.level,
            alien_points = state.settings.alien_points,
            "fleet cleared"
        );
        events.push(GameEvent::LevelUp { level: state.stats.level });
    }
}

fn update_aliens(state: &mut GameState, now: Instant, events: &mut Vec<GameEvent>) {
    check_fleet_edges(state);
    for alien in &mut state.aliens {
        alien.update(&state.settings);
    }

    if state.aliens.iter().any(|a| a.rect.intersects(&state.ship.rect)) {
        ship_hit(state, now, events);
        return;
    }

    check_aliens_bottom(state, now, events);
}

/// An alien reaching the bottom edge costs a life, just like a collision.
fn check_aliens_bottom(state: &mut GameState, now: Instant, events: &mut Vec<GameEvent>) {
    let bottom = state.settings.screen_height;
    if state.aliens.iter().any(|a| a.rect.bottom() >= bottom) {
        ship_hit(state, now, events);
    }
}

// ── Life loss & game over ────────────────────────────────────────────────────

/// Take one ship.  The last ship ends the game; otherwise the board resets
/// and the simulation freezes for `SHIP_LOST_PAUSE`.
pub fn ship_hit(state: &mut GameState, now: Instant, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Active {
        return;
    }
    state.stats.ships_left = state.stats.ships_left.saturating_sub(1);
    events.push(GameEvent::ShipExplosion);

    if state.stats.ships_left == 0 {
        end_game(state, events);
        return;
    }

    state.aliens.clear();
    state.bullets.clear();
    create_fleet(state);
    state.ship.center(&state.settings);
    state.phase = GamePhase::ShipLost {
        resume_at: now + SHIP_LOST_PAUSE,
    };
    tracing::info!(ships_left = state.stats.ships_left, "ship lost");
}

fn end_game(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.pointer_visible = true;
    events.push(GameEvent::GameOver);
    events.push(GameEvent::MusicStop);
    tracing::info!(
        score = state.stats.score,
        level = state.stats.level,
        high_score = state.stats.high_score,
        "game over"
    );
}
