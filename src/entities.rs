/// Game entity types and their per-tick motion.
///
/// Collision, fleet management and state transitions live in `compute`;
/// an entity only knows how to move itself.

use std::time::Instant;

use crate::settings::Settings;
use crate::stats::GameStats;

pub const SHIP_WIDTH: f32 = 3.0;
pub const SHIP_HEIGHT: f32 = 1.0;
pub const ALIEN_WIDTH: f32 = 3.0;
pub const ALIEN_HEIGHT: f32 = 1.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield cells, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship centred on the bottom edge of the playfield.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Rect::new(0.0, 0.0, SHIP_WIDTH, SHIP_HEIGHT),
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    pub fn center(&mut self, settings: &Settings) {
        self.rect.x = (settings.screen_width - self.rect.w) / 2.0;
        self.rect.y = settings.screen_height - self.rect.h;
    }

    /// -1, 0 or +1.  Opposite intents held together cancel out.
    pub fn direction(&self) -> f32 {
        match (self.moving_left, self.moving_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Move by `ship_speed` in the held direction, clamped to the playfield.
    pub fn update(&mut self, settings: &Settings) {
        let max_x = (settings.screen_width - self.rect.w).max(0.0);
        let x = self.rect.x + settings.ship_speed * self.direction();
        self.rect.x = x.clamp(0.0, max_x);
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    /// A bullet whose top edge is centred on the ship's top edge.
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        let (cx, _) = ship.rect.center();
        Bullet {
            rect: Rect::new(
                cx - settings.bullet_width / 2.0,
                ship.rect.y,
                settings.bullet_width,
                settings.bullet_height,
            ),
        }
    }

    /// Only `y` changes; `x` stays where the bullet was fired.
    pub fn update(&mut self, settings: &Settings) {
        self.rect.y -= settings.bullet_speed;
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

/// Two-frame animation state, flipped on every update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienFrame {
    A,
    B,
}

impl AlienFrame {
    pub fn toggled(self) -> Self {
        match self {
            AlienFrame::A => AlienFrame::B,
            AlienFrame::B => AlienFrame::A,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub frame: AlienFrame,
}

impl Alien {
    pub fn new(x: f32, y: f32) -> Self {
        Alien {
            rect: Rect::new(x, y, ALIEN_WIDTH, ALIEN_HEIGHT),
            frame: AlienFrame::A,
        }
    }

    /// True when the alien touches or crosses either side of the playfield.
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect.right() >= screen_width || self.rect.x <= 0.0
    }

    pub fn update(&mut self, settings: &Settings) {
        self.rect.x += settings.alien_speed * settings.fleet_direction;
        self.frame = self.frame.toggled();
    }
}

// ── Game phase & events ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GamePhase {
    /// Title screen, before the first game of the session.
    NotStarted,
    Active,
    /// A life was just lost; the simulation is frozen until `resume_at`.
    ShipLost { resume_at: Instant },
    GameOver,
}

/// Side effects requested by the simulation, consumed by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    AlienHit,
    ShipExplosion,
    GameOver,
    BonusLife,
    /// `first_crossing` is set the first time in a game the old record falls.
    NewHighScore { score: u32, first_crossing: bool },
    LevelUp { level: u32 },
    MusicStart,
    MusicStop,
}

// ── Simulation context ────────────────────────────────────────────────────────

/// Everything the simulation owns.  Passed by `&mut` to every `compute`
/// operation and read by the renderer between ticks.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub phase: GamePhase,
    pub pointer_visible: bool,
}

impl GameState {
    pub fn first_run(&self) -> bool {
        self.phase == GamePhase::NotStarted
    }

    /// Active also covers the short freeze after losing a life.
    pub fn game_active(&self) -> bool {
        matches!(self.phase, GamePhase::Active | GamePhase::ShipLost { .. })
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
