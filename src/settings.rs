/// Static and dynamic tunables.
///
/// Distances are terminal cells; speeds are cells per tick.  The static part
/// is fixed for the life of the process.  The dynamic part (speeds, fleet
/// direction, alien points) is reset at the start of every game and scaled on
/// every level-up.

use crossterm::style::Color;

// ── Base values for the dynamic settings ─────────────────────────────────────

pub const BASE_SHIP_SPEED: f32 = 1.0;
pub const BASE_BULLET_SPEED: f32 = 0.8;
pub const BASE_ALIEN_SPEED: f32 = 0.2;
pub const BASE_ALIEN_POINTS: u32 = 50;

// ── Static tunables ──────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 1.0;
pub const BULLET_HEIGHT: f32 = 1.0;
pub const BULLETS_ALLOWED: usize = 5;
pub const FLEET_DROP_SPEED: f32 = 1.0;
pub const SHIP_LIMIT: u32 = 3;
pub const SPEEDUP_SCALE: f32 = 1.1;
pub const SCORE_SCALE: f32 = 1.5;
pub const EXTRA_LIFE_AWARD: u32 = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub background_color: Color,

    pub ship_speed: f32,
    pub ship_limit: u32,

    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    /// +1.0 moves the fleet right, -1.0 left.
    pub fleet_direction: f32,
    pub alien_points: u32,

    pub speedup_scale: f32,
    pub score_scale: f32,
    pub extra_life_award: u32,
}

impl Settings {
    /// Settings for a playfield of `width` x `height` cells, with the dynamic
    /// part at its base values.
    pub fn new(width: f32, height: f32) -> Self {
        let mut settings = Settings {
            screen_width: width,
            screen_height: height,
            background_color: Color::Black,
            ship_speed: BASE_SHIP_SPEED,
            ship_limit: SHIP_LIMIT,
            bullet_speed: BASE_BULLET_SPEED,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_color: Color::Cyan,
            bullets_allowed: BULLETS_ALLOWED,
            alien_speed: BASE_ALIEN_SPEED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            fleet_direction: 1.0,
            alien_points: BASE_ALIEN_POINTS,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            extra_life_award: EXTRA_LIFE_AWARD,
        };
        settings.reset_dynamic();
        settings
    }

    /// Restore everything that changes during a game to its base value.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1.0;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Level-up scaling: speeds grow by `speedup_scale`, points by
    /// `score_scale` (floored).
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale).floor() as u32;
    }
}
