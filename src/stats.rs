/// Mutable scoreboard state for one session.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    /// Persisted across sessions; never decreases.
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub extra_lives_awarded: u32,
    /// Set once the loaded record has been beaten in the current game.
    pub high_score_beaten: bool,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score,
            level: 1,
            ships_left: settings.ship_limit,
            extra_lives_awarded: 0,
            high_score_beaten: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset everything that belongs to a single game.  `high_score` stays.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
        self.extra_lives_awarded = 0;
        self.high_score_beaten = false;
    }

    /// Raise the record to the current score if it was beaten.
    ///
    /// Returns `Some(first_crossing)` when the record moved.
    pub fn check_high_score(&mut self) -> Option<bool> {
        if self.score <= self.high_score {
            return None;
        }
        self.high_score = self.score;
        let first_crossing = !self.high_score_beaten;
        self.high_score_beaten = true;
        Some(first_crossing)
    }

    /// Score needed for the next bonus ship.  Doubles after every award.
    pub fn next_extra_life_threshold(&self, settings: &Settings) -> u32 {
        let factor = 1u32.checked_shl(self.extra_lives_awarded).unwrap_or(u32::MAX);
        settings.extra_life_award.saturating_mul(factor)
    }

    /// Grant one ship per threshold crossed.  With a full hangar the
    /// threshold stays pending until a ship has been lost.
    ///
    /// Returns how many ships were granted.
    pub fn check_extra_life_award(&mut self, settings: &Settings) -> u32 {
        let mut awarded = 0;
        if settings.extra_life_award == 0 {
            return awarded;
        }
        while self.ships_left < settings.ship_limit
            && self.score >= self.next_extra_life_threshold(settings)
            && self.next_extra_life_threshold(settings) < u32::MAX
        {
            self.extra_lives_awarded += 1;
            self.ships_left += 1;
            awarded += 1;
        }
        awarded
    }
}
