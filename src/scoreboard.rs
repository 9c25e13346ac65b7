/// Text the HUD shows, derived from `GameStats`.

use crate::stats::GameStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn prep(stats: &GameStats) -> Self {
        Scoreboard {
            score: group_thousands(stats.score),
            high_score: format!("HI {}", group_thousands(stats.high_score)),
            level: format!("LV {}", stats.level),
            ships_left: stats.ships_left,
        }
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
